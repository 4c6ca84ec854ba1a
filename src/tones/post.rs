//! Post-creation tones. Independent of the engagement tones: a smaller set
//! with its own templates and its own override map.

use super::{ToneDefinition, ToneMeta, ToneOverrides, ToneTemplate};
use crate::platform::Platform;

pub const POST_TONES: &[ToneMeta] = &[
    ToneMeta { id: "Informative", emoji: "📊", label: "Informative" },
    ToneMeta { id: "Inspirational", emoji: "✨", label: "Inspirational" },
    ToneMeta { id: "Storytelling", emoji: "📖", label: "Storytelling" },
    ToneMeta { id: "Educational", emoji: "🎓", label: "Educational" },
    ToneMeta { id: "Promotional", emoji: "📣", label: "Promotional" },
    ToneMeta { id: "Conversational", emoji: "💬", label: "Conversational" },
    ToneMeta { id: "Humorous", emoji: "😂", label: "Humorous" },
];

pub const TEMPLATES: &[ToneTemplate] = &[
    ToneTemplate {
        id: "Informative",
        prompt: "Write a clear, informative post that explains the topic with concrete facts.",
        guideline: "- Lead with the most useful fact
- Short paragraphs
- No hype",
    },
    ToneTemplate {
        id: "Inspirational",
        prompt: "Write an inspirational post that motivates readers around the topic.",
        guideline: "- Open with a strong, relatable line
- Hopeful but grounded
- End with an encouraging thought",
    },
    ToneTemplate {
        id: "Storytelling",
        prompt: "Write a post that tells a short first-person story about the topic.",
        guideline: "- Hook in the first line
- One clear moment of change
- Close with the lesson",
    },
    ToneTemplate {
        id: "Educational",
        prompt: "Write an educational post that teaches readers something practical about the topic.",
        guideline: "- Use a short list of steps or tips
- Plain language
- One actionable takeaway",
    },
    ToneTemplate {
        id: "Promotional",
        prompt: "Write a promotional post about the topic that stays genuine and not salesy.",
        guideline: "- Focus on the value to the reader
- One clear call to action
- No more than two emojis",
    },
    ToneTemplate {
        id: "Conversational",
        prompt: "Write a conversational post about the topic that invites replies.",
        guideline: "- Sound like talking to a friend
- End with a question to the audience
- Keep it short",
    },
    ToneTemplate {
        id: "Humorous",
        prompt: "Write a light, humorous post about the topic.",
        guideline: "- One clear joke or funny observation
- Keep it kind
- Still make a point",
    },
];

/// Generic prompt for a post tone id that matches nothing
pub fn fallback_prompt(platform: Platform, tone_id: &str) -> String {
    format!("Write a {} post in a \"{}\" tone.", platform.name(), tone_id)
}

/// Resolve a post-creation tone: override > default > generic fallback
pub fn resolve_post_tone(
    platform: Platform,
    tone_id: &str,
    overrides: &ToneOverrides,
) -> ToneDefinition {
    let template = TEMPLATES.iter().find(|t| t.id == tone_id);
    let meta = POST_TONES.iter().find(|t| t.id == tone_id);

    let prompt = overrides
        .post_prompts
        .get(tone_id)
        .filter(|p| !p.trim().is_empty())
        .cloned()
        .or_else(|| template.map(|t| t.prompt.to_string()))
        .unwrap_or_else(|| fallback_prompt(platform, tone_id));

    ToneDefinition {
        id: tone_id.to_string(),
        prompt,
        guideline: template.map(|t| t.guideline).unwrap_or_default().to_string(),
        emoji: meta.map(|m| m.emoji).unwrap_or_default().to_string(),
        label: meta.map(|m| m.label).unwrap_or(tone_id).to_string(),
    }
}
