//! Tone registry: default prompt/guideline templates per tone and their
//! resolution against user overrides.
//!
//! Resolution order for a prompt is override > platform default > global
//! default > generic fallback. Guidelines are resolved from a fresh shallow
//! merge of global and platform defaults, overridden key-by-key by the user's
//! guideline overrides.

pub mod defaults;
pub mod farcaster;
pub mod linkedin;
pub mod post;
pub mod x;

use crate::platform::Platform;
use crate::settings::{get_setting, SettingsStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Token in guideline templates replaced by the resolved author name
pub const AUTHOR_PLACEHOLDER: &str = "{authorName}";

/// Guideline used when a tone id matches nothing anywhere
pub const FALLBACK_GUIDELINE: &str = "- Stay relevant to what {authorName} actually wrote
- Sound like a real person, not a brand
- Keep it short";

/// A static prompt/guideline pair for one tone
#[derive(Debug, Clone, Copy)]
pub struct ToneTemplate {
    pub id: &'static str,
    pub prompt: &'static str,
    pub guideline: &'static str,
}

/// Display metadata for an enumerated tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneMeta {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// The enumerated engagement tones shared by every platform
pub const ENGAGEMENT_TONES: &[ToneMeta] = &[
    ToneMeta { id: "Friendly", emoji: "😊", label: "Friendly" },
    ToneMeta { id: "Professional", emoji: "💼", label: "Professional" },
    ToneMeta { id: "Supportive", emoji: "🤝", label: "Supportive" },
    ToneMeta { id: "Insightful", emoji: "💡", label: "Insightful" },
    ToneMeta { id: "Curious", emoji: "🤔", label: "Curious" },
    ToneMeta { id: "Smart Contrarian", emoji: "🧐", label: "Contrarian" },
    ToneMeta { id: "Witty", emoji: "😄", label: "Witty" },
    ToneMeta { id: "Celebratory", emoji: "🎉", label: "Celebratory" },
    ToneMeta { id: "Thought Leader", emoji: "🧠", label: "Thought Leader" },
    ToneMeta { id: "Storyteller", emoji: "📖", label: "Storyteller" },
    ToneMeta { id: "Enthusiastic", emoji: "🔥", label: "Enthusiastic" },
    ToneMeta { id: "Empathetic", emoji: "❤️", label: "Empathetic" },
    ToneMeta { id: "Concise", emoji: "✂️", label: "Concise" },
];

/// Look up the metadata of an enumerated engagement tone
pub fn tone_meta(tone_id: &str) -> Option<&'static ToneMeta> {
    ENGAGEMENT_TONES.iter().find(|t| t.id == tone_id)
}

/// A fully resolved tone, ready for prompt composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneDefinition {
    pub id: String,
    pub prompt: String,
    pub guideline: String,
    pub emoji: String,
    pub label: String,
}

/// A user-defined tone living outside the enumerated set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTone {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub prompt: String,
    #[serde(default)]
    pub guideline: String,
}

/// Read-only snapshot of the user's tone customisations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneOverrides {
    pub prompts: HashMap<String, String>,
    pub guidelines: HashMap<String, String>,
    pub custom_tones: HashMap<String, CustomTone>,
    pub post_prompts: HashMap<String, String>,
}

impl ToneOverrides {
    /// Take a fresh snapshot of every override map from the settings store.
    ///
    /// Malformed or missing entries read as empty maps.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let custom_tones: Vec<CustomTone> = get_setting(store, "custom_tones", Vec::new());
        Self {
            prompts: get_setting(store, "custom_prompts", HashMap::new()),
            guidelines: get_setting(store, "custom_guidelines", HashMap::new()),
            custom_tones: custom_tones
                .into_iter()
                .map(|tone| (tone.name.clone(), tone))
                .collect(),
            post_prompts: get_setting(store, "custom_post_prompts", HashMap::new()),
        }
    }

    pub fn with_prompt(mut self, tone_id: &str, prompt: &str) -> Self {
        self.prompts.insert(tone_id.to_string(), prompt.to_string());
        self
    }

    pub fn with_guideline(mut self, tone_id: &str, guideline: &str) -> Self {
        self.guidelines
            .insert(tone_id.to_string(), guideline.to_string());
        self
    }

    pub fn with_custom_tone(mut self, tone: CustomTone) -> Self {
        self.custom_tones.insert(tone.name.clone(), tone);
        self
    }

    fn prompt_for(&self, tone_id: &str) -> Option<&str> {
        non_empty(self.prompts.get(tone_id))
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// Generic prompt for a tone id that matches nothing anywhere
pub fn fallback_prompt(platform: Platform, tone_id: &str) -> String {
    format!(
        "Write 2 {} in a \"{}\" tone.",
        platform.comment_noun(),
        tone_id
    )
}

/// Look up a tone in one template table
pub fn find_template<'a>(tones: &'a [ToneTemplate], tone_id: &str) -> Option<&'a ToneTemplate> {
    tones.iter().find(|t| t.id == tone_id)
}

/// Effective guideline map for a platform: global defaults, then platform
/// defaults, then user overrides, each layer replacing only the keys it sets.
///
/// Rebuilt on every call because overrides may change between calls.
pub fn merged_guidelines(
    platform: Platform,
    overrides: &ToneOverrides,
) -> BTreeMap<String, String> {
    merge_guidelines(platform.default_prompts(), overrides)
}

fn merge_guidelines(
    platform_tones: &[ToneTemplate],
    overrides: &ToneOverrides,
) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    for tone in defaults::TONES {
        merged.insert(tone.id.to_string(), tone.guideline.to_string());
    }
    for tone in platform_tones {
        merged.insert(tone.id.to_string(), tone.guideline.to_string());
    }
    for (id, guideline) in &overrides.guidelines {
        if !guideline.trim().is_empty() {
            merged.insert(id.clone(), guideline.clone());
        }
    }
    merged
}

/// Resolve the effective definition of a tone on a platform.
///
/// Never fails: an unknown tone id yields the generic fallback prompt.
pub fn resolve_tone(
    platform: Platform,
    tone_id: &str,
    overrides: &ToneOverrides,
) -> ToneDefinition {
    resolve_tone_in(platform, platform.default_prompts(), tone_id, overrides)
}

/// Resolution against an explicit platform table, so a platform missing a
/// tone falls through to the global defaults.
fn resolve_tone_in(
    platform: Platform,
    platform_tones: &[ToneTemplate],
    tone_id: &str,
    overrides: &ToneOverrides,
) -> ToneDefinition {
    if tone_meta(tone_id).is_none() {
        if let Some(custom) = overrides.custom_tones.get(tone_id) {
            log::debug!("Tones: using custom tone '{}'", tone_id);
            return ToneDefinition {
                id: custom.name.clone(),
                prompt: custom.prompt.clone(),
                guideline: custom.guideline.clone(),
                emoji: custom.emoji.clone(),
                label: custom.name.clone(),
            };
        }
    }

    let prompt = overrides
        .prompt_for(tone_id)
        .or_else(|| find_template(platform_tones, tone_id).map(|t| t.prompt))
        .or_else(|| defaults::prompt(tone_id))
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::warn!(
                "Tones: no template for '{}' on {}, using generic prompt",
                tone_id,
                platform
            );
            fallback_prompt(platform, tone_id)
        });

    let guideline = merge_guidelines(platform_tones, overrides)
        .remove(tone_id)
        .unwrap_or_else(|| FALLBACK_GUIDELINE.to_string());

    let (emoji, label) = tone_meta(tone_id)
        .map(|m| (m.emoji.to_string(), m.label.to_string()))
        .unwrap_or_else(|| (String::new(), tone_id.to_string()));

    ToneDefinition {
        id: tone_id.to_string(),
        prompt,
        guideline,
        emoji,
        label,
    }
}

/// Entry shown in a tone picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneSummary {
    pub id: String,
    pub emoji: String,
    pub label: String,
    pub custom: bool,
}

/// Enumerated engagement tones followed by custom tones sorted by name
pub fn available_tones(overrides: &ToneOverrides) -> Vec<ToneSummary> {
    let mut tones: Vec<ToneSummary> = ENGAGEMENT_TONES
        .iter()
        .map(|t| ToneSummary {
            id: t.id.to_string(),
            emoji: t.emoji.to_string(),
            label: t.label.to_string(),
            custom: false,
        })
        .collect();

    let mut custom: Vec<&CustomTone> = overrides
        .custom_tones
        .values()
        .filter(|t| tone_meta(&t.name).is_none())
        .collect();
    custom.sort_by(|a, b| a.name.cmp(&b.name));
    tones.extend(custom.into_iter().map(|t| ToneSummary {
        id: t.name.clone(),
        emoji: t.emoji.clone(),
        label: t.name.clone(),
        custom: true,
    }));
    tones
}
