//! Global default templates, used when a platform does not define a tone.

use super::ToneTemplate;

pub const TONES: &[ToneTemplate] = &[
    ToneTemplate {
        id: "Friendly",
        prompt: "Write 2 warm, friendly comments that respond to the post like a friendly colleague would.",
        guideline: "- Address {authorName} by name in at most one of the comments
- Keep each comment to one or two sentences
- Sound warm and relaxed, never gushing",
    },
    ToneTemplate {
        id: "Professional",
        prompt: "Write 2 professional comments that engage with the substance of the post.",
        guideline: "- Reference a specific point {authorName} made
- Use clear, polished language without jargon
- No emojis or exclamation marks",
    },
    ToneTemplate {
        id: "Supportive",
        prompt: "Write 2 supportive comments that encourage the author.",
        guideline: "- Acknowledge the effort behind what {authorName} shared
- Offer genuine encouragement, not flattery
- Keep it short",
    },
    ToneTemplate {
        id: "Insightful",
        prompt: "Write 2 insightful comments that add a new angle or useful detail to the post.",
        guideline: "- Add one concrete idea the post does not already mention
- Build on {authorName}'s point rather than repeating it
- Avoid generic praise",
    },
    ToneTemplate {
        id: "Curious",
        prompt: "Write 2 curious comments that each ask a thoughtful question about the post.",
        guideline: "- Ask one specific, open question per comment
- Show you read what {authorName} wrote
- No yes/no questions",
    },
    ToneTemplate {
        id: "Smart Contrarian",
        prompt: "Write 2 respectful contrarian comments that push back on one point in the post.",
        guideline: "- Disagree with one idea, never with {authorName} personally
- Give a short reason or counter-example
- Stay polite and open to being wrong",
    },
    ToneTemplate {
        id: "Witty",
        prompt: "Write 2 witty comments with light, clever humor related to the post.",
        guideline: "- One joke or wordplay per comment at most
- Humor must be kind and relevant to {authorName}'s post
- Keep it short",
    },
    ToneTemplate {
        id: "Celebratory",
        prompt: "Write 2 celebratory comments congratulating the author on what the post shares.",
        guideline: "- Congratulate {authorName} on the specific achievement
- Sound genuinely happy for them
- One emoji at most",
    },
    ToneTemplate {
        id: "Thought Leader",
        prompt: "Write 2 comments that position the commenter as a thoughtful expert on the topic.",
        guideline: "- Share a confident, experience-based perspective
- Connect {authorName}'s point to a broader trend
- No self-promotion",
    },
    ToneTemplate {
        id: "Storyteller",
        prompt: "Write 2 comments that each relate the post to a brief personal experience.",
        guideline: "- Tell a one or two sentence story that connects to {authorName}'s post
- Keep the focus on the post, not on yourself
- End with a takeaway",
    },
    ToneTemplate {
        id: "Enthusiastic",
        prompt: "Write 2 enthusiastic, high-energy comments about the post.",
        guideline: "- Show real excitement about what {authorName} shared
- Mention one specific thing you liked
- No more than one exclamation mark per comment",
    },
    ToneTemplate {
        id: "Empathetic",
        prompt: "Write 2 empathetic comments that acknowledge the feelings behind the post.",
        guideline: "- Recognise what {authorName} may be going through
- Be gentle and sincere
- Do not offer unsolicited advice",
    },
    ToneTemplate {
        id: "Concise",
        prompt: "Write 2 very short comments that respond to the post in a few words.",
        guideline: "- Each comment under 15 words
- Still specific to {authorName}'s post
- No filler phrases",
    },
];

/// Global default prompt for a tone
pub fn prompt(tone_id: &str) -> Option<&'static str> {
    TONES.iter().find(|t| t.id == tone_id).map(|t| t.prompt)
}
