//! X (formerly Twitter) tone templates. Replies must fit in a single post.

use super::ToneTemplate;

pub const TONES: &[ToneTemplate] = &[
    ToneTemplate {
        id: "Friendly",
        prompt: "Write 2 friendly replies to this post on X.",
        guideline: "- Casual and warm
- Under 200 characters each
- No hashtags",
    },
    ToneTemplate {
        id: "Professional",
        prompt: "Write 2 professional replies to this post on X that engage with its main point.",
        guideline: "- Reference what {authorName} said directly
- Under 220 characters each
- No hashtags or emojis",
    },
    ToneTemplate {
        id: "Supportive",
        prompt: "Write 2 supportive replies to this post on X.",
        guideline: "- Back {authorName} up with a specific reason
- Under 200 characters each
- Encouraging, not sycophantic",
    },
    ToneTemplate {
        id: "Insightful",
        prompt: "Write 2 insightful replies to this post on X that add one new idea.",
        guideline: "- One sharp idea per reply
- Build on {authorName}'s take
- Under 240 characters each",
    },
    ToneTemplate {
        id: "Curious",
        prompt: "Write 2 curious replies to this post on X, each asking a question.",
        guideline: "- One specific question per reply
- Under 200 characters each
- No yes/no questions",
    },
    ToneTemplate {
        id: "Smart Contrarian",
        prompt: "Write 2 smart contrarian replies to this post on X that push back on one claim.",
        guideline: "- Push back on the claim, not on {authorName}
- One short reason or counter-example
- Under 240 characters, no dunking",
    },
    ToneTemplate {
        id: "Witty",
        prompt: "Write 2 witty replies to this post on X.",
        guideline: "- Punchy, clever, internet-native
- Relevant to {authorName}'s post
- Under 180 characters each",
    },
    ToneTemplate {
        id: "Celebratory",
        prompt: "Write 2 celebratory replies to this post on X congratulating the author.",
        guideline: "- Congratulate {authorName} on the specific win
- Under 160 characters each
- One emoji at most",
    },
    ToneTemplate {
        id: "Thought Leader",
        prompt: "Write 2 thought-leader replies to this post on X that zoom out to the bigger picture.",
        guideline: "- Confident, opinionated, concrete
- Tie {authorName}'s point to a wider trend
- Under 240 characters each",
    },
    ToneTemplate {
        id: "Storyteller",
        prompt: "Write 2 replies to this post on X that each share a tiny related story.",
        guideline: "- A one sentence story with a twist or lesson
- Connected to {authorName}'s post
- Under 240 characters each",
    },
    ToneTemplate {
        id: "Enthusiastic",
        prompt: "Write 2 enthusiastic replies to this post on X.",
        guideline: "- High energy, specific about what you liked
- Under 180 characters each
- No hashtags",
    },
    ToneTemplate {
        id: "Empathetic",
        prompt: "Write 2 empathetic replies to this post on X.",
        guideline: "- Acknowledge how {authorName} feels
- Gentle and human
- Under 200 characters each",
    },
    ToneTemplate {
        id: "Concise",
        prompt: "Write 2 very short replies to this post on X.",
        guideline: "- Under 80 characters each
- Still specific to the post
- No filler",
    },
];
