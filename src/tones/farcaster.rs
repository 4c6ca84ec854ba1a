//! Farcaster tone templates. Replies are casts, so they stay short and crypto-native.

use super::ToneTemplate;

pub const TONES: &[ToneTemplate] = &[
    ToneTemplate {
        id: "Friendly",
        prompt: "Write 2 friendly replies to this Farcaster cast.",
        guideline: "- Casual, warm, community vibe
- Under 200 characters each
- No hashtags",
    },
    ToneTemplate {
        id: "Professional",
        prompt: "Write 2 professional replies to this Farcaster cast that engage with its substance.",
        guideline: "- Reference what {authorName} cast directly
- Clear and concise
- Under 240 characters each",
    },
    ToneTemplate {
        id: "Supportive",
        prompt: "Write 2 supportive replies to this Farcaster cast.",
        guideline: "- Encourage {authorName}'s build or idea
- Specific, not generic
- Under 200 characters each",
    },
    ToneTemplate {
        id: "Insightful",
        prompt: "Write 2 insightful replies to this Farcaster cast that add a new angle.",
        guideline: "- One concrete idea per reply
- Build on {authorName}'s cast
- Under 280 characters each",
    },
    ToneTemplate {
        id: "Curious",
        prompt: "Write 2 curious replies to this Farcaster cast, each asking a question.",
        guideline: "- One open question per reply
- Show you read {authorName}'s cast
- Under 200 characters each",
    },
    ToneTemplate {
        id: "Smart Contrarian",
        prompt: "Write 2 smart contrarian replies to this Farcaster cast that respectfully disagree with one point.",
        guideline: "- Disagree with the idea, not {authorName}
- Back it with a short reason
- Under 280 characters, friendly tone",
    },
    ToneTemplate {
        id: "Witty",
        prompt: "Write 2 witty replies to this Farcaster cast.",
        guideline: "- Clever and playful, onchain humor welcome
- Relevant to {authorName}'s cast
- Under 180 characters each",
    },
    ToneTemplate {
        id: "Celebratory",
        prompt: "Write 2 celebratory replies to this Farcaster cast congratulating the author.",
        guideline: "- Celebrate {authorName}'s specific win
- Under 160 characters each
- One emoji at most",
    },
    ToneTemplate {
        id: "Thought Leader",
        prompt: "Write 2 thought-leader replies to this Farcaster cast that connect it to where the ecosystem is heading.",
        guideline: "- Confident and concrete
- Tie {authorName}'s point to a broader trend
- Under 280 characters each",
    },
    ToneTemplate {
        id: "Storyteller",
        prompt: "Write 2 replies to this Farcaster cast that each share a tiny related story.",
        guideline: "- One sentence story connected to {authorName}'s cast
- End with a takeaway
- Under 280 characters each",
    },
    ToneTemplate {
        id: "Enthusiastic",
        prompt: "Write 2 enthusiastic replies to this Farcaster cast.",
        guideline: "- Real excitement about one specific detail
- Under 180 characters each
- No hashtags",
    },
    ToneTemplate {
        id: "Empathetic",
        prompt: "Write 2 empathetic replies to this Farcaster cast.",
        guideline: "- Acknowledge what {authorName} is going through
- Gentle and sincere
- Under 200 characters each",
    },
    ToneTemplate {
        id: "Concise",
        prompt: "Write 2 very short replies to this Farcaster cast.",
        guideline: "- Under 80 characters each
- Specific to the cast
- No filler",
    },
];
