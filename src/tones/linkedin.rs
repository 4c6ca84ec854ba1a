//! LinkedIn tone templates.

use super::ToneTemplate;

pub const TONES: &[ToneTemplate] = &[
    ToneTemplate {
        id: "Friendly",
        prompt: "Write 2 friendly LinkedIn comments that sound like a supportive colleague reacting to this post.",
        guideline: "- Mention {authorName} by first name in at most one comment
- Warm but professional, suitable for a work network
- 1-2 sentences each",
    },
    ToneTemplate {
        id: "Professional",
        prompt: "Write 2 professional LinkedIn comments that engage with the business substance of this post.",
        guideline: "- Reference a specific point {authorName} made
- Polished, concise, no buzzwords
- No emojis",
    },
    ToneTemplate {
        id: "Supportive",
        prompt: "Write 2 supportive LinkedIn comments that encourage the author's work or career move.",
        guideline: "- Recognise the effort or risk behind {authorName}'s post
- Encouraging, never patronising
- 1-2 sentences each",
    },
    ToneTemplate {
        id: "Insightful",
        prompt: "Write 2 insightful LinkedIn comments that add a practical lesson or data point to this post.",
        guideline: "- Add one idea {authorName} did not cover
- Draw on industry experience
- Avoid \"Great post!\" openers",
    },
    ToneTemplate {
        id: "Curious",
        prompt: "Write 2 curious LinkedIn comments that each ask a thoughtful follow-up question.",
        guideline: "- One specific, open question per comment
- Show genuine interest in {authorName}'s experience
- Keep it professional",
    },
    ToneTemplate {
        id: "Smart Contrarian",
        prompt: "Write 2 smart contrarian LinkedIn comments that respectfully challenge one assumption in this post.",
        guideline: "- Challenge the idea, not {authorName}
- Offer a brief reason or counter-example from real work
- Stay constructive and open-minded",
    },
    ToneTemplate {
        id: "Witty",
        prompt: "Write 2 witty LinkedIn comments with light, workplace-appropriate humor.",
        guideline: "- Clever, not sarcastic
- Humor tied to {authorName}'s actual point
- Keep it professional enough for a work network",
    },
    ToneTemplate {
        id: "Celebratory",
        prompt: "Write 2 celebratory LinkedIn comments congratulating the author on their milestone.",
        guideline: "- Congratulate {authorName} on the specific milestone
- Genuine and specific, not generic
- One emoji at most",
    },
    ToneTemplate {
        id: "Thought Leader",
        prompt: "Write 2 thought-leadership LinkedIn comments that frame this post within a broader industry trend.",
        guideline: "- Confident, experience-backed perspective
- Connect {authorName}'s point to where the industry is heading
- No self-promotion or links",
    },
    ToneTemplate {
        id: "Storyteller",
        prompt: "Write 2 LinkedIn comments that each relate this post to a brief professional story.",
        guideline: "- A one or two sentence anecdote that connects to {authorName}'s post
- End with the lesson learned
- Keep the spotlight on the post",
    },
    ToneTemplate {
        id: "Enthusiastic",
        prompt: "Write 2 enthusiastic LinkedIn comments that show real excitement about this post.",
        guideline: "- Name one specific thing {authorName} shared that excites you
- Energetic but still professional
- One exclamation mark at most per comment",
    },
    ToneTemplate {
        id: "Empathetic",
        prompt: "Write 2 empathetic LinkedIn comments that acknowledge the experience described in this post.",
        guideline: "- Recognise what {authorName} went through
- Sincere and gentle
- No unsolicited advice",
    },
    ToneTemplate {
        id: "Concise",
        prompt: "Write 2 short LinkedIn comments, each a single crisp sentence.",
        guideline: "- Under 20 words each
- Specific to {authorName}'s post
- No filler",
    },
];
