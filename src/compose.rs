//! Prompt composition for comments, DMs, comment improvement and new posts.
//!
//! The comments prompt is assembled in a fixed order: tone prompt, guidelines
//! (with the author placeholder filled in), formatting rule, quoted post.
//! The DM prompt is built independently from its own template.

use crate::platform::Platform;
use crate::tones::post::resolve_post_tone;
use crate::tones::{resolve_tone, ToneOverrides, AUTHOR_PLACEHOLDER};

/// Name used when the author's display name is unknown
pub const UNKNOWN_AUTHOR: &str = "the author";

/// Name used when the viewer's display name is unknown
pub const UNKNOWN_VIEWER: &str = "Your Name";

/// Honorifics kept in front of a first name
const HONORIFICS: &[&str] = &["Dr.", "Mr.", "Ms.", "Mrs.", "Prof."];

const COMMENT_FORMAT_RULE: &str =
    "Write each comment on its own line, separated by a blank line. Do not number or label the comments.";

/// Inputs for one suggestion request
#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    /// Post body, already truncated by the caller
    pub post_text: &'a str,
    pub tone_id: &'a str,
    pub platform: Platform,
    pub author_name: &'a str,
    pub viewer_name: &'a str,
}

/// The two prompts sent for a suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompts {
    pub comments_prompt: String,
    pub dm_prompt: String,
}

/// Short form of a display name used in prompts and greetings.
///
/// "Dr. Jane Smith" becomes "Dr. Jane", "Jane Smith" becomes "Jane", and an
/// empty name becomes "the author".
pub fn author_name_with_prefix(author_name: &str) -> String {
    let mut tokens = author_name.split_whitespace();
    let Some(first) = tokens.next() else {
        return UNKNOWN_AUTHOR.to_string();
    };

    if HONORIFICS.contains(&first) {
        match tokens.next() {
            Some(second) => format!("{} {}", first, second),
            None => first.to_string(),
        }
    } else {
        first.to_string()
    }
}

/// Viewer name for signatures, falling back to a placeholder
pub fn viewer_display_name(viewer_name: &str) -> String {
    let trimmed = viewer_name.trim();
    if trimmed.is_empty() {
        UNKNOWN_VIEWER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Replace every occurrence of the author placeholder
pub fn interpolate_guideline(guideline: &str, author: &str) -> String {
    guideline.replace(AUTHOR_PLACEHOLDER, author)
}

/// Build the comments and DM prompts for a post
pub fn compose_prompts(input: &PromptInput<'_>, overrides: &ToneOverrides) -> ComposedPrompts {
    let author = author_name_with_prefix(input.author_name);
    let viewer = viewer_display_name(input.viewer_name);
    let tone = resolve_tone(input.platform, input.tone_id, overrides);
    let guideline = interpolate_guideline(&tone.guideline, &author);

    let comments_prompt = format!(
        "{}\n\nGuidelines:\n{}\n\n{}\n\nPost:\n\"{}\"",
        tone.prompt, guideline, COMMENT_FORMAT_RULE, input.post_text
    );

    ComposedPrompts {
        comments_prompt,
        dm_prompt: compose_dm_prompt(input, &author, &viewer),
    }
}

fn compose_dm_prompt(input: &PromptInput<'_>, author: &str, viewer: &str) -> String {
    format!(
        "Write a short, human-sounding direct message to {author} about their {platform} post below, in a \"{tone}\" tone.\n\
         Keep it brief and compact: only the first 2 lines are visible in the inbox preview, so the greeting is at most 3 words and the point comes right after it.\n\
         Address them as {author}. Sign the message as {viewer}.\n\
         Do not sound salesy or use generic flattery.\n\n\
         Post:\n\"{post}\"",
        author = author,
        platform = input.platform.name(),
        tone = input.tone_id,
        viewer = viewer,
        post = input.post_text,
    )
}

/// Prompt asking the backend to rewrite a hand-written comment
pub fn compose_improve_prompt(comment: &str, tone_id: &str, platform: Platform) -> String {
    format!(
        "Improve the following {platform} comment so it reads better in a \"{tone}\" tone.\n\
         Keep the original meaning, language and length roughly the same.\n\
         Return only the improved comment, with no introduction, labels, quotes or explanation.\n\n\
         Comment:\n\"{comment}\"",
        platform = platform.name(),
        tone = tone_id,
        comment = comment.trim(),
    )
}

/// Prompt for writing a new post about `topic`
pub fn compose_post_prompt(
    topic: &str,
    tone_id: &str,
    platform: Platform,
    overrides: &ToneOverrides,
) -> String {
    let tone = resolve_post_tone(platform, tone_id, overrides);
    let limit = platform.character_limits().comment;
    let mut prompt = format!("{}\n\nPlatform: {}", tone.prompt, platform.name());
    if !tone.guideline.is_empty() {
        prompt.push_str("\n\nGuidelines:\n");
        prompt.push_str(&tone.guideline);
    }
    prompt.push_str(&format!(
        "\n\nKeep it under {} characters. Return only the post text.\n\nTopic:\n\"{}\"",
        limit,
        topic.trim()
    ));
    prompt
}
