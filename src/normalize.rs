//! Response normalization: turning free-form generated text into the fixed
//! shapes the callers render.
//!
//! Comments go through an ordered cascade of splitting strategies, stopping
//! as soon as one yields at least two usable segments:
//!
//! 1. blank lines, or the start of a numbered / "Comment N:" marker
//! 2. any newline run
//! 3. per-segment label and punctuation cleanup (applied to 1 or 2)
//! 4. bisecting all long-enough lines at their midpoint
//!
//! The result always has exactly two slots; missing ones are empty strings.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum length, in characters, of a usable comment
pub const MIN_COMMENT_CHARS: usize = 10;

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank line regex"));

static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\*\*)?(?:\d+\.\s|comment\s*\d+:)").expect("valid list marker regex")
});

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid line break regex"));

static LEADING_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\*\*comment\s*\d+:\*\*|comment\s*\d+:|first comment:|second comment:|activate:|\d+\.)\s*",
    )
    .expect("valid leading label regex")
});

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid code regex"));

/// Introductory phrases models put in front of a rewritten comment
const INTRO_LABELS: &[&str] = &[
    "Certainly! Here's a refined version of your comment:",
    "Certainly! Here's the improved version:",
    "Certainly! Here's an improved version:",
    "Sure! Here's the improved version:",
    "Sure! Here's an improved version:",
    "Sure, here's the improved comment:",
    "Here's a refined version of your comment:",
    "Here's the improved version of your comment:",
    "Here's the improved version:",
    "Here is the improved version:",
    "Here's an improved version:",
    "Here is an improved version:",
    "Here's the improved comment:",
    "Here is the improved comment:",
    "Here's a refined version:",
    "Here is a refined version:",
    "Here's a polished version:",
    "Here's a revised version:",
    "Improved version:",
    "Improved comment:",
    "Refined version:",
    "Revised version:",
    "Revised comment:",
    "Updated comment:",
];

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’')
}

fn is_double_quote(c: char) -> bool {
    matches!(c, '"' | '“' | '”')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ---------------------------------------------------------------------------
// Comment splitting strategies
// ---------------------------------------------------------------------------

/// Split on blank lines, then before every list or "Comment N:" marker that
/// starts the text or follows whitespace.
pub fn split_on_blank_lines_and_markers(text: &str) -> Vec<String> {
    BLANK_LINE_RE
        .split(text)
        .flat_map(split_before_markers)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn split_before_markers(block: &str) -> Vec<String> {
    let mut cuts: Vec<usize> = LIST_MARKER_RE
        .find_iter(block)
        .map(|m| m.start())
        .filter(|&start| {
            start == 0
                || block[..start]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
        })
        .collect();
    cuts.push(block.len());

    let mut pieces = Vec::with_capacity(cuts.len());
    let mut from = 0;
    for cut in cuts {
        if cut > from {
            pieces.push(block[from..cut].to_string());
        }
        from = cut;
    }
    pieces
}

/// Split on any run of newlines
pub fn split_on_line_breaks(text: &str) -> Vec<String> {
    LINE_BREAK_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Clean one candidate segment; `None` if it is too short to be a comment
pub fn clean_segment(segment: &str) -> Option<String> {
    let trimmed = segment.trim();
    if char_len(trimmed) < MIN_COMMENT_CHARS {
        return None;
    }

    let unlabeled = LEADING_LABEL_RE.replace(trimmed, "");
    let stripped = unlabeled.trim_start_matches(|c: char| {
        is_quote(c) || c.is_ascii_digit() || matches!(c, '.' | ')' | '-') || c.is_whitespace()
    });
    let stripped = match stripped.chars().next_back() {
        Some(last) if is_quote(last) => &stripped[..stripped.len() - last.len_utf8()],
        _ => stripped,
    };
    let cleaned = stripped.trim();

    (char_len(cleaned) >= MIN_COMMENT_CHARS).then(|| cleaned.to_string())
}

/// Last resort: take every line longer than the minimum and split the list
/// in half, joining each half into one comment.
pub fn bisect_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| char_len(l) > MIN_COMMENT_CHARS)
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let mid = lines.len().div_ceil(2);
    [lines[..mid].join(" "), lines[mid..].join(" ")]
        .into_iter()
        .filter(|c| char_len(c) >= MIN_COMMENT_CHARS)
        .collect()
}

/// Parse generated comments into exactly two slots.
///
/// Never fails: unparseable input yields empty strings.
pub fn parse_comments(raw: &str) -> [String; 2] {
    let mut segments = split_on_blank_lines_and_markers(raw);
    if segments.len() < 2 {
        segments = split_on_line_breaks(raw);
    }

    let mut comments: Vec<String> = segments.iter().filter_map(|s| clean_segment(s)).collect();

    if comments.len() < 2 {
        let bisected = bisect_lines(raw);
        log::debug!(
            "Normalize: {} usable segment(s), bisection gave {}",
            comments.len(),
            bisected.len()
        );
        if bisected.len() > comments.len() {
            comments = bisected;
        }
    }

    let mut slots = comments.into_iter();
    [
        slots.next().unwrap_or_default(),
        slots.next().unwrap_or_default(),
    ]
}

/// Trim a generated DM body and drop quotes wrapped around it
pub fn clean_dm(raw: &str) -> String {
    raw.trim().trim_matches(is_quote).trim().to_string()
}

// ---------------------------------------------------------------------------
// Improved comment cleanup
// ---------------------------------------------------------------------------

/// Case-insensitive prefix strip that treats curly apostrophes as straight ones
fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let mut rest = text.char_indices();
    for expected in label.chars() {
        let (_, actual) = rest.next()?;
        let actual = if actual == '’' { '\'' } else { actual };
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = rest.next().map(|(i, _)| i).unwrap_or(text.len());
    Some(&text[end..])
}

fn strip_intro_labels(text: &str) -> &str {
    let mut current = text;
    loop {
        let next = INTRO_LABELS
            .iter()
            .find_map(|label| strip_label(current, label))
            .map(str::trim_start);
        match next {
            Some(rest) => current = rest,
            None => return current,
        }
    }
}

/// Drop a leading "something:" prefix when no double quote comes before the
/// colon and the colon ends a word (so URLs and times survive).
fn strip_leading_colon_prefix(text: &str) -> &str {
    let Some(colon) = text.find(':') else {
        return text;
    };
    if text[..colon].chars().any(is_double_quote) {
        return text;
    }
    let rest = &text[colon + 1..];
    match rest.chars().next() {
        None => rest,
        Some(c) if c.is_whitespace() || is_quote(c) => rest.trim_start(),
        Some(_) => text,
    }
}

fn unwrap_markdown(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    CODE_RE.replace_all(&text, "$1").into_owned()
}

fn strip_matching_quote_pair(text: &str) -> &str {
    let mut chars = text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return text;
    };
    let matching = matches!(
        (first, last),
        ('"', '"') | ('\'', '\'') | ('“', '”') | ('‘', '’')
    );
    if matching {
        &text[first.len_utf8()..text.len() - last.len_utf8()]
    } else {
        text
    }
}

fn strip_single_outer_quotes(text: &str) -> &str {
    let text = match text.chars().next() {
        Some(c) if is_quote(c) => &text[c.len_utf8()..],
        _ => text,
    };
    match text.chars().next_back() {
        Some(c) if is_quote(c) => &text[..text.len() - c.len_utf8()],
        _ => text,
    }
}

/// Clean a rewritten comment: strip AI preambles, labels, wrapping quotes and
/// markdown, and collapse whitespace.
pub fn clean_improved_text(raw: &str) -> String {
    // Labels are often bolded ("**Improved comment:**"), so expose them first
    let unwrapped = unwrap_markdown(raw.trim());
    let text = strip_intro_labels(unwrapped.trim());
    let text = strip_leading_colon_prefix(text);
    let text = text.trim_matches(is_quote);
    let text = unwrap_markdown(text);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = strip_matching_quote_pair(&text);
    strip_single_outer_quotes(text).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_blank_line_separated() {
        let raw =
            "1. Great point, thanks for sharing!\n\n2. Interesting take, I'd love to know more.";
        assert_eq!(
            parse_comments(raw),
            [
                "Great point, thanks for sharing!".to_string(),
                "Interesting take, I'd love to know more.".to_string()
            ]
        );
    }

    #[test]
    fn test_markers_without_blank_lines() {
        let raw =
            "Comment 1: This is a really thoughtful post.\nComment 2: Totally agree with your second point.";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "This is a really thoughtful post.");
        assert_eq!(b, "Totally agree with your second point.");
    }

    #[test]
    fn test_inline_numbered_markers() {
        let raw = "1. Love how practical this is. 2. Curious how this scales for bigger teams.";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "Love how practical this is.");
        assert_eq!(b, "Curious how this scales for bigger teams.");
    }

    #[test]
    fn test_bold_labels_and_quotes() {
        let raw =
            "**Comment 1:** \"Such a great milestone for the team!\"\n\n**Comment 2:** \"Congrats, well deserved!\"";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "Such a great milestone for the team!");
        assert_eq!(b, "Congrats, well deserved!");
    }

    #[test]
    fn test_first_second_labels() {
        let raw =
            "First comment: Really like the framing here.\nSecond comment: This resonates with my own experience.";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "Really like the framing here.");
        assert_eq!(b, "This resonates with my own experience.");
    }

    #[test]
    fn test_single_newline_fallback() {
        let raw = "Great insight on hiring, thanks!\nI wonder how this applies to startups.";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "Great insight on hiring, thanks!");
        assert_eq!(b, "I wonder how this applies to startups.");
    }

    #[test]
    fn test_extra_segments_truncated() {
        let raw =
            "First useful comment here.\n\nSecond useful comment here.\n\nThird useful comment here.";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "First useful comment here.");
        assert_eq!(b, "Second useful comment here.");
    }

    #[test]
    fn test_short_segments_dropped() {
        let raw = "Ok.\n\nThis one is long enough to keep.\n\nNice!";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "This one is long enough to keep.");
        assert_eq!(b, "");
    }

    #[test]
    fn test_single_segment_pads_second_slot() {
        let [a, b] = parse_comments("Only one thing to say about this post.");
        assert_eq!(a, "Only one thing to say about this post.");
        assert_eq!(b, "");
    }

    #[test]
    fn test_empty_input_gives_two_empty_slots() {
        assert_eq!(parse_comments(""), [String::new(), String::new()]);
        assert_eq!(parse_comments("   \n\n  "), [String::new(), String::new()]);
        assert_eq!(parse_comments("short"), [String::new(), String::new()]);
    }

    #[test]
    fn test_two_slot_invariant() {
        let inputs = [
            "",
            "a",
            "1.\n2.\n3.",
            "\"\"\"\"\"\"\"\"\"\"\"\"",
            "Comment 1:\n\nComment 2:",
            "1. Great point, thanks for sharing!\n\n2. Interesting take, I'd love to know more.",
            "- 12345678901234\n- 98765432109876",
            "A long single line without any breaks at all that goes on and on.",
            "line one is long\nline two is long\nline three is long",
            "“Curly quoted comment here”\n\n‘Another curly quoted one’",
        ];
        for input in inputs {
            let comments = parse_comments(input);
            assert_eq!(comments.len(), 2);
            for c in &comments {
                assert!(
                    c.is_empty() || c.chars().count() >= MIN_COMMENT_CHARS,
                    "{:?} -> {:?}",
                    input,
                    c
                );
            }
        }
    }

    #[test]
    fn test_split_strategies_are_independent() {
        assert_eq!(
            split_on_blank_lines_and_markers("alpha\n\nbeta\n \ngamma"),
            vec!["alpha", "beta", "gamma"]
        );
        assert_eq!(
            split_on_line_breaks("alpha\r\nbeta\n\n\ngamma"),
            vec!["alpha", "beta", "gamma"]
        );
        // Digits inside a word are not markers
        assert_eq!(
            split_on_blank_lines_and_markers("Version2. is out"),
            vec!["Version2. is out"]
        );
    }

    #[test]
    fn test_clean_segment() {
        assert_eq!(clean_segment("   "), None);
        assert_eq!(clean_segment("too short"), None);
        assert_eq!(
            clean_segment("  2) \"Well said, and timely.\"  "),
            Some("Well said, and timely.".to_string())
        );
        assert_eq!(
            clean_segment("Activate: Let's make this happen together"),
            Some("Let's make this happen together".to_string())
        );
        // Label stripping can leave too little behind
        assert_eq!(clean_segment("Comment 1: Nice"), None);
    }

    #[test]
    fn test_bisect_lines() {
        let text =
            "first line is long enough\nsecond line is long enough\nthird line is long enough";
        assert_eq!(
            bisect_lines(text),
            vec![
                "first line is long enough second line is long enough".to_string(),
                "third line is long enough".to_string()
            ]
        );
        assert_eq!(bisect_lines("tiny\nlines"), Vec::<String>::new());
        assert_eq!(bisect_lines("just one long line"), vec!["just one long line".to_string()]);
    }

    #[test]
    fn test_bisection_used_when_cleaning_leaves_one() {
        // Blank-line split finds two blocks but only one survives cleaning,
        // while the raw lines split in half give two comments.
        let raw = "12345678901\nThis is a proper comment.\n\nshort";
        let [a, b] = parse_comments(raw);
        assert_eq!(a, "12345678901");
        assert_eq!(b, "This is a proper comment.");
    }

    #[test]
    fn test_clean_dm() {
        assert_eq!(
            clean_dm("  \"Loved your post about hiring.\"  "),
            "Loved your post about hiring."
        );
        assert_eq!(clean_dm(""), "");
    }

    #[test]
    fn test_clean_improved_text_refined_version() {
        assert_eq!(
            clean_improved_text("Here's a refined version: \"Great job on the launch!\""),
            "Great job on the launch!"
        );
    }

    #[test]
    fn test_clean_improved_text_labels() {
        assert_eq!(
            clean_improved_text(
                "Certainly! Here's a refined version of your comment:\n\n\"Congrats on the new role!\""
            ),
            "Congrats on the new role!"
        );
        assert_eq!(
            clean_improved_text("HERE’S THE IMPROVED VERSION: Thanks for sharing this."),
            "Thanks for sharing this."
        );
        assert_eq!(
            clean_improved_text("Improved comment: Revised comment: Solid advice."),
            "Solid advice."
        );
    }

    #[test]
    fn test_clean_improved_text_colon_prefix() {
        assert_eq!(
            clean_improved_text("My suggestion: Love this perspective on remote work."),
            "Love this perspective on remote work."
        );
        // A quote before the colon protects it
        assert_eq!(
            clean_improved_text("\"Time: the one resource\" says it all"),
            "Time: the one resource\" says it all"
        );
        // URLs and clock times are not labels
        assert_eq!(
            clean_improved_text("See https://example.com for more"),
            "See https://example.com for more"
        );
        assert_eq!(clean_improved_text("Meet at 10:30 tomorrow?"), "Meet at 10:30 tomorrow?");
    }

    #[test]
    fn test_clean_improved_text_markdown_and_whitespace() {
        assert_eq!(
            clean_improved_text("**Great** point,   *really*\n\n well `made`."),
            "Great point, really well made."
        );
        assert_eq!(clean_improved_text("**“Nice work on this!”**"), "Nice work on this!");
    }

    #[test]
    fn test_clean_improved_text_bolded_labels() {
        assert_eq!(
            clean_improved_text("**Here's the improved version:** Great work on this launch."),
            "Great work on this launch."
        );
        assert_eq!(
            clean_improved_text("**Improved comment:** Great work on this launch."),
            "Great work on this launch."
        );
        assert_eq!(
            clean_improved_text("*Revised comment:* `Solid point, well made.`"),
            "Solid point, well made."
        );
    }

    #[test]
    fn test_clean_improved_text_quotes() {
        assert_eq!(clean_improved_text("“Brilliant analysis.”"), "Brilliant analysis.");
        assert_eq!(clean_improved_text("'''Short and sweet.'''"), "Short and sweet.");
        assert_eq!(clean_improved_text("   "), "");
    }

    #[test]
    fn test_clean_improved_text_idempotent() {
        let inputs = [
            "Here's a refined version: \"Great job on the launch!\"",
            "Sure! Here's an improved version:\n\n**This is a fantastic milestone.**",
            "  `Really helpful breakdown, thanks.`  ",
            "Improved version: 'Appreciate you sharing this.'",
            "Plain comment with no decoration at all.",
            "“Curly quoted and    spaced   out.”",
            "**Here's the improved version:** Great work on this launch.",
            "**Improved comment:** Great work on this launch.",
            "",
        ];
        for input in inputs {
            let once = clean_improved_text(input);
            assert_eq!(clean_improved_text(&once), once, "not idempotent for {:?}", input);
        }
    }
}
