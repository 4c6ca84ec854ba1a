//! Supported social platforms and their per-platform behaviour.
//!
//! Each platform owns its default tone templates, its character limits and
//! the way generated comments and DMs are wrapped before they are shown.

use crate::tones::{farcaster, linkedin, x, ToneTemplate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported social network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    X,
    Farcaster,
}

/// Which kind of text a character limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Comment,
    Dm,
    Reply,
}

/// Character limits used by callers to validate text before posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterLimits {
    pub comment: usize,
    pub dm: usize,
    pub reply: usize,
}

impl CharacterLimits {
    /// Limit for the given kind of text
    pub fn limit_for(&self, kind: TextKind) -> usize {
        match kind {
            TextKind::Comment => self.comment,
            TextKind::Dm => self.dm,
            TextKind::Reply => self.reply,
        }
    }

    /// Whether `text` fits the limit, counted in characters rather than bytes
    pub fn check(&self, kind: TextKind, text: &str) -> bool {
        text.chars().count() <= self.limit_for(kind)
    }
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::X, Platform::Farcaster];

    /// Display name of the platform
    pub fn name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::X => "X",
            Platform::Farcaster => "Farcaster",
        }
    }

    /// Plural noun used in the generic fallback prompt ("Write 2 <noun> ...")
    pub fn comment_noun(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn comments",
            Platform::X => "replies for X",
            Platform::Farcaster => "Farcaster replies",
        }
    }

    /// Default prompt templates owned by this platform
    pub fn default_prompts(&self) -> &'static [ToneTemplate] {
        match self {
            Platform::LinkedIn => linkedin::TONES,
            Platform::X => x::TONES,
            Platform::Farcaster => farcaster::TONES,
        }
    }

    pub fn character_limits(&self) -> CharacterLimits {
        match self {
            Platform::LinkedIn => CharacterLimits {
                comment: 1250,
                dm: 8000,
                reply: 1250,
            },
            Platform::X => CharacterLimits {
                comment: 280,
                dm: 10_000,
                reply: 280,
            },
            Platform::Farcaster => CharacterLimits {
                comment: 320,
                dm: 1000,
                reply: 320,
            },
        }
    }

    /// Upper bound on scraped post text handed to the prompt composer.
    ///
    /// Truncation happens at the caller boundary; the core takes post text as given.
    pub fn max_post_chars(&self) -> usize {
        match self {
            Platform::LinkedIn | Platform::X => 800,
            Platform::Farcaster => 320,
        }
    }

    /// Post-process a generated comment.
    ///
    /// Comments pass through unchanged on every platform. Mentions are never
    /// injected, so a comment already carrying an `@handle` stays as it is.
    pub fn format_comment(&self, comment: &str, _author_name: &str) -> String {
        comment.to_string()
    }

    /// Wrap a generated DM body with the platform's greeting and signature
    pub fn format_dm(&self, dm: &str, author_name: &str, viewer_name: &str) -> String {
        match self {
            Platform::LinkedIn => {
                format!("Hello {}, {}\n\nBest,\n{}", author_name, dm, viewer_name)
            }
            Platform::X => format!("Hey {}, {}\n\n- {}", author_name, dm, viewer_name),
            Platform::Farcaster => {
                if viewer_name.trim().is_empty() {
                    format!("Hey {}, {}", author_name, dm)
                } else {
                    format!("Hey {}, {}\n\n- {}", author_name, dm, viewer_name)
                }
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "x" | "twitter" => Ok(Platform::X),
            "farcaster" | "warpcast" => Ok(Platform::Farcaster),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tones::find_template;

    #[test]
    fn test_linkedin_dm_wrapping() {
        let dm = Platform::LinkedIn.format_dm("Let's catch up soon.", "Alex", "Sam");
        assert_eq!(dm, "Hello Alex, Let's catch up soon.\n\nBest,\nSam");
    }

    #[test]
    fn test_x_dm_wrapping() {
        let dm = Platform::X.format_dm("Loved this thread.", "Alex", "Sam");
        assert_eq!(dm, "Hey Alex, Loved this thread.\n\n- Sam");
    }

    #[test]
    fn test_farcaster_dm_omits_signature_without_viewer() {
        assert_eq!(
            Platform::Farcaster.format_dm("Great cast.", "Alex", ""),
            "Hey Alex, Great cast."
        );
        assert_eq!(
            Platform::Farcaster.format_dm("Great cast.", "Alex", "Sam"),
            "Hey Alex, Great cast.\n\n- Sam"
        );
    }

    #[test]
    fn test_comments_pass_through() {
        for platform in Platform::ALL {
            assert_eq!(
                platform.format_comment("Nice point @alex, agreed!", "Alex"),
                "Nice point @alex, agreed!"
            );
            assert_eq!(
                platform.format_comment("Nice point, agreed!", "Alex"),
                "Nice point, agreed!"
            );
        }
    }

    #[test]
    fn test_character_limits() {
        let limits = Platform::X.character_limits();
        assert!(limits.check(TextKind::Comment, &"a".repeat(280)));
        assert!(!limits.check(TextKind::Comment, &"a".repeat(281)));
        // Counted in characters, not bytes
        assert!(limits.check(TextKind::Reply, &"é".repeat(280)));
        assert_eq!(Platform::LinkedIn.character_limits().limit_for(TextKind::Dm), 8000);
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("LinkedIn".parse::<Platform>(), Ok(Platform::LinkedIn));
        assert_eq!("twitter".parse::<Platform>(), Ok(Platform::X));
        assert_eq!(" farcaster ".parse::<Platform>(), Ok(Platform::Farcaster));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_every_platform_defines_every_tone() {
        for platform in Platform::ALL {
            for tone in crate::tones::ENGAGEMENT_TONES {
                assert!(
                    find_template(platform.default_prompts(), tone.id).is_some(),
                    "{} is missing a template for {}",
                    platform,
                    tone.id
                );
            }
        }
    }
}
