//! Positional chord tokens
//!
//! A positional token has the shape `root[duration]:quality`, e.g. `d2:m7`, `g:7`,
//! `fis1:maj7`. The root is a lowercase LilyPond pitch name, the duration is an
//! optional run of digits and the quality is any text after the `:`.

use std::fmt;

use crate::error::TokenIssue;
use crate::interval::{transpose_root, Interval};
use crate::pitch::Pitch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalToken {
    pub root: Pitch,
    /// Duration marker, kept verbatim (may be empty)
    pub duration: String,
    /// Chord quality, kept verbatim (may be empty)
    pub quality: String,
}

impl PositionalToken {
    pub fn parse(token: &str) -> Result<PositionalToken, TokenIssue> {
        let (head, quality) = token.split_once(':').ok_or(TokenIssue::MissingSeparator)?;

        let root_end = head
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(head.len());
        let (root, duration) = head.split_at(root_end);

        if !duration.chars().all(|c| c.is_ascii_digit()) {
            return Err(TokenIssue::UnknownRoot);
        }
        let root = Pitch::parse_lilypond(root).ok_or(TokenIssue::UnknownRoot)?;

        Ok(PositionalToken {
            root,
            duration: duration.to_string(),
            quality: quality.to_string(),
        })
    }

    /// Same token with the root moved up by `interval`
    pub fn transposed(&self, interval: Interval) -> PositionalToken {
        PositionalToken {
            root: transpose_root(self.root, interval),
            duration: self.duration.clone(),
            quality: self.quality.clone(),
        }
    }
}

impl fmt::Display for PositionalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", self.root, self.duration, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Accidental, NoteName};

    #[test]
    fn test_parse_with_duration() {
        let token = PositionalToken::parse("d2:m7").unwrap();
        assert_eq!(token.root, Pitch::natural(NoteName::D));
        assert_eq!(token.duration, "2");
        assert_eq!(token.quality, "m7");
    }

    #[test]
    fn test_parse_without_duration() {
        let token = PositionalToken::parse("g:7").unwrap();
        assert_eq!(token.duration, "");
        assert_eq!(token.to_string(), "g:7");
    }

    #[test]
    fn test_parse_accidental_root() {
        let token = PositionalToken::parse("fis1:maj7").unwrap();
        assert_eq!(token.root, Pitch::new(NoteName::F, Accidental::Sharp));
        assert_eq!(token.duration, "1");
        assert_eq!(token.to_string(), "fis1:maj7");
    }

    #[test]
    fn test_parse_empty_quality() {
        let token = PositionalToken::parse("c1:").unwrap();
        assert_eq!(token.quality, "");
        assert_eq!(token.to_string(), "c1:");
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(PositionalToken::parse("c1m7"), Err(TokenIssue::MissingSeparator));
        assert_eq!(PositionalToken::parse(""), Err(TokenIssue::MissingSeparator));
    }

    #[test]
    fn test_unknown_root() {
        assert_eq!(PositionalToken::parse("x1:m7"), Err(TokenIssue::UnknownRoot));
        assert_eq!(PositionalToken::parse("c1x:m7"), Err(TokenIssue::UnknownRoot));
        assert_eq!(PositionalToken::parse("1:m7"), Err(TokenIssue::UnknownRoot));
    }

    #[test]
    fn test_transposed_keeps_duration_and_quality() {
        let token = PositionalToken::parse("fis1:maj7").unwrap();
        let moved = token.transposed(Interval::MajorSecond);
        assert_eq!(moved.to_string(), "gis1:maj7");
    }
}
