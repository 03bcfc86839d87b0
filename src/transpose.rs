//! # Chord-Info Transposition
//!
//! Transposes a chord-info string to a target pitch.
//!
//! ## Formats
//!
//! ### Western
//! A single chord symbol starting with an uppercase root: `C`, `Cm7`, `CM9`, `Bb7`.
//! A leading `*` marker is ignored (`*Cm7` is the same as `Cm7`). The chord is
//! held for `number_of_bars` bars and comes out in positional form, one whole-bar
//! token per bar:
//! ```text
//! C7, pitch d, 2 bars  →  d1:7 d1:7
//! CM,  pitch ees       →  ees1:maj
//! C,   pitch e         →  e1
//! ```
//!
//! ### Positional
//! Space-separated `root[duration]:quality` tokens, roots in lowercase LilyPond
//! spelling. Only roots move; durations and qualities are copied verbatim and
//! `number_of_bars` is ignored:
//! ```text
//! d2:m7 g:7 c1:maj7, pitch d  →  e2:m7 a:7 d1:maj7
//! ```
//! A token that cannot be read is replaced by `Error in:{token}` and the rest of
//! the string is still transposed.
//!
//! ## Transposition
//! The target pitch is read as the interval from C (see `interval`), and every
//! root is moved up by that interval.
//!
//! ## Entry Points
//! - [`transpose_chord_info()`] - Transpose to a pitch given by name
//! - [`transpose_chord_info_detailed()`] - Same, also returning token warnings
//! - [`transpose_to()`] - Transpose to an already-parsed [`PitchClass`]
//! - [`transpose_all_keys()`] - Transpose to every recognized pitch class

use tracing::{debug, error};

use crate::chord::parse_chord_symbol;
use crate::error::{ChordError, TokenFormatWarning};
use crate::interval::{interval_for_pitch, transpose_root, Interval};
use crate::pitch::PitchClass;
use crate::positional::PositionalToken;

/// Notation a chord-info string is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordFormat {
    /// Chord symbol with uppercase root, e.g. `Cm7`
    Western,
    /// `root[duration]:quality` tokens, e.g. `d2:m7 g:7`
    Positional,
}

impl ChordFormat {
    /// Detect the format of a whole chord-info string
    ///
    /// Every token is classified by its first character (uppercase means Western).
    /// Empty input is positional.
    ///
    /// # Errors
    /// [`ChordError::MixedFormat`] if tokens disagree.
    pub fn detect(chord_info: &str) -> Result<ChordFormat, ChordError> {
        let mut tokens = chord_info.split_whitespace().map(Self::of_token);
        let format = match tokens.next() {
            Some(format) => format,
            None => return Ok(ChordFormat::Positional),
        };
        if tokens.any(|other| other != format) {
            return Err(ChordError::MixedFormat {
                chord_info: chord_info.to_string(),
            });
        }
        Ok(format)
    }

    fn of_token(token: &str) -> ChordFormat {
        match token.chars().next() {
            Some(c) if c.is_uppercase() => ChordFormat::Western,
            _ => ChordFormat::Positional,
        }
    }
}

/// Result of a transposition with the tokens that had to be replaced
#[derive(Debug, Clone, PartialEq)]
pub struct Transposition {
    pub chord_info: String,
    pub warnings: Vec<TokenFormatWarning>,
}

/// Transpose a chord-info string to `pitch`
///
/// # Example
/// ```
/// use chordshift::transpose_chord_info;
///
/// assert_eq!(transpose_chord_info("C7", "d", Some(2)).unwrap(), "d1:7 d1:7");
/// assert_eq!(
///     transpose_chord_info("d2:m7 g:7 c1:maj7", "d", None).unwrap(),
///     "e2:m7 a:7 d1:maj7"
/// );
/// ```
///
/// # Errors
/// - [`ChordError::InvalidPitchClass`] if `pitch` is not a recognized spelling
/// - [`ChordError::ChordParse`] if a Western chord symbol is malformed
/// - [`ChordError::MixedFormat`] if Western and positional tokens are mixed
pub fn transpose_chord_info(
    chord_info: &str,
    pitch: &str,
    number_of_bars: Option<u32>,
) -> Result<String, ChordError> {
    transpose_chord_info_detailed(chord_info, pitch, number_of_bars).map(|t| t.chord_info)
}

/// Transpose a chord-info string to `pitch`, keeping token warnings
pub fn transpose_chord_info_detailed(
    chord_info: &str,
    pitch: &str,
    number_of_bars: Option<u32>,
) -> Result<Transposition, ChordError> {
    let pitch: PitchClass = pitch.parse()?;
    transpose_to(chord_info, pitch, number_of_bars)
}

/// Transpose a chord-info string to an already-validated pitch class
pub fn transpose_to(
    chord_info: &str,
    pitch: PitchClass,
    number_of_bars: Option<u32>,
) -> Result<Transposition, ChordError> {
    let trimmed = chord_info.trim();
    let chord_info = trimmed.strip_prefix('*').unwrap_or(trimmed);
    let interval = interval_for_pitch(pitch);
    let format = ChordFormat::detect(chord_info)?;

    debug!(chord_info, %pitch, %interval, ?format, "Transposing chord info");

    match format {
        ChordFormat::Western => Ok(Transposition {
            chord_info: transpose_western(chord_info, interval, number_of_bars)?,
            warnings: Vec::new(),
        }),
        ChordFormat::Positional => Ok(transpose_positional(chord_info, interval)),
    }
}

/// Transpose a chord-info string to each of the 15 pitch classes, in rendering order
pub fn transpose_all_keys(
    chord_info: &str,
    number_of_bars: Option<u32>,
) -> Result<Vec<(PitchClass, String)>, ChordError> {
    PitchClass::ALL
        .iter()
        .map(|&pitch| {
            transpose_to(chord_info, pitch, number_of_bars).map(|t| (pitch, t.chord_info))
        })
        .collect()
}

fn transpose_western(
    chord_symbol: &str,
    interval: Interval,
    number_of_bars: Option<u32>,
) -> Result<String, ChordError> {
    let chord = parse_chord_symbol(chord_symbol)?;
    let root = transpose_root(chord.root, interval);
    let bar = format!("{}1{}{}", root, chord.separator(), chord.quality());

    let bars = match number_of_bars {
        Some(n) if n > 1 => n as usize,
        _ => 1,
    };
    Ok(vec![bar; bars].join(" "))
}

fn transpose_positional(chord_info: &str, interval: Interval) -> Transposition {
    let mut warnings = Vec::new();
    let tokens: Vec<String> = chord_info
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| match PositionalToken::parse(token) {
            Ok(parsed) => parsed.transposed(interval).to_string(),
            Err(issue) => {
                error!(token, index, %issue, "Cannot transpose chord token");
                warnings.push(TokenFormatWarning {
                    index,
                    token: token.to_string(),
                    issue,
                });
                format!("Error in:{}", token)
            }
        })
        .collect();

    Transposition {
        chord_info: tokens.join(" "),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenIssue;

    #[test]
    fn test_detect_formats() {
        assert_eq!(ChordFormat::detect("Cm7").unwrap(), ChordFormat::Western);
        assert_eq!(ChordFormat::detect("d2:m7 g:7").unwrap(), ChordFormat::Positional);
        assert_eq!(ChordFormat::detect("").unwrap(), ChordFormat::Positional);
        assert_eq!(ChordFormat::detect("c1m7").unwrap(), ChordFormat::Positional);
    }

    #[test]
    fn test_detect_mixed_format() {
        assert!(matches!(
            ChordFormat::detect("d2:m7 G7"),
            Err(ChordError::MixedFormat { .. })
        ));
        assert!(matches!(
            ChordFormat::detect("Cm7 f1:7"),
            Err(ChordError::MixedFormat { .. })
        ));
    }

    #[test]
    fn test_western_single_bar() {
        assert_eq!(transpose_chord_info("C7", "d", None).unwrap(), "d1:7");
        assert_eq!(transpose_chord_info("C7", "d", Some(1)).unwrap(), "d1:7");
        assert_eq!(transpose_chord_info("C7", "d", Some(0)).unwrap(), "d1:7");
    }

    #[test]
    fn test_western_bar_fan_out() {
        assert_eq!(transpose_chord_info("C7", "d", Some(2)).unwrap(), "d1:7 d1:7");
        assert_eq!(
            transpose_chord_info("Cm", "ees", Some(4)).unwrap(),
            "ees1:m ees1:m ees1:m ees1:m"
        );
    }

    #[test]
    fn test_western_bare_major_has_no_separator() {
        assert_eq!(transpose_chord_info("C", "e", None).unwrap(), "e1");
        assert_eq!(transpose_chord_info("C", "e", Some(2)).unwrap(), "e1 e1");
    }

    #[test]
    fn test_western_accidental_root() {
        assert_eq!(transpose_chord_info("Bb7", "d", None).unwrap(), "c1:7");
        assert_eq!(transpose_chord_info("C#m7", "d", None).unwrap(), "dis1:m7");
        assert_eq!(transpose_chord_info("Ebmaj7", "c", None).unwrap(), "ees1:maj7");
    }

    #[test]
    fn test_starred_western_input() {
        assert_eq!(transpose_chord_info("*Cm7", "c", None).unwrap(), "c1:m7");
    }

    #[test]
    fn test_malformed_western_raises() {
        assert!(matches!(
            transpose_chord_info("Cm19aug12b3", "d", None),
            Err(ChordError::ChordParse { .. })
        ));
    }

    #[test]
    fn test_invalid_pitch_raises() {
        assert_eq!(
            transpose_chord_info("C7", "des", None),
            Err(ChordError::InvalidPitchClass("des".to_string()))
        );
    }

    #[test]
    fn test_positional_keeps_durations_and_qualities() {
        assert_eq!(
            transpose_chord_info("d2:m7 g:7 c1:maj7", "d", None).unwrap(),
            "e2:m7 a:7 d1:maj7"
        );
        // Bars only apply to Western input
        assert_eq!(
            transpose_chord_info("c1:m7", "d", Some(3)).unwrap(),
            "d1:m7"
        );
    }

    #[test]
    fn test_positional_partial_failure() {
        let result = transpose_chord_info_detailed("d2:m7 g7 c1:maj7", "d", None).unwrap();
        assert_eq!(result.chord_info, "e2:m7 Error in:g7 d1:maj7");
        assert_eq!(
            result.warnings,
            vec![TokenFormatWarning {
                index: 1,
                token: "g7".to_string(),
                issue: TokenIssue::MissingSeparator,
            }]
        );
    }

    #[test]
    fn test_positional_unknown_root() {
        let result = transpose_chord_info_detailed("x1:m7 c1:7", "e", None).unwrap();
        assert_eq!(result.chord_info, "Error in:x1:m7 e1:7");
        assert_eq!(result.warnings[0].issue, TokenIssue::UnknownRoot);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transpose_chord_info("", "d", None).unwrap(), "");
        assert_eq!(transpose_chord_info("   ", "d", Some(2)).unwrap(), "");
    }

    #[test]
    fn test_all_keys() {
        let table = transpose_all_keys("Cm7", None).unwrap();
        assert_eq!(table.len(), 15);
        for (pitch, chord_info) in table {
            assert_eq!(chord_info, format!("{}1:m7", pitch));
        }
    }

    #[test]
    fn test_all_keys_propagates_parse_error() {
        assert!(transpose_all_keys("Cxyz12", None).is_err());
    }
}
