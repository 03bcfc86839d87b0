//! Western chord symbol parsing
//!
//! Splits a chord symbol (C, Cm7, CM9, Bbmaj7, etc.) into root, mood and extension
//! digit so the root can be transposed and the quality reattached unchanged.

use crate::error::ChordError;
use crate::pitch::Pitch;

/// A parsed Western chord symbol
///
/// `mood` is already in LilyPond vocabulary (`M` becomes `maj`), `digit` is the
/// optional single extension digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WesternChord {
    pub root: Pitch,
    pub mood: String,
    pub digit: String,
}

impl WesternChord {
    /// `:` between root and quality, empty for a bare major chord
    pub fn separator(&self) -> &'static str {
        if self.mood.is_empty() && self.digit.is_empty() {
            ""
        } else {
            ":"
        }
    }

    /// Mood and digit joined, e.g. `m7`, `maj9`, `7`
    pub fn quality(&self) -> String {
        format!("{}{}", self.mood, self.digit)
    }
}

/// Parse a Western chord symbol
///
/// The root is an uppercase `A`-`G`, optionally followed by `#` or `b`. The rest
/// must match one of six shapes:
///
/// | Shape              | Example  | Mood    | Digit |
/// |--------------------|----------|---------|-------|
/// | empty              | `C`      |         |       |
/// | digit              | `C7`     |         | `7`   |
/// | `m` / `M`          | `Cm`     | `m`     |       |
/// | `m` / `M` + digit  | `CM9`    | `maj`   | `9`   |
/// | three letters      | `Cmaj`   | `maj`   |       |
/// | three letters + digit | `Cmaj7` | `maj` | `7`   |
///
/// # Examples
/// ```
/// use chordshift::chord::parse_chord_symbol;
///
/// let chord = parse_chord_symbol("C#m7").unwrap();
/// assert_eq!(chord.root.lilypond(), "cis");
/// assert_eq!(chord.quality(), "m7");
///
/// assert!(parse_chord_symbol("Cm19aug12b3").is_err());
/// ```
pub fn parse_chord_symbol(chord_symbol: &str) -> Result<WesternChord, ChordError> {
    let chars: Vec<char> = chord_symbol.chars().collect();
    if chars.is_empty() {
        return Err(parse_error(chord_symbol, "empty chord symbol"));
    }

    // Root with optional accidental
    let root_len = if chars.len() > 1 && (chars[1] == '#' || chars[1] == 'b') {
        2
    } else {
        1
    };
    let root_str: String = chars[..root_len].iter().collect();
    let root = Pitch::parse_western(&root_str)
        .ok_or_else(|| parse_error(chord_symbol, &format!("invalid root '{}'", root_str)))?;

    let quality = &chars[root_len..];
    let (mood, digit) = match quality {
        [] => (String::new(), String::new()),
        [d] if d.is_ascii_digit() => (String::new(), d.to_string()),
        [m] if is_mood_letter(*m) => (mood_name(*m).to_string(), String::new()),
        [m, d] if is_mood_letter(*m) && d.is_ascii_digit() => {
            (mood_name(*m).to_string(), d.to_string())
        }
        [a, b, c] if [a, b, c].iter().all(|ch| ch.is_ascii_alphabetic()) => {
            ([*a, *b, *c].iter().collect(), String::new())
        }
        [a, b, c, d]
            if [a, b, c].iter().all(|ch| ch.is_ascii_alphabetic()) && d.is_ascii_digit() =>
        {
            ([*a, *b, *c].iter().collect(), d.to_string())
        }
        _ => {
            let quality: String = quality.iter().collect();
            return Err(parse_error(
                chord_symbol,
                &format!("unsupported chord quality '{}'", quality),
            ));
        }
    };

    Ok(WesternChord { root, mood, digit })
}

fn is_mood_letter(c: char) -> bool {
    c == 'm' || c == 'M'
}

/// Single-letter Western mood to LilyPond vocabulary
fn mood_name(c: char) -> &'static str {
    match c {
        'M' => "maj",
        _ => "m",
    }
}

fn parse_error(chord: &str, message: &str) -> ChordError {
    ChordError::ChordParse {
        chord: chord.to_string(),
        message: message.to_string(),
    }
}
