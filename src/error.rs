//! # Error Types
//!
//! This module defines the error and warning types for chord transposition.
//!
//! ## Error Types
//! - `ChordParse` - A Western chord symbol that matches none of the supported shapes
//! - `InvalidPitchClass` - A target pitch outside the 15 recognized spellings
//! - `MixedFormat` - A chord-info string mixing Western and positional tokens
//!
//! Malformed positional tokens are not errors: they are replaced in the output and
//! reported as a [`TokenFormatWarning`].
//!
//! ## Usage
//! ```rust
//! use chordshift::{transpose_chord_info, ChordError};
//!
//! match transpose_chord_info("Cm19aug12b3", "d", None) {
//!     Ok(chord_info) => println!("{}", chord_info),
//!     Err(ChordError::ChordParse { chord, message }) => {
//!         eprintln!("Cannot parse '{}': {}", chord, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// Western chord symbol parse error.
    ///
    /// # Example
    /// ```
    /// # use chordshift::ChordError;
    /// let err = ChordError::ChordParse {
    ///     chord: "Cx".to_string(),
    ///     message: "unsupported chord quality 'x'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unsupported chord 'Cx': unsupported chord quality 'x'");
    /// ```
    #[error("Unsupported chord '{chord}': {message}")]
    ChordParse { chord: String, message: String },

    /// Target pitch is not one of the recognized pitch class spellings.
    ///
    /// # Example
    /// ```
    /// # use chordshift::ChordError;
    /// let err = ChordError::InvalidPitchClass("h".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch class: 'h'");
    /// ```
    #[error("Invalid pitch class: '{0}'")]
    InvalidPitchClass(String),

    /// Chord-info string contains both Western and positional tokens.
    #[error("Mixed chord formats in '{chord_info}': expected all Western or all positional tokens")]
    MixedFormat { chord_info: String },
}

/// Why a positional token could not be transposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenIssue {
    /// No `:` between root and quality
    MissingSeparator,
    /// Root is not a recognized LilyPond pitch name
    UnknownRoot,
}

impl fmt::Display for TokenIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIssue::MissingSeparator => write!(f, "missing ':' separator"),
            TokenIssue::UnknownRoot => write!(f, "unknown root"),
        }
    }
}

/// A positional token that was replaced by an `Error in:` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenFormatWarning {
    /// Zero-based position of the token in the chord-info string
    pub index: usize,
    pub token: String,
    pub issue: TokenIssue,
}

impl fmt::Display for TokenFormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token {} '{}': {}", self.index, self.token, self.issue)
    }
}
