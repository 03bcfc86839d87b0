//! # chordshift
//!
//! Chord-info transposition for improvisation exercises.
//!
//! Exercises play riffs in any of 15 pitches, and each riff carries its chords
//! either as a Western chord symbol (`Cm7`, `CM9`, `Bb7`) or as positional chord
//! info (`d2:m7 g:7 c1:maj7`). This crate moves those chords to a target pitch and
//! always answers in positional form.
//!
//! ## Modules
//! - `pitch` - Spelled pitches and the 15 target pitch classes
//! - `interval` - Intervals from C and root transposition
//! - `chord` - Western chord symbol parsing
//! - `positional` - Positional `root[duration]:quality` tokens
//! - `transpose` - Chord-info transposition entry points
//! - `exercise` - Regenerating exercise item chords from riffs
//! - `request` - Transposing all chord variants of a transpose request
//!
//! ## Example
//! ```rust
//! use chordshift::transpose_chord_info;
//!
//! assert_eq!(transpose_chord_info("Cm7", "ees", None)?, "ees1:m7");
//! assert_eq!(transpose_chord_info("C7", "d", Some(2))?, "d1:7 d1:7");
//! assert_eq!(transpose_chord_info("d2:m7 g:7 c1:maj7", "b", None)?, "cis2:m7 fis:7 b1:maj7");
//! # Ok::<(), chordshift::ChordError>(())
//! ```

pub mod chord;
pub mod error;
pub mod exercise;
pub mod interval;
pub mod pitch;
pub mod positional;
pub mod request;
pub mod transpose;

pub use error::*;
pub use exercise::{fix_exercise_chords, Exercise, ExerciseItem, FixReport, Riff};
pub use pitch::PitchClass;
pub use request::{transpose_request, TransposeRequest, TransposeResponse};
pub use transpose::{
    transpose_all_keys, transpose_chord_info, transpose_chord_info_detailed, transpose_to,
    ChordFormat, Transposition,
};
