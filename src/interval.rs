//! # Interval Model
//!
//! Named intervals measured up from C, and root transposition by interval.
//!
//! ## Purpose
//! A transposition target is given as a pitch class (`d`, `ees`, `gis`, ...). The
//! interval from C to that pitch is looked up in a static table and then added to
//! every chord root. Adding an interval moves the letter name by the interval's
//! diatonic steps and lets the accidental make up the semitone difference, so
//! spelling follows the interval: `b` up a major 2nd is `cis`, `d` up a minor 3rd
//! is `f`, `g` up a minor 3rd is `bes`.
//!
//! ## Interval Table
//! ```text
//! c   → P1 (0)    e   → M3 (4)    gis → A5 (8)    ais → A6 (10)
//! cis → A1 (1)    f   → P4 (5)    aes → m6 (8)    bes → m7 (10)
//! d   → M2 (2)    fis → A4 (6)    a   → M6 (9)    b   → M7 (11)
//! dis → A2 (3)    g   → P5 (7)
//! ees → m3 (3)
//! ```
//!
//! ## Enharmonic Canonicalization
//! The result is always one of the 15 [`PitchClass`] spellings. After letter
//! arithmetic it is respelled when it lands on a white key (`E#` → `f`, `B#` → `c`,
//! `Fb` → `e`, `Cb` → `b`) or on a flat that is not a pitch class (`Db` → `cis`,
//! `Gb` → `fis`). Results that would need a double accidental fall back to the fixed
//! spelling of their semitone (`c cis d ees e f fis g gis a bes b`).

use std::fmt;

use crate::pitch::{Accidental, NoteName, Pitch, PitchClass};

/// Interval between C and a target pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    PerfectUnison,
    AugmentedUnison,
    MajorSecond,
    AugmentedSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    AugmentedFifth,
    MinorSixth,
    MajorSixth,
    AugmentedSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    /// Size of the interval in semitones (0-11)
    pub fn semitones(self) -> u8 {
        match self {
            Interval::PerfectUnison => 0,
            Interval::AugmentedUnison => 1,
            Interval::MajorSecond => 2,
            Interval::AugmentedSecond | Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::AugmentedFourth => 6,
            Interval::PerfectFifth => 7,
            Interval::AugmentedFifth | Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::AugmentedSixth | Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
        }
    }

    /// Number of letter names the interval spans, minus one (unison = 0)
    pub fn steps(self) -> u8 {
        match self {
            Interval::PerfectUnison | Interval::AugmentedUnison => 0,
            Interval::MajorSecond | Interval::AugmentedSecond => 1,
            Interval::MinorThird | Interval::MajorThird => 2,
            Interval::PerfectFourth | Interval::AugmentedFourth => 3,
            Interval::PerfectFifth | Interval::AugmentedFifth => 4,
            Interval::MinorSixth | Interval::MajorSixth | Interval::AugmentedSixth => 5,
            Interval::MinorSeventh | Interval::MajorSeventh => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Interval::PerfectUnison => "Perfect Unison",
            Interval::AugmentedUnison => "Augmented Unison",
            Interval::MajorSecond => "Major 2nd",
            Interval::AugmentedSecond => "Augmented 2nd",
            Interval::MinorThird => "Minor 3rd",
            Interval::MajorThird => "Major 3rd",
            Interval::PerfectFourth => "Perfect 4th",
            Interval::AugmentedFourth => "Augmented 4th",
            Interval::PerfectFifth => "Perfect 5th",
            Interval::AugmentedFifth => "Augmented 5th",
            Interval::MinorSixth => "Minor 6th",
            Interval::MajorSixth => "Major 6th",
            Interval::AugmentedSixth => "Augmented 6th",
            Interval::MinorSeventh => "Minor 7th",
            Interval::MajorSeventh => "Major 7th",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interval from C up to `target`
pub fn interval_for_pitch(target: PitchClass) -> Interval {
    match target {
        PitchClass::C => Interval::PerfectUnison,
        PitchClass::Cis => Interval::AugmentedUnison,
        PitchClass::D => Interval::MajorSecond,
        PitchClass::Dis => Interval::AugmentedSecond,
        PitchClass::Ees => Interval::MinorThird,
        PitchClass::E => Interval::MajorThird,
        PitchClass::F => Interval::PerfectFourth,
        PitchClass::Fis => Interval::AugmentedFourth,
        PitchClass::G => Interval::PerfectFifth,
        PitchClass::Gis => Interval::AugmentedFifth,
        PitchClass::Aes => Interval::MinorSixth,
        PitchClass::A => Interval::MajorSixth,
        PitchClass::Ais => Interval::AugmentedSixth,
        PitchClass::Bes => Interval::MinorSeventh,
        PitchClass::B => Interval::MajorSeventh,
    }
}

/// Transpose a chord root up by `interval`
///
/// # Example
/// ```
/// use chordshift::interval::{transpose_root, Interval};
/// use chordshift::pitch::{NoteName, Pitch};
///
/// let b = Pitch::natural(NoteName::B);
/// assert_eq!(transpose_root(b, Interval::MajorSecond).lilypond(), "cis");
/// ```
pub fn transpose_root(root: Pitch, interval: Interval) -> Pitch {
    let name = NoteName::from_steps(root.name.steps() + interval.steps());
    let target = (root.semitone() + interval.semitones()) % 12;

    // Distance from the natural letter to the target, folded into -6..=5
    let offset = (target as i8 - name.semitone() as i8 + 6).rem_euclid(12) - 6;

    match Accidental::from_offset(offset) {
        Some(accidental) => Pitch::new(name, accidental).canonical(),
        None => Pitch::from_semitone(target),
    }
}
