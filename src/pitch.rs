//! # Pitch Model
//!
//! Spelled pitches on the 12-tone chromatic circle.
//!
//! ## Key Types
//! - [`NoteName`] - Letter name (A-G) with its diatonic step and natural semitone
//! - [`Accidental`] - Flat, natural or sharp
//! - [`Pitch`] - A spelled root (letter + accidental), e.g. `cis`, `bes`
//! - [`PitchClass`] - The 15 spellings accepted as a transposition target
//!
//! ## Spelling
//! Pitches render in LilyPond spelling: sharps append `is`, flats append `es`
//! (`C#` → `cis`, `Bb` → `bes`, `Eb` → `ees`). Three semitones keep two spellings
//! (`dis`/`ees`, `gis`/`aes`, `ais`/`bes`); which one comes out of a transposition
//! is decided by the interval, see `interval`. Every other semitone has exactly one
//! spelling, so `des` is always written `cis` and `ges` always `fis`.
//!
//! ## Semitone Table
//! ```text
//! 0=c  1=cis  2=d  3=dis/ees  4=e  5=f  6=fis  7=g  8=gis/aes  9=a  10=ais/bes  11=b
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;

/// Note letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Diatonic position counted from C (C=0 .. B=6)
    pub fn steps(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 1,
            NoteName::E => 2,
            NoteName::F => 3,
            NoteName::G => 4,
            NoteName::A => 5,
            NoteName::B => 6,
        }
    }

    /// Letter name `steps` diatonic positions above C, wrapping at the octave
    pub fn from_steps(steps: u8) -> NoteName {
        Self::ALL[(steps % 7) as usize]
    }

    /// Semitone offset of the natural note from C
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// Letter name from either case (`'c'` or `'C'`)
    pub fn from_char(c: char) -> Option<NoteName> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn lowercase_char(self) -> char {
        match self {
            NoteName::C => 'c',
            NoteName::D => 'd',
            NoteName::E => 'e',
            NoteName::F => 'f',
            NoteName::G => 'g',
            NoteName::A => 'a',
            NoteName::B => 'b',
        }
    }
}

/// Accidental attached to a letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    pub fn offset(self) -> i8 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    /// Single accidental for a semitone offset; double accidentals have none
    pub fn from_offset(offset: i8) -> Option<Accidental> {
        match offset {
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            _ => None,
        }
    }

    fn lilypond_suffix(self) -> &'static str {
        match self {
            Accidental::Flat => "es",
            Accidental::Natural => "",
            Accidental::Sharp => "is",
        }
    }
}

/// A spelled pitch: letter name plus accidental, without octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Pitch {
    pub const fn new(name: NoteName, accidental: Accidental) -> Self {
        Self { name, accidental }
    }

    pub const fn natural(name: NoteName) -> Self {
        Self::new(name, Accidental::Natural)
    }

    /// Position on the chromatic circle (C=0 .. B=11)
    pub fn semitone(self) -> u8 {
        (self.name.semitone() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Fixed spelling for a semitone, used when interval spelling would need a
    /// double accidental
    pub fn from_semitone(semitone: u8) -> Pitch {
        use Accidental::*;
        use NoteName::*;
        let (name, accidental) = match semitone % 12 {
            0 => (C, Natural),
            1 => (C, Sharp),
            2 => (D, Natural),
            3 => (E, Flat),
            4 => (E, Natural),
            5 => (F, Natural),
            6 => (F, Sharp),
            7 => (G, Natural),
            8 => (G, Sharp),
            9 => (A, Natural),
            10 => (B, Flat),
            _ => (B, Natural),
        };
        Pitch::new(name, accidental)
    }

    /// Respell into one of the [`PitchClass`] spellings: E# → F, B# → C, Fb → E,
    /// Cb → B, Db → C#, Gb → F#
    pub fn canonical(self) -> Pitch {
        match (self.name, self.accidental) {
            (NoteName::E, Accidental::Sharp) => Pitch::natural(NoteName::F),
            (NoteName::B, Accidental::Sharp) => Pitch::natural(NoteName::C),
            (NoteName::F, Accidental::Flat) => Pitch::natural(NoteName::E),
            (NoteName::C, Accidental::Flat) => Pitch::natural(NoteName::B),
            (NoteName::D, Accidental::Flat) => Pitch::new(NoteName::C, Accidental::Sharp),
            (NoteName::G, Accidental::Flat) => Pitch::new(NoteName::F, Accidental::Sharp),
            _ => self,
        }
    }

    /// The pitch class with exactly this spelling, if any
    pub fn pitch_class(self) -> Option<PitchClass> {
        PitchClass::ALL.iter().copied().find(|pc| pc.pitch() == self)
    }

    /// Parse a Western root: an uppercase letter optionally followed by `#` or `b`
    pub fn parse_western(s: &str) -> Option<Pitch> {
        let mut chars = s.chars();
        let letter = chars.next().filter(|c| c.is_ascii_uppercase())?;
        let name = NoteName::from_char(letter)?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('#') => Accidental::Sharp,
            Some('b') => Accidental::Flat,
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Pitch::new(name, accidental))
    }

    /// Parse a LilyPond pitch name: `c`, `cis`, `ees`, `bes`, and the short
    /// flat forms `es` and `as`
    pub fn parse_lilypond(s: &str) -> Option<Pitch> {
        let mut chars = s.chars();
        let letter = chars.next().filter(|c| c.is_ascii_lowercase())?;
        let name = NoteName::from_char(letter)?;
        let accidental = match chars.as_str() {
            "" => Accidental::Natural,
            "is" => Accidental::Sharp,
            "es" => Accidental::Flat,
            "s" if matches!(name, NoteName::A | NoteName::E) => Accidental::Flat,
            _ => return None,
        };
        Some(Pitch::new(name, accidental))
    }

    /// LilyPond spelling (`cis`, `bes`, `e`)
    pub fn lilypond(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.lowercase_char(), self.accidental.lilypond_suffix())
    }
}

/// Target pitch for a transposition
///
/// Exactly the 15 spellings exercises can be rendered in. `dis`/`ees`, `gis`/`aes`
/// and `ais`/`bes` share a semitone but keep distinct spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    Cis,
    D,
    Dis,
    Ees,
    E,
    F,
    Fis,
    G,
    Gis,
    Aes,
    A,
    Ais,
    Bes,
    B,
}

impl PitchClass {
    /// All recognized pitch classes in rendering order
    pub const ALL: [PitchClass; 15] = [
        PitchClass::C,
        PitchClass::Cis,
        PitchClass::D,
        PitchClass::Dis,
        PitchClass::Ees,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fis,
        PitchClass::G,
        PitchClass::Gis,
        PitchClass::Aes,
        PitchClass::A,
        PitchClass::Ais,
        PitchClass::Bes,
        PitchClass::B,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "c",
            PitchClass::Cis => "cis",
            PitchClass::D => "d",
            PitchClass::Dis => "dis",
            PitchClass::Ees => "ees",
            PitchClass::E => "e",
            PitchClass::F => "f",
            PitchClass::Fis => "fis",
            PitchClass::G => "g",
            PitchClass::Gis => "gis",
            PitchClass::Aes => "aes",
            PitchClass::A => "a",
            PitchClass::Ais => "ais",
            PitchClass::Bes => "bes",
            PitchClass::B => "b",
        }
    }

    /// The spelled pitch this class names
    pub fn pitch(self) -> Pitch {
        use Accidental::*;
        use NoteName::*;
        let (name, accidental) = match self {
            PitchClass::C => (C, Natural),
            PitchClass::Cis => (C, Sharp),
            PitchClass::D => (D, Natural),
            PitchClass::Dis => (D, Sharp),
            PitchClass::Ees => (E, Flat),
            PitchClass::E => (E, Natural),
            PitchClass::F => (F, Natural),
            PitchClass::Fis => (F, Sharp),
            PitchClass::G => (G, Natural),
            PitchClass::Gis => (G, Sharp),
            PitchClass::Aes => (A, Flat),
            PitchClass::A => (A, Natural),
            PitchClass::Ais => (A, Sharp),
            PitchClass::Bes => (B, Flat),
            PitchClass::B => (B, Natural),
        };
        Pitch::new(name, accidental)
    }

    pub fn semitone(self) -> u8 {
        self.pitch().semitone()
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::ALL
            .iter()
            .copied()
            .find(|pc| pc.as_str() == s)
            .ok_or_else(|| ChordError::InvalidPitchClass(s.to_string()))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_round_trips_through_str() {
        for pc in PitchClass::ALL {
            assert_eq!(pc.as_str().parse::<PitchClass>().unwrap(), pc);
            assert_eq!(pc.pitch().lilypond(), pc.as_str());
        }
    }

    #[test]
    fn test_invalid_pitch_class() {
        assert_eq!(
            "h".parse::<PitchClass>(),
            Err(ChordError::InvalidPitchClass("h".to_string()))
        );
        // Only lowercase spellings are recognized
        assert!("D".parse::<PitchClass>().is_err());
        assert!("des".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_pitch_class_semitones() {
        let semitones: Vec<u8> = PitchClass::ALL.iter().map(|pc| pc.semitone()).collect();
        assert_eq!(semitones, vec![0, 1, 2, 3, 3, 4, 5, 6, 7, 8, 8, 9, 10, 10, 11]);
    }

    #[test]
    fn test_parse_western_root() {
        assert_eq!(Pitch::parse_western("C"), Some(Pitch::natural(NoteName::C)));
        assert_eq!(
            Pitch::parse_western("C#"),
            Some(Pitch::new(NoteName::C, Accidental::Sharp))
        );
        assert_eq!(
            Pitch::parse_western("Bb"),
            Some(Pitch::new(NoteName::B, Accidental::Flat))
        );
        assert_eq!(Pitch::parse_western("c"), None);
        assert_eq!(Pitch::parse_western("H"), None);
        assert_eq!(Pitch::parse_western("Cm"), None);
    }

    #[test]
    fn test_parse_lilypond_root() {
        assert_eq!(
            Pitch::parse_lilypond("fis"),
            Some(Pitch::new(NoteName::F, Accidental::Sharp))
        );
        assert_eq!(
            Pitch::parse_lilypond("ees"),
            Some(Pitch::new(NoteName::E, Accidental::Flat))
        );
        assert_eq!(
            Pitch::parse_lilypond("es"),
            Some(Pitch::new(NoteName::E, Accidental::Flat))
        );
        assert_eq!(
            Pitch::parse_lilypond("as"),
            Some(Pitch::new(NoteName::A, Accidental::Flat))
        );
        assert_eq!(Pitch::parse_lilypond("cs"), None);
        assert_eq!(Pitch::parse_lilypond("x"), None);
        assert_eq!(Pitch::parse_lilypond("C"), None);
    }

    #[test]
    fn test_canonical_respelling() {
        let e_sharp = Pitch::new(NoteName::E, Accidental::Sharp);
        let b_sharp = Pitch::new(NoteName::B, Accidental::Sharp);
        let c_flat = Pitch::new(NoteName::C, Accidental::Flat);
        let d_flat = Pitch::new(NoteName::D, Accidental::Flat);
        assert_eq!(e_sharp.canonical().lilypond(), "f");
        assert_eq!(b_sharp.canonical().lilypond(), "c");
        assert_eq!(c_flat.canonical().lilypond(), "b");
        assert_eq!(d_flat.canonical().lilypond(), "cis");
        let g_flat = Pitch::new(NoteName::G, Accidental::Flat);
        assert_eq!(g_flat.canonical().lilypond(), "fis");
        // Both spellings of a shared semitone are pitch classes
        let a_flat = Pitch::new(NoteName::A, Accidental::Flat);
        assert_eq!(a_flat.canonical().lilypond(), "aes");
    }

    #[test]
    fn test_canonical_is_always_a_pitch_class() {
        for name in NoteName::ALL {
            for accidental in [Accidental::Flat, Accidental::Natural, Accidental::Sharp] {
                let pitch = Pitch::new(name, accidental);
                let canonical = pitch.canonical();
                assert!(canonical.pitch_class().is_some(), "{} -> {}", pitch, canonical);
                assert_eq!(canonical.semitone(), pitch.semitone());
            }
        }
    }

    #[test]
    fn test_from_semitone_matches_semitone() {
        for semitone in 0..12 {
            assert_eq!(Pitch::from_semitone(semitone).semitone(), semitone);
        }
    }
}
