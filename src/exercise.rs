//! # Exercise Chord Repair
//!
//! Regenerates the chord info of exercise items from the riffs they reference.
//!
//! Each exercise item plays one riff at a given pitch. Its `chord_info` is derived
//! data: the riff's chords transposed to the item's pitch and held for the riff's
//! number of bars. [`fix_exercise_chords()`] rebuilds that data for every item:
//!
//! 1. The item's `number_of_bars` is synchronized with its riff
//! 2. The riff's `chord_info` (positional) is transposed to the item's pitch;
//!    if the riff has none, its Western `chord` is used instead
//! 3. Riffs with neither are reported and the item is left untouched
//!
//! ## Document Format
//! Exercises are read from and written to YAML:
//! ```yaml
//! name: Major 9 arpeggios
//! items:
//!   - order_number: 0
//!     pitch: d
//!     number_of_bars: 1
//!     riff:
//!       name: Major 9 chord up down
//!       number_of_bars: 1
//!       chord: CM9
//!       chord_info: c1:maj9
//! ```

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ChordError;
use crate::transpose::transpose_chord_info;

/// A riff as far as chord handling is concerned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Riff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub number_of_bars: u32,
    /// Western chord symbol, e.g. `CM9`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    /// Positional chord info, e.g. `c1:maj9`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_info: Option<String>,
}

impl Riff {
    /// Chord text to transpose: `chord_info` if set, otherwise `chord`.
    /// Empty strings count as unset.
    pub fn chord_source(&self) -> Option<&str> {
        self.chord_info
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.chord.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseItem {
    pub order_number: u32,
    pub pitch: String,
    #[serde(default)]
    pub number_of_bars: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_info: Option<String>,
    pub riff: Riff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ExerciseItem>,
}

/// What [`fix_exercise_chords()`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    pub bars_corrected: usize,
    pub chords_regenerated: usize,
    /// Order numbers of items whose riff has no chords at all
    pub missing_chords: Vec<u32>,
}

/// Rebuild `number_of_bars` and `chord_info` of every item from its riff
///
/// # Example
/// ```
/// use chordshift::exercise::{fix_exercise_chords, Exercise};
///
/// let mut exercise: Exercise = serde_yaml::from_str(r#"
/// name: Two bar dominant
/// items:
///   - order_number: 0
///     pitch: ees
///     riff:
///       number_of_bars: 2
///       chord: C7
/// "#).unwrap();
///
/// let report = fix_exercise_chords(&mut exercise).unwrap();
/// assert_eq!(report.chords_regenerated, 1);
/// assert_eq!(exercise.items[0].number_of_bars, 2);
/// assert_eq!(exercise.items[0].chord_info.as_deref(), Some("ees1:7 ees1:7"));
/// ```
///
/// # Errors
/// Fails on the first item whose riff chord cannot be transposed. The exercise is
/// only modified when every item succeeds; on error it is left exactly as it was.
pub fn fix_exercise_chords(exercise: &mut Exercise) -> Result<FixReport, ChordError> {
    // All chords are computed before any item is touched
    let new_chords = exercise
        .items
        .iter()
        .map(regenerate_chord_info)
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = FixReport::default();

    for (item, new_chord_info) in exercise.items.iter_mut().zip(new_chords) {
        if item.riff.number_of_bars != item.number_of_bars {
            info!(
                item = item.order_number,
                number_of_bars = item.riff.number_of_bars,
                "Correcting number_of_bars for exercise item"
            );
            item.number_of_bars = item.riff.number_of_bars;
            report.bars_corrected += 1;
        }

        match new_chord_info {
            Some(chord_info) => {
                info!(
                    item = item.order_number,
                    current_chord_info = item.riff.chord_source(),
                    new_chord_info = chord_info.as_str(),
                    "Correcting chord for exercise item"
                );
                item.chord_info = Some(chord_info);
                report.chords_regenerated += 1;
            }
            None => {
                error!(
                    item = item.order_number,
                    riff_id = ?item.riff.id,
                    "No chord info found in riff"
                );
                report.missing_chords.push(item.order_number);
            }
        }
    }

    Ok(report)
}

/// Chord info for `item` from its riff, or `None` when the riff has no chords
fn regenerate_chord_info(item: &ExerciseItem) -> Result<Option<String>, ChordError> {
    let Some(source) = item.riff.chord_source() else {
        return Ok(None);
    };

    match transpose_chord_info(source, &item.pitch, Some(item.riff.number_of_bars)) {
        Ok(chord_info) => Ok(Some(chord_info)),
        Err(e) => {
            error!(
                item = item.order_number,
                current_chord_info = source,
                %e,
                "Cannot correct chord for exercise item"
            );
            Err(e)
        }
    }
}
