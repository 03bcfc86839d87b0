//! Transpose requests
//!
//! Transposes every chord variant of an exercise item to one pitch in a single call.
//! The riff is resolved by the caller; when one is given, its own chords take
//! precedence over the `chord_info` sent in the request.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChordError;
use crate::exercise::Riff;
use crate::pitch::PitchClass;
use crate::transpose::transpose_to;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransposeRequest {
    pub pitch: String,
    #[serde(default)]
    pub chord_info: Option<String>,
    #[serde(default)]
    pub chord_info_alternate: Option<String>,
    #[serde(default)]
    pub chord_info_backing_track: Option<String>,
    #[serde(default)]
    pub riff_id: Option<String>,
    #[serde(default)]
    pub exercise_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransposeResponse {
    pub pitch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_info_alternate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_info_backing_track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub riff_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_item_id: Option<String>,
}

/// Transpose all chord variants of `request` to its pitch
///
/// `chord_info` comes from the riff when it has chords (using the riff's bar count),
/// otherwise from the request. The alternate and backing-track variants always come
/// from the request.
///
/// # Errors
/// [`ChordError::InvalidPitchClass`] for an unknown pitch, and any error raised
/// while transposing one of the variants.
pub fn transpose_request(
    request: &TransposeRequest,
    riff: Option<&Riff>,
) -> Result<TransposeResponse, ChordError> {
    let pitch: PitchClass = request.pitch.parse()?;

    let chord_info = match riff.and_then(|r| r.chord_source().map(|source| (r, source))) {
        Some((riff, source)) => {
            debug!(riff_id = ?riff.id, source, "Using chords from riff");
            Some(transpose_to(source, pitch, Some(riff.number_of_bars))?.chord_info)
        }
        None => transpose_variant(request.chord_info.as_deref(), pitch)?,
    };

    Ok(TransposeResponse {
        pitch: pitch.to_string(),
        chord_info,
        chord_info_alternate: transpose_variant(request.chord_info_alternate.as_deref(), pitch)?,
        chord_info_backing_track: transpose_variant(
            request.chord_info_backing_track.as_deref(),
            pitch,
        )?,
        riff_id: request.riff_id.clone(),
        exercise_item_id: request.exercise_item_id.clone(),
    })
}

fn transpose_variant(
    chord_info: Option<&str>,
    pitch: PitchClass,
) -> Result<Option<String>, ChordError> {
    chord_info
        .map(|c| transpose_to(c, pitch, None).map(|t| t.chord_info))
        .transpose()
}
