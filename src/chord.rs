//! Chord Extraction
//!
//! Triad tones (1st, 3rd and 5th degrees) picked out of a computed scale.

use log::warn;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pitch::NoteName;

/// 1-indexed scale degrees that make up the chord
pub const CHORD_DEGREES: [usize; 3] = [1, 3, 5];

/// Errors when extracting chord tones
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChordError {
    /// The scale has fewer degrees than the highest chord degree.
    #[error("chord needs a scale with at least {expected} degrees, got {got}")]
    InsufficientScaleDegrees {
        /// Highest chord degree requested (5).
        expected: usize,
        /// Number of notes in the scale supplied.
        got: usize,
    },
}

/// What to do when a scale is too short to supply every chord degree
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChordPolicy {
    /// Return only the degrees the scale has.
    #[default]
    Omit,
    /// Fail with [`ChordError::InsufficientScaleDegrees`].
    Strict,
}

/// Pick the 1st, 3rd and 5th notes of `scale_notes`, in that order.
pub fn chord_tones(
    scale_notes: &[NoteName],
    policy: ChordPolicy,
) -> Result<Vec<NoteName>, ChordError> {
    let highest = CHORD_DEGREES[CHORD_DEGREES.len() - 1];
    if scale_notes.len() < highest {
        match policy {
            ChordPolicy::Strict => {
                return Err(ChordError::InsufficientScaleDegrees {
                    expected: highest,
                    got: scale_notes.len(),
                });
            }
            ChordPolicy::Omit => {
                warn!(
                    "scale has {} degrees, omitting missing chord degrees",
                    scale_notes.len()
                );
            }
        }
    }

    Ok(CHORD_DEGREES
        .iter()
        .filter_map(|&degree| scale_notes.get(degree - 1).copied())
        .collect())
}
