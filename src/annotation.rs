//! Annotation
//!
//! Flags each fretboard note as root, scale tone and/or chord tone of the
//! current selection. The flags are independent of one another; the
//! rendering layer decides which one wins visually.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pitch::NoteName;

/// A fretboard note with its highlight flags
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedNote {
    /// The pitch class at this position.
    pub note: NoteName,
    /// Equal to the selected key.
    pub is_root: bool,
    /// Member of the selected scale.
    pub is_scale_tone: bool,
    /// Member of the derived chord.
    pub is_chord_tone: bool,
}

/// Selected key plus the notes derived from it, borrowed for one pass of
/// annotation.
#[derive(Debug, Copy, Clone, Default)]
pub struct Highlights<'a> {
    key: Option<NoteName>,
    scale_notes: Option<&'a [NoteName]>,
    chord_notes: Option<&'a [NoteName]>,
}

impl<'a> Highlights<'a> {
    /// Bundle the pieces of a selection that drive annotation.
    pub fn new(
        key: Option<NoteName>,
        scale_notes: Option<&'a [NoteName]>,
        chord_notes: Option<&'a [NoteName]>,
    ) -> Self {
        Highlights {
            key,
            scale_notes,
            chord_notes,
        }
    }

    /// Annotate a single note.
    pub fn annotate(&self, note: NoteName) -> AnnotatedNote {
        AnnotatedNote {
            note,
            is_root: self.key == Some(note),
            is_scale_tone: self.scale_notes.is_some_and(|s| s.contains(&note)),
            is_chord_tone: self.chord_notes.is_some_and(|c| c.contains(&note)),
        }
    }

    /// Annotate a run of notes, keeping order and duplicates.
    pub fn annotate_all(&self, notes: &[NoteName]) -> Vec<AnnotatedNote> {
        notes.iter().map(|&n| self.annotate(n)).collect()
    }
}
