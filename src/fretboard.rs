//! Fretboard Layout
//!
//! Per-string note sequences for a tuning, and the [`Fretboard`] entry point
//! that turns a [`Selection`] into scale notes, chord notes and annotated
//! strings.

use log::debug;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotatedNote, Highlights};
use crate::chord::{chord_tones, ChordError, ChordPolicy};
use crate::pitch::{NoteName, SEMITONES};
use crate::scale::{Scale, ScaleCatalog, ScaleError};
use crate::tuning::{Tuning, TuningCatalog};

/// Chromatic octaves laid out along each string by default
pub const DEFAULT_OCTAVES: usize = 3;

/// Errors returned while building or querying a [`Fretboard`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FretboardError {
    /// The scale catalog failed its load-time check.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Chord tones could not be extracted under the strict policy.
    #[error(transparent)]
    Chord(#[from] ChordError),

    /// The builder was given an unusable setting.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Notes along one string starting at its open note, `DEFAULT_OCTAVES`
/// chromatic octaves long.
pub fn string_sequence(open: NoteName) -> Vec<NoteName> {
    string_sequence_spanning(open, DEFAULT_OCTAVES)
}

/// The chromatic ring rotated to start at `open`, repeated `octaves` times.
pub(crate) fn string_sequence_spanning(open: NoteName, octaves: usize) -> Vec<NoteName> {
    NoteName::ALL
        .iter()
        .cycle()
        .skip(open.index())
        .take(SEMITONES.saturating_mul(octaves))
        .copied()
        .collect()
}

/// The collaborator's current choices. Key and scale stay unset until picked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Selected root, if any.
    pub key: Option<NoteName>,
    /// Selected scale, if any.
    pub scale: Option<&'a Scale>,
    /// Selected tuning.
    pub tuning: &'a Tuning,
}

impl<'a> Selection<'a> {
    /// A selection with only the tuning chosen.
    pub fn new(tuning: &'a Tuning) -> Self {
        Selection {
            key: None,
            scale: None,
            tuning,
        }
    }

    /// Replace the key.
    pub fn with_key(mut self, key: NoteName) -> Self {
        self.key = Some(key);
        self
    }

    /// Replace the scale.
    pub fn with_scale(mut self, scale: &'a Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Replace the tuning.
    pub fn with_tuning(mut self, tuning: &'a Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// Annotated notes for one string
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringLayout {
    /// The string's open note.
    pub open: NoteName,
    /// One entry per fret position, open string first.
    pub notes: Vec<AnnotatedNote>,
}

/// Everything the rendering layer needs for one selection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Scale notes, once both key and scale are selected.
    pub scale_notes: Option<Vec<NoteName>>,
    /// Chord tones (1st, 3rd, 5th degree), alongside `scale_notes`.
    pub chord_notes: Option<Vec<NoteName>>,
    /// Strings in drawing order, highest string first.
    pub strings: Vec<StringLayout>,
}

/// Builder for [`Fretboard`] to inject catalogs and tweak layout settings
pub struct FretboardBuilder {
    scales: Option<ScaleCatalog>,
    tunings: TuningCatalog,
    octaves: usize,
    chord_policy: ChordPolicy,
}

impl FretboardBuilder {
    /// Start with the built-in catalogs, three octaves per string and
    /// [`ChordPolicy::Omit`].
    pub fn new() -> Self {
        FretboardBuilder {
            scales: None,
            tunings: TuningCatalog::standard(),
            octaves: DEFAULT_OCTAVES,
            chord_policy: ChordPolicy::Omit,
        }
    }

    /// Use a custom scale catalog.
    pub fn scales(mut self, scales: ScaleCatalog) -> Self {
        self.scales = Some(scales);
        self
    }

    /// Use a custom tuning catalog. Its first entry becomes the default.
    pub fn tunings(mut self, tunings: TuningCatalog) -> Self {
        self.tunings = tunings;
        self
    }

    /// Set how many chromatic octaves each string spans.
    pub fn octaves(mut self, octaves: usize) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set how chord extraction treats scales with fewer than five degrees.
    pub fn chord_policy(mut self, policy: ChordPolicy) -> Self {
        self.chord_policy = policy;
        self
    }

    /// Finalize and create the [`Fretboard`].
    pub fn build(self) -> Result<Fretboard, FretboardError> {
        if self.octaves == 0 {
            return Err(FretboardError::Configuration("octaves cannot be zero".into()));
        }
        if SEMITONES.checked_mul(self.octaves).is_none() {
            return Err(FretboardError::Configuration(format!(
                "{} octaves overflow the string length",
                self.octaves
            )));
        }
        if self.tunings.is_empty() {
            return Err(FretboardError::Configuration(
                "tuning catalog cannot be empty".into(),
            ));
        }
        let names = self.tunings.names();
        if let Some((i, dup)) = names
            .iter()
            .enumerate()
            .find(|&(i, name)| names[..i].contains(name))
        {
            return Err(FretboardError::Configuration(format!(
                "duplicate tuning `{dup}` at position {i}"
            )));
        }

        let scales = match self.scales {
            Some(scales) => scales,
            None => ScaleCatalog::standard()?,
        };

        Ok(Fretboard {
            scales,
            tunings: self.tunings,
            octaves: self.octaves,
            chord_policy: self.chord_policy,
        })
    }
}

impl Default for FretboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable catalogs plus layout settings. Every query is a pure function
/// of its arguments, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Fretboard {
    scales: ScaleCatalog,
    tunings: TuningCatalog,
    octaves: usize,
    chord_policy: ChordPolicy,
}

impl Fretboard {
    /// Return a builder to customize catalogs and settings.
    pub fn builder() -> FretboardBuilder {
        FretboardBuilder::new()
    }

    /// Create a fretboard over the built-in catalogs.
    pub fn new() -> Result<Self, FretboardError> {
        FretboardBuilder::new().build()
    }

    /// The twelve selectable keys in ring order.
    pub fn list_keys(&self) -> [NoteName; SEMITONES] {
        NoteName::ALL
    }

    /// Selectable scale names in catalog order.
    pub fn list_scales(&self) -> Vec<&str> {
        self.scales.names()
    }

    /// Selectable tuning names in catalog order.
    pub fn list_tunings(&self) -> Vec<&str> {
        self.tunings.names()
    }

    /// The injected scale catalog.
    pub fn scale_catalog(&self) -> &ScaleCatalog {
        &self.scales
    }

    /// The injected tuning catalog.
    pub fn tuning_catalog(&self) -> &TuningCatalog {
        &self.tunings
    }

    /// Look up a scale by name.
    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Look up a tuning by name.
    pub fn tuning(&self, name: &str) -> Option<&Tuning> {
        self.tunings.get(name)
    }

    /// The tuning every fresh selection starts with.
    pub fn default_tuning(&self) -> &Tuning {
        // non-empty, checked in `FretboardBuilder::build`
        &self.tunings.as_slice()[0]
    }

    /// An empty selection: no key, no scale, default tuning.
    pub fn selection(&self) -> Selection<'_> {
        Selection::new(self.default_tuning())
    }

    /// Key C in the major scale on the default tuning, when the catalog has
    /// a scale named `"major"`.
    pub fn initial_selection(&self) -> Selection<'_> {
        let selection = self.selection().with_key(NoteName::C);
        match self.scale("major") {
            Some(major) => selection.with_scale(major),
            None => selection,
        }
    }

    /// Notes along one string starting at `open`, using the configured
    /// octave span.
    pub fn string_sequence(&self, open: NoteName) -> Vec<NoteName> {
        string_sequence_spanning(open, self.octaves)
    }

    /// Compute scale notes, chord notes and annotated strings for `selection`.
    ///
    /// Scale and chord notes are `None` until both key and scale are set.
    /// Fails only when the chord policy is [`ChordPolicy::Strict`] and the
    /// selected scale has fewer than five degrees.
    pub fn compute(&self, selection: &Selection<'_>) -> Result<Layout, FretboardError> {
        let scale_notes = match (selection.key, selection.scale) {
            (Some(key), Some(scale)) => Some(scale.notes_of(key)),
            _ => None,
        };
        let chord_notes = match &scale_notes {
            Some(notes) => Some(chord_tones(notes, self.chord_policy)?),
            None => None,
        };
        debug!("scale notes {scale_notes:?}, chord notes {chord_notes:?}");

        let highlights = Highlights::new(
            selection.key,
            scale_notes.as_deref(),
            chord_notes.as_deref(),
        );
        let strings = selection
            .tuning
            .display_order()
            .map(|open| StringLayout {
                open,
                notes: highlights.annotate_all(&self.string_sequence(open)),
            })
            .collect();

        Ok(Layout {
            scale_notes,
            chord_notes,
            strings,
        })
    }
}
