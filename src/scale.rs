//! Scale Catalog
//!
//! Named semitone step patterns and the note sequences they produce from a root.

use std::fmt::Display;

use log::{error, trace};
use thiserror::Error;

use crate::pitch::{NoteName, SEMITONES};

/// (name, steps) for every scale in the built-in catalog, in display order
const STANDARD_SCALES: &[(&str, &[u8])] = &[
    ("chromatic",        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ("major",            &[2, 2, 1, 2, 2, 2, 1]),
    ("minor",            &[2, 1, 2, 2, 1, 2, 2]),
    ("major pentatonic", &[2, 2, 3, 2, 3]),
    ("minor pentatonic", &[3, 2, 2, 3, 2]),
    ("root notes only",  &[12]),
];

/// Errors raised while loading scale definitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// A scale's steps do not partition the octave, or its name is taken.
    #[error("invalid scale definition `{name}`: {msg}")]
    InvalidScaleDefinition {
        /// Name of the rejected scale.
        name: String,
        /// What is wrong with it.
        msg: String,
    },
}

/// A named pattern of semitone steps that together span one octave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: String,
    intervals: Vec<u8>,
}

impl Scale {
    /// Define a scale, checking that every step is positive and that the
    /// steps sum to exactly twelve semitones.
    pub fn new(name: impl Into<String>, intervals: &[u8]) -> Result<Scale, ScaleError> {
        let name = name.into();
        let joined = || {
            intervals
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        if intervals.contains(&0) {
            return Err(ScaleError::InvalidScaleDefinition {
                msg: format!("intervals {} contain a zero step", joined()),
                name,
            });
        }
        let sum: usize = intervals.iter().map(|&i| i as usize).sum();
        if sum != SEMITONES {
            return Err(ScaleError::InvalidScaleDefinition {
                msg: format!("intervals {} sum to {sum}, not {SEMITONES}", joined()),
                name,
            });
        }

        Ok(Scale {
            name,
            intervals: intervals.to_vec(),
        })
    }

    /// The scale's catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semitone steps between consecutive degrees, wrapping back to the root.
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Number of degrees, i.e. notes produced per root.
    pub fn degrees(&self) -> usize {
        self.intervals.len()
    }

    /// Ordered notes of this scale built on `root`.
    ///
    /// Each degree is the root advanced by the running total of the steps
    /// before it, so the first note is always `root`.
    pub fn notes_of(&self, root: NoteName) -> Vec<NoteName> {
        self.intervals
            .iter()
            .scan(0i32, |total, &step| {
                let note = root.offset(*total);
                *total += step as i32;
                Some(note)
            })
            .collect()
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, immutable set of uniquely named scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleCatalog {
    scales: Vec<Scale>,
}

impl ScaleCatalog {
    /// The built-in catalog: chromatic, major, minor, both pentatonics and
    /// root notes only.
    pub fn standard() -> Result<ScaleCatalog, ScaleError> {
        Self::from_definitions(STANDARD_SCALES.iter().copied())
    }

    /// Build a catalog from `(name, steps)` pairs, rejecting the whole
    /// catalog on the first invalid or duplicate entry.
    pub fn from_definitions<'a, I>(definitions: I) -> Result<ScaleCatalog, ScaleError>
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let mut scales: Vec<Scale> = Vec::new();
        for (name, intervals) in definitions {
            if scales.iter().any(|s| s.name == name) {
                error!("rejecting scale catalog: duplicate scale `{name}`");
                return Err(ScaleError::InvalidScaleDefinition {
                    name: name.to_string(),
                    msg: "name already defined".into(),
                });
            }
            let scale = Scale::new(name, intervals).inspect_err(|e| {
                error!("rejecting scale catalog: {e}");
            })?;
            trace!("loaded scale `{}` ({} degrees)", scale.name, scale.degrees());
            scales.push(scale);
        }
        Ok(ScaleCatalog { scales })
    }

    /// Find a scale by name.
    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.name == name)
    }

    /// Scale names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.scales.iter().map(Scale::name).collect()
    }

    /// Iterate scales in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scale> {
        self.scales.iter()
    }

    /// Number of scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether the catalog holds no scales.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScaleCatalog {
    type Item = &'a Scale;
    type IntoIter = std::slice::Iter<'a, Scale>;

    fn into_iter(self) -> Self::IntoIter {
        self.scales.iter()
    }
}
