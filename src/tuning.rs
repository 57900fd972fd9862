//! Tuning Catalog

use std::fmt::Display;

use log::trace;

use crate::pitch::NoteName;

/// Strings on the instrument
pub const STRING_COUNT: usize = 6;

const STANDARD_TUNINGS: &[(&str, [NoteName; STRING_COUNT])] = {
    use NoteName::*;
    &[
        ("standard",     [E, A, D, G, B, E]),
        ("new standard", [C, G, D, A, E, G]),
        ("low D",        [D, A, D, G, B, E]),
    ]
};

/// Open-string notes of a six-string instrument, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    name: String,
    open_strings: [NoteName; STRING_COUNT],
}

impl Tuning {
    /// Create a tuning from its open notes, ordered low string to high string.
    pub fn new(name: impl Into<String>, open_strings: [NoteName; STRING_COUNT]) -> Tuning {
        Tuning {
            name: name.into(),
            open_strings,
        }
    }

    /// The tuning's catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open notes, low string to high string.
    pub fn open_strings(&self) -> &[NoteName; STRING_COUNT] {
        &self.open_strings
    }

    /// Open notes in drawing order: highest string first.
    pub fn display_order(&self) -> impl Iterator<Item = NoteName> + '_ {
        self.open_strings.iter().rev().copied()
    }
}

impl Display for Tuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, immutable set of tunings. The first entry is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningCatalog {
    tunings: Vec<Tuning>,
}

impl TuningCatalog {
    /// The built-in catalog: standard, new standard and low D.
    pub fn standard() -> TuningCatalog {
        Self::new(
            STANDARD_TUNINGS
                .iter()
                .map(|(name, notes)| Tuning::new(*name, *notes))
                .collect(),
        )
    }

    /// Wrap an ordered list of tunings.
    ///
    /// Names are not checked for uniqueness here; [`FretboardBuilder::build`]
    /// rejects a catalog with duplicate names.
    ///
    /// [`FretboardBuilder::build`]: crate::FretboardBuilder::build
    pub fn new(tunings: Vec<Tuning>) -> TuningCatalog {
        for t in &tunings {
            trace!("loaded tuning `{}` {:?}", t.name, t.open_strings);
        }
        TuningCatalog { tunings }
    }

    /// Find a tuning by name.
    pub fn get(&self, name: &str) -> Option<&Tuning> {
        self.tunings.iter().find(|t| t.name == name)
    }

    /// The default tuning, if the catalog is non-empty.
    pub fn first(&self) -> Option<&Tuning> {
        self.tunings.first()
    }

    /// All tunings in catalog order.
    pub fn as_slice(&self) -> &[Tuning] {
        &self.tunings
    }

    /// Tuning names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.tunings.iter().map(Tuning::name).collect()
    }

    /// Iterate tunings in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tuning> {
        self.tunings.iter()
    }

    /// Number of tunings.
    pub fn len(&self) -> usize {
        self.tunings.len()
    }

    /// Whether the catalog holds no tunings.
    pub fn is_empty(&self) -> bool {
        self.tunings.is_empty()
    }
}

impl<'a> IntoIterator for &'a TuningCatalog {
    type Item = &'a Tuning;
    type IntoIter = std::slice::Iter<'a, Tuning>;

    fn into_iter(self) -> Self::IntoIter {
        self.tunings.iter()
    }
}
