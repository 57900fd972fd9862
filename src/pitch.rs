//! Pitch Class Ring
//!
//! The twelve equal-tempered note names, spelled with sharps, and circular
//! arithmetic over them.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pitch classes in one octave.
pub const SEMITONES: usize = 12;

/// Twelve chromatic pitch classes, in ring order starting at C
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoteName {
    /// C
    C,
    /// C sharp
    Cs,
    /// D
    D,
    /// D sharp
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp
    Fs,
    /// G
    G,
    /// G sharp
    Gs,
    /// A
    A,
    /// A sharp
    As,
    /// B
    B,
}

impl NoteName {
    /// Every pitch class in ring order, C first.
    pub const ALL: [NoteName; SEMITONES] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Pitch class at ring position `idx`, wrapping past B back to C.
    pub const fn from_idx(idx: usize) -> NoteName {
        Self::ALL[idx % SEMITONES]
    }

    /// Ring position in `0..12`, C = 0.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The note `steps` semitones clockwise around the ring.
    ///
    /// Negative steps walk counter-clockwise; any multiple of 12 is the identity.
    pub fn offset(self, steps: i32) -> NoteName {
        let ring = SEMITONES as i32;
        let idx = (self.index() as i32 + steps.rem_euclid(ring)) % ring;
        Self::from_idx(idx as usize)
    }

    /// Sharp-spelled name, e.g. `"F#"`.
    pub const fn name(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }

    /// Look up a pitch class by its sharp-spelled name.
    ///
    /// Returns `None` for anything outside the twelve canonical names,
    /// flats included.
    pub fn from_name(name: &str) -> Option<NoteName> {
        Self::ALL.iter().copied().find(|n| n.name() == name)
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
