//! # fretboard_notes
//!
//! Music-theory core for a fretboard viewer: scale notes, chord tones and
//! per-string note layouts over the 12-tone chromatic ring.
//!
//! ## Example
//! ```rust
//! use fretboard_notes::{Fretboard, NoteName};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Load the built-in scale and tuning catalogs
//!     let fretboard = Fretboard::builder()
//!         .octaves(3)
//!         .build()?;
//!
//!     // 2) Pick a key, scale and tuning
//!     let minor = fretboard.scale("minor").ok_or("no minor scale")?;
//!     let selection = fretboard
//!         .selection()
//!         .with_key(NoteName::A)
//!         .with_scale(minor);
//!
//!     // 3) Compute and hand off to the renderer
//!     let layout = fretboard.compute(&selection)?;
//!     println!("scale {:?}, chord {:?}", layout.scale_notes, layout.chord_notes);
//!     for string in &layout.strings {
//!         let roots = string.notes.iter().filter(|n| n.is_root).count();
//!         println!("{} string: {roots} roots", string.open);
//!     }
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde`: derives `Serialize`/`Deserialize` on the computed layout types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Note flags handed to the renderer.
pub use annotation::{AnnotatedNote, Highlights};

/// Triad extraction from a scale.
pub use chord::{chord_tones, ChordError, ChordPolicy, CHORD_DEGREES};

/// Fretboard layout and the `compute` entry point.
pub use fretboard::{
    string_sequence, Fretboard, FretboardBuilder, FretboardError, Layout, Selection,
    StringLayout, DEFAULT_OCTAVES,
};

/// Chromatic pitch classes.
pub use pitch::{NoteName, SEMITONES};

/// Scale definitions and catalog.
pub use scale::{Scale, ScaleCatalog, ScaleError};

/// Tuning definitions and catalog.
pub use tuning::{Tuning, TuningCatalog, STRING_COUNT};

/// Root / scale / chord annotation module.
pub mod annotation;

/// Chord extraction module.
pub mod chord;

/// Fretboard layout module.
pub mod fretboard;

/// Pitch class ring module.
pub mod pitch;

/// Scale catalog module.
pub mod scale;

/// Tuning catalog module.
pub mod tuning;
