//! Integration tests for the pitch ring, scale catalog and chord extraction.

use fretboard_notes::{
    chord_tones, ChordError, ChordPolicy, NoteName, Scale, ScaleCatalog, ScaleError, SEMITONES,
};

fn names(notes: &[NoteName]) -> Vec<&'static str> {
    notes.iter().map(|n| n.name()).collect()
}

#[test]
fn test_offset_wraps_around_the_ring() {
    for note in NoteName::ALL {
        assert_eq!(note.offset(0), note);
        assert_eq!(note.offset(12), note);
        assert_eq!(note.offset(-12), note);
        assert_eq!(note.offset(25), note.offset(1));
        assert_eq!(note.offset(-1).offset(1), note);
    }
    assert_eq!(NoteName::B.offset(1), NoteName::C);
    assert_eq!(NoteName::C.offset(-1), NoteName::B);
    assert_eq!(NoteName::A.offset(3), NoteName::C);
}

#[test]
fn test_offset_extreme_steps() {
    assert_eq!(NoteName::C.offset(i32::MAX), NoteName::G);
    assert_eq!(NoteName::C.offset(i32::MIN), NoteName::E);
    assert_eq!(NoteName::B.offset(i32::MAX), NoteName::Fs);
    assert_eq!(NoteName::B.offset(i32::MIN), NoteName::Ds);
    for note in NoteName::ALL {
        let expected = (note.index() as i64 + i32::MAX as i64).rem_euclid(12) as usize;
        assert_eq!(note.offset(i32::MAX), NoteName::from_idx(expected));
        let expected = (note.index() as i64 + i32::MIN as i64).rem_euclid(12) as usize;
        assert_eq!(note.offset(i32::MIN), NoteName::from_idx(expected));
    }
}

#[test]
fn test_index_and_name_are_exact() {
    for (i, note) in NoteName::ALL.iter().enumerate() {
        assert_eq!(note.index(), i);
        assert_eq!(NoteName::from_idx(i), *note);
        assert_eq!(NoteName::from_name(note.name()), Some(*note));
        assert_eq!(note.to_string(), note.name());
    }
    assert_eq!(NoteName::from_name("F#"), Some(NoteName::Fs));
    assert_eq!(NoteName::from_name("Gb"), None);
    assert_eq!(NoteName::from_name("H"), None);
}

#[test]
fn test_standard_catalog_order_and_sums() {
    let catalog = ScaleCatalog::standard().unwrap();
    assert_eq!(
        catalog.names(),
        vec![
            "chromatic",
            "major",
            "minor",
            "major pentatonic",
            "minor pentatonic",
            "root notes only",
        ]
    );
    for scale in &catalog {
        let sum: usize = scale.intervals().iter().map(|&i| i as usize).sum();
        assert_eq!(sum, SEMITONES, "scale {scale}");
    }
    assert_eq!(catalog.get("major").unwrap().intervals(), &[2, 2, 1, 2, 2, 2, 1]);
    assert_eq!(catalog.get("minor pentatonic").unwrap().intervals(), &[3, 2, 2, 3, 2]);
    assert!(catalog.get("dorian").is_none());
}

#[test]
fn test_notes_of_starts_at_root_with_one_note_per_step() {
    let catalog = ScaleCatalog::standard().unwrap();
    for scale in &catalog {
        for root in NoteName::ALL {
            let notes = scale.notes_of(root);
            assert_eq!(notes.len(), scale.degrees());
            assert_eq!(notes[0], root);
        }
    }
}

#[test]
fn test_known_scales() {
    let catalog = ScaleCatalog::standard().unwrap();

    let c_major = catalog.get("major").unwrap().notes_of(NoteName::C);
    assert_eq!(names(&c_major), ["C", "D", "E", "F", "G", "A", "B"]);

    let a_minor = catalog.get("minor").unwrap().notes_of(NoteName::A);
    assert_eq!(names(&a_minor), ["A", "B", "C", "D", "E", "F", "G"]);

    let e_minor_penta = catalog.get("minor pentatonic").unwrap().notes_of(NoteName::E);
    assert_eq!(names(&e_minor_penta), ["E", "G", "A", "B", "D"]);

    let g_major_penta = catalog.get("major pentatonic").unwrap().notes_of(NoteName::G);
    assert_eq!(names(&g_major_penta), ["G", "A", "B", "D", "E"]);

    let fs_chromatic = catalog.get("chromatic").unwrap().notes_of(NoteName::Fs);
    assert_eq!(fs_chromatic.len(), 12);
    assert_eq!(fs_chromatic[11], NoteName::F);

    let roots = catalog.get("root notes only").unwrap().notes_of(NoteName::Ds);
    assert_eq!(roots, vec![NoteName::Ds]);
}

#[test]
fn test_invalid_definitions_are_rejected() {
    let err = Scale::new("broken", &[2, 2, 2]).unwrap_err();
    assert!(matches!(
        err,
        ScaleError::InvalidScaleDefinition { ref name, .. } if name == "broken"
    ));
    assert!(err.to_string().contains("2, 2, 2"));

    assert!(Scale::new("too long", &[2, 2, 1, 2, 2, 2, 2]).is_err());
    assert!(Scale::new("empty", &[]).is_err());
    assert!(Scale::new("zero step", &[0, 12]).is_err());

    let err = ScaleCatalog::from_definitions([
        ("major", &[2u8, 2, 1, 2, 2, 2, 1][..]),
        ("major", &[12u8][..]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("major"));

    let err = ScaleCatalog::from_definitions([
        ("whole tone", &[2u8, 2, 2, 2, 2, 2][..]),
        ("bad", &[5u8, 5][..]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("sum to 10"));
}

#[test]
fn test_chord_tones_pick_first_third_fifth() {
    let catalog = ScaleCatalog::standard().unwrap();

    let c_major = catalog.get("major").unwrap().notes_of(NoteName::C);
    let chord = chord_tones(&c_major, ChordPolicy::Strict).unwrap();
    assert_eq!(names(&chord), ["C", "E", "G"]);

    let a_minor = catalog.get("minor").unwrap().notes_of(NoteName::A);
    let chord = chord_tones(&a_minor, ChordPolicy::Omit).unwrap();
    assert_eq!(names(&chord), ["A", "C", "E"]);

    // five degrees is exactly enough
    let a_minor_penta = catalog.get("minor pentatonic").unwrap().notes_of(NoteName::A);
    let chord = chord_tones(&a_minor_penta, ChordPolicy::Strict).unwrap();
    assert_eq!(names(&chord), ["A", "D", "G"]);
}

#[test]
fn test_chord_tones_on_short_scales() {
    let roots = vec![NoteName::G];
    assert_eq!(chord_tones(&roots, ChordPolicy::Omit).unwrap(), vec![NoteName::G]);
    assert_eq!(
        chord_tones(&roots, ChordPolicy::Strict),
        Err(ChordError::InsufficientScaleDegrees {
            expected: 5,
            got: 1
        })
    );

    let four = [NoteName::C, NoteName::D, NoteName::E, NoteName::F];
    assert_eq!(
        chord_tones(&four, ChordPolicy::Omit).unwrap(),
        vec![NoteName::C, NoteName::E]
    );
    assert!(chord_tones(&[], ChordPolicy::Omit).unwrap().is_empty());
}
