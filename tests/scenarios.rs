//! End-to-end spelling scenarios through the public API

use scale_spelling::tables::formulas::{
    HARMONIC_MINOR_SCALE, MAJOR_SCALE, MELODIC_MINOR_SCALE, NATURAL_MINOR_SCALE, WHOLE_TONE,
};
use scale_spelling::*;

fn names(notes: &[NoteName]) -> Vec<String> {
    notes.iter().map(|note| note.to_string()).collect()
}

const SEVEN_NOTE_FAMILIES: [&[i32]; 4] = [
    &MAJOR_SCALE,
    &NATURAL_MINOR_SCALE,
    &HARMONIC_MINOR_SCALE,
    &MELODIC_MINOR_SCALE,
];

/// Every single-accidental root at octave 4
fn written_roots() -> Vec<String> {
    let mut roots = Vec::new();
    for letter in Letter::ALL {
        for accidental in ["", "#", "b"] {
            roots.push(format!("{}{}4", letter, accidental));
        }
    }
    roots
}

#[test]
fn test_g_harmonic_minor() {
    let scale = spell_scale([0, 2, 3, 5, 7, 8, 11], "G4").unwrap();
    assert_eq!(names(&scale), vec!["G4", "A4", "Bb4", "C5", "D5", "Eb5", "F#5", "G5"]);
}

#[test]
fn test_a_sharp_melodic_minor() {
    let scale = spell_scale([0, 2, 3, 5, 7, 9, 11], "A#4").unwrap();
    assert_eq!(names(&scale), vec!["A#4", "B#4", "C#5", "D#5", "E#5", "Fx5", "Gx5", "A#5"]);
}

#[test]
fn test_third_mode_of_e_flat_harmonic_minor() {
    let mode = spell_mode([0, 2, 3, 5, 7, 8, 11], "Eb4", 3).unwrap();
    assert_eq!(names(&mode), vec!["Gb4", "Ab4", "Bb4", "Cb5", "D5", "Eb5", "F5", "Gb5"]);
}

#[test]
fn test_fifth_above_b_flat() {
    assert_eq!(names(&spell_interval([0, 7], "Bb4").unwrap()), vec!["Bb4", "F5"]);
}

#[test]
fn test_a_major_triad() {
    let chord = spell_chord([0, 4, 7], "A4", &[1, 3, 5]).unwrap();
    assert_eq!(names(&chord), vec!["A4", "C#5", "E5"]);
}

#[test]
fn test_illegal_roots_rejected() {
    assert!(matches!(
        normalize_root(ScaleFamily::Major, "Cx4"),
        Err(SpellingError::InvalidRoot { .. })
    ));
    assert!(matches!(
        normalize_root(ScaleFamily::NaturalMinor, "Db4"),
        Err(SpellingError::InvalidRoot { .. })
    ));
    assert_eq!(normalize_root(ScaleFamily::Major, "G#").unwrap().to_string(), "Ab");
}

#[test]
fn test_seven_note_scales_rotate_letters_once() {
    for formula in SEVEN_NOTE_FAMILIES {
        let family = ScaleFamily::infer(formula);
        for root in written_roots() {
            let fixed = match normalize_root(family, &root) {
                Ok(fixed) => fixed,
                Err(_) => continue,
            };
            let scale = spell_scale(formula, &root)
                .unwrap_or_else(|err| panic!("{} {}: {}", family, root, err));
            assert_eq!(scale.len(), 8, "{} {}", family, root);

            let letters: Vec<Letter> = scale.iter().map(|note| note.letter()).collect();
            let cycle = spelling::letter_cycle(fixed.letter);
            assert_eq!(&letters[..7], &cycle[..], "{} {}", family, root);
            assert_eq!(scale[7].spelling, scale[0].spelling, "{} {}", family, root);
            assert_eq!(scale[7].octave, scale[0].octave + 1, "{} {}", family, root);
        }
    }
}

#[test]
fn test_spelled_notes_sound_at_formula_offsets() {
    for formula in SEVEN_NOTE_FAMILIES {
        let family = ScaleFamily::infer(formula);
        for root in written_roots() {
            if normalize_root(family, &root).is_err() {
                continue;
            }
            let start = tables::lookup_slot(&root).unwrap().value();
            let scale = spell_scale(formula, &root).unwrap();
            for (note, offset) in scale.iter().zip(formula) {
                assert_eq!(note.slot().unwrap().value(), start + offset, "{} {} {}", family, root, note);
            }
        }
    }
}

#[test]
fn test_whole_tone_scales_on_every_root() {
    for root in written_roots() {
        let start = tables::lookup_slot(&root).unwrap().value();
        let absolute = spell_scale(WHOLE_TONE, &root).unwrap_or_else(|err| panic!("{}: {}", root, err));
        let relative = spell_scale2(WHOLE_TONE, &root).unwrap_or_else(|err| panic!("{}: {}", root, err));

        for scale in [&absolute, &relative] {
            assert_eq!(scale.len(), 7, "{}", root);
            for (note, offset) in scale.iter().zip(WHOLE_TONE.iter().chain([&12])) {
                assert_eq!(note.slot().unwrap().value(), start + offset, "{} {}", root, note);
                assert!(!note.accidental().is_double(), "{} {}", root, note);
            }
        }
        assert!(
            relative.iter().all(|note| !note.spelling.is_white_key_accidental()),
            "{}: {}",
            root,
            names(&relative).join(" ")
        );
    }
}

#[test]
fn test_builders_reject_notes_past_the_table() {
    assert!(matches!(
        spell_chord([0, 4, 7], "G9", &[1, 3, 5]),
        Err(SpellingError::PitchOutOfRange(_))
    ));
    assert!(matches!(spell_scale2(MAJOR_SCALE, "G9"), Err(SpellingError::PitchOutOfRange(_))));
    assert!(matches!(spell_scale2(MAJOR_SCALE, "C42"), Err(SpellingError::PitchOutOfRange(_))));
    assert!(matches!(
        spell_scale(MAJOR_SCALE, "C200000000"),
        Err(SpellingError::PitchOutOfRange(_))
    ));
    assert!(matches!(
        spell_diatonic_chord(&[1, 9], MAJOR_SCALE, "C_1"),
        Err(SpellingError::PitchOutOfRange(_))
    ));
}

#[test]
fn test_low_modes_return_parent_scale() {
    let parent = spell_scale(MAJOR_SCALE, "D4").unwrap();
    assert_eq!(spell_mode(MAJOR_SCALE, "D4", 0).unwrap(), parent);
    assert_eq!(spell_mode(MAJOR_SCALE, "D4", 1).unwrap(), parent);
    assert_ne!(spell_mode(MAJOR_SCALE, "D4", 2).unwrap(), parent);
}

#[test]
fn test_up_pattern_is_identity() {
    let values = [0, 3, 5, 7, 10, 12];
    assert_eq!(Pattern::Up.apply(&values), values.to_vec());
    assert_eq!(
        spell_pattern("0,3,5,7,10", "A4", Pattern::Up).unwrap(),
        spell_scale("0,3,5,7,10", "A4").unwrap()
    );
}

#[test]
fn test_string_and_array_formulas_agree() {
    assert_eq!(
        spell_scale("0, 2, 4, 5, 7, 9, 11", "E4").unwrap(),
        spell_scale(vec![0, 2, 4, 5, 7, 9, 11], "E4").unwrap()
    );
    assert!(matches!(
        spell_scale("0,2,x", "E4"),
        Err(SpellingError::InvalidFormula(_))
    ));
}

#[test]
fn test_second_scale_builder_octave_lag_for_gapped_families() {
    let absolute = spell_scale([0, 3, 5, 7, 10], "A4").unwrap();
    let relative = spell_scale2([0, 3, 5, 7, 10], "A4").unwrap();
    assert_eq!(names(&absolute), vec!["A4", "C5", "D5", "E5", "G5", "A5"]);
    assert_eq!(names(&relative), vec!["A4", "C4", "D5", "E5", "G5", "A5"]);
}

#[test]
fn test_interval_tie_breaks() {
    let mut weighted = WeightedTieBreak::new(3);
    let seen: Vec<String> = (0..40)
        .map(|_| spell_interval_with([0, 6], "C4", &mut weighted).unwrap()[1].to_string())
        .collect();
    assert!(seen.iter().all(|name| name == "F#4" || name == "Gb4"));
    assert!(seen.iter().any(|name| name == "F#4"));
    assert!(seen.iter().any(|name| name == "Gb4"));

    let mut strategy = TieBreakConfig::Alternate.build();
    let minor_third = spell_interval_with([0, 3], "A4", &mut strategy).unwrap();
    assert_eq!(names(&minor_third), vec!["A4", "B#4"]);
}

#[test]
fn test_transpose_and_enharmonics() {
    let shifted = transpose_sequence(&["E4", "G#4", "B4"], 1).unwrap();
    assert_eq!(names(&shifted), vec!["F4", "A4", "C5"]);

    let note: NoteName = "Cb4".parse().unwrap();
    assert_eq!(enharmonic(note).to_string(), "B3");
    let note: NoteName = "G#4".parse().unwrap();
    assert_eq!(flat_enharmonic(note).to_string(), "Ab4");
}

#[test]
fn test_four_note_progression() {
    let degrees = parse_roman_numerals("II-V-I", ChordVoicing::FourNote).unwrap();
    let chords = spell_chord_progression(&degrees, MAJOR_SCALE, "F4").unwrap();
    assert_eq!(names(&chords[0]), vec!["G3", "G4", "Bb4", "D5"]);
    assert_eq!(names(&chords[1]), vec!["C4", "G4", "C5", "E5"]);
    assert_eq!(names(&chords[2]), vec!["F3", "A4", "C5", "F5"]);
}

#[test]
fn test_note_names_serialize_as_strings() {
    let scale = spell_scale(MAJOR_SCALE, "Bb3").unwrap();
    let json = serde_json::to_string(&scale[..3]).unwrap();
    assert_eq!(json, r#"["Bb3","C4","D4"]"#);

    let parsed: Vec<NoteName> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, scale[..3].to_vec());

    let input: FormulaInput = serde_json::from_str("\"0,4,7\"").unwrap();
    assert_eq!(input.into_formula().unwrap().offsets(), &[0, 4, 7]);
}
