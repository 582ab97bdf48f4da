//! Chord builders
//!
//! [`spell_chord`] spells arbitrary chord formulas by pairing each offset
//! with the scale degree whose letter it must carry. The diatonic variants
//! pick notes straight out of a spelled scale, extending it across three
//! octaves when a voicing reaches past the seventh degree.

use crate::error::{Result, SpellingError};
use crate::models::{FormulaInput, NoteName, ScaleFamily};
use crate::spelling::letter_cycle::LetterCycle;
use crate::spelling::octave::octave_offset_extended;
use crate::spelling::resolver::pick_spelling;
use crate::spelling::root::root_and_octave;
use crate::structures::scale::{extend_to_three_octaves, spell_scale2};
use crate::tables::formulas::{roman_numeral_degrees, ChordVoicing};

/// Spell a chord from half-step offsets and their scale degrees
///
/// `scale_degrees[i]` (1-based) names the letter for `formula[i]`, so
/// `[0, 3, 6, 9]` with `[1, 3, 5, 7]` on B gives B D F Ab.
pub fn spell_chord(
    formula: impl Into<FormulaInput>,
    root: &str,
    scale_degrees: &[usize],
) -> Result<Vec<NoteName>> {
    let formula = formula.into().into_formula()?;
    if scale_degrees.len() != formula.len() {
        return Err(SpellingError::InvalidFormula(format!(
            "{} offsets but {} scale degrees",
            formula.len(),
            scale_degrees.len()
        )));
    }

    let (root_spelling, written) = root_and_octave(ScaleFamily::Other, root)?;
    let cycle = LetterCycle::for_root(root_spelling);

    formula
        .offsets()
        .iter()
        .zip(scale_degrees)
        .map(|(&offset, &degree)| {
            let degree = if degree == 0 {
                log::warn!("scale degree 0 in chord on {}; treating it as 1", root);
                1
            } else {
                degree
            };
            let letter = cycle.at(degree as isize - 1);
            let spelling = pick_spelling(root_spelling.pitch_class() + offset, letter)?;
            let octave = written.octave + octave_offset_extended(root_spelling.letter, degree);
            spelling.at_octave(octave).checked()
        })
        .collect()
}

fn pick_degrees(scale: &[NoteName], scale_degrees: &[usize]) -> Result<Vec<NoteName>> {
    scale_degrees
        .iter()
        .map(|&degree| {
            let note = degree
                .checked_sub(1)
                .and_then(|index| scale.get(index))
                .copied()
                .ok_or(SpellingError::InvalidScaleDegree {
                    degree,
                    max: scale.len(),
                })?;
            note.checked()
        })
        .collect()
}

/// Notes at 1-based degrees of the scale on `root`
///
/// When any degree is past 7 the scale is extended an octave down and up
/// first, and degree 1 then names the root an octave below. Otherwise
/// degrees run up to the scale's closing octave note.
pub fn spell_diatonic_chord(
    scale_degrees: &[usize],
    formula: impl Into<FormulaInput>,
    root: &str,
) -> Result<Vec<NoteName>> {
    let scale = spell_scale2(formula, root)?;
    if scale_degrees.iter().any(|&degree| degree > 7) {
        pick_degrees(&extend_to_three_octaves(&scale), scale_degrees)
    } else {
        pick_degrees(&scale, scale_degrees)
    }
}

/// Voicing entry point used by [`spell_chord_progression`]
pub fn spell_diatonic_chord_voicing(
    scale_degrees: &[usize],
    formula: impl Into<FormulaInput>,
    root: &str,
) -> Result<Vec<NoteName>> {
    spell_diatonic_chord(scale_degrees, formula, root)
}

/// One voiced chord per entry of `progression`
pub fn spell_chord_progression(
    progression: &[Vec<usize>],
    formula: impl Into<FormulaInput>,
    root: &str,
) -> Result<Vec<Vec<NoteName>>> {
    let formula = formula.into().into_formula()?;
    progression
        .iter()
        .map(|degrees| spell_diatonic_chord_voicing(degrees, &formula, root))
        .collect()
}

/// Scale degrees for a dash-separated progression such as `"I-IV-V"`
pub fn parse_roman_numerals(text: &str, voicing: ChordVoicing) -> Result<Vec<Vec<usize>>> {
    text.split('-')
        .map(str::trim)
        .filter(|numeral| !numeral.is_empty())
        .map(|numeral| roman_numeral_degrees(numeral, voicing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(notes: &[NoteName]) -> Vec<String> {
        notes.iter().map(|note| note.to_string()).collect()
    }

    const MAJOR: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn test_a_major_triad() {
        let chord = spell_chord([0, 4, 7], "A4", &[1, 3, 5]).unwrap();
        assert_eq!(names(&chord), vec!["A4", "C#5", "E5"]);
    }

    #[test]
    fn test_diminished_seventh_letters() {
        let chord = spell_chord([0, 3, 6, 9], "B3", &[1, 3, 5, 7]).unwrap();
        assert_eq!(names(&chord), vec!["B3", "D4", "F4", "Ab4"]);

        let chord = spell_chord("0,4,8", "Db4", &[1, 3, 5]).unwrap();
        assert_eq!(names(&chord), vec!["Db4", "F4", "A4"]);
    }

    #[test]
    fn test_chord_degree_zero_is_clamped() {
        let clamped = spell_chord([0, 4, 7], "C4", &[0, 3, 5]).unwrap();
        let plain = spell_chord([0, 4, 7], "C4", &[1, 3, 5]).unwrap();
        assert_eq!(clamped, plain);
    }

    #[test]
    fn test_chord_rejects_mismatched_degrees() {
        assert!(matches!(
            spell_chord([0, 4, 7], "C4", &[1, 3]),
            Err(SpellingError::InvalidFormula(_))
        ));
        assert!(matches!(
            spell_chord([0, 4, 7], "Cx4", &[1, 3, 5]),
            Err(SpellingError::InvalidRoot { .. })
        ));
    }

    #[test]
    fn test_so_what_voicing_octaves() {
        let chord = spell_chord([0, 5, 10, 15, 19], "D3", &[1, 4, 7, 10, 12]).unwrap();
        assert_eq!(names(&chord), vec!["D3", "G3", "C4", "F4", "A4"]);
    }

    #[test]
    fn test_diatonic_chord() {
        let chord = spell_diatonic_chord(&[2, 4, 6], MAJOR, "Bb4").unwrap();
        assert_eq!(names(&chord), vec!["C5", "Eb5", "G5"]);

        let chord = spell_diatonic_chord(&[1, 9], MAJOR, "C4").unwrap();
        assert_eq!(names(&chord), vec!["C3", "D4"]);

        assert_eq!(
            spell_diatonic_chord(&[1, 23], MAJOR, "C4"),
            Err(SpellingError::InvalidScaleDegree { degree: 23, max: 22 })
        );
        assert_eq!(
            spell_diatonic_chord(&[0, 3], MAJOR, "C4"),
            Err(SpellingError::InvalidScaleDegree { degree: 0, max: 8 })
        );
    }

    #[test]
    fn test_diatonic_chord_and_voicing_agree() {
        for degrees in [vec![1, 3, 5], vec![5, 9, 12, 14], vec![2, 8]] {
            assert_eq!(
                spell_diatonic_chord(&degrees, MAJOR, "Eb4").unwrap(),
                spell_diatonic_chord_voicing(&degrees, MAJOR, "Eb4").unwrap()
            );
        }
    }

    #[test]
    fn test_chords_stay_inside_pitch_table() {
        assert_eq!(
            spell_chord([0, 4, 7], "G9", &[1, 3, 5]),
            Err(SpellingError::PitchOutOfRange(131))
        );
        assert_eq!(
            spell_diatonic_chord(&[1, 9], MAJOR, "C_1"),
            Err(SpellingError::PitchOutOfRange(-12))
        );
        assert_eq!(names(&spell_diatonic_chord(&[1, 3], MAJOR, "C_1").unwrap()), vec!["C_1", "E_1"]);
        assert_eq!(
            spell_diatonic_chord(&[1, 16], MAJOR, "G8"),
            Err(SpellingError::PitchOutOfRange(129))
        );
    }

    #[test]
    fn test_diatonic_voicing_extends_past_seventh() {
        let chord = spell_diatonic_chord_voicing(&[5, 9, 12, 14], MAJOR, "C4").unwrap();
        assert_eq!(names(&chord), vec!["G3", "D4", "G4", "B4"]);

        let chord = spell_diatonic_chord_voicing(&[1, 3, 5], MAJOR, "C4").unwrap();
        assert_eq!(names(&chord), vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn test_progression_from_numerals() {
        let degrees = parse_roman_numerals("I-IV-V", ChordVoicing::Triads).unwrap();
        assert_eq!(degrees, vec![vec![1, 3, 5], vec![1, 4, 6], vec![2, 5, 7]]);

        let chords = spell_chord_progression(&degrees, MAJOR, "G4").unwrap();
        assert_eq!(names(&chords[0]), vec!["G4", "B4", "D5"]);
        assert_eq!(names(&chords[2]), vec!["A4", "D5", "F#5"]);

        assert!(parse_roman_numerals("I-X", ChordVoicing::Triads).is_err());
    }
}
