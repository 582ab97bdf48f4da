//! Interval spelling
//!
//! The second note's letter is counted from the root's letter: a perfect
//! fifth above Bb lands on F, a major third above E on G#. Four interval
//! sizes have two letter counts (mi3/A2, A4/dim5, ma6/dim7, mi7/A6). The
//! alternate is only offered where it stays free of double accidentals, and
//! a [`TieBreak`] decides between the two.

use crate::error::{Result, SpellingError};
use crate::models::{Accidental, FormulaInput, Letter, NoteName, ScaleFamily, Spelling};
use crate::spelling::letter_cycle::LetterCycle;
use crate::spelling::resolver::pick_candidate;
use crate::spelling::root::parse_root;
use crate::spelling::tie_break::{Ambiguity, IntervalChoice, PreferCommon, TieBreak};
use crate::tables::pitch_table::lookup_slot;

/// Letter steps for an interval reduced to 0..12, with its alternate if any
fn letter_steps(reduced: i32) -> (usize, Option<usize>) {
    match reduced {
        1 | 2 => (1, None),
        3 => (2, Some(1)),
        4 => (2, None),
        5 => (3, None),
        6 => (3, Some(4)),
        7 => (4, None),
        8 => (5, None),
        9 => (5, Some(6)),
        10 => (6, Some(5)),
        11 => (6, None),
        _ => (0, None),
    }
}

fn is_one_of(root: Spelling, names: &[(Letter, Accidental)]) -> bool {
    names
        .iter()
        .any(|&(letter, accidental)| root.letter == letter && root.accidental == accidental)
}

const SHARP_KEYS: [(Letter, Accidental); 5] = [
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Sharp),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Sharp),
];

const FLAT_KEYS: [(Letter, Accidental); 5] = [
    (Letter::D, Accidental::Flat),
    (Letter::E, Accidental::Flat),
    (Letter::G, Accidental::Flat),
    (Letter::A, Accidental::Flat),
    (Letter::B, Accidental::Flat),
];

/// Whether the alternate spelling is available above or below this root
fn alternate_allowed(root: Spelling, reduced: i32, descending: bool) -> bool {
    match (reduced, descending) {
        (3, _) | (6, _) => true,
        // dim7 above a sharp root, A6 above anything but a flat root
        (9, false) => is_one_of(root, &SHARP_KEYS),
        (10, false) => !is_one_of(root, &FLAT_KEYS),
        // dim7 below C, F, G, Bb, Eb; A6 below anything but B, E, C#, F#, G#
        (9, true) => {
            matches!(root.letter, Letter::C | Letter::F | Letter::G)
                || is_one_of(root, &[(Letter::B, Accidental::Flat), (Letter::E, Accidental::Flat)])
        }
        (10, true) => {
            !matches!(root.letter, Letter::B | Letter::E)
                && !is_one_of(
                    root,
                    &[
                        (Letter::C, Accidental::Sharp),
                        (Letter::F, Accidental::Sharp),
                        (Letter::G, Accidental::Sharp),
                    ],
                )
        }
        _ => false,
    }
}

/// Spell `[root, target]` for an interval formula such as `[0, 7]`
///
/// Ambiguous sizes use the common spelling.
pub fn spell_interval(formula: impl Into<FormulaInput>, root: &str) -> Result<Vec<NoteName>> {
    spell_interval_with(formula, root, &mut PreferCommon)
}

/// Spell an interval, letting `tie_break` choose between valid spellings
///
/// Only `formula[1]` is used; negative values spell the interval below the
/// root. Compound intervals reduce modulo 12 for the letter count.
pub fn spell_interval_with<T: TieBreak + ?Sized>(
    formula: impl Into<FormulaInput>,
    root: &str,
    tie_break: &mut T,
) -> Result<Vec<NoteName>> {
    let formula = formula.into().into_formula()?;
    let half_steps = match formula.offsets() {
        [_, second, ..] => *second,
        _ => {
            return Err(SpellingError::InvalidFormula(format!(
                "interval needs two offsets, got '{}'",
                formula
            )))
        }
    };

    let written = parse_root(root, ScaleFamily::Other)?;
    let octave = written.octave.ok_or_else(|| SpellingError::InvalidRoot {
        root: root.to_string(),
        family: ScaleFamily::Other,
    })?;
    let root_note = written.spelling.at_octave(octave);
    let root_slot = lookup_slot(root)?;

    let reduced = half_steps.abs() % 12;
    let descending = half_steps < 0;
    let (common, alternate) = letter_steps(reduced);
    let steps = match alternate {
        Some(alternate) if alternate_allowed(written.spelling, reduced, descending) => {
            match tie_break.choose(Ambiguity {
                half_steps: reduced,
                descending,
            }) {
                IntervalChoice::Common => common,
                IntervalChoice::Alternate => alternate,
            }
        }
        _ => common,
    };

    let cycle = LetterCycle::for_root(written.spelling);
    let letter = if descending {
        cycle.at(-(steps as isize))
    } else {
        cycle.at(steps as isize)
    };
    let target = pick_candidate(root_slot.offset(half_steps)?, letter)?;

    log::debug!("{} half steps from {}: {} letter steps -> {}", half_steps, root, steps, target);
    Ok(vec![root_note, target])
}

/// [`spell_interval`] that substitutes `[C4, C4]` for an unknown root note
pub fn spell_interval_or_fallback(formula: impl Into<FormulaInput>, root: &str) -> Result<Vec<NoteName>> {
    match spell_interval(formula, root) {
        Err(SpellingError::NoteNotFound(name)) => {
            log::warn!("interval root {} not found; using C4", name);
            let middle_c = NoteName::new(Letter::C, Accidental::Natural, 4);
            Ok(vec![middle_c, middle_c])
        }
        other => other,
    }
}

/// Quality name for an interval of `letter_steps` letters and `half_steps` half steps
///
/// `letter_steps` counts from 0 (unison) to 7 (octave). Returns `None` for
/// combinations with no name, e.g. a third of seven half steps.
pub fn interval_quality(letter_steps: usize, half_steps: i32) -> Option<&'static str> {
    let name = match (letter_steps, half_steps) {
        (0, 0) => "P",
        (0, -1) => "dim",
        (0, 1) => "A",
        (1, 1) => "mi",
        (1, 2) => "ma",
        (1, 3) => "A",
        (2, 2) => "dim",
        (2, 3) => "mi",
        (2, 4) => "ma",
        (2, 5) => "A",
        (3, 4) => "dim",
        (3, 5) => "P",
        (3, 6) => "A",
        (4, 6) => "dim",
        (4, 7) => "P",
        (4, 8) => "A",
        (5, 7) => "dim",
        (5, 8) => "mi",
        (5, 9) => "ma",
        (5, 10) => "A",
        (6, 9) => "dim",
        (6, 10) => "mi",
        (6, 11) => "ma",
        (6, 12) => "A",
        (7, 11) => "dim",
        (7, 12) => "P",
        (7, 13) => "A",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::tie_break::PreferAlternate;

    fn names(notes: &[NoteName]) -> Vec<String> {
        notes.iter().map(|note| note.to_string()).collect()
    }

    #[test]
    fn test_perfect_fifth_above_b_flat() {
        assert_eq!(names(&spell_interval([0, 7], "Bb4").unwrap()), vec!["Bb4", "F5"]);
    }

    #[test]
    fn test_common_spellings() {
        assert_eq!(names(&spell_interval([0, 4], "E4").unwrap()), vec!["E4", "G#4"]);
        assert_eq!(names(&spell_interval([0, 3], "C4").unwrap()), vec!["C4", "Eb4"]);
        assert_eq!(names(&spell_interval([0, 6], "C4").unwrap()), vec!["C4", "F#4"]);
        assert_eq!(names(&spell_interval([0, 10], "D4").unwrap()), vec!["D4", "C5"]);
        assert_eq!(names(&spell_interval([0, 12], "G3").unwrap()), vec!["G3", "G4"]);
        assert_eq!(names(&spell_interval([0, 0], "F#4").unwrap()), vec!["F#4", "F#4"]);
    }

    #[test]
    fn test_descending_intervals() {
        assert_eq!(names(&spell_interval([0, -7], "C5").unwrap()), vec!["C5", "F4"]);
        assert_eq!(names(&spell_interval([0, -4], "E4").unwrap()), vec!["E4", "C4"]);
        assert_eq!(names(&spell_interval([0, -3], "A4").unwrap()), vec!["A4", "F#4"]);
    }

    #[test]
    fn test_alternate_spellings() {
        let mut alternate = PreferAlternate;
        let spell = |formula: [i32; 2], root: &str, tie_break: &mut PreferAlternate| {
            names(&spell_interval_with(formula, root, tie_break).unwrap())
        };
        assert_eq!(spell([0, 3], "C4", &mut alternate), vec!["C4", "D#4"]);
        assert_eq!(spell([0, 6], "C4", &mut alternate), vec!["C4", "Gb4"]);
        assert_eq!(spell([0, 9], "C#4", &mut alternate), vec!["C#4", "Bb4"]);
        assert_eq!(spell([0, 10], "C4", &mut alternate), vec!["C4", "A#4"]);
        assert_eq!(spell([0, -9], "C5", &mut alternate), vec!["C5", "D#4"]);
    }

    #[test]
    fn test_descending_alternates_are_dim7_and_a6() {
        let mut alternate = PreferAlternate;
        let below_c = spell_interval_with([0, -9], "C5", &mut alternate).unwrap();
        assert_eq!(names(&below_c), vec!["C5", "D#4"]);
        assert_eq!(interval_quality(6, 9), Some("dim"));

        let below_d = spell_interval_with([0, -10], "D5", &mut alternate).unwrap();
        assert_eq!(names(&below_d), vec!["D5", "Fb4"]);
        assert_eq!(interval_quality(5, 10), Some("A"));
    }

    #[test]
    fn test_alternate_withheld_for_double_accidentals() {
        let mut alternate = PreferAlternate;
        // dim7 above C would be Bbb, A6 above Bb would be G#
        let above_c = spell_interval_with([0, 9], "C4", &mut alternate).unwrap();
        assert_eq!(names(&above_c), vec!["C4", "A4"]);
        let above_b_flat = spell_interval_with([0, 10], "Bb3", &mut alternate).unwrap();
        assert_eq!(names(&above_b_flat), vec!["Bb3", "Ab4"]);
        let below_e = spell_interval_with([0, -10], "E5", &mut alternate).unwrap();
        assert_eq!(names(&below_e), vec!["E5", "F#4"]);
    }

    #[test]
    fn test_interval_errors() {
        assert!(matches!(
            spell_interval([0], "C4"),
            Err(SpellingError::InvalidFormula(_))
        ));
        assert!(matches!(
            spell_interval([0, 7], "C"),
            Err(SpellingError::InvalidRoot { .. })
        ));
        assert!(matches!(
            spell_interval([0, 7], "C10"),
            Err(SpellingError::NoteNotFound(_))
        ));
        assert!(matches!(
            spell_interval([0, 7], "G9"),
            Err(SpellingError::PitchOutOfRange(134))
        ));
    }

    #[test]
    fn test_fallback_for_unknown_root() {
        let notes = spell_interval_or_fallback([0, 7], "C10").unwrap();
        assert_eq!(names(&notes), vec!["C4", "C4"]);
        assert!(spell_interval_or_fallback([0, 7], "H4").is_err());
    }

    #[test]
    fn test_interval_quality_names() {
        assert_eq!(interval_quality(4, 7), Some("P"));
        assert_eq!(interval_quality(2, 3), Some("mi"));
        assert_eq!(interval_quality(6, 9), Some("dim"));
        assert_eq!(interval_quality(0, -1), Some("dim"));
        assert_eq!(interval_quality(7, 13), Some("A"));
        assert_eq!(interval_quality(2, 7), None);
        assert_eq!(interval_quality(8, 14), None);
    }
}
