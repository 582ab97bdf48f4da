//! Named scale, chord and interval formulas
//!
//! Read-only lookup data. Scales and chords are half-step offsets from the
//! root; roman numerals map to scale-degree sets for diatonic chords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellingError};

// Scales
pub const CHROMATIC_SCALE: [i32; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
pub const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
pub const NATURAL_MINOR_SCALE: [i32; 7] = [0, 2, 3, 5, 7, 8, 10];
pub const HARMONIC_MINOR_SCALE: [i32; 7] = [0, 2, 3, 5, 7, 8, 11];
/// Ascending ("jazz") melodic minor
pub const MELODIC_MINOR_SCALE: [i32; 7] = [0, 2, 3, 5, 7, 9, 11];
pub const DORIAN_SCALE: [i32; 7] = [0, 2, 3, 5, 7, 9, 10];
pub const LYDIAN_SCALE: [i32; 7] = [0, 2, 4, 6, 7, 9, 11];
pub const MIXOLYDIAN_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 10];
pub const MAJOR_PENTATONIC: [i32; 5] = [0, 2, 4, 7, 9];
pub const MINOR_PENTATONIC: [i32; 5] = [0, 3, 5, 7, 10];
pub const MAJOR7_PENTATONIC: [i32; 5] = [0, 2, 4, 7, 11];
pub const MAJOR_BLUES: [i32; 6] = [0, 2, 3, 4, 7, 9];
pub const MINOR_BLUES: [i32; 6] = [0, 3, 5, 6, 7, 10];
pub const WHOLE_TONE: [i32; 6] = [0, 2, 4, 6, 8, 10];
pub const HALF_WHOLE_DIMINISHED: [i32; 8] = [0, 1, 3, 4, 6, 7, 9, 10];
pub const WHOLE_HALF_DIMINISHED: [i32; 8] = [0, 2, 3, 5, 6, 8, 9, 11];
pub const TURKISH_SCALE: [i32; 7] = [0, 1, 3, 5, 7, 10, 11];

// Intervals and triads
pub const TRITONE: [i32; 2] = [0, 6];
pub const MAJOR_TRIAD: [i32; 3] = [0, 4, 7];
pub const MINOR_TRIAD: [i32; 3] = [0, 3, 7];
pub const DIMINISHED_TRIAD: [i32; 3] = [0, 3, 6];
pub const AUGMENTED_TRIAD: [i32; 3] = [0, 4, 8];
pub const MAJOR_FLAT5_TRIAD: [i32; 3] = [0, 4, 6];
pub const SUS2_TRIAD: [i32; 3] = [0, 2, 7];
pub const SUS4_TRIAD: [i32; 3] = [0, 5, 7];
pub const MAJ7_NO_3RD: [i32; 3] = [0, 7, 11];
pub const MIN7_NO_3RD: [i32; 3] = [0, 7, 10];
pub const MAJ7_NO_5TH: [i32; 3] = [0, 4, 11];
pub const MIN7_NO_5TH: [i32; 3] = [0, 3, 10];
pub const DOM7_NO_5TH: [i32; 3] = [0, 4, 10];

// Seventh chords
pub const MAJ7_CHORD: [i32; 4] = [0, 4, 7, 11];
pub const DOM7_CHORD: [i32; 4] = [0, 4, 7, 10];
pub const MIN7_CHORD: [i32; 4] = [0, 3, 7, 10];
pub const MIN7_FLAT5_CHORD: [i32; 4] = [0, 3, 6, 10];
pub const DIM7_CHORD: [i32; 4] = [0, 3, 6, 9];
pub const MAJ7_SHARP5_CHORD: [i32; 4] = [0, 4, 8, 11];
pub const DOM7_FLAT5_CHORD: [i32; 4] = [0, 4, 6, 10];
pub const MIN_SHARP7_CHORD: [i32; 4] = [0, 3, 7, 11];
pub const MIN6_CHORD: [i32; 4] = [0, 3, 7, 9];

/// Quartal "So What" voicing
pub const SO_WHAT: [i32; 5] = [0, 5, 10, 15, 19];

// Jazz voicings
pub const DOM13_VOICING: [i32; 4] = [0, 10, 16, 21];
pub const DOM_SHARP9_VOICING: [i32; 4] = [0, 4, 10, 15];
pub const MIN9_VOICING: [i32; 4] = [0, 3, 10, 14];
pub const MAJ9_VOICING: [i32; 4] = [0, 4, 11, 14];

// Rootless voicings
pub const DOM13_ROOTLESS: [i32; 3] = [10, 16, 19];
pub const DOM_SHARP9_ROOTLESS: [i32; 3] = [4, 10, 15];
pub const MIN9_ROOTLESS: [i32; 3] = [3, 10, 14];
pub const MAJ9_ROOTLESS: [i32; 3] = [4, 11, 14];

const SCALES: &[(&str, &[i32])] = &[
    ("chromatic", &CHROMATIC_SCALE),
    ("major", &MAJOR_SCALE),
    ("natural_minor", &NATURAL_MINOR_SCALE),
    ("harmonic_minor", &HARMONIC_MINOR_SCALE),
    ("melodic_minor", &MELODIC_MINOR_SCALE),
    ("dorian", &DORIAN_SCALE),
    ("lydian", &LYDIAN_SCALE),
    ("mixolydian", &MIXOLYDIAN_SCALE),
    ("major_pentatonic", &MAJOR_PENTATONIC),
    ("minor_pentatonic", &MINOR_PENTATONIC),
    ("major7_pentatonic", &MAJOR7_PENTATONIC),
    ("major_blues", &MAJOR_BLUES),
    ("minor_blues", &MINOR_BLUES),
    ("whole_tone", &WHOLE_TONE),
    ("half_whole_diminished", &HALF_WHOLE_DIMINISHED),
    ("whole_half_diminished", &WHOLE_HALF_DIMINISHED),
    ("turkish", &TURKISH_SCALE),
];

const CHORDS: &[(&str, &[i32])] = &[
    ("tritone", &TRITONE),
    ("major_triad", &MAJOR_TRIAD),
    ("minor_triad", &MINOR_TRIAD),
    ("diminished_triad", &DIMINISHED_TRIAD),
    ("augmented_triad", &AUGMENTED_TRIAD),
    ("major_flat5_triad", &MAJOR_FLAT5_TRIAD),
    ("sus2_triad", &SUS2_TRIAD),
    ("sus4_triad", &SUS4_TRIAD),
    ("maj7_no_3rd", &MAJ7_NO_3RD),
    ("min7_no_3rd", &MIN7_NO_3RD),
    ("maj7_no_5th", &MAJ7_NO_5TH),
    ("min7_no_5th", &MIN7_NO_5TH),
    ("dom7_no_5th", &DOM7_NO_5TH),
    ("maj7", &MAJ7_CHORD),
    ("dom7", &DOM7_CHORD),
    ("min7", &MIN7_CHORD),
    ("min7b5", &MIN7_FLAT5_CHORD),
    ("dim7", &DIM7_CHORD),
    ("maj7#5", &MAJ7_SHARP5_CHORD),
    ("dom7b5", &DOM7_FLAT5_CHORD),
    ("min#7", &MIN_SHARP7_CHORD),
    ("min6", &MIN6_CHORD),
    ("so_what", &SO_WHAT),
    ("dom13", &DOM13_VOICING),
    ("dom#9", &DOM_SHARP9_VOICING),
    ("min9", &MIN9_VOICING),
    ("maj9", &MAJ9_VOICING),
    ("dom13_rootless", &DOM13_ROOTLESS),
    ("dom#9_rootless", &DOM_SHARP9_ROOTLESS),
    ("min9_rootless", &MIN9_ROOTLESS),
    ("maj9_rootless", &MAJ9_ROOTLESS),
];

const INTERVALS: &[(&str, i32)] = &[
    ("PU", 0),
    ("AU", 1),
    ("mi2", 1),
    ("ma2", 2),
    ("A2", 3),
    ("mi3", 3),
    ("ma3", 4),
    ("P4", 5),
    ("A4", 6),
    ("dim5", 6),
    ("P5", 7),
    ("A5", 8),
    ("mi6", 8),
    ("ma6", 9),
    ("dim7", 9),
    ("A6", 10),
    ("mi7", 10),
    ("ma7", 11),
    ("P8", 12),
];

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

// Diatonic triads inside one octave, inverted to stay below the octave
const TRIAD_DEGREES: [[usize; 3]; 7] = [
    [1, 3, 5],
    [2, 4, 6],
    [3, 5, 7],
    [1, 4, 6],
    [2, 5, 7],
    [1, 3, 6],
    [2, 4, 7],
];

// Root in the bass, upper three voices from the three-octave scale
const FOUR_NOTE_DEGREES: [[usize; 4]; 7] = [
    [1, 10, 12, 15],
    [2, 9, 11, 13],
    [3, 10, 12, 14],
    [4, 8, 11, 13],
    [5, 9, 12, 14],
    [6, 8, 10, 13],
    [7, 9, 11, 14],
];

fn lookup<T: Copy>(table: &[(&str, T)], kind: &'static str, name: &str) -> Result<T> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| SpellingError::UnknownName {
            kind,
            name: name.to_string(),
        })
}

pub fn scale_formula(name: &str) -> Result<&'static [i32]> {
    lookup(SCALES, "scale", name)
}

pub fn chord_formula(name: &str) -> Result<&'static [i32]> {
    lookup(CHORDS, "chord", name)
}

pub fn interval_half_steps(name: &str) -> Result<i32> {
    lookup(INTERVALS, "interval", name)
}

pub fn scale_names() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(|(name, _)| *name)
}

pub fn chord_names() -> impl Iterator<Item = &'static str> {
    CHORDS.iter().map(|(name, _)| *name)
}

/// How a roman numeral is voiced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordVoicing {
    #[default]
    Triads,
    FourNote,
}

impl ChordVoicing {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordVoicing::Triads => "triads",
            ChordVoicing::FourNote => "four_note",
        }
    }
}

impl fmt::Display for ChordVoicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChordVoicing {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "triads" => Ok(ChordVoicing::Triads),
            "four_note" | "4 note voicing" => Ok(ChordVoicing::FourNote),
            _ => Err(SpellingError::UnknownName {
                kind: "chord voicing",
                name: s.to_string(),
            }),
        }
    }
}

/// Scale degrees for one roman numeral in the given voicing
pub fn roman_numeral_degrees(numeral: &str, voicing: ChordVoicing) -> Result<Vec<usize>> {
    let index = NUMERALS
        .iter()
        .position(|candidate| *candidate == numeral)
        .ok_or_else(|| SpellingError::UnknownName {
            kind: "roman numeral",
            name: numeral.to_string(),
        })?;

    Ok(match voicing {
        ChordVoicing::Triads => TRIAD_DEGREES[index].to_vec(),
        ChordVoicing::FourNote => FOUR_NOTE_DEGREES[index].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_lookup() {
        assert_eq!(scale_formula("major").unwrap(), &MAJOR_SCALE);
        assert_eq!(scale_formula("whole_tone").unwrap(), &[0, 2, 4, 6, 8, 10]);
        assert!(matches!(
            scale_formula("bebop"),
            Err(SpellingError::UnknownName { kind: "scale", .. })
        ));
    }

    #[test]
    fn test_chord_and_interval_lookup() {
        assert_eq!(chord_formula("min7b5").unwrap(), &[0, 3, 6, 10]);
        assert_eq!(chord_formula("so_what").unwrap(), &[0, 5, 10, 15, 19]);
        assert_eq!(interval_half_steps("P5").unwrap(), 7);
        assert_eq!(interval_half_steps("dim7").unwrap(), 9);
        assert!(interval_half_steps("P9").is_err());
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(roman_numeral_degrees("IV", ChordVoicing::Triads).unwrap(), vec![1, 4, 6]);
        assert_eq!(roman_numeral_degrees("V", ChordVoicing::FourNote).unwrap(), vec![5, 9, 12, 14]);
        assert!(roman_numeral_degrees("VIII", ChordVoicing::Triads).is_err());
        assert!(roman_numeral_degrees("iv", ChordVoicing::Triads).is_err());
    }

    #[test]
    fn test_voicing_names() {
        assert_eq!("4 note voicing".parse::<ChordVoicing>().unwrap(), ChordVoicing::FourNote);
        assert_eq!("triads".parse::<ChordVoicing>().unwrap(), ChordVoicing::Triads);
        assert!("sevenths".parse::<ChordVoicing>().is_err());
    }

    #[test]
    fn test_name_listings() {
        assert!(scale_names().any(|name| name == "dorian"));
        assert_eq!(chord_names().count(), CHORDS.len());
    }
}
