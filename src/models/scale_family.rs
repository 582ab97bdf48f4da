//! Scale families recognised by the spelling engine
//!
//! The family decides three things: which root remap/legality rules apply,
//! how scale degrees map onto the letter cycle (the skip/offset table), and
//! whether whole-tone simplification kicks in. A formula that matches none
//! of the named families is `Other` and is spelled one letter per degree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpellingError;
use crate::tables::formulas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    MajorBlues,
    MinorBlues,
    WholeTone,
    Other,
}

// Cumulative letter-index adjustments: (degree index, delta). A delta
// applies at its degree and every degree after it.
const NO_SKIPS: &[(usize, isize)] = &[];
const MINOR_PENTATONIC_SKIPS: &[(usize, isize)] = &[(1, 1), (4, 1)];
const MAJOR_PENTATONIC_SKIPS: &[(usize, isize)] = &[(3, 1), (5, 1)];
// #4 rather than b5 between degrees 2 and 3
const MINOR_BLUES_SKIPS: &[(usize, isize)] = &[(1, 1), (3, -1), (5, 1)];
// #2 rather than b3 between degrees 1 and 2
const MAJOR_BLUES_SKIPS: &[(usize, isize)] = &[(2, -1), (4, 1), (6, 1)];

impl ScaleFamily {
    /// Families with a fixed formula
    pub const NAMED: [ScaleFamily; 9] = [
        ScaleFamily::Major,
        ScaleFamily::NaturalMinor,
        ScaleFamily::HarmonicMinor,
        ScaleFamily::MelodicMinor,
        ScaleFamily::MajorPentatonic,
        ScaleFamily::MinorPentatonic,
        ScaleFamily::MajorBlues,
        ScaleFamily::MinorBlues,
        ScaleFamily::WholeTone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleFamily::Major => "major",
            ScaleFamily::NaturalMinor => "natural_minor",
            ScaleFamily::HarmonicMinor => "harmonic_minor",
            ScaleFamily::MelodicMinor => "melodic_minor",
            ScaleFamily::MajorPentatonic => "major_pentatonic",
            ScaleFamily::MinorPentatonic => "minor_pentatonic",
            ScaleFamily::MajorBlues => "major_blues",
            ScaleFamily::MinorBlues => "minor_blues",
            ScaleFamily::WholeTone => "whole_tone",
            ScaleFamily::Other => "other",
        }
    }

    /// The family's formula; `Other` has none
    pub fn formula(&self) -> Option<&'static [i32]> {
        match self {
            ScaleFamily::Major => Some(&formulas::MAJOR_SCALE),
            ScaleFamily::NaturalMinor => Some(&formulas::NATURAL_MINOR_SCALE),
            ScaleFamily::HarmonicMinor => Some(&formulas::HARMONIC_MINOR_SCALE),
            ScaleFamily::MelodicMinor => Some(&formulas::MELODIC_MINOR_SCALE),
            ScaleFamily::MajorPentatonic => Some(&formulas::MAJOR_PENTATONIC),
            ScaleFamily::MinorPentatonic => Some(&formulas::MINOR_PENTATONIC),
            ScaleFamily::MajorBlues => Some(&formulas::MAJOR_BLUES),
            ScaleFamily::MinorBlues => Some(&formulas::MINOR_BLUES),
            ScaleFamily::WholeTone => Some(&formulas::WHOLE_TONE),
            ScaleFamily::Other => None,
        }
    }

    /// Identify the family by exact formula match
    pub fn infer(formula: &[i32]) -> ScaleFamily {
        ScaleFamily::NAMED
            .iter()
            .copied()
            .find(|family| family.formula() == Some(formula))
            .unwrap_or(ScaleFamily::Other)
    }

    /// Major, major blues and major pentatonic share the major root rules
    pub fn is_major_like(&self) -> bool {
        matches!(
            self,
            ScaleFamily::Major | ScaleFamily::MajorBlues | ScaleFamily::MajorPentatonic
        )
    }

    pub fn is_minor_like(&self) -> bool {
        matches!(
            self,
            ScaleFamily::NaturalMinor
                | ScaleFamily::HarmonicMinor
                | ScaleFamily::MelodicMinor
                | ScaleFamily::MinorBlues
                | ScaleFamily::MinorPentatonic
        )
    }

    fn letter_skips(&self) -> &'static [(usize, isize)] {
        match self {
            ScaleFamily::MinorPentatonic => MINOR_PENTATONIC_SKIPS,
            ScaleFamily::MajorPentatonic => MAJOR_PENTATONIC_SKIPS,
            ScaleFamily::MinorBlues => MINOR_BLUES_SKIPS,
            ScaleFamily::MajorBlues => MAJOR_BLUES_SKIPS,
            _ => NO_SKIPS,
        }
    }

    /// Cumulative letter-cycle adjustment for a 0-based degree index
    ///
    /// Always 0 for the diatonic families. Whole-tone spelling adds its own
    /// skips on top of this, driven by the previously spelled note.
    pub fn letter_offset(&self, degree: usize) -> isize {
        self.letter_skips()
            .iter()
            .filter(|(at, _)| *at <= degree)
            .map(|(_, delta)| delta)
            .sum()
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().replace('_', " "))
    }
}

impl FromStr for ScaleFamily {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleFamily::NAMED
            .iter()
            .copied()
            .chain(std::iter::once(ScaleFamily::Other))
            .find(|family| family.as_str() == s)
            .ok_or_else(|| SpellingError::UnknownName {
                kind: "scale family",
                name: s.to_string(),
            })
    }
}
