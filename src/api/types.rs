//! Argument types for the WASM API

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::structures::parse_roman_numerals;
use crate::tables::ChordVoicing;

/// A progression as roman numerals (`"I-IV-V"`) or as explicit degree sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressionInput {
    Numerals(String),
    Degrees(Vec<Vec<usize>>),
}

impl ProgressionInput {
    pub fn into_degrees(self, voicing: ChordVoicing) -> Result<Vec<Vec<usize>>> {
        match self {
            ProgressionInput::Numerals(text) => parse_roman_numerals(&text, voicing),
            ProgressionInput::Degrees(degrees) => Ok(degrees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_input_forms() {
        let numerals: ProgressionInput = serde_json::from_str("\"I-V\"").unwrap();
        assert_eq!(
            numerals.into_degrees(ChordVoicing::Triads).unwrap(),
            vec![vec![1, 3, 5], vec![2, 5, 7]]
        );

        let degrees: ProgressionInput = serde_json::from_str("[[1,3,5],[4,6,8]]").unwrap();
        assert_eq!(
            degrees.into_degrees(ChordVoicing::FourNote).unwrap(),
            vec![vec![1, 3, 5], vec![4, 6, 8]]
        );
    }
}
