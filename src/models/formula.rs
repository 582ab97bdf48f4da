//! Half-step formulas
//!
//! A formula lists half-step offsets from the root (root = 0). Scales and
//! chords are non-negative; interval formulas may be signed. Callers hand
//! formulas over either as comma-separated text (`"0,2,4,5,7,9,11"`) or as
//! a native sequence; `FormulaInput` accepts both and normalises them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellingError};
use crate::models::ScaleFamily;

/// Ordered half-step offsets from a root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formula(Vec<i32>);

impl Formula {
    pub fn new(offsets: Vec<i32>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(SpellingError::InvalidFormula("formula is empty".to_string()));
        }
        Ok(Formula(offsets))
    }

    pub fn offsets(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Family tag inferred by exact match
    pub fn family(&self) -> ScaleFamily {
        ScaleFamily::infer(&self.0)
    }

    /// Offsets with the octave (12) appended, unless already closed
    pub fn with_octave(&self) -> Vec<i32> {
        let mut offsets = self.0.clone();
        if offsets.last() != Some(&12) {
            offsets.push(12);
        }
        offsets
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|offset| offset.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for Formula {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self> {
        let offsets = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i32>()
                    .map_err(|_| SpellingError::InvalidFormula(format!("'{}' is not an integer in \"{}\"", part, s)))
            })
            .collect::<Result<Vec<i32>>>()?;
        Formula::new(offsets)
    }
}

/// A formula as it arrives from a caller: text or a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormulaInput {
    Text(String),
    Offsets(Vec<i32>),
}

impl FormulaInput {
    pub fn into_formula(self) -> Result<Formula> {
        match self {
            FormulaInput::Text(text) => text.parse(),
            FormulaInput::Offsets(offsets) => Formula::new(offsets),
        }
    }
}

impl TryFrom<FormulaInput> for Formula {
    type Error = SpellingError;

    fn try_from(input: FormulaInput) -> Result<Self> {
        input.into_formula()
    }
}

impl From<&str> for FormulaInput {
    fn from(text: &str) -> Self {
        FormulaInput::Text(text.to_string())
    }
}

impl From<String> for FormulaInput {
    fn from(text: String) -> Self {
        FormulaInput::Text(text)
    }
}

impl From<Vec<i32>> for FormulaInput {
    fn from(offsets: Vec<i32>) -> Self {
        FormulaInput::Offsets(offsets)
    }
}

impl From<&[i32]> for FormulaInput {
    fn from(offsets: &[i32]) -> Self {
        FormulaInput::Offsets(offsets.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for FormulaInput {
    fn from(offsets: [i32; N]) -> Self {
        FormulaInput::Offsets(offsets.to_vec())
    }
}

impl<const N: usize> From<&[i32; N]> for FormulaInput {
    fn from(offsets: &[i32; N]) -> Self {
        FormulaInput::Offsets(offsets.to_vec())
    }
}

impl From<Formula> for FormulaInput {
    fn from(formula: Formula) -> Self {
        FormulaInput::Offsets(formula.0)
    }
}

impl From<&Formula> for FormulaInput {
    fn from(formula: &Formula) -> Self {
        FormulaInput::Offsets(formula.0.clone())
    }
}
