//! Error types for the spelling engine
//!
//! Validation failures (roots, modes, scale degrees, formulas) abort a call
//! with no partial result. Lookup failures carry the offending value so the
//! caller can report it.

use thiserror::Error;

use crate::models::{Letter, ScaleFamily};

/// Everything that can go wrong while spelling a structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellingError {
    /// Root fails the grammar or the family's legality check after remapping
    #[error("invalid root '{root}' for {family} scale")]
    InvalidRoot { root: String, family: ScaleFamily },

    /// Mode number exceeds the length of the parent scale
    #[error("invalid mode {mode}: parent scale has {len} notes")]
    InvalidMode { mode: usize, len: usize },

    /// Computed absolute slot falls outside the pitch tables
    #[error("pitch slot {0} is outside the pitch tables (0..=127)")]
    PitchOutOfRange(i32),

    /// No candidate spelling at a slot carries the expected letter
    #[error("no spelling of pitch class {pitch_class} uses the letter {letter}")]
    SpellingResolutionFailed { pitch_class: i32, letter: Letter },

    /// Note name absent from all three name tables
    #[error("note '{0}' not found in the pitch tables")]
    NoteNotFound(String),

    /// Formula text could not be parsed, or has the wrong shape
    #[error("invalid formula: {0}")]
    InvalidFormula(String),

    /// Scale degree outside the spelled scale
    #[error("scale degree {degree} is out of range (1..={max})")]
    InvalidScaleDegree { degree: usize, max: usize },

    /// Unknown pattern, scale, chord, interval or roman numeral name
    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, SpellingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SpellingError::InvalidRoot {
            root: "Cx".to_string(),
            family: ScaleFamily::Major,
        };
        assert_eq!(err.to_string(), "invalid root 'Cx' for major scale");

        let err = SpellingError::InvalidMode { mode: 9, len: 8 };
        assert_eq!(err.to_string(), "invalid mode 9: parent scale has 8 notes");

        let err = SpellingError::SpellingResolutionFailed {
            pitch_class: 4,
            letter: Letter::G,
        };
        assert_eq!(err.to_string(), "no spelling of pitch class 4 uses the letter G");
    }
}
