//! Models for the spelling engine
//!
//! Letters, accidentals, spelled note names, half-step formulas and the
//! scale-family tag inferred from a formula.

pub mod formula;
pub mod note_name;
pub mod scale_family;

// Re-export commonly used types
pub use formula::{Formula, FormulaInput};
pub use note_name::{Accidental, Letter, NoteName, Spelling};
pub use scale_family::ScaleFamily;
