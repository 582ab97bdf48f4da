//! Scale Spelling WASM Module
//!
//! Turns half-step formulas and root notes into enharmonically spelled note
//! names with octave numbers: scales, modes, chords, intervals, melodic
//! patterns and transpositions. Each degree gets the one letter name that
//! both sounds right and follows the letter sequence from the root.

pub mod api;
pub mod error;
pub mod models;
pub mod patterns;
pub mod spelling;
pub mod structures;
pub mod tables;

// Re-export commonly used types
pub use error::{Result, SpellingError};
pub use models::{Accidental, Formula, FormulaInput, Letter, NoteName, ScaleFamily, Spelling};
pub use patterns::Pattern;
pub use spelling::{normalize_root, PreferAlternate, PreferCommon, TieBreak, TieBreakConfig, WeightedTieBreak};
pub use structures::{
    enharmonic, extend_to_three_octaves, flat_enharmonic, interval_quality, parse_roman_numerals, spell_chord,
    spell_chord_progression, spell_diatonic_chord, spell_diatonic_chord_voicing, spell_interval,
    spell_interval_or_fallback, spell_interval_with, spell_mode, spell_pattern, spell_scale, spell_scale2,
    transpose_sequence,
};
pub use tables::{ChordVoicing, PitchSlot};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console")]
    {
        console_error_panic_hook::set_once();
        // A second instantiation finds the logger already set
        console_log::init_with_level(log::Level::Debug).ok();
    }

    log::info!("Scale spelling WASM module initialized");
}
