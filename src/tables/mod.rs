//! Read-only lookup data: pitch slots with their candidate spellings, and
//! the named scale, chord, interval and roman-numeral formulas.

pub mod formulas;
pub mod pitch_table;

pub use formulas::{chord_formula, interval_half_steps, roman_numeral_degrees, scale_formula, ChordVoicing};
pub use pitch_table::{candidates, lookup_slot, note_name_to_midi, slot_of, PitchSlot};
