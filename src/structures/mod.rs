//! Structure builders: scales, modes, chords, intervals, patterns and
//! transposition, all producing spelled note names with octaves

pub mod chord;
pub mod interval;
pub mod mode;
pub mod pattern;
pub mod scale;
pub mod transpose;

pub use chord::{
    parse_roman_numerals, spell_chord, spell_chord_progression, spell_diatonic_chord,
    spell_diatonic_chord_voicing,
};
pub use interval::{interval_quality, spell_interval, spell_interval_or_fallback, spell_interval_with};
pub use mode::spell_mode;
pub use pattern::spell_pattern;
pub use scale::{extend_to_three_octaves, spell_scale, spell_scale2};
pub use transpose::{enharmonic, flat_enharmonic, transpose_sequence};
