//! JavaScript-facing spelling functions
//!
//! Formulas are accepted as a comma-separated string or an array of
//! numbers. Results come back as arrays of note-name strings such as
//! `["Ab4", "Bb4", ...]`; errors are thrown as strings.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, deserialize_or_default, formula_arg, notes_result, serialize, spelling_error,
};
use crate::api::types::ProgressionInput;
use crate::models::{NoteName, ScaleFamily};
use crate::patterns::Pattern;
use crate::spelling::{normalize_root as normalize, TieBreakConfig};
use crate::structures;
use crate::tables::{self, ChordVoicing};

/// Spell a scale, e.g. `spellScale("0,2,4,5,7,9,11", "Ab4")`
#[wasm_bindgen(js_name = spellScale)]
pub fn spell_scale(formula: JsValue, root_and_octave: &str) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    notes_result(structures::spell_scale(formula, root_and_octave), "spellScale failed")
}

#[wasm_bindgen(js_name = spellScale2)]
pub fn spell_scale2(formula: JsValue, root_and_octave: &str) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    notes_result(structures::spell_scale2(formula, root_and_octave), "spellScale2 failed")
}

#[wasm_bindgen(js_name = spellMode)]
pub fn spell_mode(formula: JsValue, root_and_octave: &str, mode_num: usize) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    notes_result(
        structures::spell_mode(formula, root_and_octave, mode_num),
        "spellMode failed",
    )
}

/// Spell a chord; `scaleDegrees` is an array of 1-based degrees, one per formula entry
#[wasm_bindgen(js_name = spellChord)]
pub fn spell_chord(formula: JsValue, root_and_octave: &str, scale_degrees: JsValue) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    let degrees: Vec<usize> = deserialize(scale_degrees, "Invalid scale degrees")?;
    notes_result(
        structures::spell_chord(formula, root_and_octave, &degrees),
        "spellChord failed",
    )
}

#[wasm_bindgen(js_name = spellDiatonicChord)]
pub fn spell_diatonic_chord(scale_degrees: JsValue, formula: JsValue, root_and_octave: &str) -> Result<JsValue, JsValue> {
    let degrees: Vec<usize> = deserialize(scale_degrees, "Invalid scale degrees")?;
    let formula = formula_arg(formula)?;
    notes_result(
        structures::spell_diatonic_chord(&degrees, formula, root_and_octave),
        "spellDiatonicChord failed",
    )
}

#[wasm_bindgen(js_name = spellDiatonicChordVoicing)]
pub fn spell_diatonic_chord_voicing(
    scale_degrees: JsValue,
    formula: JsValue,
    root_and_octave: &str,
) -> Result<JsValue, JsValue> {
    let degrees: Vec<usize> = deserialize(scale_degrees, "Invalid scale degrees")?;
    let formula = formula_arg(formula)?;
    notes_result(
        structures::spell_diatonic_chord_voicing(&degrees, formula, root_and_octave),
        "spellDiatonicChordVoicing failed",
    )
}

/// Spell a progression given as `"I-IV-V"` or `[[1,3,5], ...]`
///
/// `voicing` is `"triads"` (default) or `"four_note"`.
#[wasm_bindgen(js_name = spellChordProgression)]
pub fn spell_chord_progression(
    progression: JsValue,
    formula: JsValue,
    root_and_octave: &str,
    voicing: Option<String>,
) -> Result<JsValue, JsValue> {
    let voicing = match voicing {
        Some(name) => name
            .parse::<ChordVoicing>()
            .map_err(|err| spelling_error("Invalid voicing", err))?,
        None => ChordVoicing::default(),
    };
    let progression: ProgressionInput = deserialize(progression, "Invalid progression")?;
    let degrees = progression
        .into_degrees(voicing)
        .map_err(|err| spelling_error("Invalid progression", err))?;
    let formula = formula_arg(formula)?;

    let chords = structures::spell_chord_progression(&degrees, formula, root_and_octave)
        .map_err(|err| spelling_error("spellChordProgression failed", err))?;
    serialize(&chords, "spellChordProgression failed")
}

/// Spell an interval; `tieBreak` is `"common"` (default), `"alternate"` or
/// `{ weighted: { seed } }`
#[wasm_bindgen(js_name = spellInterval)]
pub fn spell_interval(formula: JsValue, root_and_octave: &str, tie_break: JsValue) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    let config: TieBreakConfig = deserialize_or_default(tie_break, "Invalid tie-break")?;
    let mut strategy = config.build();
    notes_result(
        structures::spell_interval_with(formula, root_and_octave, &mut strategy),
        "spellInterval failed",
    )
}

#[wasm_bindgen(js_name = spellIntervalOrFallback)]
pub fn spell_interval_or_fallback(formula: JsValue, root_and_octave: &str) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    notes_result(
        structures::spell_interval_or_fallback(formula, root_and_octave),
        "spellInterval failed",
    )
}

/// Quality name ("P", "mi", "ma", "A", "dim") or an empty string
#[wasm_bindgen(js_name = intervalQuality)]
pub fn interval_quality(letter_steps: usize, half_steps: i32) -> String {
    structures::interval_quality(letter_steps, half_steps)
        .unwrap_or_default()
        .to_string()
}

#[wasm_bindgen(js_name = spellPattern)]
pub fn spell_pattern(formula: JsValue, root_and_octave: &str, pattern: &str) -> Result<JsValue, JsValue> {
    let formula = formula_arg(formula)?;
    let pattern: Pattern = pattern
        .parse()
        .map_err(|err| spelling_error("Invalid pattern", err))?;
    notes_result(
        structures::spell_pattern(formula, root_and_octave, pattern),
        "spellPattern failed",
    )
}

#[wasm_bindgen(js_name = transposeSequence)]
pub fn transpose_sequence(notes: JsValue, half_steps: i32) -> Result<JsValue, JsValue> {
    let notes: Vec<String> = deserialize(notes, "Invalid note list")?;
    notes_result(
        structures::transpose_sequence(&notes, half_steps),
        "transposeSequence failed",
    )
}

/// Root spelling a family builds from, e.g. `normalizeRoot("major", "G#")` is `"Ab"`
#[wasm_bindgen(js_name = normalizeRoot)]
pub fn normalize_root(family: &str, root: &str) -> Result<String, JsValue> {
    let family: ScaleFamily = family
        .parse()
        .map_err(|err| spelling_error("Invalid scale family", err))?;
    normalize(family, root)
        .map(|spelling| spelling.to_string())
        .map_err(|err| spelling_error("normalizeRoot failed", err))
}

#[wasm_bindgen(js_name = noteNameToMidi)]
pub fn note_name_to_midi(name: &str) -> Option<u8> {
    tables::note_name_to_midi(name)
}

#[wasm_bindgen(js_name = enharmonic)]
pub fn enharmonic(note: &str) -> Result<String, JsValue> {
    let note: NoteName = note.parse().map_err(|err| spelling_error("Invalid note", err))?;
    Ok(structures::enharmonic(note).to_string())
}

#[wasm_bindgen(js_name = flatEnharmonic)]
pub fn flat_enharmonic(note: &str) -> Result<String, JsValue> {
    let note: NoteName = note.parse().map_err(|err| spelling_error("Invalid note", err))?;
    Ok(structures::flat_enharmonic(note).to_string())
}

/// Half-step formula for a scale name such as `"harmonic_minor"`
#[wasm_bindgen(js_name = scaleFormula)]
pub fn scale_formula(name: &str) -> Result<JsValue, JsValue> {
    let formula = tables::scale_formula(name).map_err(|err| spelling_error("scaleFormula failed", err))?;
    serialize(&formula, "scaleFormula failed")
}

#[wasm_bindgen(js_name = chordFormula)]
pub fn chord_formula(name: &str) -> Result<JsValue, JsValue> {
    let formula = tables::chord_formula(name).map_err(|err| spelling_error("chordFormula failed", err))?;
    serialize(&formula, "chordFormula failed")
}
