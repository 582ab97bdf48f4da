use crate::error::{Result, SpellingError};
use crate::models::{FormulaInput, NoteName};
use crate::patterns::Pattern;
use crate::structures::scale::spell_scale;

/// Position in the closed formula and the octave shift that reaches `value`
fn locate(values: &[i32], value: i32) -> Option<(usize, i32)> {
    if let Some(index) = values.iter().position(|&v| v == value) {
        return Some((index, 0));
    }
    values
        .iter()
        .position(|&v| (value - v).rem_euclid(12) == 0)
        .map(|index| (index, (value - values[index]) / 12))
}

/// Spell the scale on `root`, then reorder it by a melodic pattern
///
/// Notes the pattern reaches beyond the octave (the "plus one" steps, or the
/// last broken third) are the scale's own notes shifted by octaves.
pub fn spell_pattern(formula: impl Into<FormulaInput>, root: &str, pattern: Pattern) -> Result<Vec<NoteName>> {
    let formula = formula.into().into_formula()?;
    let scale = spell_scale(&formula, root)?;
    let values = formula.with_octave();

    pattern
        .apply(&values)
        .into_iter()
        .map(|value| {
            let (index, octaves) = locate(&values, value).ok_or_else(|| {
                SpellingError::InvalidFormula(format!("{} is not a degree of {}", value, formula))
            })?;
            let note = scale.get(index).ok_or_else(|| {
                SpellingError::InvalidFormula(format!("{} has no spelled degree {}", formula, index + 1))
            })?;
            note.shift_octave(octaves).checked()
        })
        .collect()
}
