use crate::error::{Result, SpellingError};
use crate::models::{FormulaInput, NoteName};
use crate::spelling::octave::bumps_octave;
use crate::structures::scale::spell_scale;

/// Spell a mode of the scale built on `root`
///
/// Mode `n` starts on the n-th note of the parent scale and keeps the
/// parent's spellings. Modes 0 and 1 return the parent scale itself.
pub fn spell_mode(formula: impl Into<FormulaInput>, root: &str, mode: usize) -> Result<Vec<NoteName>> {
    let parent = spell_scale(formula, root)?;
    let len = parent.len();
    if mode > len {
        return Err(SpellingError::InvalidMode { mode, len });
    }
    if mode < 2 {
        return Ok(parent);
    }

    let start = mode - 1;
    let mode_root = parent[start];
    let mut octave = mode_root.octave;
    let mut notes = Vec::with_capacity(len);

    // Index 0 is skipped: the parent's closing note already stands for its root
    for position in 0..len {
        let index = (position + start) % len;
        if index == 0 {
            continue;
        }
        let spelling = parent[index].spelling;
        if bumps_octave(spelling.letter, position) {
            octave = mode_root.octave + 1;
        }
        notes.push(spelling.at_octave(octave).checked()?);
    }
    notes.push(mode_root.shift_octave(1).checked()?);

    log::debug!("mode {} of {}: {}", mode, root, crate::structures::scale::join(&notes));
    Ok(notes)
}
