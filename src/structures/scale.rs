//! Scale builders
//!
//! Two variants are kept side by side because callers depend on both:
//!
//! - [`spell_scale`] resolves every degree at its absolute pitch slot, so
//!   octave numbers always follow the letters actually used.
//! - [`spell_scale2`] looks degrees up by pitch class relative to the root
//!   and assigns octaves from the raw degree number. For gapped families
//!   (pentatonic, blues) the octave change can land one degree late or
//!   early: A minor pentatonic from A4 gives `C4` here where
//!   [`spell_scale`] gives `C5`.
//!
//! Both close the scale with the root one octave up.

use crate::error::Result;
use crate::models::{FormulaInput, NoteName, ScaleFamily};
use crate::spelling::resolver::{pick_candidate, simplify_accidentals, ScaleContext};
use crate::spelling::root::root_and_octave;

/// Spell a scale from a formula and a root such as `"Ab4"`
///
/// The family is inferred from the formula. Roots the family does not use
/// are remapped (G# major becomes A-flat major) or rejected.
pub fn spell_scale(formula: impl Into<FormulaInput>, root: &str) -> Result<Vec<NoteName>> {
    let formula = formula.into().into_formula()?;
    let family = formula.family();
    let (fixed_root, written) = root_and_octave(family, root)?;
    let start = written.slot()?;

    let context = ScaleContext::new(family, fixed_root);
    let mut scale = context.spell_from_slot(formula.offsets(), start)?;
    scale.push(pick_candidate(start.offset(12)?, fixed_root.letter)?);

    log::debug!("spelled {} scale from {}: {}", family, root, join(&scale));
    Ok(scale)
}

/// Spell a scale by root-relative pitch class
///
/// Whole-tone scales use one letter per degree and replace double
/// accidentals and B#, E#, Cb, Fb with their plain enharmonics, closing note
/// included.
pub fn spell_scale2(formula: impl Into<FormulaInput>, root: &str) -> Result<Vec<NoteName>> {
    let formula = formula.into().into_formula()?;
    let family = formula.family();
    let (fixed_root, written) = root_and_octave(family, root)?;

    let context = ScaleContext::new(family, fixed_root);
    let mut scale = context.spell_relative(formula.offsets(), written.octave)?;
    let closing = fixed_root.at_octave(written.octave + 1);
    let closing = if family == ScaleFamily::WholeTone {
        simplify_accidentals(closing)
    } else {
        closing
    };
    scale.push(closing.checked()?);
    Ok(scale)
}

/// Copy a one-octave scale an octave down and an octave up
///
/// The result runs from the root an octave below to the root an octave
/// above. A scale that does not close on its own root one octave up is
/// returned unchanged. The copies are not range-checked; callers check the
/// notes they pick.
pub fn extend_to_three_octaves(scale: &[NoteName]) -> Vec<NoteName> {
    let (first, last) = match (scale.first(), scale.last()) {
        (Some(first), Some(last)) if scale.len() > 1 => (*first, *last),
        _ => return scale.to_vec(),
    };
    if first.spelling != last.spelling || first.octave + 1 != last.octave {
        log::warn!("{} does not span one octave; not extending", join(scale));
        return scale.to_vec();
    }

    let below = scale[..scale.len() - 1].iter().map(|note| note.shift_octave(-1));
    let above = scale[1..].iter().map(|note| note.shift_octave(1));
    below.chain(scale.iter().copied()).chain(above).collect()
}

pub(crate) fn join(notes: &[NoteName]) -> String {
    notes.iter().map(|note| note.to_string()).collect::<Vec<_>>().join(",")
}
