use crate::error::Result;
use crate::models::{Accidental, NoteName};
use crate::tables::pitch_table::{lookup_slot, PitchSlot, FLAT_SPELLINGS, NATURAL_OR_SHARP};

/// Plain name for a slot: the sharp name, or the flat one where the sharp
/// would be a double sharp, B# or E#
fn plain_name(slot: PitchSlot) -> NoteName {
    let sharp = slot.sharp_name();
    if sharp.accidental().is_double() || sharp.spelling.is_white_key_accidental() {
        slot.flat_name()
    } else {
        sharp
    }
}

/// Shift every note by `half_steps`, naming the results without regard
/// to key
pub fn transpose_sequence<S: AsRef<str>>(notes: &[S], half_steps: i32) -> Result<Vec<NoteName>> {
    notes
        .iter()
        .map(|note| {
            let slot = lookup_slot(note.as_ref())?.offset(half_steps)?;
            Ok(plain_name(slot))
        })
        .collect()
}

/// The natural or sharp name sounding at the same pitch
pub fn enharmonic(note: NoteName) -> NoteName {
    let spelling = note.spelling;
    let plain = NATURAL_OR_SHARP[spelling.pitch_class() as usize];
    plain
        .at_octave(note.octave)
        .shift_octave(spelling.octave_carry() - plain.octave_carry())
}

/// The flat name for a black-key sharp (A# to Bb); anything else unchanged
pub fn flat_enharmonic(note: NoteName) -> NoteName {
    if note.accidental() != Accidental::Sharp || note.spelling.is_white_key_accidental() {
        return note;
    }
    FLAT_SPELLINGS[note.spelling.pitch_class() as usize].at_octave(note.octave)
}
