//! Spelling resolution
//!
//! For each scale degree the resolver knows two things: the pitch it must
//! sound (a slot or pitch class) and the letter it must carry (from the
//! letter cycle plus the family's skip table). Exactly one of the sharp,
//! flat and other candidates satisfies both; the first match wins.

use crate::error::{Result, SpellingError};
use crate::models::{Accidental, Letter, NoteName, ScaleFamily, Spelling};
use crate::spelling::letter_cycle::LetterCycle;
use crate::spelling::octave::octave_offset;
use crate::tables::pitch_table::{PitchSlot, NATURAL_OR_SHARP, SPELLING_TABLES};

/// Candidate at a slot carrying the expected letter
pub fn pick_candidate(slot: PitchSlot, letter: Letter) -> Result<NoteName> {
    slot.candidates()
        .into_iter()
        .find(|note| note.letter() == letter)
        .ok_or(SpellingError::SpellingResolutionFailed {
            pitch_class: slot.pitch_class(),
            letter,
        })
}

/// Octave-free variant of [`pick_candidate`] for a pitch class
pub fn pick_spelling(pitch_class: i32, letter: Letter) -> Result<Spelling> {
    let pc = pitch_class.rem_euclid(12);
    SPELLING_TABLES
        .iter()
        .map(|table| table[pc as usize])
        .find(|spelling| spelling.letter == letter)
        .ok_or(SpellingError::SpellingResolutionFailed { pitch_class: pc, letter })
}

/// Replace double accidentals and B#, E#, Cb, Fb with the plain enharmonic
///
/// The octave follows the sounding pitch, so `B#4` becomes `C5`.
pub fn simplify_accidentals(note: NoteName) -> NoteName {
    let spelling = note.spelling;
    if !spelling.accidental.is_double() && !spelling.is_white_key_accidental() {
        return note;
    }
    let plain = NATURAL_OR_SHARP[spelling.pitch_class() as usize];
    plain
        .at_octave(note.octave)
        .shift_octave(spelling.octave_carry() - plain.octave_carry())
}

/// Whole-tone letter skipping carried from one degree to the next
///
/// After D#, A#, E# or B# the next letter is skipped, so the following
/// note is spelled F, C, G or D rather than needing a white-key sharp or a
/// double sharp. The skip depends only on the spelling, never the octave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WholeToneState {
    skips: isize,
}

impl WholeToneState {
    pub fn skips(&self) -> isize {
        self.skips
    }

    pub fn after(self, spelled: Spelling) -> Self {
        let skip = spelled.accidental == Accidental::Sharp
            && matches!(spelled.letter, Letter::D | Letter::A | Letter::E | Letter::B);
        WholeToneState {
            skips: self.skips + isize::from(skip),
        }
    }

    /// Skip one more letter from here on
    pub fn skip_letter(self) -> Self {
        WholeToneState { skips: self.skips + 1 }
    }
}

/// Family, root and letter cycle for one spelling pass
#[derive(Debug, Clone, Copy)]
pub struct ScaleContext {
    pub family: ScaleFamily,
    pub root: Spelling,
    cycle: LetterCycle,
}

impl ScaleContext {
    pub fn new(family: ScaleFamily, root: Spelling) -> Self {
        ScaleContext {
            family,
            root,
            cycle: LetterCycle::for_root(root),
        }
    }

    /// Letter for a 0-based degree index, after the family's skips
    pub fn expected_letter(&self, degree: usize, extra_skips: isize) -> Letter {
        self.cycle
            .at(degree as isize + self.family.letter_offset(degree) + extra_skips)
    }

    fn resolve_degree(
        &self,
        degree: usize,
        pitch_offset: i32,
        start: PitchSlot,
        extra_skips: isize,
    ) -> Result<NoteName> {
        let slot = start.offset(pitch_offset)?;
        let letter = self.expected_letter(degree, extra_skips);
        let note = pick_candidate(slot, letter)?;
        log::debug!(
            "degree {} (+{}) of {} {}: slot {} letter {} -> {}",
            degree + 1,
            pitch_offset,
            self.root,
            self.family,
            slot,
            letter,
            note
        );
        Ok(note)
    }

    /// Spell each degree at its absolute slot above `start`
    ///
    /// Octave numbers come straight from the candidate names.
    pub fn spell_from_slot(&self, formula: &[i32], start: PitchSlot) -> Result<Vec<NoteName>> {
        let whole_tone = self.family == ScaleFamily::WholeTone;
        let (notes, _) = formula.iter().enumerate().try_fold(
            (Vec::with_capacity(formula.len() + 1), WholeToneState::default()),
            |(mut notes, state), (degree, &offset)| {
                let note = self.resolve_degree(degree, offset, start, state.skips())?;
                notes.push(note);
                let state = if whole_tone { state.after(note.spelling) } else { state };
                Ok::<_, SpellingError>((notes, state))
            },
        )?;
        Ok(notes)
    }

    /// Spell each degree by pitch class relative to the root
    ///
    /// Octaves are `start_octave` plus the B→C crossing offset of the raw
    /// degree number. Whole-tone spellings are simplified instead of
    /// skipped; a whole-tone degree whose letter no table spelling reaches
    /// (C after `Bx` on an E# root) moves on to the next letter.
    pub fn spell_relative(&self, formula: &[i32], start_octave: i32) -> Result<Vec<NoteName>> {
        let root_pc = self.root.pitch_class();
        let whole_tone = self.family == ScaleFamily::WholeTone;
        let (notes, _) = formula.iter().enumerate().try_fold(
            (Vec::with_capacity(formula.len() + 1), WholeToneState::default()),
            |(mut notes, state), (degree, &offset)| {
                let pitch_class = root_pc + offset;
                let (spelling, state) =
                    match pick_spelling(pitch_class, self.expected_letter(degree, state.skips())) {
                        Ok(spelling) => (spelling, state),
                        Err(_) if whole_tone => {
                            let state = state.skip_letter();
                            let letter = self.expected_letter(degree, state.skips());
                            (pick_spelling(pitch_class, letter)?, state)
                        }
                        Err(err) => return Err(err),
                    };
                let octave = start_octave.saturating_add(octave_offset(self.root.letter, degree + 1));
                let note = spelling.at_octave(octave);
                let note = if whole_tone { simplify_accidentals(note) } else { note };
                notes.push(note.checked()?);
                Ok::<_, SpellingError>((notes, state))
            },
        )?;
        Ok(notes)
    }
}

/// Spell one degree of a scale at its absolute slot
pub fn resolve(
    family: ScaleFamily,
    root: Spelling,
    degree_index: usize,
    pitch_offset: i32,
    start_slot: PitchSlot,
) -> Result<NoteName> {
    ScaleContext::new(family, root).resolve_degree(degree_index, pitch_offset, start_slot, 0)
}
