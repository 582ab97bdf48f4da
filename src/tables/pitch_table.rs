//! Absolute pitch slots and their candidate spellings
//!
//! Slots are MIDI note numbers 0..=127 (C-1 .. G9). Every slot has exactly
//! three candidate names, taken from the sharp, flat and "other" tables
//! below. The octave number of each candidate belongs to its letter, so
//! slot 72 (C5) offers `B#4`, `C5` and `Dbb5`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SpellingError};
use crate::models::{Accidental, Letter, NoteName, Spelling};

pub const MIN_SLOT: i32 = 0;
pub const MAX_SLOT: i32 = 127;

const fn sp(letter: Letter, accidental: Accidental) -> Spelling {
    Spelling::new(letter, accidental)
}

use Accidental::{DoubleFlat as BB, DoubleSharp as X, Flat as B, Natural as N, Sharp as S};

/// Sharp-side spelling for each pitch class, C = 0
pub const SHARP_SPELLINGS: [Spelling; 12] = [
    sp(Letter::B, S),
    sp(Letter::C, S),
    sp(Letter::C, X),
    sp(Letter::D, S),
    sp(Letter::E, N),
    sp(Letter::E, S),
    sp(Letter::F, S),
    sp(Letter::F, X),
    sp(Letter::G, S),
    sp(Letter::G, X),
    sp(Letter::A, S),
    sp(Letter::B, N),
];

/// Flat-side spelling for each pitch class
pub const FLAT_SPELLINGS: [Spelling; 12] = [
    sp(Letter::C, N),
    sp(Letter::D, B),
    sp(Letter::D, N),
    sp(Letter::E, B),
    sp(Letter::F, B),
    sp(Letter::F, N),
    sp(Letter::G, B),
    sp(Letter::G, N),
    sp(Letter::A, B),
    sp(Letter::A, N),
    sp(Letter::B, B),
    sp(Letter::C, B),
];

/// Remaining double-accidental spelling for each pitch class
///
/// G#/Ab has no double-accidental name; `Ab` is repeated there.
pub const OTHER_SPELLINGS: [Spelling; 12] = [
    sp(Letter::D, BB),
    sp(Letter::B, X),
    sp(Letter::E, BB),
    sp(Letter::F, BB),
    sp(Letter::D, X),
    sp(Letter::G, BB),
    sp(Letter::E, X),
    sp(Letter::A, BB),
    sp(Letter::A, B),
    sp(Letter::B, BB),
    sp(Letter::C, BB),
    sp(Letter::A, X),
];

/// Plainest name for each pitch class: naturals, otherwise sharps
pub const NATURAL_OR_SHARP: [Spelling; 12] = [
    sp(Letter::C, N),
    sp(Letter::C, S),
    sp(Letter::D, N),
    sp(Letter::D, S),
    sp(Letter::E, N),
    sp(Letter::F, N),
    sp(Letter::F, S),
    sp(Letter::G, N),
    sp(Letter::G, S),
    sp(Letter::A, N),
    sp(Letter::A, S),
    sp(Letter::B, N),
];

/// The three spelling tables in resolution order
pub const SPELLING_TABLES: [&[Spelling; 12]; 3] = [&SHARP_SPELLINGS, &FLAT_SPELLINGS, &OTHER_SPELLINGS];

/// An absolute pitch slot (MIDI note number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PitchSlot(u8);

impl PitchSlot {
    pub fn new(value: i32) -> Result<Self> {
        if (MIN_SLOT..=MAX_SLOT).contains(&value) {
            Ok(PitchSlot(value as u8))
        } else {
            Err(SpellingError::PitchOutOfRange(value))
        }
    }

    pub fn value(self) -> i32 {
        self.0 as i32
    }

    /// Slot a number of half steps away
    pub fn offset(self, half_steps: i32) -> Result<PitchSlot> {
        PitchSlot::new(self.value() + half_steps)
    }

    pub fn pitch_class(self) -> i32 {
        self.value() % 12
    }

    /// Octave of the sounding pitch (slot 60 is octave 4)
    pub fn octave(self) -> i32 {
        self.value() / 12 - 1
    }

    /// Name this slot with a spelling, if the spelling sounds at this pitch class
    pub fn spell(self, spelling: Spelling) -> Option<NoteName> {
        if spelling.pitch_class() != self.pitch_class() {
            return None;
        }
        Some(spelling.at_octave(self.octave() - spelling.octave_carry()))
    }

    /// Sharp, flat and other candidate names
    pub fn candidates(self) -> [NoteName; 3] {
        let pc = self.pitch_class() as usize;
        SPELLING_TABLES.map(|table| self.named(table[pc]))
    }

    // Table spellings always match their own pitch class
    fn named(self, spelling: Spelling) -> NoteName {
        spelling.at_octave(self.octave() - spelling.octave_carry())
    }

    pub fn sharp_name(self) -> NoteName {
        self.named(SHARP_SPELLINGS[self.pitch_class() as usize])
    }

    pub fn flat_name(self) -> NoteName {
        self.named(FLAT_SPELLINGS[self.pitch_class() as usize])
    }

    pub fn natural_or_sharp_name(self) -> NoteName {
        self.named(NATURAL_OR_SHARP[self.pitch_class() as usize])
    }
}

impl fmt::Display for PitchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for PitchSlot {
    type Error = SpellingError;

    fn try_from(value: i32) -> Result<Self> {
        PitchSlot::new(value)
    }
}

impl From<PitchSlot> for i32 {
    fn from(slot: PitchSlot) -> i32 {
        slot.value()
    }
}

/// Candidate names at a raw slot number
pub fn candidates(slot: i32) -> Result<[NoteName; 3]> {
    Ok(PitchSlot::new(slot)?.candidates())
}

lazy_static! {
    /// Every table name, keyed by its text form
    static ref NAME_INDEX: HashMap<String, PitchSlot> = {
        let mut index = HashMap::new();
        for value in MIN_SLOT..=MAX_SLOT {
            let slot = PitchSlot(value as u8);
            for name in slot.candidates() {
                index.insert(name.to_string(), slot);
            }
        }
        index
    };
}

/// Slot of a note name given as text
///
/// The text is matched against the table names first, then parsed so that
/// alternative forms (`C##4`, `Db-1`) resolve to the same slot.
pub fn lookup_slot(name: &str) -> Result<PitchSlot> {
    if let Some(slot) = NAME_INDEX.get(name) {
        return Ok(*slot);
    }
    let note: NoteName = name.parse()?;
    NAME_INDEX
        .get(&note.to_string())
        .copied()
        .ok_or_else(|| SpellingError::NoteNotFound(name.to_string()))
}

/// Slot of a parsed note name
pub fn slot_of(note: &NoteName) -> Result<PitchSlot> {
    note.slot()
}

/// MIDI number for a note name, `None` when the name is unknown
pub fn note_name_to_midi(name: &str) -> Option<u8> {
    lookup_slot(name).ok().map(|slot| slot.0)
}
