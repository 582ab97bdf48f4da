//! Letters, accidentals and spelled note names
//!
//! A note name is a letter (A-G), an accidental and an octave number:
//! - Natural: C4
//! - Sharp / flat: F#4, Bb3
//! - Double-sharp: Cx5 (`##` is accepted when parsing)
//! - Double-flat: Ebb4
//!
//! The octave belongs to the letter, not to the sounding pitch, so `B#3`
//! sounds as C4 and `Cb5` sounds as B4. Negative octaves use the pitch
//! table's underscore convention: `C_1` is C in octave -1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellingError};
use crate::tables::pitch_table::PitchSlot;

/// One of the seven natural letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// The musical alphabet in cycle order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Position in the A..G alphabet
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 6,
        }
    }

    /// Letter at an alphabet position, wrapping past G
    pub fn from_index(index: usize) -> Letter {
        Letter::ALL[index % 7]
    }

    /// Pitch class of the natural note (C = 0)
    pub fn natural_pitch_class(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Parse an uppercase letter; lowercase `b` is reserved for the flat sign
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental applied to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Half-step alteration of the natural letter
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Symbol used in note names ("x" for double-sharp)
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Parse an accidental symbol
    pub fn parse(symbol: &str) -> Option<Accidental> {
        match symbol {
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "b" => Some(Accidental::Flat),
            "x" | "##" => Some(Accidental::DoubleSharp),
            "bb" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, Accidental::DoubleFlat | Accidental::DoubleSharp)
    }
}

/// A letter plus accidental, without an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Spelling {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Spelling {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Spelling { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Spelling::new(letter, Accidental::Natural)
    }

    fn raw_pitch(self) -> i32 {
        self.letter.natural_pitch_class() + self.accidental.semitones()
    }

    /// Sounding pitch class, 0-11
    pub fn pitch_class(self) -> i32 {
        self.raw_pitch().rem_euclid(12)
    }

    /// Octaves between the letter's octave and the sounding octave
    ///
    /// B# and Bx sound one octave up (+1), Cb and Cbb one octave down (-1).
    pub fn octave_carry(self) -> i32 {
        self.raw_pitch().div_euclid(12)
    }

    /// B#, E#, Cb and Fb: single accidentals that land on a natural pitch
    pub fn is_white_key_accidental(self) -> bool {
        matches!(
            (self.letter, self.accidental),
            (Letter::B, Accidental::Sharp)
                | (Letter::E, Accidental::Sharp)
                | (Letter::C, Accidental::Flat)
                | (Letter::F, Accidental::Flat)
        )
    }

    /// Attach an octave
    pub fn at_octave(self, octave: i32) -> NoteName {
        NoteName { spelling: self, octave }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.symbol())
    }
}

impl FromStr for Spelling {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| SpellingError::NoteNotFound(s.to_string()))?;
        let accidental = Accidental::parse(chars.as_str())
            .ok_or_else(|| SpellingError::NoteNotFound(s.to_string()))?;
        Ok(Spelling::new(letter, accidental))
    }
}

impl From<Spelling> for String {
    fn from(spelling: Spelling) -> String {
        spelling.to_string()
    }
}

impl TryFrom<String> for Spelling {
    type Error = SpellingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A spelled note with its octave number, e.g. `F#4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NoteName {
    pub spelling: Spelling,
    pub octave: i32,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        NoteName {
            spelling: Spelling::new(letter, accidental),
            octave,
        }
    }

    pub fn letter(&self) -> Letter {
        self.spelling.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.spelling.accidental
    }

    /// Absolute pitch slot (MIDI number) this name sounds at
    pub fn slot(&self) -> Result<PitchSlot> {
        let pitch = self.spelling.letter.natural_pitch_class() + self.spelling.accidental.semitones();
        let value = self
            .octave
            .checked_add(1)
            .and_then(|octave| octave.checked_mul(12))
            .and_then(|base| base.checked_add(pitch))
            .ok_or(SpellingError::PitchOutOfRange(if self.octave < 0 { i32::MIN } else { i32::MAX }))?;
        PitchSlot::new(value)
    }

    /// The note itself when it lies inside the pitch table
    pub fn checked(self) -> Result<NoteName> {
        self.slot().map(|_| self)
    }

    /// Same spelling, shifted by whole octaves
    pub fn shift_octave(self, octaves: i32) -> NoteName {
        self.spelling.at_octave(self.octave.saturating_add(octaves))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.octave < 0 {
            write!(f, "{}_{}", self.spelling, -self.octave)
        } else {
            write!(f, "{}{}", self.spelling, self.octave)
        }
    }
}

impl FromStr for NoteName {
    type Err = SpellingError;

    /// Parse `<Letter>[accidental]<octave>`; the octave may be written
    /// `_1` or `-1` for octave -1
    fn from_str(s: &str) -> Result<Self> {
        let not_found = || SpellingError::NoteNotFound(s.to_string());

        let octave_start = s
            .find(|c: char| c.is_ascii_digit() || c == '_' || c == '-')
            .ok_or_else(not_found)?;
        let (name, octave_text) = s.split_at(octave_start);

        let spelling: Spelling = name.parse().map_err(|_| not_found())?;
        let octave = match octave_text.strip_prefix('_') {
            Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                -digits.parse::<i32>().map_err(|_| not_found())?
            }
            Some(_) => return Err(not_found()),
            None => octave_text.parse::<i32>().map_err(|_| not_found())?,
        };

        Ok(spelling.at_octave(octave))
    }
}

impl From<NoteName> for String {
    fn from(note: NoteName) -> String {
        note.to_string()
    }
}

impl TryFrom<String> for NoteName {
    type Error = SpellingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
