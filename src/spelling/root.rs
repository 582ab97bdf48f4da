//! Root validation and remapping
//!
//! A root is one letter with at most one `#` or `b`, optionally followed by
//! an octave. Major- and minor-like families additionally refuse roots whose
//! scales would need double accidentals, remapping the ones that have a
//! conventional enharmonic key.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SpellingError};
use crate::models::{Accidental, Letter, NoteName, ScaleFamily, Spelling};

lazy_static! {
    static ref ROOT_PATTERN: Regex =
        Regex::new(r"^([A-G])([#b]?)(-?\d+|_\d+)?$").expect("root pattern is a valid regex");
}

const MAJOR_ILLEGAL: [&str; 6] = ["G#", "D#", "A#", "E#", "B#", "Fb"];
const MINOR_ILLEGAL: [&str; 7] = ["E#", "B#", "Fx", "Cx", "Gx", "Db", "Gb"];

const MAJOR_REMAP: [(&str, &str); 6] = [
    ("G#", "Ab"),
    ("D#", "Eb"),
    ("A#", "Bb"),
    ("E#", "F"),
    ("B#", "C"),
    ("Fb", "E"),
];

const MINOR_REMAP: [(&str, &str); 9] = [
    ("E#", "F"),
    ("B#", "C"),
    ("Fx", "G"),
    ("Cb", "B"),
    ("Cx", "D"),
    ("Gx", "A"),
    ("Db", "C#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
];

/// A root as written: spelling plus an optional octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenRoot {
    pub spelling: Spelling,
    pub octave: Option<i32>,
}

fn invalid(root: &str, family: ScaleFamily) -> SpellingError {
    SpellingError::InvalidRoot {
        root: root.to_string(),
        family,
    }
}

/// Check the root grammar and split off the octave
pub fn parse_root(candidate: &str, family: ScaleFamily) -> Result<WrittenRoot> {
    let caps = ROOT_PATTERN
        .captures(candidate)
        .ok_or_else(|| invalid(candidate, family))?;

    let letter = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Letter::from_char)
        .ok_or_else(|| invalid(candidate, family))?;
    let accidental = caps
        .get(2)
        .and_then(|m| Accidental::parse(m.as_str()))
        .ok_or_else(|| invalid(candidate, family))?;
    let octave = match caps.get(3).map(|m| m.as_str()) {
        Some(text) => {
            let parsed = match text.strip_prefix('_') {
                Some(digits) => digits.parse::<i32>().map(|n| -n),
                None => text.parse::<i32>(),
            };
            Some(parsed.map_err(|_| invalid(candidate, family))?)
        }
        None => None,
    };

    Ok(WrittenRoot {
        spelling: Spelling::new(letter, accidental),
        octave,
    })
}

/// Enharmonic replacement for a root the family does not use
///
/// Returns the spelling unchanged when no remap applies.
pub fn fix_root_name(family: ScaleFamily, root: Spelling) -> Spelling {
    let table: &[(&str, &str)] = if family.is_major_like() {
        &MAJOR_REMAP
    } else if family.is_minor_like() {
        &MINOR_REMAP
    } else {
        &[]
    };

    let written = root.to_string();
    table
        .iter()
        .find(|(from, _)| *from == written)
        .and_then(|(_, to)| to.parse().ok())
        .unwrap_or(root)
}

/// Whether the family accepts this root as its tonic
pub fn is_legal_root(family: ScaleFamily, root: Spelling) -> bool {
    let written = root.to_string();
    if family.is_major_like() {
        !MAJOR_ILLEGAL.contains(&written.as_str())
    } else if family.is_minor_like() {
        !MINOR_ILLEGAL.contains(&written.as_str())
    } else {
        true
    }
}

/// Validate a root for a family and return the spelling to build from
///
/// Minor-like families refuse their illegal roots as written (E#, B#, Db,
/// Gb; Fx, Cx and Gx already fail the grammar), so only Cb and Ab are
/// remapped. Major-like families remap first and check afterwards. Any
/// octave suffix is accepted and ignored.
pub fn normalize_root(family: ScaleFamily, candidate: &str) -> Result<Spelling> {
    let written = parse_root(candidate, family)?;
    resolve_written(family, candidate, written.spelling)
}

fn resolve_written(family: ScaleFamily, candidate: &str, spelling: Spelling) -> Result<Spelling> {
    if family.is_minor_like() && !is_legal_root(family, spelling) {
        log::debug!("{} is not used as a {} root", spelling, family);
        return Err(invalid(candidate, family));
    }

    let fixed = fix_root_name(family, spelling);
    if fixed != spelling {
        log::debug!("root {} respelled as {} for {} scale", spelling, fixed, family);
    }

    if !is_legal_root(family, fixed) {
        return Err(invalid(candidate, family));
    }
    Ok(fixed)
}

/// Root and octave for the builders
///
/// Returns the normalised root spelling together with the root exactly as
/// written. The octave is required here, and the written root must sound
/// inside the pitch table.
pub fn root_and_octave(family: ScaleFamily, candidate: &str) -> Result<(Spelling, NoteName)> {
    let written = parse_root(candidate, family)?;
    let octave = written.octave.ok_or_else(|| invalid(candidate, family))?;
    let fixed = resolve_written(family, candidate, written.spelling)?;
    let root = written.spelling.at_octave(octave).checked()?;
    Ok((fixed, root))
}
