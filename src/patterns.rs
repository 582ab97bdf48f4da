//! Melodic pattern generators
//!
//! A pattern rearranges a sequence of half-step values (usually a scale
//! formula closed with its octave). Names come from what each pattern does
//! to a major scale:
//!
//! - `up` / `down`: as written, reversed
//! - `upDown` / `downUp`: there and back without repeating the turn note
//! - `upPlusOneDown` / `downPlusOneUp`: overshoot by one degree at the turn
//! - `alternateUp` / `alternateDown`: broken thirds
//! - `alternateUpDown` / `alternateDownUp`: broken thirds there and back

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpellingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pattern {
    Up,
    Down,
    UpDown,
    DownUp,
    UpPlusOneDown,
    DownPlusOneUp,
    AlternateUp,
    AlternateDown,
    AlternateUpDown,
    AlternateDownUp,
}

impl Pattern {
    pub const ALL: [Pattern; 10] = [
        Pattern::Up,
        Pattern::Down,
        Pattern::UpDown,
        Pattern::DownUp,
        Pattern::UpPlusOneDown,
        Pattern::DownPlusOneUp,
        Pattern::AlternateUp,
        Pattern::AlternateDown,
        Pattern::AlternateUpDown,
        Pattern::AlternateDownUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Up => "up",
            Pattern::Down => "down",
            Pattern::UpDown => "upDown",
            Pattern::DownUp => "downUp",
            Pattern::UpPlusOneDown => "upPlusOneDown",
            Pattern::DownPlusOneUp => "downPlusOneUp",
            Pattern::AlternateUp => "alternateUp",
            Pattern::AlternateDown => "alternateDown",
            Pattern::AlternateUpDown => "alternateUpDown",
            Pattern::AlternateDownUp => "alternateDownUp",
        }
    }

    /// Apply the pattern; empty input gives empty output
    pub fn apply(&self, values: &[i32]) -> Vec<i32> {
        if values.is_empty() {
            return Vec::new();
        }
        let reversed: Vec<i32> = values.iter().rev().copied().collect();

        match self {
            Pattern::Up => values.to_vec(),
            Pattern::Down => reversed,
            Pattern::UpDown => concat(values, &reversed[1..]),
            Pattern::DownUp => concat(&reversed, &values[1..]),
            Pattern::UpPlusOneDown => {
                let mut out = values.to_vec();
                out.extend(step_past_top(values));
                out.extend_from_slice(&reversed);
                out
            }
            Pattern::DownPlusOneUp => {
                let mut out = reversed.clone();
                out.extend(step_past_bottom(&reversed));
                out.extend_from_slice(values);
                out
            }
            Pattern::AlternateUp => broken_thirds(values, step_past_top(values)),
            Pattern::AlternateDown => broken_thirds(&reversed, step_past_bottom(&reversed)),
            Pattern::AlternateUpDown => {
                let mut out = broken_thirds(values, step_past_top(values));
                out.extend_from_slice(&Pattern::AlternateDown.apply(values)[1..]);
                out
            }
            Pattern::AlternateDownUp => {
                let mut out = broken_thirds(&reversed, step_past_bottom(&reversed));
                out.extend_from_slice(&Pattern::AlternateUp.apply(values)[1..]);
                out
            }
        }
    }
}

fn concat(head: &[i32], tail: &[i32]) -> Vec<i32> {
    head.iter().chain(tail).copied().collect()
}

// One degree above the top: second value shifted by the last
fn step_past_top(values: &[i32]) -> Option<i32> {
    let last = *values.last()?;
    values.get(1).map(|second| second + last)
}

// One degree below the bottom of a descending run
fn step_past_bottom(reversed: &[i32]) -> Option<i32> {
    match reversed {
        [first, second, ..] => Some(second - first),
        _ => None,
    }
}

// Pairs (v[i], v[i+2]); the second-to-last pairs with `beyond`, the last stands alone
fn broken_thirds(values: &[i32], beyond: Option<i32>) -> Vec<i32> {
    let n = values.len();
    let mut out = Vec::with_capacity(n * 2);
    for (i, &value) in values.iter().enumerate() {
        out.push(value);
        if i + 2 < n {
            out.push(values[i + 2]);
        } else if i + 2 == n {
            out.extend(beyond);
        }
    }
    out
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = SpellingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| SpellingError::UnknownName {
                kind: "pattern",
                name: s.to_string(),
            })
    }
}
