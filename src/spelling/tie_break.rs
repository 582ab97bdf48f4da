//! Tie-breaking between two valid interval spellings
//!
//! Intervals of 3, 6, 9 and 10 half steps each have two letter spellings
//! that sound the same (mi3/A2, A4/dim5, ma6/dim7, mi7/A6). A `TieBreak`
//! picks one per call. Whether the alternate is actually allowed for a given
//! root is decided by the interval builder; the strategy only states a
//! preference.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Which of the two spellings to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalChoice {
    /// mi3, A4, ma6, mi7
    Common,
    /// A2, dim5, dim7, A6
    Alternate,
}

/// An ambiguous interval awaiting a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ambiguity {
    /// Interval size reduced to 0..12
    pub half_steps: i32,
    pub descending: bool,
}

impl Ambiguity {
    /// Probability of the alternate under weighted tie-breaking
    pub fn alternate_weight(&self) -> f64 {
        if self.half_steps == 6 {
            0.5
        } else {
            0.25
        }
    }
}

pub trait TieBreak {
    fn choose(&mut self, ambiguity: Ambiguity) -> IntervalChoice;
}

/// Always the common spelling
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferCommon;

impl TieBreak for PreferCommon {
    fn choose(&mut self, _ambiguity: Ambiguity) -> IntervalChoice {
        IntervalChoice::Common
    }
}

/// Always the alternate spelling, where the root allows it
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferAlternate;

impl TieBreak for PreferAlternate {
    fn choose(&mut self, _ambiguity: Ambiguity) -> IntervalChoice {
        IntervalChoice::Alternate
    }
}

/// Seeded random choice: alternate one time in four, one in two for the tritone
#[derive(Debug, Clone)]
pub struct WeightedTieBreak {
    rng: Pcg32,
}

impl WeightedTieBreak {
    pub fn new(seed: u64) -> Self {
        WeightedTieBreak {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl TieBreak for WeightedTieBreak {
    fn choose(&mut self, ambiguity: Ambiguity) -> IntervalChoice {
        if self.rng.gen_bool(ambiguity.alternate_weight()) {
            IntervalChoice::Alternate
        } else {
            IntervalChoice::Common
        }
    }
}

impl<T: TieBreak + ?Sized> TieBreak for &mut T {
    fn choose(&mut self, ambiguity: Ambiguity) -> IntervalChoice {
        (**self).choose(ambiguity)
    }
}

impl<T: TieBreak + ?Sized> TieBreak for Box<T> {
    fn choose(&mut self, ambiguity: Ambiguity) -> IntervalChoice {
        (**self).choose(ambiguity)
    }
}

/// Serializable tie-break selection, e.g. `"common"` or `{"weighted":{"seed":7}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakConfig {
    #[default]
    Common,
    Alternate,
    Weighted { seed: u64 },
}

impl TieBreakConfig {
    pub fn build(&self) -> Box<dyn TieBreak> {
        match *self {
            TieBreakConfig::Common => Box::new(PreferCommon),
            TieBreakConfig::Alternate => Box::new(PreferAlternate),
            TieBreakConfig::Weighted { seed } => Box::new(WeightedTieBreak::new(seed)),
        }
    }
}
