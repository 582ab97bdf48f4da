//! The enharmonic spelling engine
//!
//! - `root`: root grammar, remapping and per-family legality
//! - `letter_cycle`: the seven letters rotated to a root
//! - `resolver`: picks the candidate name whose letter matches
//! - `octave`: B→C octave crossings for letter-indexed builders
//! - `tie_break`: choice between two valid interval spellings

pub mod letter_cycle;
pub mod octave;
pub mod resolver;
pub mod root;
pub mod tie_break;

pub use letter_cycle::{letter_cycle, LetterCycle};
pub use octave::{octave_offset, octave_offset_extended};
pub use resolver::{pick_candidate, pick_spelling, resolve, ScaleContext, WholeToneState};
pub use root::{fix_root_name, normalize_root};
pub use tie_break::{
    Ambiguity, IntervalChoice, PreferAlternate, PreferCommon, TieBreak, TieBreakConfig, WeightedTieBreak,
};
