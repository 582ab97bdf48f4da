//! Scale spelling WASM API
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and logging at the boundary
//! - `types`: argument types that only exist for JavaScript callers
//! - `spelling`: the exported builder functions

pub mod helpers;
pub mod spelling;
pub mod types;

pub use spelling::*;
