//! Spelling correction for word tries.
//!
//! Autocorrect falls back on the edit-distance-1 neighbourhood of a prefix
//! when its completions do not fill the requested number of results.

pub mod autocorrect;
pub mod edits;

pub use autocorrect::{Autocorrector, autocorrect, autocorrect_any};
