//! Queries over frequency tries.
//!
//! - [`autocomplete`] ranks the keys sharing a prefix by frequency.
//! - [`word_filter`] selects the words matching a glob pattern.
//!
//! Autocorrect, which extends autocomplete with edit-distance-1 neighbours,
//! lives in [`crate::spelling`].

pub mod autocomplete;
pub mod wildcard;

pub use autocomplete::{autocomplete, autocomplete_any, ranked_completions};
pub use wildcard::{WildcardPattern, word_filter, word_filter_any};
