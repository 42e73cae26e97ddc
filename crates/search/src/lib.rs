//! Fuzzy hotel search for Wanderstay.
//!
//! This crate provides:
//! - Levenshtein edit distance
//! - Address tokenization on whitespace and commas
//! - A binary hotel filter: substring match first, edit-distance fallback
//!
//! # Example
//!
//! ```
//! use wanderstay_search::{FuzzyMatcher, Searchable};
//!
//! #[derive(Clone)]
//! struct Stay {
//!     name: String,
//!     address: String,
//! }
//!
//! impl Searchable for Stay {
//!     fn name(&self) -> &str { &self.name }
//!     fn address(&self) -> &str { &self.address }
//! }
//!
//! let stays = vec![
//!     Stay { name: "Shimla Heights".into(), address: "Mall Road, Shimla".into() },
//!     Stay { name: "Taj View".into(), address: "Fatehabad Road, Agra".into() },
//! ];
//!
//! let matcher = FuzzyMatcher::default();
//! let found = matcher.filter(&stays, "shimlaa");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "Shimla Heights");
//! ```

mod fuzzy;
mod matcher;

pub use fuzzy::{levenshtein_distance, min_token_distance, tokenize_address};
pub use matcher::{
    filter_hotels, normalize_query, FuzzyMatcher, MatchKind, Searchable, DEFAULT_MAX_EDIT_DISTANCE,
};
