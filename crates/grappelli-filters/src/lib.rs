//! Client-side filtering: the per-column match predicate and the fuzzy
//! ranking scorer used by the global search box.

pub mod fuzzy;
pub mod resolver;

pub use fuzzy::FuzzyScorer;
pub use resolver::{matches, matches_untyped};
