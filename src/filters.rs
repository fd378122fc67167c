//! Filtering module.
//!
//! The per-column match predicate (typed and shape-sniffing fallback) and
//! the fuzzy ranking scorer behind the global search box.

pub use grappelli_filters::*;
