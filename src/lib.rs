//! # Grappelli
//!
//! A declarative, headless data-table toolkit for Rust.
//!
//! Grappelli sits between a declarative [`TableOptions`] configuration and
//! whatever actually renders the table: it reconciles controlled and
//! uncontrolled state, sanitizes and bounds every piece of untrusted input,
//! computes pagination windows, resolves client-side filters with fuzzy
//! global search, and packages validated intent for server-driven loaders.
//! No markup, no styling, no I/O — rendering and data fetching stay in
//! caller code.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - pure utilities only (sanitization, throttling)
//! - `full` (default) - everything, including the table orchestrator
//!
//! ### Fine-grained Control
//!
//! - `sanitize` - input sanitization and parameter validation
//! - `throttling` - the keyed sliding-window rate limiter
//! - `i18n` - translation tables, lookup and interpolation
//! - `state` - controlled/uncontrolled state slots, debounced input
//! - `pagination` - the page windower and paginator
//! - `filters` - filter predicates and the fuzzy scorer
//! - `table` - the orchestrator (pulls in everything above)
//!
//! ## Quick Example
//!
//! ```rust
//! use grappelli::{ColumnDefinition, FilterKind, FilterSpec, FilterValue};
//! use grappelli::{Table, TableOptions};
//! use serde_json::{json, Value};
//!
//! let rows = vec![
//!     json!({"firstName": "Joanna", "age": 34}),
//!     json!({"firstName": "Pierre", "age": 51}),
//! ];
//! let columns: Vec<ColumnDefinition<Value>> = vec![
//!     ColumnDefinition::field("firstName", "First name")
//!         .filter(FilterSpec::new(FilterKind::Text, "firstName")),
//!     ColumnDefinition::field("age", "Age"),
//! ];
//!
//! let table = Table::new(TableOptions::new(rows, columns).paginated(true)).unwrap();
//! table.set_column_filter("firstName", FilterValue::Text("jo".into())).unwrap();
//! assert_eq!(table.row_model().len(), 1);
//! ```

// Module re-exports, one per member crate
pub mod core;
#[cfg(feature = "filters")]
pub mod filters;
#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "pagination")]
pub mod pagination;
#[cfg(feature = "sanitize")]
pub mod sanitize;
#[cfg(feature = "state")]
pub mod state;
#[cfg(feature = "table")]
pub mod table;
#[cfg(feature = "throttling")]
pub mod throttling;

// Re-export the shared data model
pub use grappelli_core::{
	ColumnAccessor, ColumnDefinition, ColumnFilter, FilterKind, FilterSpec, FilterValue,
	LazyLoadEvent, PaginationState, RowAccess, SelectOption, SizingConstraints, SortDirection,
	SortEntry, TableError, TableResult, get_path, get_path_or, get_path_owned,
};

// Re-export sanitizers
#[cfg(feature = "sanitize")]
pub use grappelli_sanitize::{
	sanitize_filter_value, sanitize_html_fragment, sanitize_search_text, validate_file_upload,
	validate_pagination, validate_sorting,
};

// Re-export throttling
#[cfg(feature = "throttling")]
pub use grappelli_throttling::{RateLimiter, SystemTimeProvider, TimeProvider};

// Re-export i18n
#[cfg(feature = "i18n")]
pub use grappelli_i18n::{TranslationTable, Translator, bundled_locale, interpolate, lookup};

// Re-export state plumbing
#[cfg(feature = "state")]
pub use grappelli_state::{DebouncedInput, StateSlot};

// Re-export pagination
#[cfg(feature = "pagination")]
pub use grappelli_pagination::{PageItem, Paginator, WindowMode, visible_pages};

// Re-export filter predicates
#[cfg(feature = "filters")]
pub use grappelli_filters::{FuzzyScorer, matches};

// Re-export the orchestrator
#[cfg(feature = "table")]
pub use grappelli_table::{Controlled, Table, TableOptions};
