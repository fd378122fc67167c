//! Filter kinds, filter values and per-column filter specifications
//!
//! Filter values are an explicit tagged union discriminated by the column's
//! declared [`FilterKind`], rather than runtime shape-sniffing. The permissive
//! shape-based fallback lives in `grappelli-filters` and serves only the
//! generic default predicate.

use serde::{Deserialize, Serialize};

/// The kind of filter a column declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
	/// Case-insensitive substring match over free text
	#[default]
	Text,
	/// Numeric range with optional lower/upper bounds
	Range,
	/// Exact match against one option
	Select,
	/// Membership match against a set of options
	MultiSelect,
	/// Boolean equality
	Boolean,
	/// Single calendar date (`YYYY-MM-DD`)
	Date,
	/// Calendar date range with optional bounds
	DateRange,
	/// Caller-rendered filter; value is treated as free text
	Custom,
}

/// A sanitized filter value, safe to store as state and re-render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterValue {
	/// Free text (text, select and custom filters)
	Text(String),
	/// Numeric bounds; `None` is an open bound
	Range(Option<f64>, Option<f64>),
	/// Selected options for multi-select filters
	Selection(Vec<String>),
	/// Boolean filters
	Bool(bool),
	/// A single `YYYY-MM-DD` date; `None` once an invalid date is sanitized
	Date(Option<String>),
	/// A `YYYY-MM-DD` date range; `None` is an open bound
	DateRange(Option<String>, Option<String>),
}

impl FilterValue {
	/// Returns `true` when the value places no constraint on rows.
	///
	/// Empty values match everything; the filter UI keeps them around so a
	/// half-cleared input does not hide the whole table.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::FilterValue;
	///
	/// assert!(FilterValue::Text(String::new()).is_empty());
	/// assert!(FilterValue::Range(None, None).is_empty());
	/// assert!(FilterValue::Selection(vec![]).is_empty());
	/// assert!(!FilterValue::Bool(false).is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		match self {
			FilterValue::Text(text) => text.is_empty(),
			FilterValue::Range(lower, upper) => lower.is_none() && upper.is_none(),
			FilterValue::Selection(options) => options.is_empty(),
			FilterValue::Bool(_) => false,
			FilterValue::Date(date) => date.is_none(),
			FilterValue::DateRange(from, to) => from.is_none() && to.is_none(),
		}
	}
}

/// One column's active filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
	/// Column id the filter applies to
	pub id: String,
	/// The sanitized filter value
	pub value: FilterValue,
}

impl ColumnFilter {
	/// Creates a new column filter
	pub fn new(id: impl Into<String>, value: FilterValue) -> Self {
		Self {
			id: id.into(),
			value,
		}
	}
}

/// One option in a select/multi-select filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
	/// Stored value compared against the row field
	pub value: String,
	/// Display label
	pub label: String,
}

impl SelectOption {
	/// Creates a new select option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Per-column filter configuration
///
/// `field` is the dotted path used to read the row's comparison value. It is
/// mandatory for every kind except [`FilterKind::Custom`], whose rendering is
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
	/// Filter kind
	pub kind: FilterKind,
	/// Dotted path to the row's comparison value
	pub field: Option<String>,
	/// Input placeholder text
	pub placeholder: Option<String>,
	/// Options for select/multi-select kinds
	pub options: Vec<SelectOption>,
	/// Declared numeric bounds for range kinds
	pub numeric_bounds: Option<(f64, f64)>,
}

impl FilterSpec {
	/// Creates a filter spec of the given kind reading `field`.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::{FilterKind, FilterSpec};
	///
	/// let spec = FilterSpec::new(FilterKind::Range, "stats.age");
	/// assert_eq!(spec.field.as_deref(), Some("stats.age"));
	/// ```
	pub fn new(kind: FilterKind, field: impl Into<String>) -> Self {
		Self {
			kind,
			field: Some(field.into()),
			placeholder: None,
			options: Vec::new(),
			numeric_bounds: None,
		}
	}

	/// Creates a custom filter spec (no field; rendering is caller-supplied)
	pub fn custom() -> Self {
		Self {
			kind: FilterKind::Custom,
			field: None,
			placeholder: None,
			options: Vec::new(),
			numeric_bounds: None,
		}
	}

	/// Sets the input placeholder
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the option list for select kinds
	pub fn options(mut self, options: Vec<SelectOption>) -> Self {
		self.options = options;
		self
	}

	/// Sets declared numeric bounds for range kinds
	pub fn numeric_bounds(mut self, min: f64, max: f64) -> Self {
		self.numeric_bounds = Some((min, max));
		self
	}
}
