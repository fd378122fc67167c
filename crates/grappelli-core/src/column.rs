//! Column definitions
//!
//! A column has exactly one accessor: a dotted field path, a derivation
//! function, or a group of child columns. This is enforced by construction
//! rather than validation.

use crate::filter::FilterSpec;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// Column sizing constraints in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConstraints {
	/// Minimum width
	pub min: f64,
	/// Default width
	pub default: f64,
	/// Maximum width
	pub max: f64,
}

impl Default for SizingConstraints {
	fn default() -> Self {
		Self {
			min: 40.0,
			default: 150.0,
			max: 600.0,
		}
	}
}

impl SizingConstraints {
	/// Clamps a requested width into the allowed range
	pub fn clamp(&self, width: f64) -> f64 {
		if width.is_nan() {
			return self.default;
		}
		width.clamp(self.min, self.max)
	}
}

/// How a column reads its cell value from a row
pub enum ColumnAccessor<R> {
	/// Dotted path into the row
	Field(String),
	/// Derivation function over the row
	Derived(Rc<dyn Fn(&R) -> Value>),
	/// Group of child columns (the column itself carries no data)
	Group(Vec<ColumnDefinition<R>>),
}

// Manual impl: `R` itself need not be `Clone` for definitions to be cloneable.
impl<R> Clone for ColumnAccessor<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Field(path) => Self::Field(path.clone()),
			Self::Derived(derive) => Self::Derived(Rc::clone(derive)),
			Self::Group(children) => Self::Group(children.clone()),
		}
	}
}

impl<R> fmt::Debug for ColumnAccessor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(path) => f.debug_tuple("Field").field(path).finish(),
			Self::Derived(_) => f.write_str("Derived(..)"),
			Self::Group(children) => f.debug_tuple("Group").field(&children.len()).finish(),
		}
	}
}

/// One column's declarative configuration
///
/// # Examples
///
/// ```
/// use grappelli_core::{ColumnDefinition, FilterKind, FilterSpec};
/// use serde_json::Value;
///
/// let column: ColumnDefinition<Value> = ColumnDefinition::field("user.age", "Age")
///     .filter(FilterSpec::new(FilterKind::Range, "user.age"))
///     .widths(60.0, 90.0, 200.0);
///
/// assert_eq!(column.id(), "user.age");
/// assert!(column.filter_spec().is_some());
/// ```
pub struct ColumnDefinition<R> {
	id: String,
	header: String,
	accessor: ColumnAccessor<R>,
	filter: Option<FilterSpec>,
	sizing: SizingConstraints,
	sortable: bool,
	reorderable: bool,
	visible_by_default: bool,
}

impl<R> fmt::Debug for ColumnDefinition<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDefinition")
			.field("id", &self.id)
			.field("header", &self.header)
			.field("accessor", &self.accessor)
			.field("filter", &self.filter)
			.field("sortable", &self.sortable)
			.field("reorderable", &self.reorderable)
			.finish_non_exhaustive()
	}
}

impl<R> Clone for ColumnDefinition<R> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			header: self.header.clone(),
			accessor: self.accessor.clone(),
			filter: self.filter.clone(),
			sizing: self.sizing,
			sortable: self.sortable,
			reorderable: self.reorderable,
			visible_by_default: self.visible_by_default,
		}
	}
}

impl<R> ColumnDefinition<R> {
	fn with_accessor(id: String, header: String, accessor: ColumnAccessor<R>) -> Self {
		Self {
			id,
			header,
			accessor,
			filter: None,
			sizing: SizingConstraints::default(),
			sortable: true,
			reorderable: true,
			visible_by_default: true,
		}
	}

	/// Creates a column reading the dotted `path`; the path doubles as the id
	pub fn field(path: impl Into<String>, header: impl Into<String>) -> Self {
		let path = path.into();
		Self::with_accessor(path.clone(), header.into(), ColumnAccessor::Field(path))
	}

	/// Creates a column computing its value with `derive`
	pub fn derived(
		id: impl Into<String>,
		header: impl Into<String>,
		derive: impl Fn(&R) -> Value + 'static,
	) -> Self {
		Self::with_accessor(
			id.into(),
			header.into(),
			ColumnAccessor::Derived(Rc::new(derive)),
		)
	}

	/// Creates a header-group column over `children`
	pub fn group(
		id: impl Into<String>,
		header: impl Into<String>,
		children: Vec<ColumnDefinition<R>>,
	) -> Self {
		let mut column =
			Self::with_accessor(id.into(), header.into(), ColumnAccessor::Group(children));
		column.sortable = false;
		column
	}

	/// Attaches a filter spec
	pub fn filter(mut self, spec: FilterSpec) -> Self {
		self.filter = Some(spec);
		self
	}

	/// Sets min/default/max widths
	pub fn widths(mut self, min: f64, default: f64, max: f64) -> Self {
		self.sizing = SizingConstraints { min, default, max };
		self
	}

	/// Sets whether the column participates in sorting
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the column may be dragged to a new position.
	///
	/// Pinned columns (a selection checkbox, for instance) set this to
	/// `false` and are excluded from reorder computations.
	pub fn reorderable(mut self, reorderable: bool) -> Self {
		self.reorderable = reorderable;
		self
	}

	/// Sets whether the column starts visible
	pub fn visible_by_default(mut self, visible: bool) -> Self {
		self.visible_by_default = visible;
		self
	}

	/// Column id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Header text
	pub fn header(&self) -> &str {
		&self.header
	}

	/// The column's accessor
	pub fn accessor(&self) -> &ColumnAccessor<R> {
		&self.accessor
	}

	/// Attached filter spec, if any
	pub fn filter_spec(&self) -> Option<&FilterSpec> {
		self.filter.as_ref()
	}

	/// Sizing constraints
	pub fn sizing(&self) -> SizingConstraints {
		self.sizing
	}

	/// Whether the column participates in sorting
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether the column may be reordered
	pub fn is_reorderable(&self) -> bool {
		self.reorderable
	}

	/// Whether the column starts visible
	pub fn is_visible_by_default(&self) -> bool {
		self.visible_by_default
	}

	/// Leaf columns in definition order (groups flattened)
	pub fn leaves(&self) -> Vec<&ColumnDefinition<R>> {
		match &self.accessor {
			ColumnAccessor::Group(children) => {
				children.iter().flat_map(|child| child.leaves()).collect()
			}
			_ => vec![self],
		}
	}
}

impl<R> ColumnDefinition<R>
where
	R: crate::row::RowAccess,
{
	/// Reads this column's cell value from `row`
	///
	/// Group columns carry no data and always yield `None`.
	pub fn cell_value(&self, row: &R) -> Option<Value> {
		match &self.accessor {
			ColumnAccessor::Field(path) => row.field(path),
			ColumnAccessor::Derived(derive) => Some(derive(row)),
			ColumnAccessor::Group(_) => None,
		}
	}
}
