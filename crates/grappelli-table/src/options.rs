//! Declarative table configuration
//!
//! `TableOptions` is built fresh by the caller for each table instance and
//! consumed by [`Table::new`](crate::Table::new); the orchestrator never
//! mutates it. Every stateful feature carries an optional controlled pair
//! resolved into a state slot at construction.

use grappelli_core::{
	ColumnDefinition, ColumnFilter, LazyLoadEvent, PaginationState, SortEntry,
};
use grappelli_i18n::TranslationTable;
use grappelli_pagination::WindowMode;
use grappelli_state::DEFAULT_DEBOUNCE;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// An optional caller-owned value/setter pair for one state slot.
///
/// Supplying a value makes the slot controlled: the caller owns the state and
/// the setter is the sole mutation path. Left empty, the slot is owned
/// internally by the table.
pub struct Controlled<V> {
	pub value: Option<V>,
	pub on_change: Option<Rc<dyn Fn(V)>>,
}

impl<V> Controlled<V> {
	pub fn new(value: V, on_change: impl Fn(V) + 'static) -> Self {
		Self {
			value: Some(value),
			on_change: Some(Rc::new(on_change)),
		}
	}
}

impl<V> Default for Controlled<V> {
	fn default() -> Self {
		Self {
			value: None,
			on_change: None,
		}
	}
}

impl<V: Clone> Clone for Controlled<V> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
			on_change: self.on_change.clone(),
		}
	}
}

impl<V: fmt::Debug> fmt::Debug for Controlled<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Controlled")
			.field("value", &self.value)
			.field("controlled", &self.value.is_some())
			.finish_non_exhaustive()
	}
}

/// Full declarative configuration for one table instance
///
/// # Examples
///
/// ```
/// use grappelli_core::ColumnDefinition;
/// use grappelli_table::TableOptions;
/// use serde_json::{json, Value};
///
/// let options: TableOptions<Value> = TableOptions::new(
///     vec![json!({"name": "Django"})],
///     vec![ColumnDefinition::field("name", "Name")],
/// )
/// .paginated(true)
/// .locale("fr");
/// ```
pub struct TableOptions<R> {
	pub(crate) rows: Vec<R>,
	pub(crate) columns: Vec<ColumnDefinition<R>>,

	pub(crate) filterable: bool,
	pub(crate) reorderable: bool,
	pub(crate) resizable: bool,
	pub(crate) paginated: bool,
	pub(crate) selectable: bool,
	pub(crate) lazy: bool,

	pub(crate) window_mode: WindowMode,
	pub(crate) max_visible_pages: usize,
	pub(crate) debounce: Duration,

	pub(crate) column_filters: Controlled<Vec<ColumnFilter>>,
	pub(crate) sorting: Controlled<Vec<SortEntry>>,
	pub(crate) pagination: Controlled<PaginationState>,
	pub(crate) visibility: Controlled<HashMap<String, bool>>,
	pub(crate) column_order: Controlled<Vec<String>>,
	pub(crate) global_filter: Controlled<String>,
	pub(crate) row_selection: Controlled<BTreeSet<String>>,
	pub(crate) column_sizing: Controlled<HashMap<String, f64>>,
	pub(crate) filter_panel_visible: Controlled<bool>,

	pub(crate) on_lazy_load: Option<Rc<dyn Fn(LazyLoadEvent)>>,
	pub(crate) translations: Option<TranslationTable>,
	pub(crate) locale: Option<String>,
}

impl<R> TableOptions<R> {
	/// Creates options over the given rows and columns
	pub fn new(rows: Vec<R>, columns: Vec<ColumnDefinition<R>>) -> Self {
		Self {
			rows,
			columns,
			filterable: true,
			reorderable: false,
			resizable: false,
			paginated: false,
			selectable: false,
			lazy: false,
			window_mode: WindowMode::default(),
			max_visible_pages: 5,
			debounce: DEFAULT_DEBOUNCE,
			column_filters: Controlled::default(),
			sorting: Controlled::default(),
			pagination: Controlled::default(),
			visibility: Controlled::default(),
			column_order: Controlled::default(),
			global_filter: Controlled::default(),
			row_selection: Controlled::default(),
			column_sizing: Controlled::default(),
			filter_panel_visible: Controlled::default(),
			on_lazy_load: None,
			translations: None,
			locale: None,
		}
	}

	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	pub fn reorderable(mut self, reorderable: bool) -> Self {
		self.reorderable = reorderable;
		self
	}

	pub fn resizable(mut self, resizable: bool) -> Self {
		self.resizable = resizable;
		self
	}

	pub fn paginated(mut self, paginated: bool) -> Self {
		self.paginated = paginated;
		self
	}

	pub fn selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	/// Delegates filtering and sorting to the caller; rows are rendered as
	/// given and validated intent is delivered via [`on_lazy_load`](Self::on_lazy_load).
	pub fn lazy(mut self, lazy: bool) -> Self {
		self.lazy = lazy;
		self
	}

	pub fn window_mode(mut self, mode: WindowMode) -> Self {
		self.window_mode = mode;
		self
	}

	pub fn max_visible_pages(mut self, max: usize) -> Self {
		self.max_visible_pages = max;
		self
	}

	/// Quiet period for the global-filter input
	pub fn debounce(mut self, delay: Duration) -> Self {
		self.debounce = delay;
		self
	}

	pub fn on_lazy_load(mut self, loader: impl Fn(LazyLoadEvent) + 'static) -> Self {
		self.on_lazy_load = Some(Rc::new(loader));
		self
	}

	/// Supplies an explicit translation table (takes precedence over `locale`)
	pub fn translations(mut self, table: TranslationTable) -> Self {
		self.translations = Some(table);
		self
	}

	/// Picks a bundled locale for UI labels
	pub fn locale(mut self, code: impl Into<String>) -> Self {
		self.locale = Some(code.into());
		self
	}

	pub fn controlled_column_filters(mut self, pair: Controlled<Vec<ColumnFilter>>) -> Self {
		self.column_filters = pair;
		self
	}

	pub fn controlled_sorting(mut self, pair: Controlled<Vec<SortEntry>>) -> Self {
		self.sorting = pair;
		self
	}

	pub fn controlled_pagination(mut self, pair: Controlled<PaginationState>) -> Self {
		self.pagination = pair;
		self
	}

	pub fn controlled_visibility(mut self, pair: Controlled<HashMap<String, bool>>) -> Self {
		self.visibility = pair;
		self
	}

	pub fn controlled_column_order(mut self, pair: Controlled<Vec<String>>) -> Self {
		self.column_order = pair;
		self
	}

	pub fn controlled_global_filter(mut self, pair: Controlled<String>) -> Self {
		self.global_filter = pair;
		self
	}

	pub fn controlled_row_selection(mut self, pair: Controlled<BTreeSet<String>>) -> Self {
		self.row_selection = pair;
		self
	}

	pub fn controlled_column_sizing(mut self, pair: Controlled<HashMap<String, f64>>) -> Self {
		self.column_sizing = pair;
		self
	}

	pub fn controlled_filter_panel(mut self, pair: Controlled<bool>) -> Self {
		self.filter_panel_visible = pair;
		self
	}
}

impl<R> fmt::Debug for TableOptions<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableOptions")
			.field("rows", &self.rows.len())
			.field("columns", &self.columns.len())
			.field("lazy", &self.lazy)
			.field("paginated", &self.paginated)
			.field("window_mode", &self.window_mode)
			.finish_non_exhaustive()
	}
}
