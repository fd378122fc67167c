//! The table orchestrator
//!
//! Wires the state slots, sanitizers, filter predicates, fuzzy scorer,
//! pagination windower and translator into one instance per rendered table.
//! Every setter routes untrusted input through `grappelli-sanitize` before it
//! reaches a state slot.

use crate::options::TableOptions;
use grappelli_core::{
	ColumnDefinition, ColumnFilter, FilterValue, LazyLoadEvent, PaginationState, RowAccess,
	SortEntry, TableError, TableResult,
};
use grappelli_filters::{matches, FuzzyScorer};
use grappelli_i18n::{bundled_locale, Translator};
use grappelli_pagination::{visible_pages, PageItem, Paginator, WindowMode};
use grappelli_sanitize::{
	sanitize_filter_value, sanitize_search_text, validate_pagination, validate_sorting,
};
use grappelli_state::{DebouncedInput, StateSlot};
use grappelli_throttling::RateLimiter;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

/// Lazy-load deliveries admitted per second per table instance
const LAZY_EVENT_LIMIT: usize = 10;
/// Global-filter settlements admitted per second per input
const INPUT_SETTLE_LIMIT: usize = 10;
const LIMIT_WINDOW: Duration = Duration::from_secs(1);
const LAZY_EVENT_KEY: &str = "lazy-load";

/// One rendered table instance.
///
/// Owns a state slot per stateful feature, its own rate limiter and its own
/// bound translator; nothing is shared across instances.
///
/// # Examples
///
/// ```
/// use grappelli_core::ColumnDefinition;
/// use grappelli_table::{Table, TableOptions};
/// use serde_json::{json, Value};
///
/// let rows = vec![json!({"name": "Django"}), json!({"name": "Stéphane"})];
/// let columns: Vec<ColumnDefinition<Value>> =
///     vec![ColumnDefinition::field("name", "Name")];
/// let table = Table::new(TableOptions::new(rows, columns)).unwrap();
///
/// table.set_global_filter("dja");
/// assert_eq!(table.row_model().len(), 1);
/// ```
pub struct Table<R> {
	rows: Vec<R>,
	columns: Vec<ColumnDefinition<R>>,

	filterable: bool,
	reorderable: bool,
	resizable: bool,
	paginated: bool,
	selectable: bool,
	lazy: bool,

	window_mode: WindowMode,
	max_visible_pages: usize,
	debounce: Duration,

	column_filters: StateSlot<Vec<ColumnFilter>>,
	sorting: StateSlot<Vec<SortEntry>>,
	pagination: StateSlot<PaginationState>,
	visibility: StateSlot<HashMap<String, bool>>,
	column_order: StateSlot<Vec<String>>,
	global_filter: StateSlot<String>,
	row_selection: StateSlot<BTreeSet<String>>,
	column_sizing: StateSlot<HashMap<String, f64>>,
	filter_panel_visible: StateSlot<bool>,

	scorer: FuzzyScorer,
	limiter: RateLimiter,
	translator: Translator,
	on_lazy_load: Option<Rc<dyn Fn(LazyLoadEvent)>>,
}

impl<R> Table<R>
where
	R: RowAccess + Clone,
{
	/// Builds a table from its options.
	///
	/// An empty column set is a structural misconfiguration: the table cannot
	/// render anything meaningful, so construction fails (the caller renders
	/// a placeholder) and a warning is logged.
	pub fn new(options: TableOptions<R>) -> TableResult<Self> {
		if options.columns.is_empty() {
			tracing::warn!("table configured without columns; rendering a placeholder");
			return Err(TableError::InvalidConfiguration(
				"columns must not be empty".to_string(),
			));
		}

		let leaf_ids: Vec<String> = options
			.columns
			.iter()
			.flat_map(|column| column.leaves())
			.map(|leaf| leaf.id().to_string())
			.collect();
		let visibility_seed: HashMap<String, bool> = options
			.columns
			.iter()
			.flat_map(|column| column.leaves())
			.map(|leaf| (leaf.id().to_string(), leaf.is_visible_by_default()))
			.collect();
		let sizing_seed: HashMap<String, f64> = options
			.columns
			.iter()
			.flat_map(|column| column.leaves())
			.map(|leaf| (leaf.id().to_string(), leaf.sizing().default))
			.collect();

		let table = options
			.translations
			.or_else(|| {
				options
					.locale
					.as_deref()
					.and_then(bundled_locale)
					.cloned()
			})
			.or_else(|| bundled_locale("en").cloned())
			.unwrap_or_default();

		Ok(Self {
			rows: options.rows,
			columns: options.columns,
			filterable: options.filterable,
			reorderable: options.reorderable,
			resizable: options.resizable,
			paginated: options.paginated,
			selectable: options.selectable,
			lazy: options.lazy,
			window_mode: options.window_mode,
			max_visible_pages: options.max_visible_pages,
			debounce: options.debounce,
			column_filters: StateSlot::new(
				options.column_filters.value,
				options.column_filters.on_change,
				Vec::new(),
			),
			sorting: StateSlot::new(options.sorting.value, options.sorting.on_change, Vec::new()),
			pagination: StateSlot::new(
				options.pagination.value,
				options.pagination.on_change,
				PaginationState::default(),
			),
			visibility: StateSlot::new(
				options.visibility.value,
				options.visibility.on_change,
				visibility_seed,
			),
			column_order: StateSlot::new(
				options.column_order.value,
				options.column_order.on_change,
				leaf_ids,
			),
			global_filter: StateSlot::new(
				options.global_filter.value,
				options.global_filter.on_change,
				String::new(),
			),
			row_selection: StateSlot::new(
				options.row_selection.value,
				options.row_selection.on_change,
				BTreeSet::new(),
			),
			column_sizing: StateSlot::new(
				options.column_sizing.value,
				options.column_sizing.on_change,
				sizing_seed,
			),
			filter_panel_visible: StateSlot::new(
				options.filter_panel_visible.value,
				options.filter_panel_visible.on_change,
				false,
			),
			scorer: FuzzyScorer::new(),
			limiter: RateLimiter::new(LAZY_EVENT_LIMIT, LIMIT_WINDOW),
			translator: Translator::bind(table),
			on_lazy_load: options.on_lazy_load,
		})
	}

	/// Resolves the rows to render.
	///
	/// Non-lazy tables apply the column filters, then the fuzzy global
	/// filter, then sorting (rank order while a global filter is active,
	/// column sort otherwise), then the page slice. Lazy tables render their
	/// rows exactly as given.
	pub fn row_model(&self) -> Vec<R> {
		let mut rows = self.unpaged_model();
		if self.paginated && !self.lazy {
			let paginator = Paginator::from_state(self.pagination.get(), rows.len());
			rows = rows.drain(paginator.page_range()).collect();
		}
		rows
	}

	fn unpaged_model(&self) -> Vec<R> {
		let mut rows = self.rows.clone();
		if self.lazy {
			return rows;
		}
		if self.filterable {
			let filters = self.column_filters.get();
			rows.retain(|row| {
				filters
					.iter()
					.all(|filter| self.row_matches_filter(row, filter))
			});
		}
		let needle = self.global_filter.get();
		if needle.is_empty() {
			self.apply_sorting(&mut rows);
		} else {
			self.scorer
				.rank_rows(&mut rows, &needle, |row| self.row_haystack(row));
		}
		rows
	}

	fn row_matches_filter(&self, row: &R, filter: &ColumnFilter) -> bool {
		// A filter for a column that no longer exists fails open.
		let Some(column) = self.leaf_column(&filter.id) else {
			return true;
		};
		let kind = column.filter_spec().map(|spec| spec.kind).unwrap_or_default();
		let value = match column.filter_spec().and_then(|spec| spec.field.as_deref()) {
			Some(path) => row.field(path),
			None => column.cell_value(row),
		};
		matches(value.as_ref(), &filter.value, kind)
	}

	fn row_haystack(&self, row: &R) -> String {
		self.visible_columns()
			.iter()
			.filter_map(|column| column.cell_value(row))
			.map(|value| stringify(&value))
			.collect::<Vec<_>>()
			.join(" ")
	}

	fn apply_sorting(&self, rows: &mut [R]) {
		let entries = self.sorting.get();
		if entries.is_empty() {
			return;
		}
		rows.sort_by(|a, b| {
			for entry in &entries {
				let Some(column) = self.leaf_column(&entry.id) else {
					continue;
				};
				let ordering = cmp_cell_values(column.cell_value(a), column.cell_value(b));
				let ordering = if entry.desc { ordering.reverse() } else { ordering };
				if ordering != Ordering::Equal {
					return ordering;
				}
			}
			Ordering::Equal
		});
	}

	// ----- filters and search -----

	/// Sanitizes and stores the global filter text
	pub fn set_global_filter(&self, raw: &str) {
		self.global_filter.set(sanitize_search_text(raw));
	}

	pub fn global_filter(&self) -> String {
		self.global_filter.get()
	}

	/// A debounced input wired to the global filter slot.
	///
	/// Keystrokes go in raw; the sanitized value lands in the slot once the
	/// quiet period elapses and the rate check admits it.
	pub fn global_filter_input(&self) -> DebouncedInput {
		let slot = self.global_filter.clone();
		DebouncedInput::new(
			self.debounce,
			RateLimiter::new(INPUT_SETTLE_LIMIT, LIMIT_WINDOW),
			move |value| slot.set(value),
		)
	}

	/// Sanitizes and stores one column's filter value.
	///
	/// An empty sanitized value clears the column's filter.
	pub fn set_column_filter(&self, id: &str, value: FilterValue) -> TableResult<()> {
		let Some(column) = self.leaf_column(id) else {
			tracing::warn!(column = id, "filter set on an unknown column");
			return Err(TableError::UnknownColumn(id.to_string()));
		};
		let kind = column.filter_spec().map(|spec| spec.kind).unwrap_or_default();
		let sanitized = sanitize_filter_value(value, kind);
		let id = id.to_string();
		self.column_filters.update(|filters| {
			let mut filters: Vec<ColumnFilter> = filters
				.iter()
				.filter(|filter| filter.id != id)
				.cloned()
				.collect();
			if !sanitized.is_empty() {
				filters.push(ColumnFilter::new(id.clone(), sanitized.clone()));
			}
			filters
		});
		Ok(())
	}

	pub fn column_filters(&self) -> Vec<ColumnFilter> {
		self.column_filters.get()
	}

	pub fn set_filter_panel_visible(&self, visible: bool) {
		self.filter_panel_visible.set(visible);
	}

	pub fn is_filter_panel_visible(&self) -> bool {
		self.filter_panel_visible.get()
	}

	// ----- sorting -----

	/// Validates and stores a sort list
	pub fn set_sorting(&self, sorting: Vec<SortEntry>) {
		self.sorting.set(validate_sorting(sorting));
	}

	pub fn sorting(&self) -> Vec<SortEntry> {
		self.sorting.get()
	}

	/// Cycles a column through ascending, descending, unsorted
	pub fn toggle_sort(&self, id: &str) -> TableResult<()> {
		let Some(column) = self.leaf_column(id) else {
			tracing::warn!(column = id, "sort toggled on an unknown column");
			return Err(TableError::UnknownColumn(id.to_string()));
		};
		if !column.is_sortable() {
			return Ok(());
		}
		let id = id.to_string();
		self.sorting.update(|entries| {
			let mut next: Vec<SortEntry> = Vec::with_capacity(entries.len() + 1);
			let mut seen = false;
			for entry in entries {
				if entry.id == id {
					seen = true;
					if !entry.desc {
						next.push(entry.toggled());
					}
					// Descending toggles off.
				} else {
					next.push(entry.clone());
				}
			}
			if !seen {
				next.push(SortEntry::asc(id.clone()));
			}
			next
		});
		Ok(())
	}

	// ----- pagination -----

	/// Clamps and stores pagination parameters
	pub fn set_pagination(&self, page_index: f64, page_size: f64) {
		self.pagination.set(validate_pagination(page_index, page_size));
	}

	pub fn pagination(&self) -> PaginationState {
		self.pagination.get()
	}

	/// Paginator over the current (pre-slice) row set
	pub fn paginator(&self) -> Paginator {
		let total = if self.lazy {
			self.rows.len()
		} else {
			self.unpaged_model().len()
		};
		Paginator::from_state(self.pagination.get(), total)
	}

	/// The visible page-number window for the pager
	pub fn page_items(&self) -> Vec<PageItem> {
		let paginator = self.paginator();
		visible_pages(
			self.window_mode,
			paginator.page_index(),
			paginator.total_pages(),
			self.max_visible_pages,
		)
	}

	// ----- columns: order, sizing, visibility -----

	/// Moves `active_id` to `over_id`'s position in the column order.
	///
	/// Pinned (non-reorderable) columns keep their positions and cannot be
	/// moved or displaced. An id missing from the movable order aborts the
	/// reorder without mutating state.
	pub fn commit_reorder(&self, active_id: &str, over_id: &str) -> TableResult<()> {
		// Reordering disabled: the capability is a synchronous no-op.
		if !self.reorderable {
			return Ok(());
		}
		let order = self.column_order.get();
		let movable_id = |id: &str| {
			self.leaf_column(id)
				.map(|column| column.is_reorderable())
				.unwrap_or(false)
		};
		let pinned: Vec<(usize, String)> = order
			.iter()
			.enumerate()
			.filter(|(_, id)| !movable_id(id))
			.map(|(index, id)| (index, id.clone()))
			.collect();
		let mut movable: Vec<String> = order
			.iter()
			.filter(|id| movable_id(id))
			.cloned()
			.collect();

		let Some(from) = movable.iter().position(|id| id == active_id) else {
			tracing::warn!(column = active_id, "reorder aborted: unresolvable active id");
			return Err(TableError::ReorderAborted(active_id.to_string()));
		};
		let Some(to) = movable.iter().position(|id| id == over_id) else {
			tracing::warn!(column = over_id, "reorder aborted: unresolvable over id");
			return Err(TableError::ReorderAborted(over_id.to_string()));
		};

		let moved = movable.remove(from);
		movable.insert(to, moved);

		let mut next = movable;
		for (index, id) in pinned {
			next.insert(index.min(next.len()), id);
		}
		self.column_order.set(next);
		Ok(())
	}

	pub fn column_order(&self) -> Vec<String> {
		self.column_order.get()
	}

	/// Stores a column width clamped to the column's sizing constraints
	pub fn resize_column(&self, id: &str, width: f64) -> TableResult<()> {
		if !self.resizable {
			return Ok(());
		}
		let Some(column) = self.leaf_column(id) else {
			tracing::warn!(column = id, "resize of an unknown column");
			return Err(TableError::UnknownColumn(id.to_string()));
		};
		let clamped = column.sizing().clamp(width);
		let id = id.to_string();
		self.column_sizing.update(|sizing| {
			let mut sizing = sizing.clone();
			sizing.insert(id.clone(), clamped);
			sizing
		});
		Ok(())
	}

	/// Current width of a column (its default when never resized)
	pub fn column_width(&self, id: &str) -> f64 {
		self.column_sizing
			.get()
			.get(id)
			.copied()
			.unwrap_or_else(|| {
				self.leaf_column(id)
					.map(|column| column.sizing().default)
					.unwrap_or_default()
			})
	}

	pub fn toggle_visibility(&self, id: &str) -> TableResult<()> {
		if self.leaf_column(id).is_none() {
			tracing::warn!(column = id, "visibility toggled on an unknown column");
			return Err(TableError::UnknownColumn(id.to_string()));
		}
		let id = id.to_string();
		self.visibility.update(|visibility| {
			let mut visibility = visibility.clone();
			let current = visibility.get(&id).copied().unwrap_or(true);
			visibility.insert(id.clone(), !current);
			visibility
		});
		Ok(())
	}

	/// Leaf columns in display order, hidden columns excluded
	pub fn visible_columns(&self) -> Vec<&ColumnDefinition<R>> {
		let visibility = self.visibility.get();
		self.column_order
			.get()
			.iter()
			.filter(|id| visibility.get(*id).copied().unwrap_or(true))
			.filter_map(|id| self.leaf_column(id))
			.collect()
	}

	// ----- selection -----

	pub fn toggle_row_selection(&self, key: &str) {
		if !self.selectable {
			return;
		}
		let key = key.to_string();
		self.row_selection.update(|selection| {
			let mut selection = selection.clone();
			if !selection.remove(&key) {
				selection.insert(key.clone());
			}
			selection
		});
	}

	pub fn is_selected(&self, key: &str) -> bool {
		self.row_selection.get().contains(key)
	}

	pub fn selected_keys(&self) -> BTreeSet<String> {
		self.row_selection.get()
	}

	// ----- lazy mode -----

	/// Snapshot of the table's validated intent for a server-driven loader
	pub fn lazy_event(&self) -> LazyLoadEvent {
		let pagination = self.pagination.get();
		LazyLoadEvent {
			first: pagination.first_row(),
			rows: pagination.page_size,
			filters: self.column_filters.get(),
			global_filter: self.global_filter.get(),
			sorting: self.sorting.get(),
			page: pagination.page_index,
		}
	}

	/// Delivers the current lazy-load event to the loader, rate-limited.
	///
	/// Returns `true` when the event was delivered. A denied rate check or a
	/// non-lazy table drops the event with a warning.
	pub fn notify_lazy(&self) -> bool {
		if !self.lazy {
			return false;
		}
		let Some(loader) = &self.on_lazy_load else {
			return false;
		};
		if !self.limiter.is_allowed(LAZY_EVENT_KEY) {
			tracing::warn!("lazy-load event dropped by rate limiter");
			return false;
		}
		loader(self.lazy_event());
		true
	}

	// ----- faceting and labels -----

	/// Distinct stringified values observed in a column, sorted
	pub fn faceted_unique_values(&self, id: &str) -> Vec<String> {
		let Some(column) = self.leaf_column(id) else {
			return Vec::new();
		};
		let mut values: Vec<String> = self
			.rows
			.iter()
			.filter_map(|row| column.cell_value(row))
			.filter(|value| !value.is_null())
			.map(|value| stringify(&value))
			.collect();
		values.sort();
		values.dedup();
		values
	}

	/// Minimum and maximum numeric value observed in a column
	pub fn faceted_min_max(&self, id: &str) -> Option<(f64, f64)> {
		let column = self.leaf_column(id)?;
		let mut bounds: Option<(f64, f64)> = None;
		for row in &self.rows {
			let Some(number) = column.cell_value(row).and_then(|value| value.as_f64()) else {
				continue;
			};
			bounds = Some(match bounds {
				Some((min, max)) => (min.min(number), max.max(number)),
				None => (number, number),
			});
		}
		bounds
	}

	/// A UI label via the bound translator
	pub fn label(&self, path: &str) -> String {
		self.translator.get(path)
	}

	/// A UI label with `{placeholder}` interpolation
	pub fn label_with(&self, path: &str, values: &[(&str, &str)]) -> String {
		self.translator.get_with(path, values)
	}

	fn leaf_column(&self, id: &str) -> Option<&ColumnDefinition<R>> {
		self.columns
			.iter()
			.flat_map(|column| column.leaves())
			.find(|leaf| leaf.id() == id)
	}
}

fn stringify(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Null and missing values sort first; numbers sort numerically, strings
/// case-insensitively, everything else by stringified value.
fn cmp_cell_values(a: Option<Value>, b: Option<Value>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => match (&a, &b) {
			(Value::Null, Value::Null) => Ordering::Equal,
			(Value::Null, _) => Ordering::Less,
			(_, Value::Null) => Ordering::Greater,
			(Value::Number(a), Value::Number(b)) => a
				.as_f64()
				.unwrap_or_default()
				.total_cmp(&b.as_f64().unwrap_or_default()),
			(Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
			(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
			_ => stringify(&a).cmp(&stringify(&b)),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn people() -> Vec<Value> {
		vec![
			json!({"firstName": "Joanna", "age": 34}),
			json!({"firstName": "Pierre", "age": 51}),
			json!({"firstName": "Jo", "age": 28}),
		]
	}

	fn columns() -> Vec<ColumnDefinition<Value>> {
		vec![
			ColumnDefinition::field("firstName", "First name"),
			ColumnDefinition::field("age", "Age"),
		]
	}

	#[rstest]
	fn test_empty_columns_fail_construction() {
		let result = Table::new(TableOptions::new(people(), Vec::new()));
		assert!(matches!(
			result,
			Err(TableError::InvalidConfiguration(_))
		));
	}

	#[rstest]
	fn test_global_filter_is_sanitized_on_set() {
		let table = Table::new(TableOptions::new(people(), columns())).unwrap();
		table.set_global_filter("  jo'; <b>  ");
		assert_eq!(table.global_filter(), "jo");
	}

	#[rstest]
	fn test_sorting_orders_rows() {
		let table = Table::new(TableOptions::new(people(), columns())).unwrap();
		table.set_sorting(vec![SortEntry::desc("age")]);
		let ages: Vec<i64> = table
			.row_model()
			.iter()
			.map(|row| row["age"].as_i64().unwrap())
			.collect();
		assert_eq!(ages, vec![51, 34, 28]);
	}

	#[rstest]
	fn test_toggle_sort_cycles_through_states() {
		let table = Table::new(TableOptions::new(people(), columns())).unwrap();

		table.toggle_sort("age").unwrap();
		assert_eq!(table.sorting(), vec![SortEntry::asc("age")]);

		table.toggle_sort("age").unwrap();
		assert_eq!(table.sorting(), vec![SortEntry::desc("age")]);

		table.toggle_sort("age").unwrap();
		assert!(table.sorting().is_empty());
	}

	#[rstest]
	fn test_reorder_moves_active_to_over_position() {
		let table =
			Table::new(TableOptions::new(people(), columns()).reorderable(true)).unwrap();
		table.commit_reorder("firstName", "age").unwrap();
		assert_eq!(table.column_order(), vec!["age", "firstName"]);
	}

	#[rstest]
	fn test_reorder_aborts_on_unknown_id_without_mutation() {
		let table =
			Table::new(TableOptions::new(people(), columns()).reorderable(true)).unwrap();
		let before = table.column_order();

		let result = table.commit_reorder("ghost", "age");

		assert!(matches!(result, Err(TableError::ReorderAborted(_))));
		assert_eq!(table.column_order(), before);
	}

	#[rstest]
	fn test_reorder_skips_pinned_columns() {
		// Arrange - a pinned selection column at index 0
		let columns = vec![
			ColumnDefinition::<Value>::field("select", "").reorderable(false),
			ColumnDefinition::field("firstName", "First name"),
			ColumnDefinition::field("age", "Age"),
		];
		let table =
			Table::new(TableOptions::new(people(), columns).reorderable(true)).unwrap();

		// Act
		table.commit_reorder("firstName", "age").unwrap();

		// Assert - the pinned column kept its slot
		assert_eq!(table.column_order(), vec!["select", "age", "firstName"]);
		assert!(matches!(
			table.commit_reorder("select", "age"),
			Err(TableError::ReorderAborted(_))
		));
	}

	#[rstest]
	fn test_resize_is_clamped_to_column_constraints() {
		let columns = vec![
			ColumnDefinition::<Value>::field("firstName", "First name").widths(50.0, 100.0, 300.0),
		];
		let table = Table::new(TableOptions::new(people(), columns).resizable(true)).unwrap();

		table.resize_column("firstName", 9999.0).unwrap();
		assert_eq!(table.column_width("firstName"), 300.0);

		table.resize_column("firstName", 1.0).unwrap();
		assert_eq!(table.column_width("firstName"), 50.0);
	}

	#[rstest]
	fn test_toggle_visibility_hides_the_column() {
		let table = Table::new(TableOptions::new(people(), columns())).unwrap();
		table.toggle_visibility("age").unwrap();
		let visible: Vec<&str> = table
			.visible_columns()
			.iter()
			.map(|column| column.id())
			.collect();
		assert_eq!(visible, vec!["firstName"]);
	}

	#[rstest]
	fn test_selection_toggles_per_key() {
		let table = Table::new(
			TableOptions::new(people(), columns()).selectable(true),
		)
		.unwrap();
		table.toggle_row_selection("row-1");
		assert!(table.is_selected("row-1"));
		table.toggle_row_selection("row-1");
		assert!(!table.is_selected("row-1"));
	}

	#[rstest]
	fn test_faceted_helpers() {
		let table = Table::new(TableOptions::new(people(), columns())).unwrap();
		assert_eq!(
			table.faceted_unique_values("firstName"),
			vec!["Jo", "Joanna", "Pierre"]
		);
		assert_eq!(table.faceted_min_max("age"), Some((28.0, 51.0)));
	}

	#[rstest]
	fn test_labels_resolve_from_the_bundled_locale() {
		let table = Table::new(
			TableOptions::new(people(), columns()).locale("fr"),
		)
		.unwrap();
		assert_eq!(table.label("pagination.next"), "Suivant");
		assert_eq!(table.label("no.such.key"), "no.such.key");
	}
}
