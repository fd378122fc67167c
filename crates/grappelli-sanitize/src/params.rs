//! Pagination and sorting parameter validation

use crate::text::sanitize_search_text;
use grappelli_core::{PaginationState, SortEntry};

/// Largest accepted zero-based page index
pub const MAX_PAGE_INDEX: usize = 10_000;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 1_000;
/// Most sort entries kept after validation
pub const MAX_SORT_ENTRIES: usize = 10;

const DEFAULT_PAGE_INDEX: usize = 0;
const DEFAULT_PAGE_SIZE: usize = 10;

/// Validates raw pagination parameters.
///
/// The page index is clamped to `[0, 10_000]` and the page size to
/// `[1, 1_000]`. Values are floored; non-finite input falls back to the
/// defaults `0` and `10`.
///
/// # Examples
///
/// ```
/// use grappelli_sanitize::validate_pagination;
///
/// let state = validate_pagination(-5.0, 999_999.0);
/// assert_eq!(state.page_index, 0);
/// assert_eq!(state.page_size, 1_000);
///
/// let state = validate_pagination(f64::NAN, f64::INFINITY);
/// assert_eq!(state.page_index, 0);
/// assert_eq!(state.page_size, 10);
/// ```
pub fn validate_pagination(page_index: f64, page_size: f64) -> PaginationState {
	let page_index = if page_index.is_finite() {
		(page_index.floor().max(0.0) as usize).min(MAX_PAGE_INDEX)
	} else {
		DEFAULT_PAGE_INDEX
	};
	let page_size = if page_size.is_finite() {
		(page_size.floor().max(1.0) as usize).min(MAX_PAGE_SIZE)
	} else {
		DEFAULT_PAGE_SIZE
	};
	PaginationState::new(page_index, page_size)
}

/// Validates a sort list.
///
/// Keeps at most the first [`MAX_SORT_ENTRIES`] entries and drops any entry
/// whose sanitized column id is empty.
///
/// # Examples
///
/// ```
/// use grappelli_core::SortEntry;
/// use grappelli_sanitize::validate_sorting;
///
/// let sorted = validate_sorting(vec![
///     SortEntry::asc(""),
///     SortEntry::desc("age"),
/// ]);
/// assert_eq!(sorted, vec![SortEntry::desc("age")]);
/// ```
pub fn validate_sorting(sorting: Vec<SortEntry>) -> Vec<SortEntry> {
	sorting
		.into_iter()
		.filter_map(|entry| {
			let id = sanitize_search_text(&entry.id);
			if id.is_empty() {
				return None;
			}
			Some(SortEntry {
				id,
				desc: entry.desc,
			})
		})
		.take(MAX_SORT_ENTRIES)
		.collect()
}
