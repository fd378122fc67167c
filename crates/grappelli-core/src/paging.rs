//! Pagination state and the lazy-load event contract

use crate::filter::ColumnFilter;
use crate::sort::SortEntry;
use serde::{Deserialize, Serialize};

/// Controlled pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
	/// Zero-based page index
	pub page_index: usize,
	/// Rows per page
	pub page_size: usize,
}

impl PaginationState {
	/// Creates pagination state
	pub fn new(page_index: usize, page_size: usize) -> Self {
		Self {
			page_index,
			page_size,
		}
	}

	/// Returns the zero-based offset of the first row on the page
	pub fn first_row(&self) -> usize {
		self.page_index * self.page_size
	}
}

impl Default for PaginationState {
	fn default() -> Self {
		Self {
			page_index: 0,
			page_size: 10,
		}
	}
}

/// Snapshot of validated table intent handed to a server-driven loader
///
/// Fired once per settled combination of filters, global filter, pagination
/// and sorting while the table operates in lazy mode. Every field has already
/// been through the sanitization pipeline; the loader may trust it as bounded
/// and inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyLoadEvent {
	/// Zero-based offset of the first requested row
	pub first: usize,
	/// Number of requested rows
	pub rows: usize,
	/// Active column filters
	pub filters: Vec<ColumnFilter>,
	/// Sanitized global filter text
	pub global_filter: String,
	/// Validated sort list
	pub sorting: Vec<SortEntry>,
	/// Zero-based page index
	pub page: usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_row_offset() {
		let state = PaginationState::new(3, 25);
		assert_eq!(state.first_row(), 75);
	}

	#[test]
	fn test_lazy_load_event_serializes() {
		let event = LazyLoadEvent {
			first: 20,
			rows: 10,
			filters: vec![],
			global_filter: "swing".into(),
			sorting: vec![SortEntry::desc("year")],
			page: 2,
		};
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["first"], 20);
		assert_eq!(json["sorting"][0]["desc"], true);
	}
}
