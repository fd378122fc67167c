//! Page bookkeeping over a known row count

use grappelli_core::PaginationState;

/// Tracks the current page over a row count, with clamped navigation.
///
/// Pages are zero-based. Changing the page size re-anchors the page index so
/// the first visible row stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
	state: PaginationState,
	total_rows: usize,
}

impl Paginator {
	pub fn new(total_rows: usize, page_size: usize) -> Self {
		Self {
			state: PaginationState {
				page_index: 0,
				page_size: page_size.max(1),
			},
			total_rows,
		}
	}

	pub fn from_state(state: PaginationState, total_rows: usize) -> Self {
		let mut paginator = Self {
			state: PaginationState {
				page_index: 0,
				page_size: state.page_size.max(1),
			},
			total_rows,
		};
		paginator.set_page(state.page_index);
		paginator
	}

	pub fn state(&self) -> PaginationState {
		self.state
	}

	pub fn page_index(&self) -> usize {
		self.state.page_index
	}

	pub fn page_size(&self) -> usize {
		self.state.page_size
	}

	pub fn total_rows(&self) -> usize {
		self.total_rows
	}

	/// Number of pages; an empty row set still has one (empty) page.
	pub fn total_pages(&self) -> usize {
		self.total_rows.div_ceil(self.state.page_size).max(1)
	}

	/// Zero-based index of the first row on the current page.
	pub fn first_row(&self) -> usize {
		self.state.first_row()
	}

	/// Half-open row range covered by the current page.
	pub fn page_range(&self) -> std::ops::Range<usize> {
		let start = self.first_row().min(self.total_rows);
		let end = (start + self.state.page_size).min(self.total_rows);
		start..end
	}

	pub fn is_first_page(&self) -> bool {
		self.state.page_index == 0
	}

	pub fn is_last_page(&self) -> bool {
		self.state.page_index + 1 >= self.total_pages()
	}

	/// Jumps to a page, clamping out-of-range targets to the last page.
	pub fn set_page(&mut self, page_index: usize) {
		self.state.page_index = page_index.min(self.total_pages() - 1);
	}

	pub fn next_page(&mut self) {
		if !self.is_last_page() {
			self.state.page_index += 1;
		}
	}

	pub fn previous_page(&mut self) {
		self.state.page_index = self.state.page_index.saturating_sub(1);
	}

	pub fn first_page(&mut self) {
		self.state.page_index = 0;
	}

	pub fn last_page(&mut self) {
		self.state.page_index = self.total_pages() - 1;
	}

	/// Changes the page size, keeping the previously-first row visible.
	pub fn set_page_size(&mut self, page_size: usize) {
		let anchor = self.first_row();
		self.state.page_size = page_size.max(1);
		self.state.page_index = anchor / self.state.page_size;
	}

	/// Updates the row count after the data set changed, re-clamping the page.
	pub fn set_total_rows(&mut self, total_rows: usize) {
		self.total_rows = total_rows;
		self.set_page(self.state.page_index);
	}
}
