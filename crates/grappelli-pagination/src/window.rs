//! Page-window computation

use serde::{Deserialize, Serialize};

/// One slot in the rendered pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageItem {
	/// A concrete zero-based page index
	Page(usize),
	/// Gap marker after the leading anchor
	LeftEllipsis,
	/// Gap marker before the trailing anchor
	RightEllipsis,
}

/// Windowing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowMode {
	/// Sliding window centered on the current page; no gap markers
	Compact,
	/// Contiguous run from the current page, one trailing gap, last page
	#[default]
	Default,
	/// First/last anchors with up to two gaps around a centered block
	Advanced,
}

/// Computes the visible page-number window.
///
/// The returned sequence never contains an out-of-range index and holds at
/// most one gap marker per omitted range. `max_visible` below 3 is raised to
/// 3 so every policy has room for its anchors.
///
/// # Examples
///
/// ```
/// use grappelli_pagination::{visible_pages, PageItem, WindowMode};
///
/// // Advanced mode, middle of a long pager: anchors plus a centered block.
/// let items = visible_pages(WindowMode::Advanced, 6, 20, 7);
/// assert_eq!(items, vec![
///     PageItem::Page(0),
///     PageItem::LeftEllipsis,
///     PageItem::Page(5),
///     PageItem::Page(6),
///     PageItem::Page(7),
///     PageItem::RightEllipsis,
///     PageItem::Page(19),
/// ]);
/// ```
pub fn visible_pages(
	mode: WindowMode,
	current_page: usize,
	total_pages: usize,
	max_visible: usize,
) -> Vec<PageItem> {
	if total_pages == 0 {
		return Vec::new();
	}
	let max_visible = max_visible.max(3);
	let current_page = current_page.min(total_pages - 1);

	match mode {
		WindowMode::Compact => compact_window(current_page, total_pages, max_visible),
		WindowMode::Default => default_window(current_page, total_pages, max_visible),
		WindowMode::Advanced => advanced_window(current_page, total_pages, max_visible),
	}
}

/// Sliding window of width `max_visible` centered on the current page,
/// clamped so it never runs past either end.
fn compact_window(current: usize, total: usize, max_visible: usize) -> Vec<PageItem> {
	let width = max_visible.min(total);
	let half = (width - 1) / 2;
	let start = current
		.saturating_sub(half)
		.min(total - width);
	(start..start + width).map(PageItem::Page).collect()
}

fn default_window(current: usize, total: usize, max_visible: usize) -> Vec<PageItem> {
	if total <= max_visible {
		return (0..total).map(PageItem::Page).collect();
	}
	// Within the trailing `max_visible - 1` pages: show the last window
	// contiguously, no gap.
	if current >= total - (max_visible - 1) {
		return (total - max_visible..total).map(PageItem::Page).collect();
	}
	let mut items: Vec<PageItem> = (current..current + max_visible - 1)
		.map(PageItem::Page)
		.collect();
	items.push(PageItem::RightEllipsis);
	items.push(PageItem::Page(total - 1));
	items
}

fn advanced_window(current: usize, total: usize, max_visible: usize) -> Vec<PageItem> {
	if total <= max_visible {
		return (0..total).map(PageItem::Page).collect();
	}

	// Both anchors plus both gaps leave no room for a block below a budget
	// of 5; degrade to the default policy there.
	if max_visible < 5 {
		return default_window(current, total, max_visible);
	}

	let left_pages = (max_visible - 3) / 2;
	let right_pages = max_visible - 3 - left_pages;

	// Near the start: a leading run, one gap, the last page.
	if current < left_pages + 1 {
		let mut items: Vec<PageItem> = (0..max_visible - 2).map(PageItem::Page).collect();
		items.push(PageItem::RightEllipsis);
		items.push(PageItem::Page(total - 1));
		return items;
	}

	// Near the end: the first page, one gap, a trailing run.
	if current >= total - right_pages - 1 {
		let mut items = vec![PageItem::Page(0), PageItem::LeftEllipsis];
		items.extend((total - (max_visible - 2)..total).map(PageItem::Page));
		return items;
	}

	// Middle: both anchors, both gaps, a block of `max_visible - 4` pages
	// centered on the current page.
	let block = max_visible - 4;
	let start = current
		.saturating_sub((block - 1) / 2)
		.clamp(1, total - 1 - block);
	let mut items = vec![PageItem::Page(0), PageItem::LeftEllipsis];
	items.extend((start..start + block).map(PageItem::Page));
	items.push(PageItem::RightEllipsis);
	items.push(PageItem::Page(total - 1));
	items
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use PageItem::{LeftEllipsis as LE, Page as P, RightEllipsis as RE};

	#[rstest]
	#[case::centered(5, 20, 5, vec![P(3), P(4), P(5), P(6), P(7)])]
	#[case::clamped_start(0, 20, 5, vec![P(0), P(1), P(2), P(3), P(4)])]
	#[case::clamped_end(19, 20, 5, vec![P(15), P(16), P(17), P(18), P(19)])]
	#[case::fewer_pages_than_budget(1, 3, 5, vec![P(0), P(1), P(2)])]
	#[case::single_page(0, 1, 5, vec![P(0)])]
	fn test_compact_mode(
		#[case] current: usize,
		#[case] total: usize,
		#[case] max: usize,
		#[case] expected: Vec<PageItem>,
	) {
		assert_eq!(visible_pages(WindowMode::Compact, current, total, max), expected);
	}

	#[rstest]
	#[case::all_fit(2, 5, 5, vec![P(0), P(1), P(2), P(3), P(4)])]
	#[case::leading(0, 12, 5, vec![P(0), P(1), P(2), P(3), RE, P(11)])]
	#[case::mid(4, 12, 5, vec![P(4), P(5), P(6), P(7), RE, P(11)])]
	#[case::near_end(8, 12, 5, vec![P(7), P(8), P(9), P(10), P(11)])]
	#[case::last(11, 12, 5, vec![P(7), P(8), P(9), P(10), P(11)])]
	fn test_default_mode(
		#[case] current: usize,
		#[case] total: usize,
		#[case] max: usize,
		#[case] expected: Vec<PageItem>,
	) {
		assert_eq!(visible_pages(WindowMode::Default, current, total, max), expected);
	}

	#[rstest]
	#[case::all_fit(3, 7, 7, vec![P(0), P(1), P(2), P(3), P(4), P(5), P(6)])]
	#[case::near_start(1, 20, 7, vec![P(0), P(1), P(2), P(3), P(4), RE, P(19)])]
	#[case::start_boundary(2, 20, 7, vec![P(0), P(1), P(2), P(3), P(4), RE, P(19)])]
	#[case::middle(6, 20, 7, vec![P(0), LE, P(5), P(6), P(7), RE, P(19)])]
	#[case::near_end(17, 20, 7, vec![P(0), LE, P(15), P(16), P(17), P(18), P(19)])]
	#[case::last(19, 20, 7, vec![P(0), LE, P(15), P(16), P(17), P(18), P(19)])]
	#[case::narrow_budget(2, 8, 4, vec![P(2), P(3), P(4), RE, P(7)])]
	#[case::minimum_budget(2, 6, 3, vec![P(2), P(3), RE, P(5)])]
	fn test_advanced_mode(
		#[case] current: usize,
		#[case] total: usize,
		#[case] max: usize,
		#[case] expected: Vec<PageItem>,
	) {
		assert_eq!(visible_pages(WindowMode::Advanced, current, total, max), expected);
	}

	#[rstest]
	fn test_advanced_middle_block_is_centered() {
		// Block of 3 centered on the current page, far from both edges.
		let items = visible_pages(WindowMode::Advanced, 10, 40, 7);
		assert_eq!(items, vec![P(0), LE, P(9), P(10), P(11), RE, P(39)]);
	}

	#[rstest]
	#[case::compact(WindowMode::Compact)]
	#[case::default_mode(WindowMode::Default)]
	#[case::advanced(WindowMode::Advanced)]
	fn test_no_out_of_range_indices(#[case] mode: WindowMode) {
		for total in 1..40 {
			for current in 0..total {
				for max in 3..12 {
					let items = visible_pages(mode, current, total, max);
					assert!(!items.is_empty());
					for item in items {
						if let PageItem::Page(index) = item {
							assert!(index < total, "{mode:?} {current}/{total}/{max}");
						}
					}
				}
			}
		}
	}

	#[rstest]
	fn test_ellipses_never_adjacent() {
		for total in 1..40 {
			for current in 0..total {
				let items = visible_pages(WindowMode::Advanced, current, total, 7);
				for pair in items.windows(2) {
					let both_gaps = !matches!(pair[0], PageItem::Page(_))
						&& !matches!(pair[1], PageItem::Page(_));
					assert!(!both_gaps);
				}
			}
		}
	}

	#[rstest]
	fn test_zero_total_pages_yields_nothing() {
		assert!(visible_pages(WindowMode::Default, 0, 0, 5).is_empty());
	}

	#[rstest]
	fn test_current_page_past_end_is_clamped() {
		let items = visible_pages(WindowMode::Compact, 99, 4, 5);
		assert_eq!(items, vec![P(0), P(1), P(2), P(3)]);
	}
}
