//! # Grappelli Pagination
//!
//! Computes which page numbers a pager displays when the total page count
//! exceeds the display budget, plus per-page bookkeeping.
//!
//! Three windowing policies exist ([`WindowMode`]): a compact sliding window
//! with no gap markers, a default policy with a single trailing gap, and an
//! advanced policy with first/last anchors and up to two gaps. Gap markers
//! are distinguishable (left vs right) so rendering keys never collide.
//!
//! ## Example
//!
//! ```
//! use grappelli_pagination::{visible_pages, PageItem, WindowMode};
//!
//! let items = visible_pages(WindowMode::Default, 0, 12, 5);
//! assert_eq!(items, vec![
//!     PageItem::Page(0),
//!     PageItem::Page(1),
//!     PageItem::Page(2),
//!     PageItem::Page(3),
//!     PageItem::RightEllipsis,
//!     PageItem::Page(11),
//! ]);
//! ```

pub mod paginator;
pub mod window;

pub use paginator::Paginator;
pub use window::{visible_pages, PageItem, WindowMode};
