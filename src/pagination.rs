//! Pagination module.
//!
//! The page-window computation (compact, default and advanced policies) and
//! a clamped page/offset paginator.
//!
//! # Examples
//!
//! ```rust
//! use grappelli::pagination::{visible_pages, PageItem, WindowMode};
//!
//! let items = visible_pages(WindowMode::Compact, 0, 3, 5);
//! assert_eq!(items, vec![PageItem::Page(0), PageItem::Page(1), PageItem::Page(2)]);
//! ```

pub use grappelli_pagination::*;
