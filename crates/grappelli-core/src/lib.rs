//! # Grappelli Core
//!
//! Shared data model for the Grappelli data-table toolkit.
//!
//! This crate defines the declarative configuration types consumed by every
//! other Grappelli crate:
//!
//! - Column definitions with exactly one accessor (field path, derivation
//!   function, or child-column group)
//! - Filter kinds, filter values and per-column filter specifications
//! - Sort and pagination state
//! - The `LazyLoadEvent` contract handed to server-driven loaders
//! - A dotted/bracket path reader over [`serde_json::Value`]
//!
//! ## Example
//!
//! ```
//! use grappelli_core::{get_path, ColumnDefinition};
//! use serde_json::json;
//!
//! let row = json!({"user": {"name": "Django"}});
//! assert_eq!(get_path(&row, "user.name"), Some(&json!("Django")));
//!
//! let column: ColumnDefinition<serde_json::Value> =
//!     ColumnDefinition::field("user.name", "Name");
//! assert_eq!(column.id(), "user.name");
//! ```

pub mod column;
pub mod error;
pub mod filter;
pub mod paging;
pub mod path;
pub mod row;
pub mod sort;

pub use column::{ColumnAccessor, ColumnDefinition, SizingConstraints};
pub use error::{TableError, TableResult};
pub use filter::{ColumnFilter, FilterKind, FilterSpec, FilterValue, SelectOption};
pub use paging::{LazyLoadEvent, PaginationState};
pub use path::{get_path, get_path_or, get_path_owned};
pub use row::RowAccess;
pub use sort::{SortDirection, SortEntry};
