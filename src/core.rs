//! Shared data model module.
//!
//! Column definitions, filter kinds and values, sort and pagination state,
//! the lazy-load event contract and the dotted-path field reader.
//!
//! # Examples
//!
//! ```rust
//! use grappelli::core::{ColumnDefinition, get_path};
//! use serde_json::json;
//!
//! let row = json!({"user": {"name": "Django"}});
//! assert_eq!(get_path(&row, "user.name"), Some(&json!("Django")));
//! ```

pub use grappelli_core::*;
