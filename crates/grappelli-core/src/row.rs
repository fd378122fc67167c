//! Row field access
//!
//! Rows are opaque to the toolkit beyond field access. Implementing
//! [`RowAccess`] lets any type serve as a row; `serde_json::Value` works out
//! of the box through the dotted-path reader.

use crate::path::get_path;
use serde_json::Value;

/// Field access over an opaque row type
pub trait RowAccess {
	/// Reads the value at `path`, or `None` when the path does not resolve
	fn field(&self, path: &str) -> Option<Value>;
}

impl RowAccess for Value {
	fn field(&self, path: &str) -> Option<Value> {
		get_path(self, path).cloned()
	}
}
