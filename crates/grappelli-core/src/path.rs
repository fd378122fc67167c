//! Dotted/bracket path reader over [`serde_json::Value`]
//!
//! Supports `a.b.c` and `a[0].b` style paths. Missing segments resolve to
//! `None`; the reader never panics on malformed paths.

use serde_json::Value;

/// Reads a nested value by dotted/bracket path.
///
/// Path segments are separated by `.`; array elements are addressed with
/// `[index]`. Any missing segment, out-of-range index or type mismatch
/// resolves to `None`.
///
/// # Examples
///
/// ```
/// use grappelli_core::get_path;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": [{"c": 1}, {"c": 2}]}});
/// assert_eq!(get_path(&data, "a.b[1].c"), Some(&json!(2)));
/// assert_eq!(get_path(&data, "a.b[9].c"), None);
/// assert_eq!(get_path(&data, "a.missing"), None);
/// ```
pub fn get_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
	if path.is_empty() {
		return None;
	}
	let mut current = data;
	for segment in split_segments(path) {
		match segment {
			Segment::Key(key) => {
				current = current.as_object()?.get(key)?;
			}
			Segment::Index(index) => {
				current = current.as_array()?.get(index)?;
			}
		}
	}
	Some(current)
}

/// Reads a nested value by path, falling back to `default` when unresolvable.
///
/// # Examples
///
/// ```
/// use grappelli_core::get_path_or;
/// use serde_json::{json, Value};
///
/// let data = json!({"name": "Grappelli"});
/// let missing = get_path_or(&data, "nickname", Value::Null);
/// assert_eq!(missing, Value::Null);
/// ```
pub fn get_path_or(data: &Value, path: &str, default: Value) -> Value {
	get_path(data, path).cloned().unwrap_or(default)
}

/// Reads a nested value by path as an owned clone, `Value::Null` if missing.
pub fn get_path_owned(data: &Value, path: &str) -> Value {
	get_path_or(data, path, Value::Null)
}

enum Segment<'a> {
	Key(&'a str),
	Index(usize),
}

/// Splits `a.b[0].c` into key and index segments.
///
/// A malformed bracket expression (unclosed, non-numeric) is treated as an
/// ordinary key so lookup degrades to `None` instead of panicking.
fn split_segments(path: &str) -> impl Iterator<Item = Segment<'_>> {
	path.split('.').flat_map(|part| {
		let mut segments = Vec::with_capacity(2);
		match part.split_once('[') {
			Some((key, rest)) => {
				if !key.is_empty() {
					segments.push(Segment::Key(key));
				}
				for bracket in rest.split('[') {
					match bracket.strip_suffix(']').and_then(|n| n.parse().ok()) {
						Some(index) => segments.push(Segment::Index(index)),
						None => segments.push(Segment::Key(part)),
					}
				}
			}
			None => segments.push(Segment::Key(part)),
		}
		segments
	})
}
