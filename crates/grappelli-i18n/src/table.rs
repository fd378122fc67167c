//! Translation tables, lookup and interpolation

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, OnceLock};

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
	PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("static pattern"))
}

/// A nested mapping from dotted path to display string
///
/// Built from caller-supplied JSON or one of the bundled locales. Never
/// mutated by the toolkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TranslationTable {
	root: serde_json::Map<String, Value>,
}

impl TranslationTable {
	/// Builds a table from a JSON object; non-object input yields an empty
	/// table (lookups will echo their paths).
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_i18n::TranslationTable;
	/// use serde_json::json;
	///
	/// let table = TranslationTable::from_value(json!({
	///     "pagination": {"next": "Suivant"}
	/// }));
	/// assert_eq!(table.resolve("pagination.next"), Some("Suivant"));
	/// ```
	pub fn from_value(value: Value) -> Self {
		match value {
			Value::Object(root) => Self { root },
			_ => {
				tracing::warn!("Translation table is not a JSON object; using an empty table");
				Self::default()
			}
		}
	}

	/// Walks the table one dotted segment at a time.
	///
	/// Returns `None` when a segment is missing or the terminal value is not
	/// a string.
	pub fn resolve(&self, path: &str) -> Option<&str> {
		let mut segments = path.split('.');
		let mut current = self.root.get(segments.next()?)?;
		for segment in segments {
			current = current.as_object()?.get(segment)?;
		}
		current.as_str()
	}
}

/// Replaces every `{key}` occurrence with its value.
///
/// Placeholders without a matching key are left literal, so a partially
/// filled template still renders legibly.
///
/// # Examples
///
/// ```
/// use grappelli_i18n::interpolate;
///
/// let text = interpolate("Page {page} of {total}", &[("page", "2"), ("total", "9")]);
/// assert_eq!(text, "Page 2 of 9");
///
/// let partial = interpolate("Hello {name}", &[]);
/// assert_eq!(partial, "Hello {name}");
/// ```
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
	placeholder()
		.replace_all(template, |caps: &regex::Captures<'_>| {
			let key = &caps[1];
			values
				.iter()
				.find(|(name, _)| *name == key)
				.map(|(_, value)| (*value).to_string())
				.unwrap_or_else(|| caps[0].to_string())
		})
		.into_owned()
}

/// Looks up a dotted path, echoing the path itself when unresolvable.
///
/// # Examples
///
/// ```
/// use grappelli_i18n::{lookup, TranslationTable};
/// use serde_json::json;
///
/// let table = TranslationTable::from_value(json!({"a": {"b": "c"}}));
/// assert_eq!(lookup(&table, "a.b"), "c");
/// assert_eq!(lookup(&table, "nonexistent.path"), "nonexistent.path");
/// ```
pub fn lookup(table: &TranslationTable, path: &str) -> String {
	lookup_with(table, path, &[])
}

/// Looks up a dotted path and interpolates `{placeholder}` values.
pub fn lookup_with(table: &TranslationTable, path: &str, values: &[(&str, &str)]) -> String {
	match table.resolve(path) {
		Some(template) => interpolate(template, values),
		None => {
			tracing::warn!(path, "Missing translation key; echoing the path");
			path.to_string()
		}
	}
}

/// A bound translator: partial application of [`lookup`] over one table
///
/// Cheap to clone; hand one to each component that renders labels.
#[derive(Debug, Clone)]
pub struct Translator {
	table: Arc<TranslationTable>,
}

impl Translator {
	/// Binds a translator to `table`
	pub fn bind(table: TranslationTable) -> Self {
		Self {
			table: Arc::new(table),
		}
	}

	/// Looks up `path`
	pub fn get(&self, path: &str) -> String {
		lookup(&self.table, path)
	}

	/// Looks up `path` with interpolation values
	pub fn get_with(&self, path: &str, values: &[(&str, &str)]) -> String {
		lookup_with(&self.table, path, values)
	}
}

impl Default for Translator {
	fn default() -> Self {
		Self::bind(TranslationTable::default())
	}
}
