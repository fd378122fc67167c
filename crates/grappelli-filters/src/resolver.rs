//! Per-column filter match predicates
//!
//! Both entry points fail open: a filter whose shape cannot be interpreted
//! matches every row, so a misconfigured filter never silently hides data.

use grappelli_core::{FilterKind, FilterValue};
use serde_json::Value;

/// Decides whether a row's cell value matches a typed column filter.
///
/// An empty filter (see [`FilterValue::is_empty`]) matches everything.
///
/// # Examples
///
/// ```
/// use grappelli_core::{FilterKind, FilterValue};
/// use grappelli_filters::matches;
/// use serde_json::json;
///
/// let filter = FilterValue::Text("ali".to_string());
/// assert!(matches(Some(&json!("Alice")), &filter, FilterKind::Text));
/// assert!(!matches(Some(&json!("Bob")), &filter, FilterKind::Text));
/// ```
pub fn matches(row_value: Option<&Value>, filter: &FilterValue, kind: FilterKind) -> bool {
	if filter.is_empty() {
		return true;
	}
	match filter {
		FilterValue::Text(needle) => match kind {
			// Exact stringified equality for discrete kinds.
			FilterKind::Boolean | FilterKind::Select => stringify(row_value) == *needle,
			_ => stringify(row_value)
				.to_lowercase()
				.contains(&needle.to_lowercase()),
		},
		FilterValue::Range(lower, upper) => in_numeric_range(row_value, *lower, *upper),
		FilterValue::Selection(members) => members.contains(&stringify(row_value)),
		FilterValue::Bool(expected) => match row_value {
			Some(Value::Bool(actual)) => actual == expected,
			_ => stringify(row_value) == expected.to_string(),
		},
		FilterValue::Date(Some(date)) => date_part(row_value) == Some(date.as_str()),
		FilterValue::DateRange(lower, upper) => {
			// ISO dates order lexicographically.
			let Some(actual) = date_part(row_value) else {
				return true;
			};
			if let Some(lower) = lower {
				if actual < lower.as_str() {
					return false;
				}
			}
			if let Some(upper) = upper {
				if actual > upper.as_str() {
					return false;
				}
			}
			true
		}
		_ => true,
	}
}

/// Shape-sniffing fallback for untyped filter values.
///
/// Kept for the generic default predicate where no [`FilterKind`] is known:
/// a two-element array of numeric-or-null bounds is a range, any other array
/// is a multi-select, a string is a substring search, a boolean compares
/// stringified. Unrecognized shapes match everything.
pub fn matches_untyped(row_value: Option<&Value>, filter: &Value) -> bool {
	match filter {
		Value::Null => true,
		Value::Array(items) if is_bounds_pair(items) => {
			let lower = items[0].as_f64();
			let upper = items[1].as_f64();
			in_numeric_range(row_value, lower, upper)
		}
		Value::Array(items) => {
			if items.is_empty() {
				return true;
			}
			let actual = stringify(row_value);
			items.iter().any(|item| stringify(Some(item)) == actual)
		}
		Value::String(needle) => {
			if needle.is_empty() {
				return true;
			}
			stringify(row_value)
				.to_lowercase()
				.contains(&needle.to_lowercase())
		}
		Value::Bool(expected) => stringify(row_value) == expected.to_string(),
		_ => true,
	}
}

fn is_bounds_pair(items: &[Value]) -> bool {
	items.len() == 2
		&& items
			.iter()
			.all(|item| item.is_null() || item.is_number())
}

/// Range check; a row value with no numeric reading matches (fail open).
fn in_numeric_range(row_value: Option<&Value>, lower: Option<f64>, upper: Option<f64>) -> bool {
	let Some(actual) = coerce_number(row_value) else {
		return true;
	};
	if let Some(lower) = lower {
		if actual < lower {
			return false;
		}
	}
	if let Some(upper) = upper {
		if actual > upper {
			return false;
		}
	}
	true
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
	match value? {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse().ok(),
		Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
		_ => None,
	}
}

/// First ten bytes of a string value, enough for `YYYY-MM-DD`; keeps the
/// whole string when byte 10 is not a character boundary.
fn date_part(value: Option<&Value>) -> Option<&str> {
	match value? {
		Value::String(s) => Some(s.get(..10).unwrap_or(s)),
		_ => None,
	}
}

fn stringify(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case::text(FilterValue::Text(String::new()))]
	#[case::selection(FilterValue::Selection(Vec::new()))]
	#[case::range(FilterValue::Range(None, None))]
	#[case::date(FilterValue::Date(None))]
	fn test_empty_filters_match_everything(#[case] filter: FilterValue) {
		assert!(matches(Some(&json!("anything")), &filter, FilterKind::Text));
		assert!(matches(None, &filter, FilterKind::Text));
	}

	#[rstest]
	#[case::inside(json!(25), true)]
	#[case::at_lower(json!(18), true)]
	#[case::below(json!(17), false)]
	#[case::above(json!(66), false)]
	#[case::numeric_string(json!("40"), true)]
	#[case::non_numeric(json!("n/a"), true)]
	fn test_range_filter(#[case] value: Value, #[case] expected: bool) {
		let filter = FilterValue::Range(Some(18.0), Some(65.0));
		assert_eq!(matches(Some(&value), &filter, FilterKind::Range), expected);
	}

	#[rstest]
	fn test_range_with_open_bounds() {
		let at_least_ten = FilterValue::Range(Some(10.0), None);
		assert!(matches(Some(&json!(10_000)), &at_least_ten, FilterKind::Range));
		assert!(!matches(Some(&json!(9)), &at_least_ten, FilterKind::Range));
	}

	#[rstest]
	#[case::member(json!("active"), true)]
	#[case::non_member(json!("archived"), false)]
	#[case::numeric_member(json!(42), true)]
	fn test_multi_select_filter(#[case] value: Value, #[case] expected: bool) {
		let filter =
			FilterValue::Selection(vec!["active".to_string(), "42".to_string()]);
		assert_eq!(
			matches(Some(&value), &filter, FilterKind::MultiSelect),
			expected
		);
	}

	#[rstest]
	fn test_substring_is_case_insensitive() {
		let filter = FilterValue::Text("ALI".to_string());
		assert!(matches(Some(&json!("Alice")), &filter, FilterKind::Text));
	}

	#[rstest]
	fn test_select_kind_requires_exact_equality() {
		let filter = FilterValue::Text("act".to_string());
		assert!(!matches(Some(&json!("active")), &filter, FilterKind::Select));
		let exact = FilterValue::Text("active".to_string());
		assert!(matches(Some(&json!("active")), &exact, FilterKind::Select));
	}

	#[rstest]
	#[case::bool_value(json!(true), true)]
	#[case::bool_mismatch(json!(false), false)]
	#[case::stringified(json!("true"), true)]
	fn test_boolean_filter(#[case] value: Value, #[case] expected: bool) {
		let filter = FilterValue::Bool(true);
		assert_eq!(
			matches(Some(&value), &filter, FilterKind::Boolean),
			expected
		);
	}

	#[rstest]
	fn test_date_filter_compares_the_date_part() {
		let filter = FilterValue::Date(Some("2024-03-01".to_string()));
		assert!(matches(
			Some(&json!("2024-03-01T12:34:56Z")),
			&filter,
			FilterKind::Date
		));
		assert!(!matches(Some(&json!("2024-03-02")), &filter, FilterKind::Date));
	}

	#[rstest]
	fn test_date_filter_tolerates_multibyte_row_values() {
		// Byte 10 of the row value sits inside a multi-byte character; the
		// comparison must not slice there.
		let filter = FilterValue::Date(Some("2024-01-01".to_string()));
		assert!(!matches(Some(&json!("aaaaaaaaaé")), &filter, FilterKind::Date));
		let range = FilterValue::DateRange(None, Some("2024-12-31".to_string()));
		assert!(!matches(Some(&json!("aaaaaaaaaé")), &range, FilterKind::DateRange));
	}

	#[rstest]
	#[case::inside(json!("2024-02-15"), true)]
	#[case::before(json!("2023-12-31"), false)]
	#[case::after(json!("2024-04-01"), false)]
	#[case::not_a_date(json!(12), true)]
	fn test_date_range_filter(#[case] value: Value, #[case] expected: bool) {
		let filter = FilterValue::DateRange(
			Some("2024-01-01".to_string()),
			Some("2024-03-31".to_string()),
		);
		assert_eq!(
			matches(Some(&value), &filter, FilterKind::DateRange),
			expected
		);
	}

	#[rstest]
	#[case::null(json!(null), json!("x"), true)]
	#[case::range_pair(json!([18, 65]), json!(25), true)]
	#[case::range_pair_miss(json!([18, 65]), json!(17), false)]
	#[case::half_open_pair(json!([null, 65]), json!(2), true)]
	#[case::member_list(json!(["a", "b"]), json!("b"), true)]
	#[case::member_list_miss(json!(["a", "b"]), json!("c"), false)]
	#[case::empty_list(json!([]), json!("c"), true)]
	#[case::substring(json!("ali"), json!("Alice"), true)]
	#[case::empty_string(json!(""), json!("Alice"), true)]
	#[case::boolean(json!(true), json!(true), true)]
	#[case::unrecognized_shape(json!({"weird": 1}), json!("x"), true)]
	fn test_untyped_shape_sniffing(
		#[case] filter: Value,
		#[case] value: Value,
		#[case] expected: bool,
	) {
		assert_eq!(matches_untyped(Some(&value), &filter), expected);
	}
}
