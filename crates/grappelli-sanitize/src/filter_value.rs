//! Filter-value sanitization
//!
//! Dispatches on the column's declared [`FilterKind`]; the output is always
//! a value safe to store as filter state and safe to re-render.

use crate::text::sanitize_search_text;
use chrono::NaiveDate;
use grappelli_core::{FilterKind, FilterValue};

/// Numeric range bounds for range filters
pub const RANGE_BOUND: f64 = 1_000_000.0;

/// Sanitizes a filter value for the given filter kind.
///
/// - text/custom: [`sanitize_search_text`]
/// - select/multi-select: element-wise text sanitization
/// - range: bounds clamped to `[-1_000_000, 1_000_000]`, `NaN` becomes an
///   open bound
/// - boolean: passed through
/// - date/date-range: parsed and reformatted to `YYYY-MM-DD`, invalid dates
///   become open bounds
///
/// A value whose variant does not match the declared kind is sanitized by
/// its own variant's rules; the result is safe either way.
///
/// # Examples
///
/// ```
/// use grappelli_core::{FilterKind, FilterValue};
/// use grappelli_sanitize::sanitize_filter_value;
///
/// let range = FilterValue::Range(Some(f64::NAN), Some(9e12));
/// let clean = sanitize_filter_value(range, FilterKind::Range);
/// assert_eq!(clean, FilterValue::Range(None, Some(1_000_000.0)));
/// ```
pub fn sanitize_filter_value(value: FilterValue, kind: FilterKind) -> FilterValue {
	match (kind, value) {
		(FilterKind::Text | FilterKind::Custom, FilterValue::Text(text)) => {
			FilterValue::Text(sanitize_search_text(&text))
		}
		(FilterKind::Select, FilterValue::Text(text)) => {
			FilterValue::Text(sanitize_search_text(&text))
		}
		(FilterKind::MultiSelect | FilterKind::Select, FilterValue::Selection(options)) => {
			FilterValue::Selection(
				options
					.iter()
					.map(|option| sanitize_search_text(option))
					.collect(),
			)
		}
		(FilterKind::Range, FilterValue::Range(lower, upper)) => {
			FilterValue::Range(clamp_bound(lower), clamp_bound(upper))
		}
		(FilterKind::Boolean, FilterValue::Bool(flag)) => FilterValue::Bool(flag),
		(FilterKind::Date, FilterValue::Date(date)) => {
			FilterValue::Date(date.as_deref().and_then(normalize_date))
		}
		(FilterKind::DateRange, FilterValue::DateRange(from, to)) => FilterValue::DateRange(
			from.as_deref().and_then(normalize_date),
			to.as_deref().and_then(normalize_date),
		),
		// Variant does not match the declared kind: fall back to the
		// variant's own rules so the output is still inert.
		(_, value) => sanitize_by_variant(value),
	}
}

fn sanitize_by_variant(value: FilterValue) -> FilterValue {
	match value {
		FilterValue::Text(text) => FilterValue::Text(sanitize_search_text(&text)),
		FilterValue::Selection(options) => FilterValue::Selection(
			options
				.iter()
				.map(|option| sanitize_search_text(option))
				.collect(),
		),
		FilterValue::Range(lower, upper) => {
			FilterValue::Range(clamp_bound(lower), clamp_bound(upper))
		}
		FilterValue::Bool(flag) => FilterValue::Bool(flag),
		FilterValue::Date(date) => FilterValue::Date(date.as_deref().and_then(normalize_date)),
		FilterValue::DateRange(from, to) => FilterValue::DateRange(
			from.as_deref().and_then(normalize_date),
			to.as_deref().and_then(normalize_date),
		),
	}
}

fn clamp_bound(bound: Option<f64>) -> Option<f64> {
	let value = bound?;
	if value.is_nan() {
		return None;
	}
	Some(value.clamp(-RANGE_BOUND, RANGE_BOUND))
}

/// Parses a date in a handful of common layouts and reformats it as
/// `YYYY-MM-DD`. Unparseable input becomes `None`.
fn normalize_date(input: &str) -> Option<String> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return None;
	}
	let candidate = trimmed.get(..10).unwrap_or(trimmed);
	let parsed = NaiveDate::parse_from_str(candidate, "%Y-%m-%d")
		.or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
		.or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
		.ok()?;
	Some(parsed.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::inside(Some(50.0), Some(50.0))]
	#[case::above(Some(2e6), Some(RANGE_BOUND))]
	#[case::below(Some(-2e6), Some(-RANGE_BOUND))]
	#[case::nan(Some(f64::NAN), None)]
	#[case::open(None, None)]
	fn test_range_bounds_clamped(#[case] bound: Option<f64>, #[case] expected: Option<f64>) {
		// Act
		let value = sanitize_filter_value(FilterValue::Range(bound, None), FilterKind::Range);

		// Assert
		assert_eq!(value, FilterValue::Range(expected, None));
	}

	#[rstest]
	fn test_text_filter_is_sanitized() {
		// Arrange
		let dirty = FilterValue::Text("<img onerror=x>'Jo;".into());

		// Act
		let value = sanitize_filter_value(dirty, FilterKind::Text);

		// Assert
		assert_eq!(value, FilterValue::Text("Jo".into()));
	}

	#[rstest]
	fn test_selection_sanitized_element_wise() {
		// Arrange
		let dirty = FilterValue::Selection(vec!["ok".into(), "<b>x</b>".into()]);

		// Act
		let value = sanitize_filter_value(dirty, FilterKind::MultiSelect);

		// Assert
		assert_eq!(
			value,
			FilterValue::Selection(vec!["ok".into(), "x".into()])
		);
	}

	#[rstest]
	#[case::iso("2024-03-01", Some("2024-03-01"))]
	#[case::datetime_prefix("2024-03-01T12:30:00Z", Some("2024-03-01"))]
	#[case::slashes("2024/03/01", Some("2024-03-01"))]
	#[case::garbage("not a date", None)]
	#[case::empty("", None)]
	fn test_dates_normalized(#[case] input: &str, #[case] expected: Option<&str>) {
		// Act
		let value = sanitize_filter_value(
			FilterValue::Date(Some(input.into())),
			FilterKind::Date,
		);

		// Assert
		assert_eq!(value, FilterValue::Date(expected.map(String::from)));
	}

	#[rstest]
	fn test_mismatched_variant_still_safe() {
		// Range kind handed free text: the text rules still apply.
		let value = sanitize_filter_value(FilterValue::Text("x';".into()), FilterKind::Range);
		assert_eq!(value, FilterValue::Text("x".into()));
	}

	#[rstest]
	fn test_boolean_passthrough() {
		let value = sanitize_filter_value(FilterValue::Bool(true), FilterKind::Boolean);
		assert_eq!(value, FilterValue::Bool(true));
	}
}
