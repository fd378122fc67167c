//! Free-text sanitizers
//!
//! Applied to every free-text filter value and every global-search keystroke
//! before it is stored or forwarded.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum length of sanitized search text, in characters
pub const MAX_SEARCH_TEXT_LEN: usize = 1000;

static TAG_LIKE: OnceLock<Regex> = OnceLock::new();
static SCRIPT_BLOCK: OnceLock<Regex> = OnceLock::new();
static EVENT_HANDLER: OnceLock<Regex> = OnceLock::new();
static JAVASCRIPT_URI: OnceLock<Regex> = OnceLock::new();
static DATA_URI: OnceLock<Regex> = OnceLock::new();
static CSS_EXPRESSION: OnceLock<Regex> = OnceLock::new();

fn tag_like() -> &'static Regex {
	TAG_LIKE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static pattern"))
}

/// Sanitizes free search text.
///
/// Strips quote, backtick, backslash and semicolon characters, removes
/// `<...>` tag-like substrings, truncates to [`MAX_SEARCH_TEXT_LEN`]
/// characters and trims surrounding whitespace.
///
/// The function is total and idempotent: sanitizing already-sanitized text
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use grappelli_sanitize::sanitize_search_text;
///
/// assert_eq!(sanitize_search_text("  O'Brien; <b>bold</b>  "), "OBrien bold");
/// assert_eq!(sanitize_search_text("plain text"), "plain text");
/// ```
pub fn sanitize_search_text(input: &str) -> String {
	let without_tags = tag_like().replace_all(input, "");
	let without_quotes: String = without_tags
		.chars()
		.filter(|c| !matches!(c, '\'' | '"' | '`' | ';' | '\\'))
		.collect();
	let truncated: String = without_quotes.chars().take(MAX_SEARCH_TEXT_LEN).collect();
	truncated.trim().to_string()
}

/// Sanitizes an HTML fragment that could reach the DOM from untrusted data.
///
/// Removes `<script>` blocks, `javascript:` URIs, inline event-handler
/// attributes, non-image `data:` URIs and CSS `expression()` payloads. This
/// is a removal pass, not an escaper: use it for markup that must stay
/// renderable. For plain text, prefer [`sanitize_search_text`].
///
/// # Examples
///
/// ```
/// use grappelli_sanitize::sanitize_html_fragment;
///
/// let dirty = r#"<img src=x onerror="alert(1)"><script>steal()</script>"#;
/// let clean = sanitize_html_fragment(dirty);
/// assert!(!clean.contains("onerror"));
/// assert!(!clean.contains("<script"));
/// ```
pub fn sanitize_html_fragment(input: &str) -> String {
	let script_block = SCRIPT_BLOCK.get_or_init(|| {
		Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<script\b[^>]*/?>").expect("static pattern")
	});
	let event_handler = EVENT_HANDLER.get_or_init(|| {
		Regex::new(r#"(?i)\son\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]*)"#).expect("static pattern")
	});
	let javascript_uri =
		JAVASCRIPT_URI.get_or_init(|| Regex::new(r"(?i)javascript\s*:").expect("static pattern"));
	let data_uri =
		DATA_URI.get_or_init(|| Regex::new(r#"(?i)data:[^,"'\s>]*"#).expect("static pattern"));
	let css_expression = CSS_EXPRESSION
		.get_or_init(|| Regex::new(r"(?i)expression\s*\([^)]*\)").expect("static pattern"));

	let output = script_block.replace_all(input, "");
	let output = event_handler.replace_all(&output, "");
	let output = javascript_uri.replace_all(&output, "");
	// Image data URIs stay; every other data: payload is dropped.
	let output = data_uri.replace_all(&output, |caps: &regex::Captures<'_>| {
		let uri = &caps[0];
		if uri.len() >= 11 && uri[..11].eq_ignore_ascii_case("data:image/") {
			uri.to_string()
		} else {
			String::new()
		}
	});
	let output = css_expression.replace_all(&output, "");
	output.into_owned()
}
