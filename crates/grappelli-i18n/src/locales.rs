//! Bundled locale tables
//!
//! Five locales ship with the toolkit as inert JSON data. Callers may supply
//! their own [`TranslationTable`] instead; the bundled tables only cover the
//! toolkit's built-in labels.

use crate::table::TranslationTable;
use once_cell::sync::Lazy;

/// Locale codes bundled with the toolkit
pub const BUNDLED_LOCALES: &[&str] = &["en", "fr", "de", "es", "pt-BR"];

static EN: Lazy<TranslationTable> = Lazy::new(|| parse(include_str!("../locales/en.json")));
static FR: Lazy<TranslationTable> = Lazy::new(|| parse(include_str!("../locales/fr.json")));
static DE: Lazy<TranslationTable> = Lazy::new(|| parse(include_str!("../locales/de.json")));
static ES: Lazy<TranslationTable> = Lazy::new(|| parse(include_str!("../locales/es.json")));
static PT_BR: Lazy<TranslationTable> = Lazy::new(|| parse(include_str!("../locales/pt-BR.json")));

fn parse(source: &str) -> TranslationTable {
	// Bundled data is checked by tests; a broken file degrades to path-echo.
	match serde_json::from_str(source) {
		Ok(value) => TranslationTable::from_value(value),
		Err(error) => {
			tracing::warn!(%error, "Failed to parse bundled locale");
			TranslationTable::default()
		}
	}
}

/// Returns a bundled locale table by code, `None` for unknown codes.
///
/// # Examples
///
/// ```
/// use grappelli_i18n::bundled_locale;
///
/// assert!(bundled_locale("fr").is_some());
/// assert!(bundled_locale("tlh").is_none());
/// ```
pub fn bundled_locale(code: &str) -> Option<&'static TranslationTable> {
	match code {
		"en" => Some(&EN),
		"fr" => Some(&FR),
		"de" => Some(&DE),
		"es" => Some(&ES),
		"pt-BR" | "pt_BR" => Some(&PT_BR),
		_ => None,
	}
}
