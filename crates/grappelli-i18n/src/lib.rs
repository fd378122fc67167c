//! # Grappelli I18n
//!
//! Nested translation tables with dot-path lookup and `{placeholder}`
//! interpolation.
//!
//! Lookup never fails: a missing path logs a warning and echoes the path
//! itself as visible fallback text, so labels always render *something*.
//!
//! ## Example
//!
//! ```
//! use grappelli_i18n::{bundled_locale, Translator};
//!
//! let table = bundled_locale("en").expect("bundled");
//! let t = Translator::bind(table.clone());
//! assert_eq!(t.get("pagination.next"), "Next");
//! assert_eq!(t.get("no.such.key"), "no.such.key");
//! ```

pub mod locales;
pub mod table;

pub use locales::{bundled_locale, BUNDLED_LOCALES};
pub use table::{interpolate, lookup, lookup_with, TranslationTable, Translator};
