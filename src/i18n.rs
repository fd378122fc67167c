//! Internationalization module.
//!
//! Nested translation tables with dot-path lookup, `{placeholder}`
//! interpolation, a bound translator, and five bundled locales.
//!
//! # Examples
//!
//! ```rust
//! use grappelli::i18n::interpolate;
//!
//! assert_eq!(interpolate("Page {page}", &[("page", "3")]), "Page 3");
//! ```

pub use grappelli_i18n::*;
