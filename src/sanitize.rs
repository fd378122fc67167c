//! Input sanitization module.
//!
//! Total functions that clean and bound untrusted table input: free text,
//! filter values, pagination and sorting parameters, file uploads.
//!
//! # Examples
//!
//! ```rust
//! use grappelli::sanitize::sanitize_search_text;
//!
//! assert_eq!(sanitize_search_text("  <b>jo</b>; "), "jo");
//! ```

pub use grappelli_sanitize::*;
