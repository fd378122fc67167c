//! # Grappelli Sanitize
//!
//! Sanitization and bounding of untrusted table input.
//!
//! Every function in this crate is total: invalid input degrades to a safe
//! default (empty string, open bound, clamped value) instead of surfacing an
//! error. The table must stay usable under adversarial or malformed input,
//! so the policy is "sanitize and clamp", not "validate and fail".
//!
//! ## Example
//!
//! ```
//! use grappelli_sanitize::sanitize_search_text;
//!
//! let cleaned = sanitize_search_text("Jo<script>alert(1)</script>; drop");
//! assert_eq!(cleaned, "Joalert(1) drop");
//! ```

pub mod filter_value;
pub mod params;
pub mod text;
pub mod upload;

pub use filter_value::sanitize_filter_value;
pub use params::{validate_pagination, validate_sorting, MAX_PAGE_INDEX, MAX_PAGE_SIZE, MAX_SORT_ENTRIES};
pub use text::{sanitize_html_fragment, sanitize_search_text, MAX_SEARCH_TEXT_LEN};
pub use upload::{
	validate_file_upload, FileUploadCheck, FileUploadError, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
