//! State plumbing module.
//!
//! Controlled/uncontrolled state slots and the debounced, sanitized,
//! rate-checked text input.

pub use grappelli_state::*;
