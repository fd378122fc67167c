//! Rate limiting module.
//!
//! The keyed sliding-window rate limiter and the time-provider abstraction
//! shared by every time-dependent component.

pub use grappelli_throttling::*;
