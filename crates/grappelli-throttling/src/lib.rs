//! # Grappelli Throttling
//!
//! Keyed sliding-window rate limiting.
//!
//! Each table instance owns its own [`RateLimiter`] (no module-level
//! singletons), so instances never interfere with each other and tests can
//! inject a [`MockTimeProvider`] to control the clock.
//!
//! ## Example
//!
//! ```
//! use grappelli_throttling::RateLimiter;
//! use std::time::Duration;
//!
//! let limiter = RateLimiter::new(2, Duration::from_secs(1));
//! assert!(limiter.is_allowed("lazy-load"));
//! assert!(limiter.is_allowed("lazy-load"));
//! assert!(!limiter.is_allowed("lazy-load"));
//! ```

pub mod limiter;
pub mod time_provider;

pub use limiter::RateLimiter;
pub use time_provider::{MockTimeProvider, SystemTimeProvider, TimeProvider};
