//! Time injection for time-dependent components
//!
//! The rate limiter and the debounced-input pipeline both read the clock
//! through this trait so tests can advance time manually.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Provides the current instant to throttling and debouncing components
pub trait TimeProvider: Send + Sync {
	/// Returns the current instant
	fn now(&self) -> Instant;
}

/// System time provider backed by the monotonic clock
#[derive(Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
	/// Creates a new system time provider
	pub fn new() -> Self {
		Self
	}
}

impl TimeProvider for SystemTimeProvider {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Mock time provider for tests that allows manual time control
#[derive(Clone)]
pub struct MockTimeProvider {
	current_time: Arc<RwLock<Instant>>,
}

impl MockTimeProvider {
	/// Creates a mock provider starting at `start_time`
	pub fn new(start_time: Instant) -> Self {
		Self {
			current_time: Arc::new(RwLock::new(start_time)),
		}
	}

	/// Advances the mock clock by `duration`
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_throttling::{MockTimeProvider, TimeProvider};
	/// use std::time::{Duration, Instant};
	///
	/// let provider = MockTimeProvider::default();
	/// let before = provider.now();
	/// provider.advance(Duration::from_secs(5));
	/// assert_eq!(provider.now(), before + Duration::from_secs(5));
	/// ```
	pub fn advance(&self, duration: std::time::Duration) {
		let mut time = self.current_time.write();
		*time += duration;
	}

	/// Sets the mock clock to an absolute instant
	pub fn set_time(&self, time: Instant) {
		let mut current = self.current_time.write();
		*current = time;
	}
}

impl Default for MockTimeProvider {
	fn default() -> Self {
		Self::new(Instant::now())
	}
}

impl TimeProvider for MockTimeProvider {
	fn now(&self) -> Instant {
		*self.current_time.read()
	}
}
