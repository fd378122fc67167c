//! Keyed sliding-window request admission

use crate::time_provider::{SystemTimeProvider, TimeProvider};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A keyed sliding-window counter.
///
/// `is_allowed` prunes timestamps older than the window from the key's
/// history, denies (without recording) when the pruned history is already at
/// capacity, and otherwise records "now". Admission is monotonic within a
/// window: once denied, a key stays denied until its oldest timestamp
/// expires.
///
/// # Examples
///
/// ```
/// use grappelli_throttling::RateLimiter;
/// use std::time::Duration;
///
/// let limiter = RateLimiter::new(1, Duration::from_millis(100));
/// assert!(limiter.is_allowed("typing"));
/// assert!(!limiter.is_allowed("typing"));
/// limiter.reset(Some("typing"));
/// assert!(limiter.is_allowed("typing"));
/// ```
pub struct RateLimiter<T: TimeProvider = SystemTimeProvider> {
	max_requests: usize,
	window: Duration,
	history: RwLock<HashMap<String, Vec<Instant>>>,
	time_provider: Arc<T>,
}

impl RateLimiter<SystemTimeProvider> {
	/// Creates a limiter admitting `max_requests` per `window` per key
	pub fn new(max_requests: usize, window: Duration) -> Self {
		Self::with_time_provider(max_requests, window, Arc::new(SystemTimeProvider::new()))
	}
}

impl<T: TimeProvider> RateLimiter<T> {
	/// Creates a limiter with a custom time provider
	pub fn with_time_provider(max_requests: usize, window: Duration, time_provider: Arc<T>) -> Self {
		Self {
			max_requests,
			window,
			history: RwLock::new(HashMap::new()),
			time_provider,
		}
	}

	/// Checks whether a request under `id` is admitted, recording it if so
	pub fn is_allowed(&self, id: &str) -> bool {
		let now = self.time_provider.now();
		let mut history = self.history.write();
		let timestamps = history.entry(id.to_string()).or_default();
		timestamps.retain(|&stamp| now.saturating_duration_since(stamp) < self.window);
		if timestamps.len() >= self.max_requests {
			return false;
		}
		timestamps.push(now);
		true
	}

	/// Clears one key's history, or all history when `id` is `None`
	pub fn reset(&self, id: Option<&str>) {
		let mut history = self.history.write();
		match id {
			Some(id) => {
				history.remove(id);
			}
			None => history.clear(),
		}
	}

	/// Requests currently recorded in `id`'s window
	pub fn current_count(&self, id: &str) -> usize {
		let now = self.time_provider.now();
		let history = self.history.read();
		history
			.get(id)
			.map(|timestamps| {
				timestamps
					.iter()
					.filter(|&&stamp| now.saturating_duration_since(stamp) < self.window)
					.count()
			})
			.unwrap_or(0)
	}
}
