//! Debounced, sanitized, rate-checked text input

use grappelli_sanitize::sanitize_search_text;
use grappelli_throttling::{RateLimiter, SystemTimeProvider, TimeProvider};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Quiet period applied when no explicit delay is given
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

struct PendingInput {
	raw: String,
	buffered_at: Instant,
}

/// Buffers raw keystrokes and emits a sanitized value once typing goes quiet.
///
/// Each [`input`](Self::input) replaces any pending value, so only the last
/// write within a quiet period survives. The host drives settlement by calling
/// [`poll`](Self::poll) on its tick; once the quiet period has elapsed the
/// pending raw text is sanitized, checked against the rate limiter, and handed
/// to the `on_settle` callback. A denied rate check drops the value with a
/// warning instead of emitting it.
pub struct DebouncedInput<T: TimeProvider = SystemTimeProvider> {
	delay: Duration,
	limiter: RateLimiter<T>,
	limiter_key: String,
	time_provider: Arc<T>,
	pending: Option<PendingInput>,
	on_settle: Box<dyn Fn(String)>,
}

impl DebouncedInput<SystemTimeProvider> {
	/// Creates a debouncer with the given quiet period and limiter
	pub fn new(
		delay: Duration,
		limiter: RateLimiter<SystemTimeProvider>,
		on_settle: impl Fn(String) + 'static,
	) -> Self {
		Self::with_time_provider(
			delay,
			limiter,
			Arc::new(SystemTimeProvider::new()),
			on_settle,
		)
	}
}

impl<T: TimeProvider> DebouncedInput<T> {
	/// Creates a debouncer reading the clock from `time_provider`
	pub fn with_time_provider(
		delay: Duration,
		limiter: RateLimiter<T>,
		time_provider: Arc<T>,
		on_settle: impl Fn(String) + 'static,
	) -> Self {
		Self {
			delay,
			limiter,
			limiter_key: "debounced-input".to_string(),
			time_provider,
			pending: None,
			on_settle: Box::new(on_settle),
		}
	}

	/// Buffers a keystroke, replacing any pending value
	pub fn input(&mut self, raw: impl Into<String>) {
		self.pending = Some(PendingInput {
			raw: raw.into(),
			buffered_at: self.time_provider.now(),
		});
	}

	/// Whether a value is buffered and waiting to settle
	pub fn has_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Settles the pending value if its quiet period has elapsed.
	///
	/// Returns the emitted sanitized value, or `None` when nothing settled.
	pub fn poll(&mut self) -> Option<String> {
		let elapsed = {
			let pending = self.pending.as_ref()?;
			self.time_provider
				.now()
				.saturating_duration_since(pending.buffered_at)
		};
		if elapsed < self.delay {
			return None;
		}
		self.settle()
	}

	/// Settles the pending value immediately, skipping the quiet period
	pub fn flush(&mut self) -> Option<String> {
		self.pending.as_ref()?;
		self.settle()
	}

	fn settle(&mut self) -> Option<String> {
		let pending = self.pending.take()?;
		let sanitized = sanitize_search_text(&pending.raw);
		if !self.limiter.is_allowed(&self.limiter_key) {
			tracing::warn!(value = %sanitized, "debounced input dropped by rate limiter");
			return None;
		}
		(self.on_settle)(sanitized.clone());
		Some(sanitized)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use grappelli_throttling::MockTimeProvider;
	use rstest::rstest;
	use std::cell::RefCell;
	use std::rc::Rc;

	fn mock_debouncer(
		delay_ms: u64,
		max_requests: usize,
		window_ms: u64,
	) -> (
		DebouncedInput<MockTimeProvider>,
		MockTimeProvider,
		Rc<RefCell<Vec<String>>>,
	) {
		let clock = MockTimeProvider::default();
		let provider = Arc::new(clock.clone());
		let limiter = RateLimiter::with_time_provider(
			max_requests,
			Duration::from_millis(window_ms),
			Arc::clone(&provider),
		);
		let settled = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&settled);
		let debouncer = DebouncedInput::with_time_provider(
			Duration::from_millis(delay_ms),
			limiter,
			provider,
			move |value| sink.borrow_mut().push(value),
		);
		(debouncer, clock, settled)
	}

	#[rstest]
	fn test_nothing_settles_before_the_quiet_period() {
		// Arrange
		let (mut debouncer, clock, settled) = mock_debouncer(500, 10, 1000);
		debouncer.input("hello");

		// Act
		clock.advance(Duration::from_millis(499));

		// Assert
		assert_eq!(debouncer.poll(), None);
		assert!(settled.borrow().is_empty());
		assert!(debouncer.has_pending());
	}

	#[rstest]
	fn test_settles_after_the_quiet_period() {
		// Arrange
		let (mut debouncer, clock, settled) = mock_debouncer(500, 10, 1000);
		debouncer.input("hello");

		// Act
		clock.advance(Duration::from_millis(500));

		// Assert
		assert_eq!(debouncer.poll(), Some("hello".to_string()));
		assert_eq!(*settled.borrow(), vec!["hello".to_string()]);
		assert!(!debouncer.has_pending());
	}

	#[rstest]
	fn test_new_keystroke_cancels_the_pending_value() {
		// Arrange
		let (mut debouncer, clock, settled) = mock_debouncer(500, 10, 1000);
		debouncer.input("hel");
		clock.advance(Duration::from_millis(400));

		// Act - a fresh keystroke restarts the quiet period
		debouncer.input("hello");
		clock.advance(Duration::from_millis(400));
		assert_eq!(debouncer.poll(), None);
		clock.advance(Duration::from_millis(100));

		// Assert - only the last write survives
		assert_eq!(debouncer.poll(), Some("hello".to_string()));
		assert_eq!(*settled.borrow(), vec!["hello".to_string()]);
	}

	#[rstest]
	fn test_settled_value_is_sanitized() {
		// Arrange
		let (mut debouncer, _, settled) = mock_debouncer(500, 10, 1000);
		debouncer.input("  <b>O'Reilly</b>; ");

		// Act
		let emitted = debouncer.flush();

		// Assert
		assert_eq!(emitted, Some("OReilly".to_string()));
		assert_eq!(*settled.borrow(), vec!["OReilly".to_string()]);
	}

	#[rstest]
	fn test_rate_denied_settlement_is_dropped() {
		// Arrange - limiter admits a single settlement per window
		let (mut debouncer, _, settled) = mock_debouncer(500, 1, 10_000);
		debouncer.input("first");
		assert_eq!(debouncer.flush(), Some("first".to_string()));

		// Act
		debouncer.input("second");
		let emitted = debouncer.flush();

		// Assert - the denied value is gone, not re-buffered
		assert_eq!(emitted, None);
		assert!(!debouncer.has_pending());
		assert_eq!(*settled.borrow(), vec!["first".to_string()]);
	}

	#[rstest]
	fn test_flush_with_nothing_pending_is_a_no_op() {
		let (mut debouncer, _, settled) = mock_debouncer(500, 10, 1000);
		assert_eq!(debouncer.flush(), None);
		assert!(settled.borrow().is_empty());
	}
}
