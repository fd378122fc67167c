//! State plumbing for the table: per-slot controlled/uncontrolled cells and a
//! debounced, sanitized, rate-checked text input.
//!
//! Everything here is single-threaded by design. Slots hand out clones and
//! route writes either to the caller's setter (controlled) or an owned cell
//! (uncontrolled); the debouncer is driven by explicit [`DebouncedInput::poll`]
//! calls rather than a background timer.

pub mod debounce;
pub mod slot;

pub use debounce::{DebouncedInput, DEFAULT_DEBOUNCE};
pub use slot::StateSlot;
