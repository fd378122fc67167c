//! Controlled/uncontrolled state cells

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single piece of table state whose ownership is decided at construction.
///
/// A *controlled* slot mirrors a value the caller owns: reads return the
/// caller-supplied value and writes are forwarded to the caller's setter,
/// never stored locally. An *uncontrolled* slot owns its value in an internal
/// cell. The mode is fixed when the slot is built; switching a live slot
/// between modes is not supported.
///
/// Cloning an uncontrolled slot shares the underlying cell.
pub enum StateSlot<V> {
	External {
		value: V,
		setter: Rc<dyn Fn(V)>,
	},
	Internal(Rc<RefCell<V>>),
}

impl<V: Clone> StateSlot<V> {
	/// Resolves the slot mode from an optional external value/setter pair.
	///
	/// A supplied `external_value` makes the slot controlled. Without one the
	/// slot is uncontrolled and seeded with `seed`.
	pub fn new(
		external_value: Option<V>,
		external_setter: Option<Rc<dyn Fn(V)>>,
		seed: V,
	) -> Self {
		match external_value {
			Some(value) => {
				let setter = external_setter.unwrap_or_else(|| {
					tracing::warn!(
						"controlled state slot built without a setter; writes will be dropped"
					);
					Rc::new(|_| {})
				});
				Self::External { value, setter }
			}
			None => Self::Internal(Rc::new(RefCell::new(seed))),
		}
	}

	pub fn internal(seed: V) -> Self {
		Self::Internal(Rc::new(RefCell::new(seed)))
	}

	pub fn external(value: V, setter: Rc<dyn Fn(V)>) -> Self {
		Self::External { value, setter }
	}

	pub fn is_controlled(&self) -> bool {
		matches!(self, Self::External { .. })
	}

	/// The currently exposed value.
	pub fn get(&self) -> V {
		match self {
			Self::External { value, .. } => value.clone(),
			Self::Internal(cell) => cell.borrow().clone(),
		}
	}

	/// Writes a value: forwarded to the external setter when controlled,
	/// stored in the internal cell otherwise.
	pub fn set(&self, value: V) {
		match self {
			Self::External { setter, .. } => setter(value),
			Self::Internal(cell) => *cell.borrow_mut() = value,
		}
	}

	/// Applies an updater resolved against the currently exposed value.
	pub fn update(&self, updater: impl FnOnce(&V) -> V) {
		let next = updater(&self.get());
		self.set(next);
	}
}

impl<V: Clone> Clone for StateSlot<V> {
	fn clone(&self) -> Self {
		match self {
			Self::External { value, setter } => Self::External {
				value: value.clone(),
				setter: Rc::clone(setter),
			},
			Self::Internal(cell) => Self::Internal(Rc::clone(cell)),
		}
	}
}

impl<V: fmt::Debug> fmt::Debug for StateSlot<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::External { value, .. } => f
				.debug_struct("External")
				.field("value", value)
				.finish_non_exhaustive(),
			Self::Internal(cell) => f.debug_tuple("Internal").field(&cell.borrow()).finish(),
		}
	}
}
