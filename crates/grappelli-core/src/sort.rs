//! Sorting state

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}
}

/// One entry in the table's sort list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
	/// Column id to sort by
	pub id: String,
	/// Sort descending when `true`
	pub desc: bool,
}

impl SortEntry {
	/// Creates an ascending sort entry
	pub fn asc(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			desc: false,
		}
	}

	/// Creates a descending sort entry
	pub fn desc(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			desc: true,
		}
	}

	/// Returns the entry's direction
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::{SortDirection, SortEntry};
	///
	/// assert_eq!(SortEntry::desc("age").direction(), SortDirection::Descending);
	/// ```
	pub fn direction(&self) -> SortDirection {
		if self.desc {
			SortDirection::Descending
		} else {
			SortDirection::Ascending
		}
	}

	/// Returns a copy with the direction flipped
	pub fn toggled(&self) -> Self {
		Self {
			id: self.id.clone(),
			desc: !self.desc,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sort_direction_toggle() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[test]
	fn test_sort_entry_toggled_preserves_id() {
		let entry = SortEntry::asc("name");
		let toggled = entry.toggled();
		assert_eq!(toggled.id, "name");
		assert!(toggled.desc);
	}
}
