//! Sort-order toggling for header activations.

use crate::types::{SortDirection, SortSetting};

/// Compute the sort setting proposed when the header `clicked` is activated.
///
/// Activating the column that is currently sorted ascending flips it to
/// descending. Any other activation (a different column, the same column while
/// descending, or no active column) sorts ascending on `clicked`.
#[must_use]
pub fn next_sort(clicked: &str, previous: &SortSetting) -> SortSetting {
	let direction = if previous.is_active(clicked) && previous.direction == SortDirection::Asc {
		SortDirection::Desc
	} else {
		SortDirection::Asc
	};
	SortSetting::new(clicked, direction)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ascending_active_column_flips_to_descending() {
		let previous = SortSetting::new("name", SortDirection::Asc);
		assert_eq!(
			next_sort("name", &previous),
			SortSetting::new("name", SortDirection::Desc)
		);
	}

	#[test]
	fn descending_active_column_returns_to_ascending() {
		let previous = SortSetting::new("name", SortDirection::Desc);
		assert_eq!(
			next_sort("name", &previous),
			SortSetting::new("name", SortDirection::Asc)
		);
	}

	#[test]
	fn other_column_resets_to_ascending() {
		for direction in [SortDirection::Asc, SortDirection::Desc] {
			let previous = SortSetting::new("size", direction);
			assert_eq!(
				next_sort("name", &previous),
				SortSetting::new("name", SortDirection::Asc)
			);
		}
	}

	#[test]
	fn unsorted_table_starts_ascending() {
		assert_eq!(
			next_sort("name", &SortSetting::unsorted()),
			SortSetting::new("name", SortDirection::Asc)
		);
	}

	#[test]
	fn previous_setting_is_left_untouched() {
		let previous = SortSetting::new("name", SortDirection::Asc);
		let snapshot = previous.clone();
		let _ = next_sort("name", &previous);
		assert_eq!(previous, snapshot);
	}
}
