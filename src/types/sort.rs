use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of the table's sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	/// Return the identifier used in configuration and JSON.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
			SortDirection::Desc => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(SortDirection::Asc),
			"desc" | "descending" => Ok(SortDirection::Desc),
			other => Err(format!("unknown sort direction '{other}'")),
		}
	}
}

/// The column the table is ordered by, owned and persisted by the caller.
///
/// A `None` column means no column has been selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSetting {
	pub column: Option<String>,
	pub direction: SortDirection,
}

impl SortSetting {
	#[must_use]
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: Some(column.into()),
			direction,
		}
	}

	/// A setting with no active column.
	#[must_use]
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// Whether `column_id` is the active sort column.
	#[must_use]
	pub fn is_active(&self, column_id: &str) -> bool {
		self.column.as_deref() == Some(column_id)
	}
}
