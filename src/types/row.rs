use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Describes one table column. The id joins headers to each row's cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
	pub id: String,
	pub title: String,
}

impl ColumnHeader {
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
		}
	}
}

/// A single record keyed by column id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
	pub id: String,
	#[serde(default)]
	pub cells: IndexMap<String, Value>,
}

impl DataRow {
	/// Build a row from `(column id, value)` pairs.
	#[must_use]
	pub fn new<I, K, V>(id: impl Into<String>, cells: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		Self {
			id: id.into(),
			cells: cells
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}

	/// Look up the value for a column, if the row carries one.
	#[must_use]
	pub fn cell(&self, column_id: &str) -> Option<&Value> {
		self.cells.get(column_id)
	}
}
