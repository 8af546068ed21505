//! Dataset loading for the dashboard.
//!
//! Two JSON layouts are accepted. The explicit form lists headers and rows:
//!
//! ```json
//! { "headers": [{ "id": "name", "title": "Name" }],
//!   "rows": [{ "id": "1", "cells": { "name": "alpha" } }] }
//! ```
//!
//! The shorthand form is a bare array of objects. Headers are inferred from
//! keys in first-seen order and a row's id comes from its `id` field, or its
//! position when there is none.

mod error;

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use serde::Deserialize;
use serde_json::{Map, Value};

pub use error::DataError;

use crate::printable::print_value;
use crate::types::{ColumnHeader, DataRow};

/// Headers and rows ready to be handed to the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
	pub headers: Vec<ColumnHeader>,
	pub rows: Vec<DataRow>,
}

#[derive(Debug, Deserialize)]
struct ExplicitDataset {
	headers: Vec<ColumnHeader>,
	#[serde(default)]
	rows: Vec<DataRow>,
}

impl Dataset {
	#[must_use]
	pub fn new(headers: Vec<ColumnHeader>, rows: Vec<DataRow>) -> Self {
		Self { headers, rows }
	}

	/// Read and parse a dataset file.
	///
	/// # Errors
	///
	/// Returns [`DataError`] when the file cannot be read or does not hold a
	/// supported layout.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&contents, &path.display().to_string())
	}

	/// Parse a dataset from JSON text; `origin` names the source in errors.
	///
	/// # Errors
	///
	/// Returns [`DataError`] for malformed JSON, unsupported layouts and
	/// duplicate column ids.
	pub fn from_json_str(contents: &str, origin: &str) -> Result<Self, DataError> {
		let value: Value = serde_json::from_str(contents).map_err(|source| DataError::Json {
			origin: origin.to_string(),
			source,
		})?;
		Self::from_value(value, origin)
	}

	fn from_value(value: Value, origin: &str) -> Result<Self, DataError> {
		let explicit = matches!(&value, Value::Object(object) if object.contains_key("headers"));
		let dataset = if explicit {
			let explicit: ExplicitDataset =
				serde_json::from_value(value).map_err(|source| DataError::Json {
					origin: origin.to_string(),
					source,
				})?;
			Self::new(explicit.headers, explicit.rows)
		} else {
			match value {
				Value::Array(items) => Self::from_records(items, origin)?,
				other => {
					return Err(DataError::Shape {
						origin: origin.to_string(),
						reason: format!(
							"expected an array of objects or an object with `headers`, found {}",
							kind_name(&other)
						),
					});
				}
			}
		};
		dataset.check_unique_headers(origin)?;
		Ok(dataset)
	}

	fn from_records(items: Vec<Value>, origin: &str) -> Result<Self, DataError> {
		let mut columns: IndexSet<String> = IndexSet::new();
		let mut rows = Vec::with_capacity(items.len());

		for (idx, item) in items.into_iter().enumerate() {
			let Value::Object(record) = item else {
				return Err(DataError::Shape {
					origin: origin.to_string(),
					reason: format!("record {idx} is {}, expected an object", kind_name(&item)),
				});
			};
			columns.extend(record.keys().cloned());
			rows.push(record_to_row(idx, record));
		}

		let headers = columns
			.into_iter()
			.map(|id| ColumnHeader::new(id.clone(), id))
			.collect();
		Ok(Self::new(headers, rows))
	}

	fn check_unique_headers(&self, origin: &str) -> Result<(), DataError> {
		let mut seen = IndexSet::new();
		for header in &self.headers {
			if !seen.insert(header.id.as_str()) {
				return Err(DataError::DuplicateColumn {
					origin: origin.to_string(),
					id: header.id.clone(),
				});
			}
		}
		Ok(())
	}
}

fn record_to_row(idx: usize, record: Map<String, Value>) -> DataRow {
	let id = match record.get("id") {
		Some(Value::Null) | None => idx.to_string(),
		Some(value) => print_value(Some(value)),
	};
	DataRow {
		id,
		cells: record.into_iter().collect(),
	}
}

fn kind_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
