use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("invalid JSON in {origin}: {source}")]
	Json {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("unsupported dataset shape in {origin}: {reason}")]
	Shape { origin: String, reason: String },
	#[error("duplicate column id '{id}' in {origin}")]
	DuplicateColumn { origin: String, id: String },
}
