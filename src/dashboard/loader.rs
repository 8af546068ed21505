use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use crate::data::{DataError, Dataset};

/// Where the dashboard gets its rows from.
pub trait DatasetSource: Send + Sync {
	/// Fetch a fresh dataset. Called on a worker thread.
	///
	/// # Errors
	///
	/// Returns [`DataError`] when the dataset cannot be produced.
	fn load(&self) -> Result<Dataset, DataError>;

	/// Short human-readable name used in titles and logs.
	fn describe(&self) -> String;
}

/// Reads a JSON dataset file on every load.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl DatasetSource for FileSource {
	fn load(&self) -> Result<Dataset, DataError> {
		Dataset::from_path(&self.path)
	}

	fn describe(&self) -> String {
		self.path.display().to_string()
	}
}

/// Serves a fixed dataset, for embedding data directly.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
	dataset: Dataset,
}

impl StaticSource {
	#[must_use]
	pub fn new(dataset: Dataset) -> Self {
		Self { dataset }
	}
}

impl DatasetSource for StaticSource {
	fn load(&self) -> Result<Dataset, DataError> {
		Ok(self.dataset.clone())
	}

	fn describe(&self) -> String {
		"inline dataset".to_string()
	}
}

/// Result of one background load, tagged with the request that issued it.
pub(crate) struct LoadResult {
	pub(crate) request: u64,
	pub(crate) outcome: Result<Dataset, DataError>,
}

/// Run `source.load()` on a new thread and send the outcome to `tx`.
pub(crate) fn spawn_load(source: Arc<dyn DatasetSource>, request: u64, tx: Sender<LoadResult>) {
	thread::spawn(move || {
		let outcome = source.load();
		// The dashboard may be gone by the time the load finishes.
		let _ = tx.send(LoadResult { request, outcome });
	});
}
