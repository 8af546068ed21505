//! The dashboard owns everything the table displays.
//!
//! It holds the headers, rows and sort setting, applies sort changes proposed
//! by the table to its own rows, and fetches datasets on a worker thread while
//! the table shows its loading overlay over the previous rows.

mod loader;
mod ordering;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, info, warn};

pub use loader::{DatasetSource, FileSource, StaticSource};
use loader::{LoadResult, spawn_load};
pub use ordering::{compare_values, sort_rows};

use crate::data::{DataError, Dataset};
use crate::types::{ColumnHeader, DataRow, SortSetting};
use crate::ui::components::DashboardTable;

pub struct Dashboard {
	headers: Vec<ColumnHeader>,
	rows: Vec<DataRow>,
	sort: SortSetting,
	source: Arc<dyn DatasetSource>,
	pending: Option<u64>,
	next_request: u64,
	last_error: Option<String>,
	tx: Sender<LoadResult>,
	rx: Receiver<LoadResult>,
}

impl Dashboard {
	/// Create an empty dashboard that loads from `source`.
	#[must_use]
	pub fn new(source: Arc<dyn DatasetSource>, sort: SortSetting) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			headers: Vec::new(),
			rows: Vec::new(),
			sort,
			source,
			pending: None,
			next_request: 0,
			last_error: None,
			tx,
			rx,
		}
	}

	#[must_use]
	pub fn headers(&self) -> &[ColumnHeader] {
		&self.headers
	}

	#[must_use]
	pub fn rows(&self) -> &[DataRow] {
		&self.rows
	}

	#[must_use]
	pub fn sort(&self) -> &SortSetting {
		&self.sort
	}

	/// Whether a background load is in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.pending.is_some()
	}

	/// Message from the most recent failed load, cleared by a successful one.
	#[must_use]
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	#[must_use]
	pub fn source_name(&self) -> String {
		self.source.describe()
	}

	/// Props for drawing the current state.
	#[must_use]
	pub fn table(&self) -> DashboardTable<'_> {
		DashboardTable::new(self.is_loading(), &self.headers, &self.rows, &self.sort)
	}

	/// Start a background load. A load already in flight is superseded and
	/// its result is discarded when it arrives.
	pub fn reload(&mut self) {
		self.next_request = self.next_request.wrapping_add(1);
		let request = self.next_request;
		self.pending = Some(request);
		info!(request, source = %self.source.describe(), "loading dataset");
		spawn_load(Arc::clone(&self.source), request, self.tx.clone());
	}

	/// Load synchronously on the calling thread.
	///
	/// # Errors
	///
	/// Returns the source's [`DataError`]; the current rows are kept.
	pub fn load_blocking(&mut self) -> Result<(), DataError> {
		let dataset = self.source.load()?;
		self.apply_dataset(dataset);
		Ok(())
	}

	/// Apply any finished background loads. Returns `true` when the visible
	/// state changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(result) => changed |= self.finish_load(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Accept a sort setting proposed by the table and reorder the rows.
	pub fn on_sort_change(&mut self, setting: SortSetting) {
		debug!(column = ?setting.column, direction = %setting.direction, "sort changed");
		self.sort = setting;
		sort_rows(&mut self.rows, &self.sort);
	}

	/// Replace headers and rows, keeping the current sort setting applied.
	pub fn apply_dataset(&mut self, dataset: Dataset) {
		let Dataset { headers, mut rows } = dataset;
		sort_rows(&mut rows, &self.sort);
		self.headers = headers;
		self.rows = rows;
		self.last_error = None;
	}

	fn finish_load(&mut self, result: LoadResult) -> bool {
		if self.pending != Some(result.request) {
			debug!(request = result.request, "discarding superseded load");
			return false;
		}
		self.pending = None;
		match result.outcome {
			Ok(dataset) => {
				info!(
					request = result.request,
					rows = dataset.rows.len(),
					columns = dataset.headers.len(),
					"dataset loaded"
				);
				self.apply_dataset(dataset);
			}
			Err(err) => {
				warn!(request = result.request, error = %err, "dataset load failed");
				self.last_error = Some(err.to_string());
			}
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::thread;
	use std::time::{Duration, Instant};

	use serde_json::json;

	use super::*;
	use crate::types::SortDirection;

	fn dataset() -> Dataset {
		Dataset::new(
			vec![ColumnHeader::new("name", "Name"), ColumnHeader::new("size", "Size")],
			vec![
				DataRow::new("a", [("name", json!("beta")), ("size", json!(2))]),
				DataRow::new("b", [("name", json!("alpha")), ("size", json!(9))]),
			],
		)
	}

	fn ids(dashboard: &Dashboard) -> Vec<&str> {
		dashboard.rows().iter().map(|row| row.id.as_str()).collect()
	}

	fn pump_until_idle(dashboard: &mut Dashboard) {
		let deadline = Instant::now() + Duration::from_secs(5);
		while dashboard.is_loading() {
			dashboard.pump();
			assert!(Instant::now() < deadline, "load did not finish");
			thread::sleep(Duration::from_millis(5));
		}
	}

	/// Fails every load after the first.
	struct FlakySource {
		calls: Mutex<u32>,
	}

	impl DatasetSource for FlakySource {
		fn load(&self) -> Result<Dataset, DataError> {
			let mut calls = self.calls.lock().expect("lock");
			*calls += 1;
			if *calls == 1 {
				Ok(dataset())
			} else {
				Err(DataError::Shape {
					origin: "flaky".into(),
					reason: "gone".into(),
				})
			}
		}

		fn describe(&self) -> String {
			"flaky".into()
		}
	}

	#[test]
	fn applying_a_dataset_respects_current_sort() {
		let source = Arc::new(StaticSource::new(dataset()));
		let mut dashboard = Dashboard::new(source, SortSetting::new("name", SortDirection::Asc));
		dashboard.load_blocking().expect("load");
		assert_eq!(ids(&dashboard), vec!["b", "a"]);
	}

	#[test]
	fn sort_changes_from_the_table_reorder_rows() {
		let source = Arc::new(StaticSource::new(dataset()));
		let mut dashboard = Dashboard::new(source, SortSetting::unsorted());
		dashboard.load_blocking().expect("load");
		assert_eq!(ids(&dashboard), vec!["a", "b"]);

		let mut proposed = None;
		assert!(dashboard.table().activate(1, |setting| proposed = Some(setting)));
		dashboard.on_sort_change(proposed.expect("proposal"));
		assert_eq!(dashboard.sort(), &SortSetting::new("size", SortDirection::Asc));
		assert_eq!(ids(&dashboard), vec!["a", "b"]);

		let mut proposed = None;
		dashboard.table().activate(1, |setting| proposed = Some(setting));
		dashboard.on_sort_change(proposed.expect("proposal"));
		assert_eq!(dashboard.sort(), &SortSetting::new("size", SortDirection::Desc));
		assert_eq!(ids(&dashboard), vec!["b", "a"]);
	}

	#[test]
	fn background_load_shows_loading_until_pumped() {
		let source = Arc::new(StaticSource::new(dataset()));
		let mut dashboard = Dashboard::new(source, SortSetting::unsorted());
		dashboard.reload();
		assert!(dashboard.is_loading());
		assert!(dashboard.table().view().loading);

		pump_until_idle(&mut dashboard);
		assert!(!dashboard.table().view().loading);
		assert_eq!(dashboard.rows().len(), 2);
	}

	#[test]
	fn failed_reload_keeps_previous_rows() {
		let source = Arc::new(FlakySource {
			calls: Mutex::new(0),
		});
		let mut dashboard = Dashboard::new(source, SortSetting::unsorted());
		dashboard.reload();
		pump_until_idle(&mut dashboard);
		assert_eq!(dashboard.rows().len(), 2);

		dashboard.reload();
		pump_until_idle(&mut dashboard);
		assert_eq!(dashboard.rows().len(), 2);
		assert!(dashboard.last_error().is_some_and(|msg| msg.contains("gone")));
	}

	#[test]
	fn superseded_loads_are_discarded() {
		let source = Arc::new(StaticSource::new(dataset()));
		let mut dashboard = Dashboard::new(source, SortSetting::unsorted());
		let stale = LoadResult {
			request: 41,
			outcome: Ok(Dataset::default()),
		};
		dashboard.pending = Some(42);
		assert!(!dashboard.finish_load(stale));
		assert!(dashboard.is_loading());
	}
}
