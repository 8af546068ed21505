//! File logging.
//!
//! The terminal is owned by the UI while it runs, so events go to
//! `dashtable.log` in the data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "dashtable.log";

/// Log file inside the data directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to the default log file.
///
/// `RUST_LOG` takes precedence over `level`. Returns the log path on success.
pub fn initialize(level: &str) -> Result<PathBuf> {
	let path = default_log_path()?;
	initialize_at(&path, level)?;
	Ok(path)
}

/// Install the global subscriber writing to `path`.
pub fn initialize_at(path: &Path, level: &str) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter_for(level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn filter_for(level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creates_missing_log_directory() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		// Another test may already have installed a subscriber; the file must
		// exist either way.
		let _ = initialize_at(&path, "info");
		assert!(path.exists());
	}
}
