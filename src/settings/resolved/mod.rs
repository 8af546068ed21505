use std::path::PathBuf;

use dashtable::{SortSetting, Theme};

mod errors;
mod sources;
mod summary;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub data_path: Option<PathBuf>,
	pub title: Option<String>,
	pub theme_name: String,
	pub theme: Theme,
	pub sort: SortSetting,
	pub log_level: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
