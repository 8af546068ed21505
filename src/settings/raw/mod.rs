use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use dashtable::ui::style;
use dashtable::{SortDirection, SortSetting};
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) data: DataSection,
	pub(super) table: TableSection,
	pub(super) sort: SortSection,
	pub(super) logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SortSection {
	pub(super) column: Option<String>,
	pub(super) direction: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.data.path = Some(path);
		}
		if let Some(title) = cli.title.clone() {
			self.table.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.table.theme = Some(theme);
		}
		if let Some(column) = cli.sort_column.clone() {
			self.sort.column = Some(column);
		}
		if let Some(direction) = cli.sort_direction {
			self.sort.direction = Some(direction.as_str().to_string());
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the raw values and fill in defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.table.theme.is_some(),
				"DASHTABLE__TABLE__THEME",
				"--theme",
				"table.theme",
			),
			sort_direction: detect_source(
				cli.sort_direction.is_some(),
				self.sort.direction.is_some(),
				"DASHTABLE__SORT__DIRECTION",
				"--sort-direction",
				"sort.direction",
			),
		};

		let theme_name = self
			.table
			.theme
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| {
			Error::new(ConfigError::invalid(
				"table.theme",
				theme_name.clone(),
				sources.source_for_theme(),
				format!("unknown theme; expected one of {}", style::names().join(", ")),
			))
		})?;

		let direction = match self.sort.direction {
			Some(raw) => raw.parse::<SortDirection>().map_err(|reason| {
				Error::new(ConfigError::invalid(
					"sort.direction",
					raw.clone(),
					sources.source_for_sort_direction(),
					reason,
				))
			})?,
			None => SortDirection::default(),
		};
		let sort = SortSetting {
			column: self
				.sort
				.column
				.map(|column| column.trim().to_string())
				.filter(|column| !column.is_empty()),
			direction,
		};

		Ok(ResolvedConfig {
			data_path: self.data.path,
			title: self.table.title,
			theme_name,
			theme,
			sort,
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
