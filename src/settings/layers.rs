//! Configuration layers, lowest precedence first: the user config file, the
//! per-directory files, `--config` files, then `DASHTABLE__SECTION__KEY`
//! environment variables. CLI flags are applied afterwards on the raw values.

use std::env;
use std::path::PathBuf;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use dashtable::app_dirs;
use thiserror::Error;

use super::raw::RawConfig;
use crate::cli::CliArgs;

/// Config file read from the user configuration directory.
pub(crate) const USER_CONFIG_FILE: &str = "config.toml";
/// Config files read from the working directory, in precedence order.
pub(crate) const LOCAL_CONFIG_FILES: [&str; 2] = [".dashtable.toml", "dashtable.toml"];
pub(crate) const ENV_PREFIX: &str = "dashtable";
pub(crate) const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub(crate) enum LayerError {
	#[error("failed to read configuration: {0}")]
	Read(#[source] config::ConfigError),
	/// A value exists but has the wrong shape, e.g. a list where a string
	/// belongs.
	#[error("invalid value for {key} from {origin}: expected {expected}, found {found}")]
	Shape {
		key: String,
		origin: String,
		expected: &'static str,
		found: String,
	},
}

impl From<config::ConfigError> for LayerError {
	fn from(err: config::ConfigError) -> Self {
		match err {
			config::ConfigError::Type {
				origin,
				unexpected,
				expected,
				key,
			} => Self::Shape {
				key: key.unwrap_or_else(|| "configuration".to_string()),
				origin: origin.unwrap_or_else(|| "configuration".to_string()),
				expected,
				found: unexpected.to_string(),
			},
			other => Self::Read(other),
		}
	}
}

/// Merge every layer that applies to `cli` into raw, unvalidated values.
pub(super) fn read_layers(cli: &CliArgs) -> Result<RawConfig, LayerError> {
	let config = layered(cli).build()?;
	Ok(config.try_deserialize()?)
}

fn layered(cli: &CliArgs) -> ConfigBuilder<DefaultState> {
	let optional = if cli.no_config {
		Vec::new()
	} else {
		config_search_paths()
	};
	let optional = optional
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator(ENV_SEPARATOR)
				.try_parsing(true),
		)
}

/// Files checked when `--no-config` is absent, lowest precedence first.
pub(crate) fn config_search_paths() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join(USER_CONFIG_FILE));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| LOCAL_CONFIG_FILES.map(|name| cwd.join(name)));
	user.into_iter().chain(local).collect()
}
