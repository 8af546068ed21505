//! Configuration loading and resolution.
//!
//! `load` layers default config files, explicit `--config` files, the
//! environment and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod layers;
mod raw;
mod resolved;

use anyhow::Result;

pub(crate) use layers::{ENV_PREFIX, ENV_SEPARATOR, config_search_paths};
pub use resolved::ResolvedConfig;

use crate::cli::CliArgs;

/// Read every configuration layer, apply CLI flags and validate the result.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw = layers::read_layers(cli)?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
