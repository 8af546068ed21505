use std::fmt::Write;
use std::path::{Path, PathBuf};

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use dashtable::logging;

use crate::settings::{ENV_PREFIX, ENV_SEPARATOR, config_search_paths};

/// `--version` banner: where configuration is read from and where logs go.
pub(super) fn long_version() -> &'static str {
	let log_file = logging::default_log_path().map_err(|err| err.to_string());
	let banner = version_banner(
		&config_search_paths(),
		log_file.as_deref().map_err(String::as_str),
	);
	Box::leak(banner.into_boxed_str())
}

pub(super) fn version_banner(config_files: &[PathBuf], log_file: Result<&Path, &str>) -> String {
	let mut banner = env!("CARGO_PKG_VERSION").to_string();
	let _ = writeln!(banner);
	let _ = writeln!(banner, "config files (later files win):");
	for path in config_files {
		let _ = writeln!(banner, "  {}", path.display());
	}
	let _ = writeln!(
		banner,
		"environment: {}{ENV_SEPARATOR}<SECTION>{ENV_SEPARATOR}<KEY>",
		ENV_PREFIX.to_uppercase()
	);
	match log_file {
		Ok(path) => {
			let _ = write!(banner, "log file: {}", path.display());
		}
		Err(reason) => {
			let _ = write!(banner, "log file: unavailable ({reason})");
		}
	}
	banner
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
