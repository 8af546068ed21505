use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DirectionArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `dashtable` binary.
#[derive(Parser, Debug)]
#[command(
	name = "dashtable",
	version,
	long_version = long_version(),
	about = "Sortable dashboard table for JSON datasets",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "DATA",
		help = "JSON dataset to display (default: `data.path` from configuration)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DASHTABLE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn on the table border (default: dataset path)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "sort-column",
		value_name = "ID",
		help = "Column id to sort by initially (default: unsorted)"
	)]
	pub(crate) sort_column: Option<String>,
	#[arg(
		long = "sort-direction",
		value_enum,
		help = "Initial sort direction (default: asc)"
	)]
	pub(crate) sort_direction: Option<DirectionArg>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'r',
		long = "render",
		help = "Print the table once to stdout instead of starting the interface (default: disabled)"
	)]
	pub(crate) render: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how `--render` prints the table"
	)]
	pub(crate) output: OutputFormat,
}
