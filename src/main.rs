mod cli;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use dashtable::{App, Dashboard, FileSource, logging};
use settings::ResolvedConfig;
use tracing::{info, warn};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in dashtable::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let Some(data_path) = resolved.data_path.clone() else {
		bail!("no dataset given; pass a JSON file or set `data.path` in the configuration");
	};

	if cli.render {
		render_once(data_path, &resolved, cli.output)
	} else {
		run_interactive(data_path, resolved)
	}
}

/// Load the dataset synchronously and print the table once.
fn render_once(data_path: PathBuf, settings: &ResolvedConfig, format: OutputFormat) -> Result<()> {
	let mut dashboard = Dashboard::new(Arc::new(FileSource::new(&data_path)), settings.sort.clone());
	dashboard
		.load_blocking()
		.with_context(|| format!("failed to load {}", data_path.display()))?;

	let view = dashboard.table().view();
	match format {
		OutputFormat::Plain => print_plain(&view),
		OutputFormat::Json => print_json(&view)?,
	}
	Ok(())
}

fn run_interactive(data_path: PathBuf, settings: ResolvedConfig) -> Result<()> {
	match logging::initialize(&settings.log_level) {
		Ok(path) => info!(log = %path.display(), "logging initialized"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	let ResolvedConfig {
		title,
		theme,
		theme_name,
		sort,
		..
	} = settings;
	info!(data = %data_path.display(), theme = %theme_name, "starting dashboard");

	let dashboard = Dashboard::new(Arc::new(FileSource::new(data_path)), sort);
	let mut app = App::new(dashboard).with_theme(theme);
	if let Some(title) = title {
		app = app.with_title(title);
	}

	let result = dashtable::run(app);
	if let Err(err) = &result {
		warn!(error = %err, "dashboard exited with an error");
	}
	result
}
