use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	match &config.data_path {
		Some(path) => {
			let _ = writeln!(out, "  Data: {}", path.display());
		}
		None => out.push_str("  Data: (none)\n"),
	}
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Title: {title}");
	}
	let _ = writeln!(out, "  Theme: {}", config.theme_name);
	match &config.sort.column {
		Some(column) => {
			let _ = writeln!(out, "  Sort: {column} ({})", config.sort.direction);
		}
		None => out.push_str("  Sort: (unsorted)\n"),
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use dashtable::{SortDirection, SortSetting, default_theme};

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			data_path: Some(PathBuf::from("hosts.json")),
			title: Some("Hosts".into()),
			theme_name: "slate".into(),
			theme: default_theme(),
			sort: SortSetting::new("load", SortDirection::Desc),
			log_level: "debug".into(),
		};

		let summary = format_summary(&config);
		assert!(summary.contains("Data: hosts.json"));
		assert!(summary.contains("Title: Hosts"));
		assert!(summary.contains("Sort: load (desc)"));
		assert!(summary.contains("Log level: debug"));
	}

	#[test]
	fn summary_marks_unsorted_tables() {
		let config = ResolvedConfig {
			data_path: None,
			title: None,
			theme_name: "light".into(),
			theme: default_theme(),
			sort: SortSetting::unsorted(),
			log_level: "info".into(),
		};

		let summary = format_summary(&config);
		assert!(summary.contains("Data: (none)"));
		assert!(summary.contains("Sort: (unsorted)"));
	}
}
