use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	sort_active: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	empty: Style::new()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC),
	overlay: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	spinner: Style::new().fg(Color::LightCyan),
};

const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Black).bg(Color::Gray),
	row_header: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(219, 234, 254)).fg(Color::Black),
	sort_active: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
	overlay: Style::new().fg(Color::Black).bg(Color::White),
	spinner: Style::new().fg(Color::Blue),
};

const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(7, 54, 66)),
	row_header: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	sort_active: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	empty: Style::new()
		.fg(Color::Rgb(88, 110, 117))
		.add_modifier(Modifier::ITALIC),
	overlay: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.bg(Color::Rgb(0, 43, 54)),
	spinner: Style::new().fg(Color::Rgb(42, 161, 152)),
};

/// The first entry is the default theme.
pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
