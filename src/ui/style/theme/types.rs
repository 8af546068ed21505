use ratatui::style::{Color, Style};

/// Styles applied to the parts of the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	/// Leading column of each data row.
	pub row_header: Style,
	pub row_highlight: Style,
	/// Header whose column is the active sort column.
	pub sort_active: Style,
	pub empty: Style,
	pub overlay: Style,
	pub spinner: Style,
}

impl Theme {
	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}
}

/// A theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
