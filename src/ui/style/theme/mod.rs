mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Return the theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	BUILT_IN_DEFINITIONS[0].theme
}

/// Look up a built-in theme by name or alias, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			definition.name == wanted || definition.aliases.iter().any(|alias| *alias == wanted)
		})
		.map(|definition| definition.theme)
}

/// Names of every built-in theme, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
