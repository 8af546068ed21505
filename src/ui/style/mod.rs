//! Visual styling for the dashboard table.
//!
//! Themes carry the color scheme; everything else about layout lives in the
//! table component itself.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
