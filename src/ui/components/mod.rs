//! Widgets that make up the dashboard view.

/// Spinner overlay shown while data loads.
pub mod loading;
/// The sortable table and its row builders.
pub mod tables;

pub use loading::LoadingOverlay;
pub use tables::{DashboardTable, DashboardTableState, RenderedTable};
