//! A sortable, loading-aware data table for terminal dashboards.
//!
//! The [`DashboardTable`] widget draws headers, rows, the active sort
//! indicator and a loading overlay from data it borrows; the [`Dashboard`]
//! owns that data and applies the sort settings the table proposes.

pub mod app_dirs;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod printable;
pub mod sort;
pub mod types;
pub mod ui;

pub use dashboard::{Dashboard, DatasetSource, FileSource, StaticSource};
pub use data::{DataError, Dataset};
pub use printable::{PlainPrinter, ValuePrinter, print_value};
pub use sort::next_sort;
pub use types::{ColumnHeader, DataRow, SortDirection, SortSetting};
pub use ui::components::tables::{
	CellKind, EMPTY_MESSAGE, RenderedCell, RenderedHeader, RenderedRow, RenderedTable, TableBody,
};
pub use ui::components::{DashboardTable, DashboardTableState};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, run};
