//! Types shared between the table component, the dashboard and data loading.

mod row;
mod sort;

pub use row::{ColumnHeader, DataRow};
pub use sort::{SortDirection, SortSetting};
