use serde::Serialize;

use crate::printable::ValuePrinter;
use crate::types::{ColumnHeader, DataRow, SortDirection, SortSetting};

/// Text shown in place of the body when there are no rows.
pub const EMPTY_MESSAGE: &str = "No rows to display.";

/// Renderer-independent description of one frame of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
	pub headers: Vec<RenderedHeader>,
	pub body: TableBody,
	/// Whether the loading overlay is drawn over the table.
	pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedHeader {
	pub id: String,
	pub title: String,
	/// Direction shown by the sort indicator; `None` when the column is not
	/// the active sort column.
	pub indicator: Option<SortDirection>,
}

impl RenderedHeader {
	/// Header text followed by the indicator arrow when active.
	#[must_use]
	pub fn label(&self) -> String {
		match self.indicator {
			Some(direction) => format!("{} {}", self.title, indicator_symbol(direction)),
			None => self.title.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
	/// A single row spanning every column.
	Placeholder { text: String, column_span: usize },
	Rows { rows: Vec<RenderedRow> },
}

impl TableBody {
	/// Number of rows drawn in the body, counting the placeholder.
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			TableBody::Placeholder { .. } => 1,
			TableBody::Rows { rows } => rows.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
	pub id: String,
	pub cells: Vec<RenderedCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
	pub column_id: String,
	pub text: String,
	pub kind: CellKind,
}

/// The leading column of a data row is a row header; every other cell is data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
	RowHeader,
	Data,
}

#[must_use]
pub fn indicator_symbol(direction: SortDirection) -> &'static str {
	match direction {
		SortDirection::Asc => "▲",
		SortDirection::Desc => "▼",
	}
}

pub(super) fn build_view(
	is_loading: bool,
	headers: &[ColumnHeader],
	rows: &[DataRow],
	sort: &SortSetting,
	printer: &dyn ValuePrinter,
) -> RenderedTable {
	let rendered_headers = headers
		.iter()
		.map(|header| RenderedHeader {
			id: header.id.clone(),
			title: header.title.clone(),
			indicator: sort.is_active(&header.id).then_some(sort.direction),
		})
		.collect();

	let body = if rows.is_empty() {
		TableBody::Placeholder {
			text: EMPTY_MESSAGE.to_string(),
			column_span: headers.len(),
		}
	} else {
		TableBody::Rows {
			rows: rows
				.iter()
				.map(|row| build_row(row, headers, printer))
				.collect(),
		}
	};

	RenderedTable {
		headers: rendered_headers,
		body,
		loading: is_loading,
	}
}

fn build_row(row: &DataRow, headers: &[ColumnHeader], printer: &dyn ValuePrinter) -> RenderedRow {
	let cells = headers
		.iter()
		.enumerate()
		.map(|(idx, header)| RenderedCell {
			column_id: header.id.clone(),
			text: printer.print(row.cell(&header.id)),
			kind: if idx == 0 {
				CellKind::RowHeader
			} else {
				CellKind::Data
			},
		})
		.collect();
	RenderedRow {
		id: row.id.clone(),
		cells,
	}
}
