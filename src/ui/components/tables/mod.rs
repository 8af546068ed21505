//! The sortable dashboard table.
//!
//! [`DashboardTable`] is stateless with respect to the data it shows: headers,
//! rows, the sort setting and the loading flag are borrowed from the caller on
//! every frame and never modified. Header activations do not change anything
//! either; they report the proposed [`SortSetting`] through a callback and the
//! caller decides whether to apply it.

pub mod rows;
mod view;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, HighlightSpacing, Paragraph, StatefulWidget, Table, TableState, Widget,
};
use throbber_widgets_tui::ThrobberState;
use unicode_width::UnicodeWidthStr;

use self::rows::{build_body_rows, build_header_row};
pub use self::view::{
	CellKind, EMPTY_MESSAGE, RenderedCell, RenderedHeader, RenderedRow, RenderedTable, TableBody,
	indicator_symbol,
};
use super::loading::LoadingOverlay;
use crate::printable::{PlainPrinter, ValuePrinter};
use crate::sort::next_sort;
use crate::types::{ColumnHeader, DataRow, SortSetting};
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::WhenSelected;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

static PLAIN_PRINTER: PlainPrinter = PlainPrinter;

/// Props for one frame of the dashboard table.
pub struct DashboardTable<'a> {
	is_loading: bool,
	headers: &'a [ColumnHeader],
	rows: &'a [DataRow],
	sort: &'a SortSetting,
	printer: &'a dyn ValuePrinter,
	theme: Theme,
	title: Option<&'a str>,
}

impl<'a> DashboardTable<'a> {
	#[must_use]
	pub fn new(
		is_loading: bool,
		headers: &'a [ColumnHeader],
		rows: &'a [DataRow],
		sort: &'a SortSetting,
	) -> Self {
		Self {
			is_loading,
			headers,
			rows,
			sort,
			printer: &PLAIN_PRINTER,
			theme: Theme::default(),
			title: None,
		}
	}

	/// Replace the printer used to turn cell values into text.
	#[must_use]
	pub fn printer(mut self, printer: &'a dyn ValuePrinter) -> Self {
		self.printer = printer;
		self
	}

	#[must_use]
	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Title drawn on the table's border.
	#[must_use]
	pub fn title(mut self, title: &'a str) -> Self {
		self.title = Some(title);
		self
	}

	/// Describe what this frame shows without drawing it.
	#[must_use]
	pub fn view(&self) -> RenderedTable {
		view::build_view(
			self.is_loading,
			self.headers,
			self.rows,
			self.sort,
			self.printer,
		)
	}

	/// Handle activation of the header at `index`.
	///
	/// Reports the next sort setting through `on_sort_change` and returns
	/// `true`, unless the table is loading or `index` is out of range.
	pub fn activate(&self, index: usize, on_sort_change: impl FnOnce(SortSetting)) -> bool {
		if self.is_loading {
			return false;
		}
		let Some(header) = self.headers.get(index) else {
			return false;
		};
		on_sort_change(next_sort(&header.id, self.sort));
		true
	}
}

/// Per-widget UI state that survives between frames.
///
/// None of this is table data: it is the row selection, the spinner frame,
/// the keyboard-focused header and where headers were last drawn.
#[derive(Debug, Default)]
pub struct DashboardTableState {
	pub table: TableState,
	pub throbber: ThrobberState,
	focused: Option<usize>,
	header_areas: Vec<Rect>,
}

impl DashboardTableState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Index of the keyboard-focused header.
	#[must_use]
	pub fn focused(&self) -> Option<usize> {
		self.focused
	}

	/// Move header focus one column to the right, wrapping around.
	pub fn focus_next(&mut self, column_count: usize) {
		if column_count == 0 {
			self.focused = None;
			return;
		}
		self.focused = Some(match self.focused {
			Some(idx) if idx + 1 < column_count => idx + 1,
			_ => 0,
		});
	}

	/// Move header focus one column to the left, wrapping around.
	pub fn focus_previous(&mut self, column_count: usize) {
		if column_count == 0 {
			self.focused = None;
			return;
		}
		self.focused = Some(match self.focused {
			Some(idx) if idx > 0 && idx <= column_count => idx - 1,
			_ => column_count - 1,
		});
	}

	/// Header index under the given terminal position, from the last render.
	#[must_use]
	pub fn header_at(&self, column: u16, row: u16) -> Option<usize> {
		self.header_areas.iter().position(|area| {
			row == area.y && column >= area.x && column < area.x.saturating_add(area.width)
		})
	}

	/// Select the next body row, clamped to `row_count`.
	pub fn select_next(&mut self, row_count: usize) {
		if row_count == 0 {
			self.table.select(None);
			return;
		}
		let next = self
			.table
			.selected()
			.map_or(0, |idx| (idx + 1).min(row_count - 1));
		self.table.select(Some(next));
	}

	/// Select the previous body row.
	pub fn select_previous(&mut self, row_count: usize) {
		if row_count == 0 {
			self.table.select(None);
			return;
		}
		let previous = self
			.table
			.selected()
			.map_or(0, |idx| idx.saturating_sub(1).min(row_count - 1));
		self.table.select(Some(previous));
	}

	fn clamp(&mut self, column_count: usize, row_count: usize) {
		if let Some(idx) = self.focused
			&& idx >= column_count
		{
			self.focused = column_count.checked_sub(1);
		}
		if let Some(idx) = self.table.selected()
			&& idx >= row_count
		{
			self.table.select(row_count.checked_sub(1));
		}
	}
}

impl StatefulWidget for DashboardTable<'_> {
	type State = DashboardTableState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		let view = self.view();

		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(border::ROUNDED)
			.border_style(Style::default().fg(self.theme.header_fg()));
		if let Some(title) = self.title {
			block = block.title(title);
		}

		let inner = block.inner(area);
		block.render(area, buf);

		render_configured_table(inner, buf, state, &view, &self.theme);

		if view.loading {
			LoadingOverlay::new(&self.theme).render(inner, buf, &mut state.throbber);
		}
	}
}

fn render_configured_table(
	area: Rect,
	buf: &mut Buffer,
	state: &mut DashboardTableState,
	view: &RenderedTable,
	theme: &Theme,
) {
	let body_rows = match &view.body {
		TableBody::Rows { rows } => build_body_rows(rows, theme),
		TableBody::Placeholder { .. } => Vec::new(),
	};
	state.clamp(view.headers.len(), body_rows.len());

	let widths = column_constraints(view.headers.len());
	let selection_width = selection_column_width(&state.table, &TABLE_HIGHLIGHT_SPACING);
	state.header_areas = resolve_header_areas(area, &widths, selection_width);

	let header = build_header_row(&view.headers, theme, state.focused);
	let table = Table::new(body_rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	StatefulWidget::render(table, area, buf, &mut state.table);

	render_header_separator(area, buf, theme, 1);

	if let TableBody::Placeholder { text, .. } = &view.body {
		render_placeholder(area, buf, text, theme);
	}
}

fn column_constraints(column_count: usize) -> Vec<Constraint> {
	if column_count == 0 {
		return vec![Constraint::Fill(1)];
	}
	vec![Constraint::Fill(1); column_count]
}

/// Draw the empty-state message across every column of the first body line.
fn render_placeholder(area: Rect, buf: &mut Buffer, text: &str, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect {
		x: area.x,
		y: area.y + TABLE_HEADER_ROWS,
		width: area.width,
		height: 1,
	};
	Paragraph::new(Line::styled(text, theme.empty))
		.alignment(Alignment::Center)
		.render(message_area, buf);
}

fn render_header_separator(area: Rect, buf: &mut Buffer, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		Paragraph::new(" ".repeat(width)).render(sep_rect, buf);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::default().fg(theme.header_fg());
	let spans = vec![
		Span::raw(" "),
		Span::styled(middle, middle_style),
		Span::raw(" "),
	];
	Paragraph::new(Text::from(Line::from(spans))).render(sep_rect, buf);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
	let has_selection = state.selected().is_some();
	let should_add = match spacing {
		HighlightSpacing::Always => true,
		HighlightSpacing::WhenSelected => has_selection,
		HighlightSpacing::Never => false,
	};
	if should_add {
		UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16
	} else {
		0
	}
}

/// Screen rectangles of each header cell, mirroring how `Table` lays out
/// columns after the selection gutter.
fn resolve_header_areas(area: Rect, constraints: &[Constraint], selection_width: u16) -> Vec<Rect> {
	if area.is_empty() {
		return Vec::new();
	}

	let header_line = Rect {
		x: area.x,
		y: area.y,
		width: area.width,
		height: 1,
	};
	let [_, columns_area] =
		Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
			.areas(header_line);

	Layout::horizontal(constraints.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.to_vec()
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;
	use crate::types::SortDirection;

	fn headers() -> Vec<ColumnHeader> {
		vec![
			ColumnHeader::new("name", "Name"),
			ColumnHeader::new("size", "Size"),
			ColumnHeader::new("owner", "Owner"),
		]
	}

	fn rows() -> Vec<DataRow> {
		vec![
			DataRow::new(
				"r1",
				[("name", json!("alpha")), ("size", json!(12)), ("owner", json!("root"))],
			),
			DataRow::new("r2", [("name", json!("beta")), ("size", json!(7))]),
			DataRow::new("r3", [("owner", json!("ops")), ("name", json!("gamma"))]),
		]
	}

	fn buffer_lines(buf: &Buffer) -> Vec<String> {
		(0..buf.area.height)
			.map(|y| {
				(0..buf.area.width)
					.map(|x| buf[(x, y)].symbol().to_string())
					.collect::<String>()
			})
			.collect()
	}

	fn draw(table: DashboardTable<'_>, state: &mut DashboardTableState) -> Vec<String> {
		let area = Rect::new(0, 0, 60, 12);
		let mut buf = Buffer::empty(area);
		table.render(area, &mut buf, state);
		buffer_lines(&buf)
	}

	#[test]
	fn body_has_one_row_per_input_row_in_order() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let view = DashboardTable::new(false, &headers, &rows, &sort).view();

		let TableBody::Rows { rows: rendered } = view.body else {
			panic!("expected data rows");
		};
		let ids: Vec<&str> = rendered.iter().map(|row| row.id.as_str()).collect();
		assert_eq!(ids, vec!["r1", "r2", "r3"]);
	}

	#[test]
	fn each_row_has_one_cell_per_header_in_header_order() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let view = DashboardTable::new(false, &headers, &rows, &sort).view();

		let TableBody::Rows { rows: rendered } = view.body else {
			panic!("expected data rows");
		};
		for row in &rendered {
			let columns: Vec<&str> = row.cells.iter().map(|cell| cell.column_id.as_str()).collect();
			assert_eq!(columns, vec!["name", "size", "owner"]);
		}
		let third: Vec<&str> = rendered[2].cells.iter().map(|cell| cell.text.as_str()).collect();
		assert_eq!(third, vec!["gamma", "", "ops"]);
	}

	#[test]
	fn first_cell_is_a_row_header() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let view = DashboardTable::new(false, &headers, &rows, &sort).view();

		let TableBody::Rows { rows: rendered } = view.body else {
			panic!("expected data rows");
		};
		for row in &rendered {
			let kinds: Vec<CellKind> = row.cells.iter().map(|cell| cell.kind).collect();
			assert_eq!(kinds, vec![CellKind::RowHeader, CellKind::Data, CellKind::Data]);
		}
	}

	#[test]
	fn empty_rows_render_a_single_spanning_placeholder() {
		let sort = SortSetting::unsorted();
		for headers in [Vec::new(), headers()] {
			let view = DashboardTable::new(false, &headers, &[], &sort).view();
			assert_eq!(
				view.body,
				TableBody::Placeholder {
					text: EMPTY_MESSAGE.to_string(),
					column_span: headers.len(),
				}
			);
			assert_eq!(view.body.len(), 1);
		}
	}

	#[test]
	fn missing_cells_are_passed_to_the_printer_as_absent() {
		let headers = headers();
		let rows = vec![DataRow::new("r1", [("name", "alpha")])];
		let sort = SortSetting::unsorted();
		let printer = |value: Option<&Value>| match value {
			Some(value) => format!("<{value}>"),
			None => "∅".to_string(),
		};
		let view = DashboardTable::new(false, &headers, &rows, &sort)
			.printer(&printer)
			.view();

		let TableBody::Rows { rows: rendered } = view.body else {
			panic!("expected data rows");
		};
		let texts: Vec<&str> = rendered[0].cells.iter().map(|cell| cell.text.as_str()).collect();
		assert_eq!(texts, vec![r#"<"alpha">"#, "∅", "∅"]);
	}

	#[test]
	fn indicator_is_active_only_for_sort_column() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::new("size", SortDirection::Desc);
		let view = DashboardTable::new(false, &headers, &rows, &sort).view();

		let indicators: Vec<Option<SortDirection>> =
			view.headers.iter().map(|header| header.indicator).collect();
		assert_eq!(indicators, vec![None, Some(SortDirection::Desc), None]);
		assert_eq!(view.headers[1].label(), "Size ▼");
	}

	#[test]
	fn unknown_sort_column_activates_no_indicator() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::new("missing", SortDirection::Asc);
		let view = DashboardTable::new(false, &headers, &rows, &sort).view();
		assert!(view.headers.iter().all(|header| header.indicator.is_none()));
	}

	#[test]
	fn activation_reports_next_sort_setting() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::new("name", SortDirection::Asc);
		let table = DashboardTable::new(false, &headers, &rows, &sort);

		let mut proposed = Vec::new();
		assert!(table.activate(0, |setting| proposed.push(setting)));
		assert!(table.activate(2, |setting| proposed.push(setting)));
		assert!(!table.activate(9, |setting| proposed.push(setting)));
		assert_eq!(
			proposed,
			vec![
				SortSetting::new("name", SortDirection::Desc),
				SortSetting::new("owner", SortDirection::Asc),
			]
		);
		assert_eq!(sort, SortSetting::new("name", SortDirection::Asc));
	}

	#[test]
	fn activation_is_blocked_while_loading() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let table = DashboardTable::new(true, &headers, &rows, &sort);
		let mut called = false;
		assert!(!table.activate(0, |_| called = true));
		assert!(!called);
	}

	#[test]
	fn rendering_does_not_mutate_inputs() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::new("name", SortDirection::Asc);
		let (headers_before, rows_before) = (headers.clone(), rows.clone());
		let mut state = DashboardTableState::new();

		let _ = draw(DashboardTable::new(true, &headers, &rows, &sort), &mut state);

		assert_eq!(headers, headers_before);
		assert_eq!(rows, rows_before);
		assert_eq!(sort, SortSetting::new("name", SortDirection::Asc));
	}

	#[test]
	fn draws_headers_indicator_and_rows() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::new("name", SortDirection::Asc);
		let mut state = DashboardTableState::new();
		let lines = draw(
			DashboardTable::new(false, &headers, &rows, &sort).title("Hosts"),
			&mut state,
		);

		assert!(lines[0].contains("Hosts"));
		assert!(lines[1].contains("Name ▲"), "header line: {:?}", lines[1]);
		assert!(lines[1].contains("Size"));
		assert!(lines[2].contains('─'));
		assert!(lines[3].contains("alpha") && lines[3].contains("12") && lines[3].contains("root"));
		assert!(lines[4].contains("beta"));
		assert!(lines[5].contains("gamma") && lines[5].contains("ops"));
	}

	#[test]
	fn draws_placeholder_when_empty() {
		let headers = headers();
		let sort = SortSetting::unsorted();
		let mut state = DashboardTableState::new();
		let lines = draw(DashboardTable::new(false, &headers, &[], &sort), &mut state);

		assert!(lines[1].contains("Name"));
		assert!(lines[3].contains(EMPTY_MESSAGE), "body line: {:?}", lines[3]);
		assert_eq!(
			lines.iter().filter(|line| line.contains(EMPTY_MESSAGE)).count(),
			1
		);
	}

	#[test]
	fn loading_overlay_keeps_table_content() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let mut state = DashboardTableState::new();
		let lines = draw(DashboardTable::new(true, &headers, &rows, &sort), &mut state);

		assert!(lines.iter().any(|line| line.contains("Loading")));
		assert!(lines[1].contains("Name"));
		assert!(lines[3].contains("alpha"));
	}

	#[test]
	fn no_overlay_when_idle() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let mut state = DashboardTableState::new();
		let lines = draw(DashboardTable::new(false, &headers, &rows, &sort), &mut state);
		assert!(!lines.iter().any(|line| line.contains("Loading")));
	}

	#[test]
	fn header_hit_testing_follows_rendered_columns() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let mut state = DashboardTableState::new();
		let lines = draw(DashboardTable::new(false, &headers, &rows, &sort), &mut state);

		let byte_offset = lines[1].find("Size").expect("size header");
		let size_column = lines[1][..byte_offset].chars().count() as u16;
		assert_eq!(state.header_at(size_column, 1), Some(1));
		assert_eq!(state.header_at(1, 1), Some(0));
		assert_eq!(state.header_at(size_column, 3), None);
	}

	#[test]
	fn header_hit_testing_accounts_for_the_selection_gutter() {
		let (headers, rows) = (headers(), rows());
		let sort = SortSetting::unsorted();
		let mut state = DashboardTableState::new();
		state.select_next(rows.len());
		let lines = draw(DashboardTable::new(false, &headers, &rows, &sort), &mut state);

		let name_offset = lines[1].find("Name").expect("name header");
		let name_column = lines[1][..name_offset].chars().count() as u16;
		assert_eq!(name_column, 1 + HIGHLIGHT_SYMBOL.chars().count() as u16);
		assert_eq!(state.header_at(name_column, 1), Some(0));

		let size_offset = lines[1].find("Size").expect("size header");
		let size_column = lines[1][..size_offset].chars().count() as u16;
		assert_eq!(state.header_at(size_column, 1), Some(1));
		assert_eq!(state.header_at(1, 1), None);
	}

	#[test]
	fn focus_wraps_in_both_directions() {
		let mut state = DashboardTableState::new();
		state.focus_next(3);
		assert_eq!(state.focused(), Some(0));
		state.focus_previous(3);
		assert_eq!(state.focused(), Some(2));
		state.focus_next(3);
		assert_eq!(state.focused(), Some(0));
		state.focus_next(0);
		assert_eq!(state.focused(), None);
	}

	#[test]
	fn selection_is_clamped_to_rows() {
		let mut state = DashboardTableState::new();
		state.select_next(2);
		state.select_next(2);
		state.select_next(2);
		assert_eq!(state.table.selected(), Some(1));
		state.select_previous(2);
		state.select_previous(2);
		assert_eq!(state.table.selected(), Some(0));
		state.select_next(0);
		assert_eq!(state.table.selected(), None);
	}
}
