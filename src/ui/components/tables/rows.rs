use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use super::view::{CellKind, RenderedHeader, RenderedRow, indicator_symbol};
use crate::ui::style::Theme;

/// Build the header row, marking the active sort column and the keyboard
/// focus.
#[must_use]
pub fn build_header_row<'a>(
	headers: &'a [RenderedHeader],
	theme: &Theme,
	focused: Option<usize>,
) -> Row<'a> {
	let cells = headers.iter().enumerate().map(|(idx, header)| {
		let mut style = match header.indicator {
			Some(_) => theme.sort_active,
			None => Style::default(),
		};
		if focused == Some(idx) {
			style = style.add_modifier(Modifier::UNDERLINED);
		}
		// Inactive headers keep the indicator slot so titles do not shift.
		let indicator = header.indicator.map_or(" ", indicator_symbol);
		Cell::from(Line::from(vec![
			Span::styled(header.title.as_str(), style),
			Span::raw(" "),
			Span::styled(indicator, style),
		]))
	});
	Row::new(cells).style(theme.header).height(1).bottom_margin(1)
}

/// Build table rows for the rendered body.
#[must_use]
pub fn build_body_rows<'a>(rows: &'a [RenderedRow], theme: &Theme) -> Vec<Row<'a>> {
	rows.iter()
		.map(|row| {
			Row::new(row.cells.iter().map(|cell| {
				let cell_widget = Cell::from(cell.text.as_str());
				match cell.kind {
					CellKind::RowHeader => cell_widget.style(theme.row_header),
					CellKind::Data => cell_widget,
				}
			}))
		})
		.collect()
}
