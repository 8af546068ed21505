//! Loading overlay drawn on top of the table while data is fetched.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

pub const LOADING_LABEL: &str = "Loading…";
const OVERLAY_WIDTH: u16 = 20;
const OVERLAY_HEIGHT: u16 = 3;

/// A bordered box with a spinner, centered over the area it is rendered in.
///
/// Only the box itself is cleared; the table around it stays visible.
pub struct LoadingOverlay<'a> {
	theme: &'a Theme,
}

impl<'a> LoadingOverlay<'a> {
	#[must_use]
	pub fn new(theme: &'a Theme) -> Self {
		Self { theme }
	}
}

impl StatefulWidget for LoadingOverlay<'_> {
	type State = ThrobberState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		let overlay = overlay_area(area);
		if overlay.is_empty() {
			return;
		}

		Clear.render(overlay, buf);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(border::ROUNDED)
			.style(self.theme.overlay);
		let inner = block.inner(overlay);
		block.render(overlay, buf);

		let spinner = Throbber::default().throbber_style(self.theme.spinner);
		let line = Line::from(vec![
			spinner.to_symbol_span(state),
			Span::raw(" "),
			Span::raw(LOADING_LABEL),
		]);
		Paragraph::new(line)
			.alignment(Alignment::Center)
			.style(self.theme.overlay)
			.render(inner, buf);
	}
}

/// Center the overlay box in `area`, shrinking it to fit small areas.
pub(crate) fn overlay_area(area: Rect) -> Rect {
	let width = OVERLAY_WIDTH.min(area.width);
	let height = OVERLAY_HEIGHT.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
