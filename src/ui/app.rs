use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::dashboard::Dashboard;
use crate::ui::components::DashboardTableState;
use crate::ui::style::Theme;

const KEY_HINTS: &str = "←/→ column · enter sort · ↑/↓ row · r reload · q quit";

/// The interactive dashboard: the data owner plus the table's UI state.
pub struct App {
	pub dashboard: Dashboard,
	pub table_state: DashboardTableState,
	pub(crate) theme: Theme,
	title: String,
}

impl App {
	#[must_use]
	pub fn new(dashboard: Dashboard) -> Self {
		let title = dashboard.source_name();
		Self {
			dashboard,
			table_state: DashboardTableState::new(),
			theme: Theme::default(),
			title,
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(area);

		let title = self.border_title();
		let table = self
			.dashboard
			.table()
			.theme(self.theme)
			.title(title.as_str());
		frame.render_stateful_widget(table, layout[0], &mut self.table_state);

		let hints = Line::from(vec![Span::styled(
			KEY_HINTS,
			Style::default().fg(self.theme.header_fg()),
		)]);
		frame.render_widget(Paragraph::new(hints), layout[1]);
	}

	fn border_title(&self) -> String {
		let rows = self.dashboard.rows().len();
		match self.dashboard.last_error() {
			Some(error) => format!(" {} ({rows} rows) · load failed: {error} ", self.title),
			None => format!(" {} ({rows} rows) ", self.title),
		}
	}

	/// Ask the table what the next sort would be and hand it to the dashboard.
	pub(crate) fn activate_header(&mut self, index: usize) {
		let mut proposed = None;
		self.dashboard
			.table()
			.activate(index, |setting| proposed = Some(setting));
		if let Some(setting) = proposed {
			self.dashboard.on_sort_change(setting);
		}
	}
}
