use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

impl App {
	/// Handle a key press. Returns `true` when the user asked to quit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		let columns = self.dashboard.headers().len();
		let rows = self.dashboard.rows().len();
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return true,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
			KeyCode::Left | KeyCode::Char('h') => self.table_state.focus_previous(columns),
			KeyCode::Right | KeyCode::Char('l') => self.table_state.focus_next(columns),
			KeyCode::Up | KeyCode::Char('k') => self.table_state.select_previous(rows),
			KeyCode::Down | KeyCode::Char('j') => self.table_state.select_next(rows),
			KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char(' ') => {
				if let Some(index) = self.table_state.focused() {
					self.activate_header(index);
				}
			}
			KeyCode::Char('r') => self.dashboard.reload(),
			_ => {}
		}
		false
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let rows = self.dashboard.rows().len();
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.table_state.header_at(mouse.column, mouse.row) {
					self.activate_header(index);
				}
			}
			MouseEventKind::ScrollDown => self.table_state.select_next(rows),
			MouseEventKind::ScrollUp => self.table_state.select_previous(rows),
			_ => {}
		}
	}
}
