use anyhow::Result;
use dashtable::ui::components::loading::LOADING_LABEL;
use dashtable::{RenderedTable, TableBody};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Print the table as aligned plain text.
pub(crate) fn print_plain(view: &RenderedTable) {
	println!("{}", format_plain(view));
}

/// Lay the table out as text columns padded to their widest cell.
pub(crate) fn format_plain(view: &RenderedTable) -> String {
	let labels: Vec<String> = view.headers.iter().map(|header| header.label()).collect();
	let mut widths: Vec<usize> = labels.iter().map(|label| label.width()).collect();
	if let TableBody::Rows { rows } = &view.body {
		for row in rows {
			for (width, cell) in widths.iter_mut().zip(&row.cells) {
				*width = (*width).max(cell.text.width());
			}
		}
	}

	let mut lines = Vec::new();
	if !labels.is_empty() {
		lines.push(join_padded(labels.iter().map(String::as_str), &widths));
		lines.push(
			widths
				.iter()
				.map(|width| "-".repeat(*width))
				.collect::<Vec<_>>()
				.join(COLUMN_GAP),
		);
	}
	match &view.body {
		TableBody::Placeholder { text, .. } => lines.push(text.clone()),
		TableBody::Rows { rows } => {
			for row in rows {
				lines.push(join_padded(
					row.cells.iter().map(|cell| cell.text.as_str()),
					&widths,
				));
			}
		}
	}
	if view.loading {
		lines.push(LOADING_LABEL.to_string());
	}
	lines.join("\n")
}

fn join_padded<'a>(texts: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
	let padded = texts
		.zip(widths)
		.map(|(text, width)| {
			let fill = width.saturating_sub(text.width());
			format!("{text}{}", " ".repeat(fill))
		})
		.collect::<Vec<_>>()
		.join(COLUMN_GAP);
	padded.trim_end().to_string()
}

/// Format the rendered table as a JSON document.
pub(crate) fn format_json(view: &RenderedTable) -> Result<String> {
	Ok(serde_json::to_string_pretty(view)?)
}

/// Print the JSON representation of the rendered table.
pub(crate) fn print_json(view: &RenderedTable) -> Result<()> {
	println!("{}", format_json(view)?);
	Ok(())
}
