//! Conversion of arbitrary cell values into display text.
//!
//! The table never formats values itself; it hands every cell to a
//! [`ValuePrinter`]. [`PlainPrinter`] is the printer used unless the embedder
//! supplies its own.

use serde_json::Value;

/// Turns a cell value into the text shown in the table.
///
/// `None` means the row has no entry for the column.
pub trait ValuePrinter {
	fn print(&self, value: Option<&Value>) -> String;
}

impl<F> ValuePrinter for F
where
	F: Fn(Option<&Value>) -> String,
{
	fn print(&self, value: Option<&Value>) -> String {
		self(value)
	}
}

/// The default printer, see [`print_value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrinter;

impl ValuePrinter for PlainPrinter {
	fn print(&self, value: Option<&Value>) -> String {
		print_value(value)
	}
}

/// Render a value as plain text.
///
/// Absent values and `null` print as an empty string, booleans as `Yes`/`No`,
/// arrays as their printed elements joined by `, ` and objects as compact JSON.
#[must_use]
pub fn print_value(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(Value::Bool(true)) => "Yes".to_string(),
		Some(Value::Bool(false)) => "No".to_string(),
		Some(Value::Number(number)) => number.to_string(),
		Some(Value::Array(items)) => items
			.iter()
			.map(|item| print_value(Some(item)))
			.collect::<Vec<_>>()
			.join(", "),
		Some(object @ Value::Object(_)) => object.to_string(),
	}
}
