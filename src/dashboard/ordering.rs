//! Row ordering applied by the dashboard when the sort setting changes.

use std::cmp::Ordering;

use serde_json::Value;

use crate::printable::print_value;
use crate::types::{DataRow, SortDirection, SortSetting};

/// Reorder `rows` by the setting's column. The sort is stable, and a setting
/// without a column leaves the order untouched.
pub fn sort_rows(rows: &mut [DataRow], setting: &SortSetting) {
	let Some(column) = setting.column.as_deref() else {
		return;
	};
	rows.sort_by(|a, b| {
		let ordering = compare_values(a.cell(column), b.cell(column));
		match setting.direction {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	});
}

/// Ascending comparison of two cell values.
///
/// Values of different kinds order booleans, numbers, strings, arrays,
/// objects, then missing or `null` values last.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
		(Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_f64(), y.as_f64()) {
			(Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
			_ => Ordering::Equal,
		},
		(Some(Value::String(x)), Some(Value::String(y))) => compare_text(x, y),
		(Some(x @ Value::Array(_)), Some(y @ Value::Array(_)))
		| (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => {
			compare_text(&print_value(Some(x)), &print_value(Some(y)))
		}
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

fn compare_text(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| a.cmp(b))
}

fn kind_rank(value: Option<&Value>) -> u8 {
	match value {
		Some(Value::Bool(_)) => 0,
		Some(Value::Number(_)) => 1,
		Some(Value::String(_)) => 2,
		Some(Value::Array(_)) => 3,
		Some(Value::Object(_)) => 4,
		Some(Value::Null) | None => 5,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn ids(rows: &[DataRow]) -> Vec<&str> {
		rows.iter().map(|row| row.id.as_str()).collect()
	}

	fn sample() -> Vec<DataRow> {
		vec![
			DataRow::new("a", [("size", json!(10)), ("name", json!("beta"))]),
			DataRow::new("b", [("name", json!("Alpha"))]),
			DataRow::new("c", [("size", json!(2.5)), ("name", json!("alpha"))]),
			DataRow::new("d", [("size", json!(10)), ("name", json!("gamma"))]),
		]
	}

	#[test]
	fn numbers_sort_numerically_with_missing_last() {
		let mut rows = sample();
		sort_rows(&mut rows, &SortSetting::new("size", SortDirection::Asc));
		assert_eq!(ids(&rows), vec!["c", "a", "d", "b"]);
	}

	#[test]
	fn descending_reverses_but_stays_stable() {
		let mut rows = sample();
		sort_rows(&mut rows, &SortSetting::new("size", SortDirection::Desc));
		assert_eq!(ids(&rows), vec!["b", "a", "d", "c"]);
	}

	#[test]
	fn strings_sort_case_insensitively_first() {
		let mut rows = sample();
		sort_rows(&mut rows, &SortSetting::new("name", SortDirection::Asc));
		assert_eq!(ids(&rows), vec!["b", "c", "a", "d"]);
	}

	#[test]
	fn unsorted_setting_keeps_order() {
		let mut rows = sample();
		sort_rows(&mut rows, &SortSetting::unsorted());
		assert_eq!(ids(&rows), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn mixed_kinds_follow_rank() {
		assert_eq!(compare_values(Some(&json!(true)), Some(&json!(1))), Ordering::Less);
		assert_eq!(compare_values(Some(&json!("x")), Some(&json!(1))), Ordering::Greater);
		assert_eq!(compare_values(Some(&Value::Null), Some(&json!("x"))), Ordering::Greater);
		assert_eq!(compare_values(None, Some(&Value::Null)), Ordering::Equal);
	}
}
