//! Bootstrap 3 snippets.

// self
use crate::html::escape;

/// Alert class used for validation summaries when none is given.
pub const DEFAULT_ALERT: &str = "alert-warning";

/// Wraps validation errors in a Bootstrap alert box.
///
/// Returns an empty string when there is nothing to report.
pub fn validation_summary<I, S>(errors: I, alert: &str) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let items = errors
		.into_iter()
		.filter(|error| !error.as_ref().trim().is_empty())
		.map(|error| format!("<li>{}</li>", escape(error.as_ref())))
		.collect::<String>();

	if items.is_empty() {
		return String::new();
	}

	let alert = if alert.trim().is_empty() { DEFAULT_ALERT } else { alert.trim() };

	format!(
		"<div class='alert {}'><div class='validation-summary-errors'><ul>{items}</ul></div></div>",
		escape(alert)
	)
}

/// Link prefixed with a glyphicon, e.g. `glyph_icon_link("/items", "Back", "glyphicon-list",
/// None)`.
///
/// A non-empty `tooltip` adds Bootstrap's tooltip attributes, placed on top.
pub fn glyph_icon_link(href: &str, text: &str, glyph: &str, tooltip: Option<&str>) -> String {
	let tooltip = tooltip
		.filter(|tooltip| !tooltip.is_empty())
		.map(|tooltip| format!(" rel='tooltip' data-placement='top' title='{}'", escape(tooltip)))
		.unwrap_or_default();

	format!(
		"<a href='{}'{tooltip}><span class='glyphicon {}'></span> {}</a>",
		escape(href),
		escape(glyph),
		escape(text)
	)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn summary_lists_escaped_errors() {
		assert_eq!(
			validation_summary(["Name is required.", "Age < 0"], "alert-danger"),
			"<div class='alert alert-danger'><div class='validation-summary-errors'><ul>\
			 <li>Name is required.</li><li>Age &lt; 0</li></ul></div></div>"
		);
	}

	#[test]
	fn summary_is_empty_without_errors() {
		assert_eq!(validation_summary(Vec::<String>::new(), DEFAULT_ALERT), "");
		assert_eq!(validation_summary([" "], DEFAULT_ALERT), "");
		assert!(validation_summary(["x"], "").contains("alert alert-warning"));
	}

	#[test]
	fn glyph_link_with_and_without_tooltip() {
		assert_eq!(
			glyph_icon_link("/items", "Back to List", "glyphicon-list", None),
			"<a href='/items'><span class='glyphicon glyphicon-list'></span> Back to List</a>"
		);
		assert_eq!(
			glyph_icon_link("/items?a=1&b=2", "Edit", "glyphicon-edit", Some("Edit item")),
			"<a href='/items?a=1&amp;b=2' rel='tooltip' data-placement='top' title='Edit item'>\
			 <span class='glyphicon glyphicon-edit'></span> Edit</a>"
		);
	}
}
