//! Markup snippets for server-rendered pages.
//!
//! Every helper returns a plain `String` of HTML. Attribute values and text are escaped with
//! [`escape`]; callers must not escape them again.

pub mod assets;
pub mod bootstrap;
pub mod gravatar;

pub use assets::*;
pub use bootstrap::*;
pub use gravatar::*;

/// Escapes text for use in HTML content or single- and double-quoted attributes.
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());

	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}

	escaped
}

pub(crate) fn script_tag(src: &str) -> String {
	format!("<script src='{}'></script>", escape(src))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn escape_covers_markup_characters() {
		assert_eq!(
			escape("<script>alert('x') & \"y\"</script>"),
			"&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
		);
		assert_eq!(escape("plain"), "plain");
	}

	#[test]
	fn script_tag_escapes_source() {
		assert_eq!(script_tag("/a.js?v=1&x=2"), "<script src='/a.js?v=1&amp;x=2'></script>");
	}
}
