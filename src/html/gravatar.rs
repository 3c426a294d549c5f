//! Gravatar avatar URLs.

// self
use crate::{hash, html::escape};

/// Hash used for blank addresses so the avatar falls back to the `default` image.
pub const UNKNOWN_GRAVATAR_HASH: &str = "unknow";
/// Gravatar's own default size in pixels.
pub const DEFAULT_GRAVATAR_SIZE: u16 = 80;

/// Avatar URL for `email`.
///
/// `default` selects what Gravatar serves for unknown addresses (`404`, `mp`, `identicon`,
/// `retro`, ...).
pub fn gravatar_url(email: &str, size: u16, default: &str) -> String {
	let email = email.trim();
	let hash = if email.is_empty() {
		UNKNOWN_GRAVATAR_HASH.to_owned()
	} else {
		hash::md5_hex(&email.to_lowercase())
	};

	format!("https://www.gravatar.com/avatar/{hash}?s={size}&d={}", encode_component(default))
}

/// `<img>` tag showing the avatar for `email`.
pub fn gravatar_image(email: &str, size: u16, default: &str, alt: &str) -> String {
	format!(
		"<img src='{}' width='{size}' height='{size}' alt='{}'>",
		escape(&gravatar_url(email, size, default)),
		escape(alt)
	)
}

fn encode_component(value: &str) -> String {
	url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
