//! Webhook message document.

// self
use crate::_prelude::*;

/// Message posted to an incoming webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
	/// Channel override, e.g. `#alerts`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
	/// Display name of the poster.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// Message text.
	pub text: String,
	/// Emoji code used as the avatar, e.g. `:ghost:`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon_emoji: Option<String>,
	/// Image URL used as the avatar.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon_url: Option<String>,
}
impl Payload {
	/// Creates a text-only payload.
	pub fn text(text: impl Into<String>) -> Self {
		Self { text: text.into(), ..Default::default() }
	}

	/// Posts to `channel` instead of the webhook's default channel.
	pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
		self.channel = Some(channel.into());

		self
	}

	/// Posts under `username`.
	pub fn with_username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());

		self
	}

	/// Uses an emoji avatar.
	pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
		self.icon_emoji = Some(icon_emoji.into());

		self
	}

	/// Uses an image avatar.
	pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
		self.icon_url = Some(icon_url.into());

		self
	}

	/// Serializes the payload to ASCII-only JSON.
	///
	/// Characters outside ASCII are written as `\uXXXX` escapes, using surrogate pairs above
	/// the basic multilingual plane.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self).map(|json| escape_non_ascii(&json))
	}
}

fn escape_non_ascii(json: &str) -> String {
	let mut escaped = String::with_capacity(json.len());
	let mut units = [0_u16; 2];

	for c in json.chars() {
		if c.is_ascii() {
			escaped.push(c);

			continue;
		}

		for unit in c.encode_utf16(&mut units) {
			escaped.push_str(&format!("\\u{unit:04x}"));
		}
	}

	escaped
}
