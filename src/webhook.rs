//! Slack-style incoming webhook notifications.
//!
//! A [`Payload`] is serialized to JSON with absent fields omitted and non-ASCII characters
//! escaped, then POSTed as the single `payload` field of an `application/x-www-form-urlencoded`
//! body. The HTTP status is returned as-is; non-success statuses are not errors and nothing is
//! retried.

pub mod payload;
#[cfg(feature = "reqwest")] pub mod client;

pub use payload::*;
#[cfg(feature = "reqwest")] pub use client::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Form field carrying the JSON document.
pub const PAYLOAD_FIELD: &str = "payload";

/// Validates the webhook URL and serializes the payload into the form field value.
pub fn prepare(url: &str, payload: &Payload) -> Result<(Url, String), ConfigError> {
	let url = url.trim();

	if url.is_empty() {
		return Err(ConfigError::MissingWebhookUrl);
	}

	let url = Url::parse(url).map_err(|source| ConfigError::InvalidWebhookUrl { source })?;
	let body = payload.to_json().map_err(ConfigError::PayloadSerialize)?;

	Ok((url, body))
}
