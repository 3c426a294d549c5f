//! HTTP delivery of webhook payloads over reqwest.

// std
use std::ops::Deref;
// crates.io
use http::StatusCode;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	obs::{OpKind, OpOutcome, OpSpan},
	webhook::{PAYLOAD_FIELD, Payload, prepare},
};

/// Async webhook sender wrapping a shared [`ReqwestClient`].
#[derive(Clone, Debug, Default)]
pub struct WebhookClient(pub ReqwestClient);
impl WebhookClient {
	/// Builds a client with its own connection pool.
	pub fn new() -> Result<Self> {
		let client = ReqwestClient::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Posts `payload` to the webhook at `url` and returns the response status.
	///
	/// Fails with [`ConfigError::MissingWebhookUrl`] before any network activity when `url` is
	/// blank.
	pub async fn send(&self, url: &str, payload: &Payload) -> Result<StatusCode> {
		let (url, body) = prepare(url, payload)?;
		let span = OpSpan::new(OpKind::Webhook, "send");
		let request = self.0.post(url).form(&[(PAYLOAD_FIELD, body)]).send();
		let result = span.instrument(request).await;

		finish(span, result.map(|response| response.status()))
	}

	/// Posts a text-only message.
	pub async fn send_text(&self, url: &str, text: &str) -> Result<StatusCode> {
		self.send(url, &Payload::text(text)).await
	}
}
impl AsRef<ReqwestClient> for WebhookClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for WebhookClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Blocking webhook sender for callers outside an async runtime.
#[cfg(feature = "blocking")]
#[derive(Clone, Debug, Default)]
pub struct BlockingWebhookClient(pub reqwest::blocking::Client);
#[cfg(feature = "blocking")]
impl BlockingWebhookClient {
	/// Wraps an existing blocking reqwest client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}

	/// Posts `payload` to the webhook at `url` and returns the response status.
	pub fn send(&self, url: &str, payload: &Payload) -> Result<StatusCode> {
		let (url, body) = prepare(url, payload)?;
		let span = OpSpan::new(OpKind::Webhook, "send_blocking");
		let result = span.in_scope(|| self.0.post(url).form(&[(PAYLOAD_FIELD, body)]).send());

		finish(span, result.map(|response| response.status()))
	}

	/// Posts a text-only message.
	pub fn send_text(&self, url: &str, text: &str) -> Result<StatusCode> {
		self.send(url, &Payload::text(text))
	}
}

fn finish(span: OpSpan, result: Result<StatusCode, ReqwestError>) -> Result<StatusCode> {
	match result {
		Ok(status) => {
			span.finish(if status.is_success() { OpOutcome::Success } else { OpOutcome::Failure });

			Ok(status)
		},
		Err(e) => {
			span.finish(OpOutcome::Failure);

			Err(TransportError::from(e).into())
		},
	}
}
