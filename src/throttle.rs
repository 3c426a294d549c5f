//! Per-client request throttling backed by short-lived markers.
//!
//! A [`ThrottleGuard`] admits the first call for a client key and rejects every further call
//! until the marker inserted by that first call expires. Expiration is absolute: rejected
//! calls never extend the window.

pub mod store;

pub use store::*;

// crates.io
use http::StatusCode;
// self
use crate::{
	_prelude::*,
	obs::{OpKind, OpOutcome, OpSpan},
};

/// Message used when [`ThrottleConfig::message`] is unset.
pub const DEFAULT_THROTTLE_MESSAGE: &str = "You may only perform this action every {0} seconds.";

/// Throttle settings for one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
	/// Unique name of the throttled route; prefixes every marker key.
	pub name: String,
	/// Seconds a client must wait between admitted calls.
	pub seconds: u32,
	/// Rejection message; `{0}` or `{n}` is replaced with [`seconds`](Self::seconds).
	pub message: Option<String>,
	/// Include the client's user agent in the marker key.
	pub use_user_agent: bool,
	/// Include the client's session id (when present) in the marker key.
	pub use_session_id: bool,
}
impl ThrottleConfig {
	/// Creates a configuration for the named route with the default message.
	pub fn new(name: impl Into<String>, seconds: u32) -> Self {
		Self { name: name.into(), seconds, ..Default::default() }
	}

	/// Overrides the rejection message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());

		self
	}

	/// Toggles user-agent partitioning.
	pub fn with_user_agent(mut self, enabled: bool) -> Self {
		self.use_user_agent = enabled;

		self
	}

	/// Toggles session partitioning.
	pub fn with_session_id(mut self, enabled: bool) -> Self {
		self.use_session_id = enabled;

		self
	}

	/// Length of the throttle window.
	pub fn window(&self) -> Duration {
		Duration::seconds(i64::from(self.seconds))
	}

	/// Rejection message with the window length substituted.
	pub fn rejection_message(&self) -> String {
		let template = self.message.as_deref().filter(|m| !m.is_empty());
		let seconds = self.seconds.to_string();

		template
			.unwrap_or(DEFAULT_THROTTLE_MESSAGE)
			.replace("{0}", &seconds)
			.replace("{n}", &seconds)
	}

	/// Composes the marker key for a client.
	///
	/// The key is `"{name}-{address}"`, followed by `"-{user_agent}"` when user-agent
	/// partitioning is enabled and by the session id when session partitioning is enabled and
	/// the client has a session.
	pub fn marker_key(&self, client: &ClientIdentity) -> String {
		let mut key = format!("{}-{}", self.name, client.address);

		if self.use_user_agent {
			key.push('-');
			key.push_str(client.user_agent.as_deref().unwrap_or_default());
		}
		if let Some(session) = client.session_id.as_deref().filter(|_| self.use_session_id) {
			key.push_str(session);
		}

		key
	}
}
impl Default for ThrottleConfig {
	fn default() -> Self {
		Self {
			name: String::new(),
			seconds: 1,
			message: None,
			use_user_agent: true,
			use_session_id: false,
		}
	}
}

/// Identity of the caller being throttled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientIdentity {
	/// Client network address.
	pub address: String,
	/// Client `User-Agent`, if sent.
	pub user_agent: Option<String>,
	/// Session id, if the client has a session.
	pub session_id: Option<String>,
}
impl ClientIdentity {
	/// Creates an identity from the client's address.
	pub fn new(address: impl Into<String>) -> Self {
		Self { address: address.into(), ..Default::default() }
	}

	/// Attaches the client's user agent.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Attaches the client's session id.
	pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
		self.session_id = Some(session_id.into());

		self
	}
}

/// Verdict returned by [`ThrottleGuard::check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
	/// The call may proceed.
	Allow,
	/// The call must be rejected.
	Deny(ThrottleRejection),
}
impl ThrottleDecision {
	/// Returns `true` for [`ThrottleDecision::Allow`].
	pub fn is_allowed(&self) -> bool {
		matches!(self, Self::Allow)
	}
}

/// Details of a rejected call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThrottleRejection {
	/// HTTP status to answer with (always `429 Too Many Requests`).
	pub status: StatusCode,
	/// Client-facing message.
	pub message: String,
	/// Time left until the client's marker expires.
	pub retry_after: Duration,
}

/// Admits at most one call per client key per window.
#[derive(Clone)]
pub struct ThrottleGuard {
	config: ThrottleConfig,
	store: Arc<dyn MarkerStore>,
}
impl ThrottleGuard {
	/// Creates a guard using `store` for its markers.
	pub fn new(config: ThrottleConfig, store: Arc<dyn MarkerStore>) -> Self {
		Self { config, store }
	}

	/// Guard configuration.
	pub fn config(&self) -> &ThrottleConfig {
		&self.config
	}

	/// Decides whether the client's call may proceed now.
	pub async fn check(&self, client: &ClientIdentity) -> ThrottleDecision {
		self.check_at(client, OffsetDateTime::now_utc()).await
	}

	/// Decides whether the client's call may proceed at `now`.
	///
	/// A failing marker store admits the call; throttling degrades instead of blocking all
	/// traffic.
	pub async fn check_at(&self, client: &ClientIdentity, now: OffsetDateTime) -> ThrottleDecision {
		let span = OpSpan::new(OpKind::Throttle, "check");
		let key = self.config.marker_key(client);
		let expires_at = now + self.config.window();
		let outcome = span.instrument(self.store.insert_if_absent(&key, expires_at, now)).await;

		match outcome {
			Ok(MarkerOutcome::Inserted) => {
				span.finish(OpOutcome::Allowed);

				ThrottleDecision::Allow
			},
			Ok(MarkerOutcome::Present { expires_at }) => {
				span.finish(OpOutcome::Denied);

				ThrottleDecision::Deny(ThrottleRejection {
					status: StatusCode::TOO_MANY_REQUESTS,
					message: self.config.rejection_message(),
					retry_after: (expires_at - now).max(Duration::ZERO),
				})
			},
			Err(e) => {
				span.degraded(&e);
				span.finish(OpOutcome::FailOpen);

				ThrottleDecision::Allow
			},
		}
	}

	/// Clears the client's marker so its next call is admitted immediately.
	///
	/// Returns whether a marker existed. Unlike [`check`](Self::check), a failing store is
	/// reported to the caller.
	pub async fn reset(&self, client: &ClientIdentity) -> Result<bool> {
		let span = OpSpan::new(OpKind::Throttle, "reset");
		let key = self.config.marker_key(client);

		match span.instrument(self.store.remove(&key)).await {
			Ok(removed) => {
				span.finish(OpOutcome::Success);

				Ok(removed)
			},
			Err(e) => {
				span.finish(OpOutcome::Failure);

				Err(e.into())
			},
		}
	}
}
impl Debug for ThrottleGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ThrottleGuard").field("config", &self.config).finish_non_exhaustive()
	}
}
