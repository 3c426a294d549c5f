//! Observability hooks shared by the helpers that do real work.
//!
//! Each observed call opens an [`OpSpan`] and closes it with [`OpSpan::finish`], which tags
//! the span with the outcome and feeds the metrics below.
//!
//! # Feature Flags
//!
//! - `tracing`: debug spans named `web_helpers.op` carrying `op`, `stage`, and `outcome`
//!   fields, plus a `warn` event whenever a helper degrades to its fallback.
//! - `metrics`: counter `web_helpers_op_total{op, outcome}` and histogram
//!   `web_helpers_op_duration_seconds{op}`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Helpers that report through [`OpSpan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Culture negotiation.
	Culture,
	/// Request throttling.
	Throttle,
	/// Webhook delivery.
	Webhook,
	/// Resource bundle generation.
	Bundle,
}
impl OpKind {
	/// Label used in span and metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Culture => "culture",
			Self::Throttle => "throttle",
			Self::Webhook => "webhook",
			Self::Bundle => "bundle",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How an observed call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Requested culture matched a supported culture.
	Matched,
	/// Helper answered with its default value.
	Fallback,
	/// Throttle admitted the call.
	Allowed,
	/// Throttle rejected the call.
	Denied,
	/// Throttle admitted the call because its marker store failed.
	FailOpen,
	/// Operation completed.
	Success,
	/// Operation failed or the remote end answered with a non-success status.
	Failure,
}
impl OpOutcome {
	/// Label used in span and metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Matched => "matched",
			Self::Fallback => "fallback",
			Self::Allowed => "allowed",
			Self::Denied => "denied",
			Self::FailOpen => "fail_open",
			Self::Success => "success",
			Self::Failure => "failure",
		}
	}

	/// Whether the helper fell back instead of doing what was asked.
	pub const fn is_degraded(self) -> bool {
		matches!(self, Self::FailOpen | Self::Fallback)
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
