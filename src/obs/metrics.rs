// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{OpKind, OpOutcome};

/// Counter incremented once per finished operation.
pub const OP_TOTAL: &str = "web_helpers_op_total";
/// Histogram of operation wall time in seconds.
pub const OP_DURATION_SECONDS: &str = "web_helpers_op_duration_seconds";

/// Counts one finished operation (no-op without the `metrics` feature).
pub fn record_op_outcome(kind: OpKind, outcome: OpOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(OP_TOTAL, "op" => kind.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records how long an operation took (no-op without the `metrics` feature).
pub fn record_op_duration(kind: OpKind, elapsed: StdDuration) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!(OP_DURATION_SECONDS, "op" => kind.as_str())
			.record(elapsed.as_secs_f64());
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, elapsed);
	}
}
