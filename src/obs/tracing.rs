// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	obs::{self, OpKind, OpOutcome},
};

/// Future returned by [`OpSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedOp<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`OpSpan::instrument`].
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOp<F> = F;

/// One observed helper call, from [`new`](Self::new) to [`finish`](Self::finish).
#[derive(Debug)]
pub struct OpSpan {
	kind: OpKind,
	started: Instant,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Opens a span for `kind` at the named call site.
	pub fn new(kind: OpKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		let span = tracing::debug_span!(
			"web_helpers.op",
			op = kind.as_str(),
			stage,
			outcome = tracing::field::Empty
		);
		#[cfg(not(feature = "tracing"))]
		let _ = stage;

		Self {
			kind,
			started: Instant::now(),
			#[cfg(feature = "tracing")]
			span,
		}
	}

	/// Helper this span belongs to.
	pub fn kind(&self) -> OpKind {
		self.kind
	}

	/// Runs synchronous work inside the span.
	pub fn in_scope<T, F>(&self, f: F) -> T
	where
		F: FnOnce() -> T,
	{
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Attaches the span to a future so it is entered on every poll.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOp<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Emits a `warn` event explaining why the helper falls back.
	pub fn degraded(&self, reason: &dyn Display) {
		#[cfg(feature = "tracing")]
		{
			let _entered = self.span.enter();

			tracing::warn!(op = self.kind.as_str(), %reason, "helper degraded to its fallback");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = reason;
		}
	}

	/// Closes the span, tagging it with `outcome` and recording metrics.
	pub fn finish(self, outcome: OpOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());
		}

		obs::record_op_outcome(self.kind, outcome);
		obs::record_op_duration(self.kind, self.started.elapsed());
	}
}
