// self
use crate::{
	_prelude::*,
	obs::{self, FlowKind, FlowOutcome},
	session::SessionState,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// Span handle carried through one login or refresh call.
///
/// The span opens with the `flow`, `stage` and `session` fields. The HTTP `status` and the
/// final `outcome` are filled in as the call progresses.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	kind: FlowKind,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span for `kind`, tagged with the call site and the session state at entry.
	pub fn new(kind: FlowKind, stage: &'static str, session: SessionState) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"mojang_auth.flow",
				flow = kind.as_str(),
				stage,
				session = session.as_str(),
				status = tracing::field::Empty,
				outcome = tracing::field::Empty,
			);

			Self { kind, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, session);

			Self { kind }
		}
	}

	/// Call this span describes.
	pub const fn kind(&self) -> FlowKind {
		self.kind
	}

	/// Records the HTTP status of the server's answer on the span and in the status metric.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		self.span.record("status", status);

		obs::record_response_status(self.kind, status);
	}

	/// Records the final outcome on the span and in the flow metric.
	pub fn record_outcome(&self, outcome: FlowOutcome) {
		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());

		obs::record_flow_outcome(self.kind, outcome);
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event inside the current span (when tracing is enabled).
///
/// Arguments must never include token or password material.
macro_rules! flow_debug {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		{
			::tracing::debug!($($arg)*);
		}
	};
}
pub(crate) use flow_debug;
