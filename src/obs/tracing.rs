// self
use crate::{_prelude::*, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by gateway dispatches.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the call kind, method, and path.
	pub fn new(kind: CallKind, method: &str, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("swervpay.call", kind = kind.as_str(), method, path);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, method, path);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
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

/// Records a permissive-decode fallback (debug event + counter, when enabled).
pub fn record_decode_fallback(expected: &'static str, path: &str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(expected, path, "Response shape mismatch; returning raw JSON.");
	#[cfg(feature = "metrics")]
	metrics::counter!("swervpay_decode_fallback_total", "expected" => expected).increment(1);

	#[cfg(not(all(feature = "tracing", feature = "metrics")))]
	let _ = (expected, path);
}
