// crates.io
use tracing::instrument::Instrumented;
use tracing_subscriber::{EnvFilter, fmt};
// self
use crate::{_prelude::*, obs::FlowKind};

const DEFAULT_FILTER: &str = "info,oauth1_login=debug";

/// A span builder used by broker stages.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		let span = tracing::info_span!("oauth1_login.flow", flow = kind.as_str(), stage);

		Self { span }
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		use tracing::Instrument;

		fut.instrument(self.span.clone())
	}
}

/// Installs the global fmt subscriber, honoring `RUST_LOG` when it is set.
///
/// Returns `false` when another subscriber was already installed.
pub fn init_tracing() -> bool {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
