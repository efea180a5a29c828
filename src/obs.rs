//! Observability helpers for login flows.
//!
//! # Signals
//!
//! - Every stage runs inside a span named `oauth1_login.flow` carrying the `flow` (leg) and
//!   `stage` (call site) fields.
//! - Enable the `metrics` feature to increment the `oauth1_login_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

/// OAuth 1.0a legs observed by the broker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Temporary-credential request.
	RequestToken,
	/// Verifier exchange for access credentials.
	AccessToken,
	/// Profile lookup with the access credentials.
	VerifyCredentials,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::RequestToken => "request_token",
			FlowKind::AccessToken => "access_token",
			FlowKind::VerifyCredentials => "verify_credentials",
		}
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a broker stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure handed to the failure continuation.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
