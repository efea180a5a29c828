//! Login stage: temporary credentials and the authorization URL built from them.

// self
use crate::{
	_prelude::*,
	auth::TemporaryCredentials,
	flows::Broker,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

impl Broker {
	/// Requests temporary credentials from the provider.
	pub async fn login(&self) -> Result<TemporaryCredentials> {
		const KIND: FlowKind = FlowKind::RequestToken;

		let span = FlowSpan::new(KIND, "login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.facade().request_token()).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(e) => {
				tracing::warn!(error = %e, "request token failed");
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
			},
		}

		result
	}

	/// Builds the URL the user must visit to authorize the temporary credentials.
	pub fn authorization_url(&self, temporary: &TemporaryCredentials) -> Result<Url> {
		self.facade().authorization_url(&temporary.token)
	}
}
