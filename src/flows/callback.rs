//! Callback stage: parse the provider redirect and exchange the verifier for access
//! credentials.

// self
use crate::{
	_prelude::*,
	auth::{AccessCredentials, AuthorizationCallback, TemporaryCredentials},
	flows::Broker,
	oauth,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::TwitterUser,
};

impl Broker {
	/// Exchanges an authorization callback for access credentials.
	///
	/// No temporary secret survives between the login and callback requests, so the exchange is
	/// signed with an empty request secret.
	pub async fn callback(&self, callback: &AuthorizationCallback) -> Result<AccessCredentials> {
		const KIND: FlowKind = FlowKind::AccessToken;

		let span = FlowSpan::new(KIND, "callback");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let temporary = TemporaryCredentials::empty_secret(callback.token.as_str());
		let result =
			span.instrument(self.facade().access_token(&temporary, &callback.verifier)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(e) => {
				tracing::warn!(error = %e, "access token exchange failed");
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
			},
		}

		result
	}

	/// Runs the full callback chain: parse the query, exchange it, then verify the user.
	pub async fn complete_login(&self, query: Option<&str>) -> Result<TwitterUser> {
		let callback = oauth::parse_authorization_callback(query)?;
		let access = self.callback(&callback).await?;

		self.verify_credentials(&access).await
	}
}
