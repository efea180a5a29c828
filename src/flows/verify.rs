//! Verify stage: confirm the access credentials and fetch the user's profile.

// self
use crate::{
	_prelude::*,
	auth::AccessCredentials,
	flows::Broker,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::{self, ProviderResponse, TwitterUser, VerifyCredentialsParams},
};

impl Broker {
	/// Calls verify-credentials and validates the profile it returns.
	pub async fn verify_credentials(&self, access: &AccessCredentials) -> Result<TwitterUser> {
		const KIND: FlowKind = FlowKind::VerifyCredentials;

		let span = FlowSpan::new(KIND, "verify_credentials");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let outcome = span.instrument(self.fetch_profile(access)).await;
		let result = provider::validate_response(outcome);

		match &result {
			Ok(user) => {
				tracing::info!(user_id = user.id, screen_name = %user.screen_name, "user verified");
				obs::record_flow_outcome(KIND, FlowOutcome::Success);
			},
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	async fn fetch_profile(&self, access: &AccessCredentials) -> Result<ProviderResponse> {
		let mut url = self.descriptor.endpoints.verify_credentials.clone();

		url.query_pairs_mut().extend_pairs(VerifyCredentialsParams::default().to_query());

		let reply = self.facade().get(access, url).await?;
		let user = if reply.is_ok() { Some(provider::parse_user(&reply.body)?) } else { None };

		Ok(ProviderResponse { status: reply.status, user })
	}
}
