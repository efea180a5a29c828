//! Provider descriptor data structures shared by all flows.

/// Builder API for assembling provider descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Temporary-credential (request token) endpoint.
	pub request_token: Url,
	/// Resource-owner authorization endpoint users are redirected to.
	pub authorize: Url,
	/// Token-credential (access token) endpoint.
	pub access_token: Url,
	/// Profile endpoint that confirms an access token and returns its user.
	pub verify_credentials: Url,
}

/// Immutable provider descriptor consumed by flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Descriptor identifier.
	pub id: String,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: impl Into<String>) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(id)
	}

	/// Descriptor for Twitter's OAuth 1.0a endpoints and the v1.1 verify-credentials call.
	pub fn twitter() -> Result<Self, ProviderDescriptorError> {
		let parse = |endpoint: &'static str, raw: &str| {
			Url::parse(raw).map_err(|_| ProviderDescriptorError::InvalidEndpoint {
				endpoint,
				url: raw.to_owned(),
			})
		};

		Self::builder("twitter")
			.request_token_endpoint(parse(
				"request_token",
				"https://api.twitter.com/oauth/request_token",
			)?)
			.authorize_endpoint(parse("authorize", "https://api.twitter.com/oauth/authorize")?)
			.access_token_endpoint(parse(
				"access_token",
				"https://api.twitter.com/oauth/access_token",
			)?)
			.verify_credentials_endpoint(parse(
				"verify_credentials",
				"https://api.twitter.com/1.1/account/verify_credentials.json",
			)?)
			.build()
	}
}
