//! Login stage chain powered by the OAuth 1.0a facade.
//!
//! Each stage is an explicit continuation: it consumes the previous stage's typed output and
//! yields `Ok(next)` for the success path or `Err` for the failure path. Nothing is stashed in
//! a shared request context.
//!
//! ```text
//! login-url:  login ──▶ authorization_url
//! user-info:  callback (empty temp secret) ──▶ verify_credentials
//! ```

pub mod callback;
pub mod login;
pub mod verify;

// self
use crate::{
	_prelude::*,
	auth::ConsumerCredentials,
	config::Config,
	http::ReqwestHttpClient,
	oauth::OAuth1Facade,
	provider::ProviderDescriptor,
};

/// Coordinates the OAuth 1.0a legs against a single provider descriptor.
///
/// The broker owns the consumer credentials, callback URL, descriptor, and HTTP client; it is
/// immutable after construction and shared across requests behind an `Arc`.
#[derive(Clone)]
pub struct Broker {
	/// Consumer credentials signing every request.
	pub credentials: ConsumerCredentials,
	/// Provider descriptor that defines the OAuth and profile endpoints.
	pub descriptor: ProviderDescriptor,
	/// Callback URL announced during the request-token leg.
	pub callback_url: Url,
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: ReqwestHttpClient,
}
impl Broker {
	/// Creates a broker that reuses the caller-provided transport.
	pub fn with_http_client(
		credentials: ConsumerCredentials,
		descriptor: ProviderDescriptor,
		callback_url: Url,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self { credentials, descriptor, callback_url, http_client }
	}

	/// Creates a broker from startup configuration with a non-redirecting reqwest client.
	pub fn from_config(config: &Config) -> Result<Self> {
		Ok(Self::with_http_client(
			config.credentials.clone(),
			config.descriptor()?,
			config.callback_url()?,
			ReqwestHttpClient::without_redirects()?,
		))
	}

	pub(crate) fn facade(&self) -> OAuth1Facade<'_> {
		OAuth1Facade::new(
			&self.credentials,
			&self.descriptor.endpoints,
			&self.callback_url,
			&self.http_client,
		)
	}
}
impl Debug for Broker {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Broker")
			.field("descriptor", &self.descriptor.id)
			.field("consumer_key", &self.credentials.key)
			.field("callback_url", &self.callback_url.as_str())
			.finish()
	}
}
