// self
use crate::{
	_prelude::*,
	provider::{ProviderDescriptor, ProviderEndpoints},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ProviderDescriptorError {
	/// A required endpoint was never configured.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// Endpoint string cannot be parsed as a URL.
	#[error("The {endpoint} endpoint is not a valid URL: {url}.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Raw value that failed to parse.
		url: String,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ProviderDescriptor`] values.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: String,
	/// Request-token endpoint.
	pub request_token_endpoint: Option<Url>,
	/// Authorize endpoint.
	pub authorize_endpoint: Option<Url>,
	/// Access-token endpoint.
	pub access_token_endpoint: Option<Url>,
	/// Verify-credentials endpoint.
	pub verify_credentials_endpoint: Option<Url>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			request_token_endpoint: None,
			authorize_endpoint: None,
			access_token_endpoint: None,
			verify_credentials_endpoint: None,
		}
	}

	/// Sets the request-token endpoint.
	pub fn request_token_endpoint(mut self, url: Url) -> Self {
		self.request_token_endpoint = Some(url);

		self
	}

	/// Sets the authorize endpoint.
	pub fn authorize_endpoint(mut self, url: Url) -> Self {
		self.authorize_endpoint = Some(url);

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token_endpoint(mut self, url: Url) -> Self {
		self.access_token_endpoint = Some(url);

		self
	}

	/// Sets the verify-credentials endpoint.
	pub fn verify_credentials_endpoint(mut self, url: Url) -> Self {
		self.verify_credentials_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let endpoints = ProviderEndpoints {
			request_token: require("request_token", self.request_token_endpoint)?,
			authorize: require("authorize", self.authorize_endpoint)?,
			access_token: require("access_token", self.access_token_endpoint)?,
			verify_credentials: require("verify_credentials", self.verify_credentials_endpoint)?,
		};
		let descriptor = ProviderDescriptor { id: self.id, endpoints };

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ProviderDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), ProviderDescriptorError> {
		validate_endpoint("request_token", &self.endpoints.request_token)?;
		validate_endpoint("authorize", &self.endpoints.authorize)?;
		validate_endpoint("access_token", &self.endpoints.access_token)?;
		validate_endpoint("verify_credentials", &self.endpoints.verify_credentials)?;

		Ok(())
	}
}

fn require(endpoint: &'static str, url: Option<Url>) -> Result<Url, ProviderDescriptorError> {
	url.ok_or(ProviderDescriptorError::MissingEndpoint { endpoint })
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderDescriptorError> {
	if url.scheme() == "https" || is_loopback(url) {
		Ok(())
	} else {
		Err(ProviderDescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

// Local mock providers run over plain HTTP.
fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
		Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
		None => false,
	}
}
