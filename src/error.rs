//! Crate-level error types shared across configuration, OAuth exchanges, and provider calls.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// OAuth 1.0a endpoint or callback failure.
	#[error(transparent)]
	OAuth(#[from] OAuthError),

	/// Verify-credentials did not yield a usable profile.
	#[error("Unable to get Twitter user.")]
	UnableToGetUser,
	/// Verify-credentials responded with a body that is not a profile.
	#[error("Verify credentials returned malformed JSON.")]
	ProfileParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and validation failures raised before any request is served.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Consumer key resolved to an empty value.
	#[error("Missing Twitter Consumer Key.")]
	MissingConsumerKey,
	/// Consumer secret resolved to an empty value.
	#[error("Missing Twitter Consumer Secret.")]
	MissingConsumerSecret,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Callback URL cannot be parsed.
	#[error("Callback URL is invalid.")]
	InvalidCallback {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] crate::provider::ProviderDescriptorError),
	/// The listener could not bind to the configured address.
	#[error("Unable to listen on {address}.")]
	Bind {
		/// Address the listener attempted to bind.
		address: String,
		/// Underlying socket failure.
		#[source]
		source: std::io::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		if e.is_builder() {
			ConfigError::http_client_build(e).into()
		} else {
			TransportError::from(e).into()
		}
	}
}

/// OAuth 1.0a protocol failures raised by token endpoints or the authorization callback.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum OAuthError {
	/// A token endpoint answered with a non-200 status.
	#[error("The {endpoint} endpoint returned status {status}.")]
	UnexpectedStatus {
		/// Which endpoint failed.
		endpoint: &'static str,
		/// HTTP status code returned by the provider.
		status: u16,
	},
	/// A token endpoint response omitted `oauth_token` or `oauth_token_secret`.
	#[error("Response is missing oauth_token or oauth_token_secret.")]
	MissingTokenCredentials,
	/// The request-token response did not confirm the callback.
	#[error("The oauth_callback_confirmed field was not true.")]
	CallbackNotConfirmed,
	/// The authorization callback omitted `oauth_token` or `oauth_verifier`.
	#[error("Request is missing oauth_token or oauth_verifier.")]
	MissingCallbackParams,
	/// HMAC-SHA1 refused the signing key.
	#[error("Signing key was rejected by HMAC-SHA1.")]
	InvalidSigningKey,
}
