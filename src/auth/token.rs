//! Credential pairs exchanged during the three OAuth 1.0a legs.

// self
use crate::{_prelude::*, auth::Secret};

/// Application credentials issued by the provider; constant for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerCredentials {
	/// Public consumer key.
	pub key: String,
	/// Consumer secret used to key every signature.
	pub secret: Secret,
}
impl ConsumerCredentials {
	/// Pairs a consumer key with its secret.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: Secret::new(secret) }
	}
}

/// Request token and secret issued by the request-token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemporaryCredentials {
	/// Request token sent to the authorize endpoint.
	pub token: String,
	/// Request secret used to sign the access-token exchange.
	pub secret: Secret,
}
impl TemporaryCredentials {
	/// Creates a new temporary credential pair.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: Secret::new(secret) }
	}

	/// Temporary credentials carrying only the token echoed back by the callback.
	///
	/// The server keeps nothing between the login and callback requests, so the secret used
	/// for the exchange is empty. Twitter accepts the exchange without it.
	pub fn empty_secret(token: impl Into<String>) -> Self {
		Self { token: token.into(), secret: Secret::default() }
	}
}

/// Access token and secret used to call provider APIs on the user's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessCredentials {
	/// Access token.
	pub token: String,
	/// Access token secret.
	pub secret: Secret,
}
impl AccessCredentials {
	/// Creates a new access credential pair.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: Secret::new(secret) }
	}
}

/// Query parameters delivered to the callback URL after the user authorizes the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationCallback {
	/// Request token being authorized.
	pub token: String,
	/// Verifier proving the user approved the request token.
	pub verifier: String,
}
