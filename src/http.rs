//! Transport primitives for signed provider calls.
//!
//! [`ReqwestHttpClient`] is the crate's only dependency on an HTTP stack. Every call carries a
//! pre-rendered OAuth 1.0a `Authorization` header and resolves into an [`HttpReply`] holding the
//! status and raw body, leaving status interpretation to the caller.

// crates.io
use reqwest::{Method, header::AUTHORIZATION, redirect::Policy};
// self
use crate::{_prelude::*, error::ConfigError};

/// Status and body captured from a provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpReply {
	/// Whether the provider answered with 200 OK.
	pub fn is_ok(&self) -> bool {
		self.status == 200
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// OAuth 1.0a token endpoints answer directly instead of delegating to another URI, so clients
/// built by [`ReqwestHttpClient::without_redirects`] never follow redirects.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that surfaces redirects instead of following them.
	pub fn without_redirects() -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(Policy::none())
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Sends a signed request with an empty body.
	pub async fn send_signed(
		&self,
		method: Method,
		url: Url,
		authorization: String,
	) -> Result<HttpReply> {
		let response = self.0.request(method, url).header(AUTHORIZATION, authorization).send().await?;
		let status = response.status().as_u16();
		let body = response.bytes().await?.to_vec();

		Ok(HttpReply { status, body })
	}
}
