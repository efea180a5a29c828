//! OAuth 1.0a client facade: temporary credentials, authorization URLs, and token exchange.

pub mod signer;

pub use signer::*;

// crates.io
use reqwest::Method;
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{
		AccessCredentials, AuthorizationCallback, ConsumerCredentials, TemporaryCredentials,
	},
	error::OAuthError,
	http::{HttpReply, ReqwestHttpClient},
	provider::ProviderEndpoints,
};

/// Borrowed view over everything needed to run the three OAuth 1.0a legs.
///
/// Built per call by [`crate::flows::Broker`] so it never outlives the broker's state.
#[derive(Clone, Copy, Debug)]
pub struct OAuth1Facade<'a> {
	consumer: &'a ConsumerCredentials,
	endpoints: &'a ProviderEndpoints,
	callback_url: &'a Url,
	http_client: &'a ReqwestHttpClient,
}
impl<'a> OAuth1Facade<'a> {
	/// Creates a facade over borrowed broker state.
	pub fn new(
		consumer: &'a ConsumerCredentials,
		endpoints: &'a ProviderEndpoints,
		callback_url: &'a Url,
		http_client: &'a ReqwestHttpClient,
	) -> Self {
		Self { consumer, endpoints, callback_url, http_client }
	}

	/// Obtains temporary credentials from the request-token endpoint.
	///
	/// The provider must confirm the callback with `oauth_callback_confirmed=true`.
	pub async fn request_token(&self) -> Result<TemporaryCredentials> {
		let url = self.endpoints.request_token.clone();
		let authorization = Signer::new(self.consumer).authorization_header(
			"POST",
			&url,
			&[("oauth_callback", self.callback_url.as_str())],
		)?;
		let reply = self.http_client.send_signed(Method::POST, url, authorization).await?;
		let fields = parse_token_reply("request_token", reply)?;

		if fields.get("oauth_callback_confirmed").map(String::as_str) != Some("true") {
			return Err(OAuthError::CallbackNotConfirmed.into());
		}

		let (token, secret) = token_pair(fields)?;

		Ok(TemporaryCredentials::new(token, secret))
	}

	/// Builds the URL the user visits to authorize `request_token`.
	pub fn authorization_url(&self, request_token: &str) -> Result<Url> {
		if request_token.is_empty() {
			return Err(OAuthError::MissingTokenCredentials.into());
		}

		let mut url = self.endpoints.authorize.clone();

		url.query_pairs_mut().append_pair("oauth_token", request_token);

		Ok(url)
	}

	/// Exchanges authorized temporary credentials and the verifier for access credentials.
	pub async fn access_token(
		&self,
		temporary: &TemporaryCredentials,
		verifier: &str,
	) -> Result<AccessCredentials> {
		let url = self.endpoints.access_token.clone();
		let authorization = Signer::new(self.consumer)
			.with_token(&temporary.token, &temporary.secret)
			.authorization_header("POST", &url, &[("oauth_verifier", verifier)])?;
		let reply = self.http_client.send_signed(Method::POST, url, authorization).await?;
		let (token, secret) = token_pair(parse_token_reply("access_token", reply)?)?;

		Ok(AccessCredentials::new(token, secret))
	}

	/// Sends a GET signed with the access credentials, e.g. a profile lookup.
	pub async fn get(&self, access: &AccessCredentials, url: Url) -> Result<HttpReply> {
		let authorization = Signer::new(self.consumer)
			.with_token(&access.token, &access.secret)
			.authorization_header("GET", &url, &[])?;

		self.http_client.send_signed(Method::GET, url, authorization).await
	}
}

/// Reads `oauth_token` and `oauth_verifier` from the callback's raw query string.
pub fn parse_authorization_callback(query: Option<&str>) -> Result<AuthorizationCallback> {
	let mut token = None;
	let mut verifier = None;

	for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
		match key.as_ref() {
			"oauth_token" => token = Some(value.into_owned()),
			"oauth_verifier" => verifier = Some(value.into_owned()),
			_ => {},
		}
	}

	match (token, verifier) {
		(Some(token), Some(verifier)) if !token.is_empty() && !verifier.is_empty() =>
			Ok(AuthorizationCallback { token, verifier }),
		_ => Err(OAuthError::MissingCallbackParams.into()),
	}
}

fn parse_token_reply(endpoint: &'static str, reply: HttpReply) -> Result<BTreeMap<String, String>> {
	if !matches!(reply.status, 200 | 201) {
		return Err(OAuthError::UnexpectedStatus { endpoint, status: reply.status }.into());
	}

	Ok(form_urlencoded::parse(&reply.body).into_owned().collect())
}

fn token_pair(mut fields: BTreeMap<String, String>) -> Result<(String, String)> {
	let token = fields.remove("oauth_token").unwrap_or_default();
	let secret = fields.remove("oauth_token_secret").unwrap_or_default();

	if token.is_empty() || secret.is_empty() {
		return Err(OAuthError::MissingTokenCredentials.into());
	}

	Ok((token, secret))
}
