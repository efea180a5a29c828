//! HMAC-SHA1 request signing (RFC 5849 §3.4) and `Authorization` header rendering.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use time::OffsetDateTime;
// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, Secret},
	error::OAuthError,
};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const STRICT_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

/// Signs outbound requests on behalf of a consumer and, optionally, a token holder.
#[derive(Clone, Debug)]
pub struct Signer<'a> {
	consumer: &'a ConsumerCredentials,
	token: Option<&'a str>,
	token_secret: &'a str,
}
impl<'a> Signer<'a> {
	/// Signer for consumer-only requests (the request-token leg).
	pub fn new(consumer: &'a ConsumerCredentials) -> Self {
		Self { consumer, token: None, token_secret: "" }
	}

	/// Adds a token and its secret; the secret becomes the second half of the signing key.
	pub fn with_token(mut self, token: &'a str, secret: &'a Secret) -> Self {
		self.token = Some(token);
		self.token_secret = secret.expose();

		self
	}

	/// Renders the `Authorization` header for `method url`, using a fresh nonce and the
	/// current time.
	///
	/// `extra` carries protocol parameters specific to a leg, such as `oauth_callback` or
	/// `oauth_verifier`. Query parameters already present on `url` are signed too.
	pub fn authorization_header(
		&self,
		method: &str,
		url: &Url,
		extra: &[(&str, &str)],
	) -> Result<String> {
		self.authorization_header_at(
			method,
			url,
			extra,
			&random_nonce(),
			OffsetDateTime::now_utc().unix_timestamp(),
		)
	}

	/// Same as [`Signer::authorization_header`] with a caller-provided nonce and timestamp.
	pub fn authorization_header_at(
		&self,
		method: &str,
		url: &Url,
		extra: &[(&str, &str)],
		nonce: &str,
		timestamp: i64,
	) -> Result<String> {
		let mut oauth_params = vec![
			("oauth_consumer_key".to_owned(), self.consumer.key.clone()),
			("oauth_nonce".to_owned(), nonce.to_owned()),
			("oauth_signature_method".to_owned(), SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp".to_owned(), timestamp.to_string()),
			("oauth_version".to_owned(), VERSION.to_owned()),
		];

		if let Some(token) = self.token {
			oauth_params.push(("oauth_token".to_owned(), token.to_owned()));
		}

		oauth_params.extend(extra.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())));

		let base = signature_base_string(method, url, &oauth_params);
		let signature = sign(&base, self.consumer.secret.expose(), self.token_secret)?;

		oauth_params.push(("oauth_signature".to_owned(), signature));

		Ok(render_header(oauth_params))
	}
}

/// Percent-encodes `value` with the RFC 3986 unreserved set.
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, STRICT_ENCODE_SET).to_string()
}

/// Builds the signature base string from the method, the base URL, and every query and
/// protocol parameter.
pub fn signature_base_string(method: &str, url: &Url, oauth_params: &[(String, String)]) -> String {
	let mut base_url = url.clone();

	base_url.set_query(None);
	base_url.set_fragment(None);

	let mut pairs = url
		.query_pairs()
		.map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
		.chain(oauth_params.iter().map(|(k, v)| (percent_encode(k), percent_encode(v))))
		.collect::<Vec<_>>();

	pairs.sort();

	let normalized = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

	format!(
		"{}&{}&{}",
		method.to_ascii_uppercase(),
		percent_encode(base_url.as_str()),
		percent_encode(&normalized)
	)
}

/// Computes the base64 HMAC-SHA1 signature keyed by `consumer_secret&token_secret`.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
	let key = format!("{}&{}", percent_encode(consumer_secret), percent_encode(token_secret));
	let mut mac =
		HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| OAuthError::InvalidSigningKey)?;

	mac.update(base.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

fn render_header(mut params: Vec<(String, String)>) -> String {
	params.sort();

	let rendered = params
		.iter()
		.map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
		.collect::<Vec<_>>()
		.join(", ");

	format!("OAuth {rendered}")
}

fn random_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
