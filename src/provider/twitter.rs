//! Twitter user profile model and verify-credentials response validation.

// self
use crate::_prelude::*;

/// Profile returned by `account/verify_credentials`.
///
/// Only the fields this crate cares about are modeled; unknown fields are ignored and absent
/// ones fall back to their defaults so sparse mock payloads still deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterUser {
	/// Numeric user identifier.
	pub id: i64,
	/// String form of [`TwitterUser::id`].
	pub id_str: String,
	/// Display name.
	pub name: String,
	/// Handle without the leading `@`.
	pub screen_name: String,
	/// Email address, present when the app is allowed to request it.
	pub email: Option<String>,
	/// Free-form location string.
	pub location: String,
	/// Profile bio.
	pub description: String,
	/// Website linked from the profile.
	pub url: Option<String>,
	/// Whether tweets are protected.
	pub protected: bool,
	/// Whether the account is verified.
	pub verified: bool,
	/// Follower count.
	pub followers_count: u64,
	/// Following count.
	pub friends_count: u64,
	/// Number of public lists the user is a member of.
	pub listed_count: u64,
	/// Number of liked tweets.
	pub favourites_count: u64,
	/// Number of tweets, including retweets.
	pub statuses_count: u64,
	/// Account creation timestamp in Twitter's `Wed Oct 10 20:19:24 +0000 2018` format.
	pub created_at: String,
	/// Preferred language code.
	pub lang: Option<String>,
	/// HTTPS avatar URL.
	pub profile_image_url_https: String,
	/// Whether the account still uses the default theme.
	pub default_profile: bool,
	/// Whether the account still uses the default avatar.
	pub default_profile_image: bool,
}

/// Query options sent with the verify-credentials call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyCredentialsParams {
	/// Include the `entities` node.
	pub include_entities: bool,
	/// Omit the user's latest status.
	pub skip_status: bool,
	/// Ask for the account email address.
	pub include_email: bool,
}
impl VerifyCredentialsParams {
	/// Renders the options as query pairs.
	pub fn to_query(self) -> [(&'static str, &'static str); 3] {
		[
			("include_entities", bool_str(self.include_entities)),
			("skip_status", bool_str(self.skip_status)),
			("include_email", bool_str(self.include_email)),
		]
	}
}
impl Default for VerifyCredentialsParams {
	fn default() -> Self {
		Self { include_entities: false, skip_status: true, include_email: true }
	}
}

/// Raw outcome of a verify-credentials call before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
	/// HTTP status code returned by the provider.
	pub status: u16,
	/// Decoded profile; `None` when the provider answered with an error.
	pub user: Option<TwitterUser>,
}

/// Decodes a verify-credentials body, keeping the JSON path of any failure.
pub fn parse_user(body: &[u8]) -> Result<TwitterUser> {
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de).map_err(|source| Error::ProfileParse { source })
}

/// Returns the profile when the verify-credentials outcome identifies a real user.
///
/// Any transport or decoding error, a non-200 status, a missing profile, a zero `id`, or an
/// empty `id_str` all collapse into [`Error::UnableToGetUser`].
pub fn validate_response(outcome: Result<ProviderResponse>) -> Result<TwitterUser> {
	let response = match outcome {
		Ok(response) => response,
		Err(e) => {
			tracing::debug!(error = %e, "verify credentials failed");

			return Err(Error::UnableToGetUser);
		},
	};

	if response.status != 200 {
		return Err(Error::UnableToGetUser);
	}

	match response.user {
		Some(user) if user.id != 0 && !user.id_str.is_empty() => Ok(user),
		_ => Err(Error::UnableToGetUser),
	}
}

fn bool_str(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}
