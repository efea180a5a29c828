//! Process configuration: consumer credentials from flags or the environment plus the fixed
//! listen address, callback URL, and welcome page.

// std
use std::{
	ffi::OsString,
	net::{Ipv4Addr, SocketAddr, SocketAddrV4},
};
// crates.io
use clap::Parser;
// self
use crate::{
	_prelude::*,
	auth::ConsumerCredentials,
	error::ConfigError,
	provider::ProviderDescriptor,
};

/// Environment variable holding the consumer key.
pub const CONSUMER_KEY_ENV: &str = "TWITTER_CONSUMER_KEY";
/// Environment variable holding the consumer secret.
pub const CONSUMER_SECRET_ENV: &str = "TWITTER_CONSUMER_SECRET";
/// Loopback address the server listens on.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
/// Callback registered with the provider; must match the app settings on Twitter.
pub const CALLBACK_URL: &str = "http://localhost:8080/twitter/callback";
/// Welcome page served at `/`, relative to the working directory.
pub const HOME_PAGE: &str = "home.html";

const LONG_FLAGS: [&str; 4] = ["consumer-key", "consumer-secret", "help", "version"];

/// Command-line flags. Both override their environment counterparts when non-empty.
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "oauth1-login", version, about = "Login with Twitter over OAuth 1.0a")]
pub struct Cli {
	/// Twitter Consumer Key.
	#[arg(long = "consumer-key", value_name = "KEY", allow_hyphen_values = true)]
	pub consumer_key: Option<String>,
	/// Twitter Consumer Secret.
	#[arg(long = "consumer-secret", value_name = "SECRET", allow_hyphen_values = true)]
	pub consumer_secret: Option<String>,
}
impl Cli {
	/// Parses the process arguments, accepting single-dash long flags such as
	/// `-consumer-key value` alongside `--consumer-key value`.
	pub fn parse_args() -> Self {
		Self::parse_from(normalize_args(std::env::args_os()))
	}

	/// Resolves credentials against the process environment.
	pub fn credentials(&self) -> Result<ConsumerCredentials, ConfigError> {
		self.credentials_with(|name| std::env::var(name).ok())
	}

	/// Resolves credentials against an arbitrary environment lookup.
	pub fn credentials_with<F>(&self, env: F) -> Result<ConsumerCredentials, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let key = pick(self.consumer_key.as_deref(), env(CONSUMER_KEY_ENV));
		let secret = pick(self.consumer_secret.as_deref(), env(CONSUMER_SECRET_ENV));

		if key.is_empty() {
			return Err(ConfigError::MissingConsumerKey);
		}
		if secret.is_empty() {
			return Err(ConfigError::MissingConsumerSecret);
		}

		Ok(ConsumerCredentials::new(key, secret))
	}
}

/// Everything the server needs, fixed at startup.
#[derive(Clone, Debug)]
pub struct Config {
	/// Consumer credentials used to sign every request.
	pub credentials: ConsumerCredentials,
	/// Address the listener binds.
	pub listen_addr: SocketAddr,
	/// Callback URL announced during the request-token leg.
	pub callback_url: String,
	/// HTML file served verbatim at `/`.
	pub home_page: PathBuf,
	/// Provider endpoints; Twitter unless overridden.
	pub provider: Option<ProviderDescriptor>,
}
impl Config {
	/// Creates a configuration with the fixed defaults.
	pub fn new(credentials: ConsumerCredentials) -> Self {
		Self {
			credentials,
			listen_addr: LISTEN_ADDR,
			callback_url: CALLBACK_URL.into(),
			home_page: PathBuf::from(HOME_PAGE),
			provider: None,
		}
	}

	/// Points the flows at a different provider descriptor.
	pub fn with_provider(mut self, descriptor: ProviderDescriptor) -> Self {
		self.provider = Some(descriptor);

		self
	}

	/// Returns the configured descriptor, falling back to Twitter.
	pub fn descriptor(&self) -> Result<ProviderDescriptor, ConfigError> {
		match &self.provider {
			Some(descriptor) => Ok(descriptor.clone()),
			None => Ok(ProviderDescriptor::twitter()?),
		}
	}

	/// Parses the callback URL.
	pub fn callback_url(&self) -> Result<Url, ConfigError> {
		Url::parse(&self.callback_url).map_err(|source| ConfigError::InvalidCallback { source })
	}
}

/// Rewrites Go-style `-flag` arguments into `--flag` so clap accepts them.
///
/// Only the long flags this binary defines are rewritten; short flags, values, and `--`
/// prefixed arguments are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = OsString>,
{
	args.into_iter()
		.map(|arg| match arg.to_str() {
			Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
			_ => arg,
		})
		.collect()
}

fn is_single_dash_long(arg: &str) -> bool {
	let Some(flag) = arg.strip_prefix('-') else {
		return false;
	};

	if flag.starts_with('-') {
		return false;
	}

	let name = flag.split_once('=').map_or(flag, |(name, _)| name);

	LONG_FLAGS.contains(&name)
}

fn pick(flag: Option<&str>, env: Option<String>) -> String {
	match flag {
		Some(value) if !value.is_empty() => value.to_owned(),
		_ => env.unwrap_or_default(),
	}
}
