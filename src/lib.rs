//! Sign in with Twitter over OAuth 1.0a: request tokens, signed exchanges, and a verified
//! profile served behind three HTTP routes.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod provider;
pub mod server;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::ConsumerCredentials,
		config::Config,
		flows::Broker,
		http::ReqwestHttpClient,
		provider::ProviderDescriptor,
	};

	/// Consumer key used by test fixtures.
	pub const TEST_CONSUMER_KEY: &str = "consumer-it";
	/// Consumer secret used by test fixtures.
	pub const TEST_CONSUMER_SECRET: &str = "consumer-secret-it";

	/// Builds a reqwest HTTP client for talking to `httpmock` servers.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.expect("Failed to build Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a provider descriptor whose endpoints all live on `base_url` (usually an
	/// `httpmock` server), using the Twitter path layout.
	pub fn mock_descriptor(base_url: &str) -> ProviderDescriptor {
		let endpoint = |path: &str| {
			Url::parse(&format!("{base_url}{path}"))
				.expect("Mock provider endpoint should parse successfully.")
		};

		ProviderDescriptor::builder("mock-twitter")
			.request_token_endpoint(endpoint("/oauth/request_token"))
			.authorize_endpoint(endpoint("/oauth/authorize"))
			.access_token_endpoint(endpoint("/oauth/access_token"))
			.verify_credentials_endpoint(endpoint("/1.1/account/verify_credentials.json"))
			.build()
			.expect("Mock provider descriptor should build successfully.")
	}

	/// Test consumer credentials.
	pub fn test_credentials() -> ConsumerCredentials {
		ConsumerCredentials::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET)
	}

	/// Constructs a [`Config`] pointing at the provided descriptor.
	pub fn test_config(descriptor: ProviderDescriptor) -> Config {
		Config::new(test_credentials()).with_provider(descriptor)
	}

	/// Constructs a [`Broker`] backed by the test credentials and reqwest transport.
	pub fn build_reqwest_test_broker(descriptor: ProviderDescriptor) -> Broker {
		Broker::with_http_client(
			test_credentials(),
			descriptor,
			Url::parse(crate::config::CALLBACK_URL).expect("Callback URL constant should parse."),
			test_reqwest_http_client(),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		path::{Path, PathBuf},
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tempfile as _, tower as _};
