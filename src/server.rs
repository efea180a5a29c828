//! HTTP surface: the welcome page, the login-URL generator, and the callback chain.

pub mod failure;

pub use failure::*;

// crates.io
use axum::{
	Router,
	extract::{RawQuery, State},
	http::{StatusCode, header::CONTENT_TYPE},
	response::{Html, IntoResponse, Redirect, Response},
	routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
// self
use crate::{_prelude::*, config::Config, error::ConfigError, flows::Broker};

/// Path of the login-URL route.
pub const LOGIN_URL_PATH: &str = "/twitter/login-url";
/// Path registered as the provider callback.
pub const CALLBACK_PATH: &str = "/twitter/callback";
/// Path of the user-info route that completes the login.
pub const USER_INFO_PATH: &str = "/twitter/user-info";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
	/// Broker running the OAuth legs.
	pub broker: Arc<Broker>,
	/// Continuation invoked when a stage fails.
	pub failure: Arc<dyn FailureHandler>,
	/// Welcome page served at `/`.
	pub home_page: Arc<PathBuf>,
}
impl AppState {
	/// Builds state from startup configuration with the default failure handler.
	pub fn from_config(config: &Config) -> Result<Self> {
		Ok(Self::new(Broker::from_config(config)?, config.home_page.clone()))
	}

	/// Wraps an existing broker.
	pub fn new(broker: Broker, home_page: impl Into<PathBuf>) -> Self {
		Self {
			broker: Arc::new(broker),
			failure: Arc::new(DefaultFailureHandler),
			home_page: Arc::new(home_page.into()),
		}
	}

	/// Replaces the failure continuation.
	pub fn with_failure_handler(mut self, failure: impl FailureHandler + 'static) -> Self {
		self.failure = Arc::new(failure);

		self
	}
}
impl Debug for AppState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AppState")
			.field("broker", &self.broker)
			.field("home_page", &self.home_page)
			.finish()
	}
}

/// Registers every route. Unknown paths fall back to the welcome page.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(welcome))
		.route(LOGIN_URL_PATH, get(login_url))
		.route(CALLBACK_PATH, get(callback))
		.route(USER_INFO_PATH, get(user_info))
		.fallback(welcome)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

/// Binds the configured address and serves until the listener fails.
pub async fn serve(config: Config) -> Result<()> {
	let address = config.listen_addr;
	let app = router(AppState::from_config(&config)?);
	let listener = TcpListener::bind(address)
		.await
		.map_err(|source| ConfigError::Bind { address: address.to_string(), source })?;

	tracing::info!("starting server listening on {address}");

	axum::serve(listener, app)
		.await
		.map_err(|source| ConfigError::Bind { address: address.to_string(), source })?;

	Ok(())
}

/// Serves the welcome page verbatim; a missing or unreadable file yields an empty body.
async fn welcome(State(state): State<AppState>) -> Html<Vec<u8>> {
	let page = tokio::fs::read(state.home_page.as_path()).await.unwrap_or_else(|e| {
		tracing::debug!(error = %e, path = %state.home_page.display(), "welcome page unreadable");

		Vec::new()
	});

	Html(page)
}

/// Writes the authorization URL for a fresh request token as plain text.
///
/// A request-token failure goes to the failure handler. A failure to build the URL from an
/// issued token is logged and answered with an empty body.
async fn login_url(State(state): State<AppState>) -> Response {
	let temporary = match state.broker.login().await {
		Ok(temporary) => temporary,
		Err(e) => return state.failure.handle(e),
	};

	match state.broker.authorization_url(&temporary) {
		Ok(url) => plain_text(StatusCode::OK, url.as_str().to_owned()),
		Err(e) => {
			tracing::error!(error = %e, "unable to build authorization URL");

			StatusCode::OK.into_response()
		},
	}
}

/// Forwards the provider redirect, query string intact, to the user-info route.
async fn callback(RawQuery(query): RawQuery) -> Redirect {
	match query {
		Some(query) if !query.is_empty() => Redirect::to(&format!("{USER_INFO_PATH}?{query}")),
		_ => Redirect::to(USER_INFO_PATH),
	}
}

/// Completes the login and writes the verified profile in its pretty `Debug` form.
async fn user_info(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
	match state.broker.complete_login(query.as_deref()).await {
		Ok(user) => plain_text(StatusCode::OK, format!("{user:#?}")),
		Err(e) => state.failure.handle(e),
	}
}

pub(crate) fn plain_text(status: StatusCode, body: String) -> Response {
	(status, [(CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
