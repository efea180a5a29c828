//! Failure continuation invoked when a login stage returns an error.

// crates.io
use axum::{http::StatusCode, response::Response};
// self
use crate::{_prelude::*, error::OAuthError, server::plain_text};

/// Turns a stage error into the HTTP response sent to the browser.
pub trait FailureHandler: Send + Sync {
	/// Renders the response for `error`.
	fn handle(&self, error: Error) -> Response;
}

/// Writes the error text as plain text.
///
/// A callback missing its query parameters is the caller's fault and gets 400; every other
/// failure is reported as 500.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFailureHandler;
impl DefaultFailureHandler {
	/// Status code chosen for `error`.
	pub fn status_for(error: &Error) -> StatusCode {
		match error {
			Error::OAuth(OAuthError::MissingCallbackParams) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
impl FailureHandler for DefaultFailureHandler {
	fn handle(&self, error: Error) -> Response {
		let status = Self::status_for(&error);

		tracing::warn!(status = status.as_u16(), error = %error, "login stage failed");

		plain_text(status, error.to_string())
	}
}
