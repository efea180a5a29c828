// std
use std::fs;
// crates.io
use axum::{
	Router,
	body::{Body, to_bytes},
	http::{Request, StatusCode, header},
	response::Response,
};
use httpmock::prelude::*;
use tower::ServiceExt;
// self
use oauth1_login::{
	_preludet::*,
	server::{self, AppState, FailureHandler},
};

const VERIFY_PATH: &str = "/1.1/account/verify_credentials.json";

fn app(server: &MockServer, home_page: impl Into<PathBuf>) -> Router {
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));

	server::router(AppState::new(broker, home_page))
}

async fn get(router: Router, uri: &str) -> Response {
	let request = Request::builder()
		.uri(uri)
		.body(Body::empty())
		.expect("Test request should build successfully.");

	router.oneshot(request).await.expect("Router is infallible.")
}

async fn body_text(response: Response) -> String {
	let bytes =
		to_bytes(response.into_body(), usize::MAX).await.expect("Response body should collect.");

	String::from_utf8(bytes.to_vec()).expect("Response body should be UTF-8.")
}

#[tokio::test]
async fn welcome_serves_page_verbatim() {
	let server = MockServer::start_async().await;
	let dir = tempfile::tempdir().expect("Temp dir should be created.");
	let page = dir.path().join("home.html");
	let html = "<html><body><a href=\"/twitter/login-url\">100% login</a></body></html>\n";

	fs::write(&page, html).expect("Welcome page fixture should be written.");

	let response = get(app(&server, &page), "/").await;

	assert_eq!(response.status(), StatusCode::OK);
	assert!(
		response
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.is_some_and(|v| v.starts_with("text/html"))
	);
	assert_eq!(body_text(response).await, html);

	let response = get(app(&server, &page), "/some/unrouted/path").await;

	assert_eq!(body_text(response).await, html);
}

#[tokio::test]
async fn welcome_is_empty_when_page_is_missing() {
	let server = MockServer::start_async().await;
	let dir = tempfile::tempdir().expect("Temp dir should be created.");
	let response = get(app(&server, dir.path().join("absent.html")), "/").await;

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn login_url_is_exactly_the_authorization_url() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200).body(
				"oauth_token=req%2Ftoken&oauth_token_secret=req-secret&oauth_callback_confirmed=true",
			);
		})
		.await;
	let response = get(app(&server, "home.html"), "/twitter/login-url").await;

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		body_text(response).await,
		format!("{}/oauth/authorize?oauth_token=req%2Ftoken", server.base_url())
	);
}

#[tokio::test]
async fn login_url_reports_request_token_failures() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(401);
		})
		.await;
	let response = get(app(&server, "home.html"), "/twitter/login-url").await;

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(body_text(response).await, "The request_token endpoint returned status 401.");
}

#[tokio::test]
async fn callback_redirects_to_user_info_with_query() {
	let server = MockServer::start_async().await;
	let response =
		get(app(&server, "home.html"), "/twitter/callback?oauth_token=t&oauth_verifier=v").await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(
		response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
		Some("/twitter/user-info?oauth_token=t&oauth_verifier=v")
	);
}

#[tokio::test]
async fn user_info_prints_verified_profile() {
	let server = MockServer::start_async().await;
	let _exchange = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=access-token&oauth_token_secret=access-secret");
		})
		.await;
	let _verify = server
		.mock_async(|when, then| {
			when.method(GET).path(VERIFY_PATH);
			then.status(200).body(r#"{"id":42,"id_str":"42","screen_name":"gopher"}"#);
		})
		.await;
	let response =
		get(app(&server, "home.html"), "/twitter/user-info?oauth_token=t&oauth_verifier=v").await;

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_text(response).await;

	assert!(body.starts_with("TwitterUser {"));
	assert!(body.contains("id: 42,"));
	assert!(body.contains("id_str: \"42\","));
	assert!(body.contains("screen_name: \"gopher\","));
}

#[tokio::test]
async fn user_info_rejects_incomplete_callbacks() {
	let server = MockServer::start_async().await;
	let response = get(app(&server, "home.html"), "/twitter/user-info?oauth_token=t").await;

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_text(response).await, "Request is missing oauth_token or oauth_verifier.");
}

#[tokio::test]
async fn user_info_reports_unverifiable_users() {
	let server = MockServer::start_async().await;
	let _exchange = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=access-token&oauth_token_secret=access-secret");
		})
		.await;
	let _verify = server
		.mock_async(|when, then| {
			when.method(GET).path(VERIFY_PATH);
			then.status(503);
		})
		.await;
	let response =
		get(app(&server, "home.html"), "/twitter/user-info?oauth_token=t&oauth_verifier=v").await;

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(body_text(response).await, "Unable to get Twitter user.");
}

#[tokio::test]
async fn custom_failure_handlers_replace_the_default() {
	struct Teapot;
	impl FailureHandler for Teapot {
		fn handle(&self, _error: Error) -> Response {
			Response::builder()
				.status(StatusCode::IM_A_TEAPOT)
				.body(Body::from("short and stout"))
				.expect("Teapot response should build.")
		}
	}

	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let router =
		server::router(AppState::new(broker, "home.html").with_failure_handler(Teapot));
	let response = get(router, "/twitter/user-info").await;

	assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
	assert_eq!(body_text(response).await, "short and stout");
}
