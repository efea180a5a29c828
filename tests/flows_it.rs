// crates.io
use httpmock::prelude::*;
// self
use oauth1_login::{
	_preludet::*,
	auth::{AccessCredentials, AuthorizationCallback},
	error::OAuthError,
};

const VERIFY_PATH: &str = "/1.1/account/verify_credentials.json";

#[tokio::test]
async fn login_returns_confirmed_temporary_credentials() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/request_token")
				.header_matches("authorization", "^OAuth .*")
				.header_matches(
					"authorization",
					".*oauth_callback=\"http%3A%2F%2Flocalhost%3A8080%2Ftwitter%2Fcallback\".*",
				)
				.header_matches("authorization", ".*oauth_consumer_key=\"consumer-it\".*")
				.header_matches("authorization", ".*oauth_signature_method=\"HMAC-SHA1\".*");
			then.status(200).body(
				"oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true",
			);
		})
		.await;
	let temporary = broker.login().await.expect("Request token leg should succeed.");

	mock.assert_async().await;

	assert_eq!(temporary.token, "req-token");
	assert_eq!(temporary.secret.expose(), "req-secret");

	let url = broker.authorization_url(&temporary).expect("Authorization URL should build.");

	assert_eq!(url.as_str(), format!("{}/oauth/authorize?oauth_token=req-token", server.base_url()));
}

#[tokio::test]
async fn login_rejects_unconfirmed_callbacks() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200).body("oauth_token=req-token&oauth_token_secret=req-secret");
		})
		.await;
	let err = broker.login().await.expect_err("Unconfirmed callbacks should be rejected.");

	assert!(matches!(err, Error::OAuth(OAuthError::CallbackNotConfirmed)));
}

#[tokio::test]
async fn login_surfaces_provider_status() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(401).body("Could not authenticate you.");
		})
		.await;
	let err = broker.login().await.expect_err("Unauthorized consumers should be rejected.");

	assert!(matches!(
		err,
		Error::OAuth(OAuthError::UnexpectedStatus { endpoint: "request_token", status: 401 })
	));
}

#[tokio::test]
async fn callback_exchanges_verifier_for_access_credentials() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/access_token")
				.header_matches("authorization", ".*oauth_token=\"req-token\".*")
				.header_matches("authorization", ".*oauth_verifier=\"verifier\".*")
				.header_matches("authorization", ".*oauth_signature=\"[^\"]+\".*");
			then.status(200).body(
				"oauth_token=access-token&oauth_token_secret=access-secret&user_id=42&screen_name=gopher",
			);
		})
		.await;
	let callback = AuthorizationCallback { token: "req-token".into(), verifier: "verifier".into() };
	let access = broker.callback(&callback).await.expect("Access token leg should succeed.");

	mock.assert_async().await;

	assert_eq!(access, AccessCredentials::new("access-token", "access-secret"));
}

#[tokio::test]
async fn callback_rejects_partial_token_responses() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=access-token");
		})
		.await;
	let callback = AuthorizationCallback { token: "req-token".into(), verifier: "verifier".into() };
	let err = broker.callback(&callback).await.expect_err("Missing secrets should be rejected.");

	assert!(matches!(err, Error::OAuth(OAuthError::MissingTokenCredentials)));
}

#[tokio::test]
async fn verify_credentials_requests_email_and_skips_status() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(VERIFY_PATH)
				.query_param("include_entities", "false")
				.query_param("skip_status", "true")
				.query_param("include_email", "true")
				.header_matches("authorization", ".*oauth_token=\"access-token\".*");
			then.status(200).header("content-type", "application/json").body(
				r#"{"id":42,"id_str":"42","name":"Gopher","screen_name":"gopher","email":"gopher@example.com"}"#,
			);
		})
		.await;
	let user = broker
		.verify_credentials(&AccessCredentials::new("access-token", "access-secret"))
		.await
		.expect("Verify credentials should succeed.");

	mock.assert_async().await;

	assert_eq!(user.id, 42);
	assert_eq!(user.screen_name, "gopher");
	assert_eq!(user.email.as_deref(), Some("gopher@example.com"));
}

#[tokio::test]
async fn verify_credentials_rejects_unusable_profiles() {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let access = AccessCredentials::new("access-token", "access-secret");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(VERIFY_PATH);
			then.status(200).body(r#"{"id":0,"id_str":"","screen_name":"ghost"}"#);
		})
		.await;
	let err = broker.verify_credentials(&access).await.expect_err("Zero ids should be rejected.");

	assert!(matches!(err, Error::UnableToGetUser));

	mock.delete_async().await;

	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path(VERIFY_PATH);
			then.status(401).body(r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#);
		})
		.await;
	let err = broker.verify_credentials(&access).await.expect_err("401s should be rejected.");

	assert!(matches!(err, Error::UnableToGetUser));
}

#[tokio::test]
async fn complete_login_runs_the_whole_callback_chain() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let broker = build_reqwest_test_broker(mock_descriptor(&server.base_url()));
	let exchange = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=access-token&oauth_token_secret=access-secret");
		})
		.await;
	let verify = server
		.mock_async(|when, then| {
			when.method(GET).path(VERIFY_PATH);
			then.status(200).body(r#"{"id":7,"id_str":"7","screen_name":"seven"}"#);
		})
		.await;
	let user = broker.complete_login(Some("oauth_token=req-token&oauth_verifier=v")).await?;

	exchange.assert_async().await;
	verify.assert_async().await;

	assert_eq!(user.id_str, "7");

	let err = broker
		.complete_login(Some("oauth_token=req-token"))
		.await
		.expect_err("Missing verifiers should stop the chain.");

	assert!(matches!(err, Error::OAuth(OAuthError::MissingCallbackParams)));

	exchange.assert_calls_async(1).await;

	Ok(())
}
