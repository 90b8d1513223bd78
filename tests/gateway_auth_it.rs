// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use swervpay::{client::SwervpayClient, config::ClientOptions, error::Error, url::Url};

const BUSINESS_ID: &str = "biz_swerv";
const SECRET_KEY: &str = "sk_test_s3cr3t";
const BASIC_AUTH: &str = "Basic Yml6X3N3ZXJ2OnNrX3Rlc3RfczNjcjN0";

fn options(server: &MockServer) -> ClientOptions {
	ClientOptions::new(BUSINESS_ID, SECRET_KEY)
		.with_base_url(Url::parse(&server.base_url()).expect("Mock server URL should parse."))
}

fn client(server: &MockServer) -> SwervpayClient {
	SwervpayClient::new(options(server)).expect("Client should build from valid options.")
}

#[tokio::test]
async fn exchange_uses_basic_auth_and_caches_the_token() {
	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/auth").header("authorization", BASIC_AUTH);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"tok_cached\",\"token\":{\"business_id\":\"biz_swerv\",\
				\"type\":\"bearer\",\"issued_at\":1700000000,\"expires_at\":1999999999}}",
			);
		})
		.await;
	let business_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/business").header("authorization", "Bearer tok_cached");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "name": "Acme" }));
		})
		.await;
	let client = client(&server);

	client.business.get().await.expect("First business call should succeed.");
	client.business.get().await.expect("Second business call should succeed.");

	auth_mock.assert_async().await;
	business_mock.assert_calls_async(2).await;

	assert_eq!(client.api().access_token().as_deref(), Some("tok_cached"));
}

#[tokio::test]
async fn pre_supplied_access_token_bypasses_the_exchange() {
	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/auth");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "access_token": "tok_unused" }));
		})
		.await;
	let wallet_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/wallets/w_pre")
				.header("authorization", "Bearer tok_injected");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": "w_pre" }));
		})
		.await;
	let client = SwervpayClient::new(options(&server).with_access_token("tok_injected"))
		.expect("Client should build with a pre-supplied token.");

	client.wallet.get("w_pre").await.expect("The wallet call should succeed.");

	auth_mock.assert_calls_async(0).await;
	wallet_mock.assert_async().await;
}

#[tokio::test]
async fn malformed_secret_key_fails_before_any_http_call() {
	let server = MockServer::start_async().await;
	let err = SwervpayClient::new(
		ClientOptions::new(BUSINESS_ID, "invalid_key")
			.with_base_url(Url::parse(&server.base_url()).expect("Mock server URL should parse.")),
	)
	.map(|_| ())
	.expect_err("Construction must fail for a malformed secret key.");

	assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn missing_secret_key_is_reported_distinctly() {
	let server = MockServer::start_async().await;
	let err = SwervpayClient::new(
		ClientOptions::new(BUSINESS_ID, "")
			.with_base_url(Url::parse(&server.base_url()).expect("Mock server URL should parse.")),
	)
	.map(|_| ())
	.expect_err("Construction must fail without a secret key.");

	assert!(err.to_string().contains("Missing API key"));
}

#[tokio::test]
async fn failing_exchange_surfaces_as_an_api_error() {
	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/auth");
			then.status(500)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "auth backend down" }));
		})
		.await;
	let client = client(&server);
	let err =
		client.business.get().await.expect_err("A failing exchange must fail the caller's call.");

	match err {
		Error::Api(api) => {
			assert_eq!(api.status, 500);
			assert_eq!(api.message(), Some("auth backend down"));
		},
		other => panic!("Expected an API error, got: {other:?}."),
	}

	auth_mock.assert_async().await;
}

#[tokio::test]
async fn set_access_token_overrides_the_cached_session() {
	let server = MockServer::start_async().await;
	let wallet_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/wallets/w_set")
				.header("authorization", "Bearer tok_override");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": "w_set" }));
		})
		.await;
	let client = client(&server);

	client.api().set_access_token("tok_override");
	client.wallet.get("w_set").await.expect("The wallet call should use the injected token.");

	wallet_mock.assert_async().await;
}
