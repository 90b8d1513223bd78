//! Demonstrates building a client against a mock API, letting the gateway
//! perform the lazy Basic-auth exchange, and reading typed wallet data.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use swervpay::{client::SwervpayClient, config::ClientOptions, url::Url};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/auth");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "access_token": "demo-access" }));
		})
		.await;
	let wallet_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/wallets/w_demo");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"id": "w_demo",
				"customer_id": "cus_demo",
				"label": "Main",
				"account_name": "Demo Business",
				"account_number": "0123456789",
				"account_type": "checking",
				"address": "1 Marina Rd",
				"bank_name": "Swerv Bank",
				"bank_code": "058",
				"bank_address": "2 Bank St",
				"routing_number": "021000021",
				"reference": "ref_demo",
				"balance": 100.0,
				"pending_balance": 0.0,
				"total_received": 100.0,
				"created_at": "2024-01-02T03:04:05Z",
				"updated_at": "2024-01-02T03:04:05Z"
			}));
		})
		.await;
	let client = SwervpayClient::new(
		ClientOptions::new("biz_demo", "sk_test_demo123")
			.with_base_url(Url::parse(&server.base_url())?),
	)?;
	let wallet = client
		.wallet
		.get("w_demo")
		.await?
		.typed()
		.expect("The demo wallet body matches the model.");

	println!("Wallet {} holds a balance of {}.", wallet.id, wallet.balance);

	auth_mock.assert_async().await;
	wallet_mock.assert_async().await;

	Ok(())
}
