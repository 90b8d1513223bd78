// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use swervpay::{
	client::SwervpayClient,
	config::ClientOptions,
	error::Error,
	model::{
		BillCreateBody, CardIssuer, CreateCardBody, CreateCustomerBody, CreatePayoutBody,
		CustomerKycBody, FundOrWithdrawCardBody, FxBody, KycTier, PageAndLimitQuery,
		ResolveAccountBody,
	},
	url::Url,
};

const BUSINESS_ID: &str = "biz_swerv";
const SECRET_KEY: &str = "sk_test_s3cr3t";

fn client_with_token(server: &MockServer, token: &str) -> SwervpayClient {
	SwervpayClient::new(
		ClientOptions::new(BUSINESS_ID, SECRET_KEY)
			.with_base_url(Url::parse(&server.base_url()).expect("Mock server URL should parse."))
			.with_access_token(token),
	)
	.expect("Client should build with a pre-supplied token.")
}

#[tokio::test]
async fn card_fund_posts_the_amount_with_bearer_auth() {
	let server = MockServer::start_async().await;
	let fund_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/cards/c_1/fund")
				.header("authorization", "Bearer tok_card")
				.header("content-type", "application/json")
				.json_body(json!({ "amount": 500 }));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Card funded" }));
		})
		.await;
	let client = client_with_token(&server, "tok_card");
	let response = client
		.card
		.fund("c_1", &FundOrWithdrawCardBody { amount: 500 })
		.await
		.expect("The fund call should succeed.")
		.typed()
		.expect("The acknowledgement should match the model.");

	assert_eq!(response.message, "Card funded");

	fund_mock.assert_async().await;
}

#[tokio::test]
async fn card_issuance_validates_the_customer_binding_locally() {
	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/cards");
			then.status(201)
				.header("content-type", "application/json")
				.json_body(json!({ "card_id": "c_9", "message": "Card created" }));
		})
		.await;
	let client = client_with_token(&server, "tok_card");
	let err = client
		.card
		.create(&CreateCardBody::new(500, CardIssuer::Visa))
		.await
		.expect_err("An unbound non-lite card must fail validation.");

	assert!(matches!(err, Error::Validation(_)));

	create_mock.assert_calls_async(0).await;

	let body = CreateCardBody {
		customer_id: Some("cus_1".into()),
		..CreateCardBody::new(500, CardIssuer::Visa)
	};
	let created = client
		.card
		.create(&body)
		.await
		.expect("A bound card should be created.")
		.typed()
		.expect("The issuance acknowledgement should match the model.");

	assert_eq!(created.card_id, "c_9");

	create_mock.assert_async().await;
}

#[tokio::test]
async fn card_transaction_paths_nest_under_the_card() {
	let server = MockServer::start_async().await;
	let single_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/cards/c_1/transactions/ct_7");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": "ct_7" }));
		})
		.await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/cards/c_1/transactions")
				.query_param("page", "1")
				.query_param("limit", "10");
			then.status(200).header("content-type", "application/json").json_body(json!([]));
		})
		.await;
	let client = client_with_token(&server, "tok_card");

	client
		.card
		.transaction("c_1", "ct_7")
		.await
		.expect("The single-transaction call should succeed.");
	client
		.card
		.transactions("c_1", PageAndLimitQuery::default())
		.await
		.expect("The listing call should succeed.");

	single_mock.assert_async().await;
	list_mock.assert_async().await;
}

#[tokio::test]
async fn customer_lifecycle_hits_the_expected_paths() {
	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/customers").json_body(json!({
				"firstname": "Ada",
				"lastname": "Obi",
				"middlename": "N",
				"country": "NG",
				"email": "ada@acme.dev"
			}));
			then.status(201)
				.header("content-type", "application/json")
				.json_body(json!({ "id": "cus_1" }));
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/customers/cus_1/update");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Customer updated" }));
		})
		.await;
	let blacklist_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/customers/cus_1/blacklist").json_body(json!({}));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Customer blacklisted" }));
		})
		.await;
	let client = client_with_token(&server, "tok_cus");

	client
		.customer
		.create(&CreateCustomerBody {
			firstname: "Ada".into(),
			lastname: "Obi".into(),
			middlename: "N".into(),
			country: "NG".into(),
			email: "ada@acme.dev".into(),
		})
		.await
		.expect("The create call should succeed.");
	client
		.customer
		.update(
			"cus_1",
			&swervpay::model::UpdateCustomerBody {
				phone_number: "+2348000000000".into(),
				email: "ada@acme.dev".into(),
			},
		)
		.await
		.expect("The update call should succeed.");
	client.customer.blacklist("cus_1").await.expect("The blacklist call should succeed.");

	create_mock.assert_async().await;
	update_mock.assert_async().await;
	blacklist_mock.assert_async().await;
}

#[tokio::test]
async fn kyc_submissions_validate_tiers_before_dispatch() {
	let server = MockServer::start_async().await;
	let kyc_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/customers/cus_1/kyc");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "KYC submitted" }));
		})
		.await;
	let client = client_with_token(&server, "tok_kyc");
	let err = client
		.customer
		.kyc("cus_1", &CustomerKycBody { tier: KycTier::One, document: None, information: None })
		.await
		.expect_err("Tier ONE without information must fail validation.");

	assert!(matches!(err, Error::Validation(_)));

	kyc_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn fx_quotes_and_exchanges_use_the_fx_paths() {
	let server = MockServer::start_async().await;
	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/fx/rate")
				.json_body(json!({ "from": "USD", "to": "NGN", "amount": 100.0 }));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"from": { "amount": 100.0, "currency": "USD" },
				"rate": 1500.0,
				"to": { "amount": 150000.0, "currency": "NGN" }
			}));
		})
		.await;
	let exchange_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/fx/exchange");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Exchange completed" }));
		})
		.await;
	let client = client_with_token(&server, "tok_fx");
	let body = FxBody { from: "USD".into(), to: "NGN".into(), amount: 100.0 };
	let quote = client
		.fx
		.rate(&body)
		.await
		.expect("The rate call should succeed.")
		.typed()
		.expect("The quote should match the model.");

	assert_eq!(quote.rate, 1500.0);
	assert_eq!(quote.to.currency, "NGN");

	client.fx.exchange(&body).await.expect("The exchange call should succeed.");

	rate_mock.assert_async().await;
	exchange_mock.assert_async().await;
}

#[tokio::test]
async fn bank_directory_and_account_resolution() {
	let server = MockServer::start_async().await;
	let banks_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/banks");
			then.status(200).header("content-type", "application/json").json_body(json!([
				{ "bank_code": "058", "bank_name": "Swerv Bank" }
			]));
		})
		.await;
	let resolve_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/resolve-account-number")
				.json_body(json!({ "bank_code": "058", "account_number": "0123456789" }));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"account_name": "Ada Obi",
				"account_number": "0123456789",
				"bank_code": "058",
				"bank_name": "Swerv Bank"
			}));
		})
		.await;
	let client = client_with_token(&server, "tok_bank");
	let banks = client
		.other
		.banks()
		.await
		.expect("The banks call should succeed.")
		.typed()
		.expect("The directory should match the model.");

	assert_eq!(banks.len(), 1);
	assert_eq!(banks[0].bank_code, "058");

	let resolved = client
		.other
		.resolve_account_number(&ResolveAccountBody {
			bank_code: "058".into(),
			account_number: "0123456789".into(),
		})
		.await
		.expect("The resolve call should succeed.")
		.typed()
		.expect("The resolution should match the model.");

	assert_eq!(resolved.account_name, "Ada Obi");

	banks_mock.assert_async().await;
	resolve_mock.assert_async().await;
}

#[tokio::test]
async fn bill_paths_nest_categories_billers_and_items() {
	let server = MockServer::start_async().await;
	let categories_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/bills/categories");
			then.status(200).header("content-type", "application/json").json_body(json!([
				{ "id": "cat_1", "name": "airtime" }
			]));
		})
		.await;
	let items_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/bills/categories/airtime/items/bil_1");
			then.status(200).header("content-type", "application/json").json_body(json!([]));
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/bills").json_body(json!({
				"amount": 1000,
				"biller_id": "bil_1",
				"item_id": "itm_1",
				"customer_id": "08000000000"
			}));
			then.status(201).header("content-type", "application/json").json_body(json!({
				"id": "blt_1",
				"amount": 1000.0,
				"biller": "MTN",
				"reference": "ref_bill",
				"status": "success",
				"created_at": "2024-01-02T03:04:05Z",
				"updated_at": "2024-01-02T03:04:05Z"
			}));
		})
		.await;
	let client = client_with_token(&server, "tok_bill");
	let categories = client
		.bill
		.categories()
		.await
		.expect("The categories call should succeed.")
		.typed()
		.expect("The categories should match the model.");

	assert_eq!(categories[0].name, "airtime");

	client.bill.items("airtime", "bil_1").await.expect("The items call should succeed.");

	let paid = client
		.bill
		.create(&BillCreateBody {
			amount: 1000,
			biller_id: "bil_1".into(),
			item_id: "itm_1".into(),
			customer_id: "08000000000".into(),
			reference: None,
		})
		.await
		.expect("The bill payment should succeed.")
		.typed()
		.expect("The bill transaction should match the model.");

	assert_eq!(paid.reference, "ref_bill");

	categories_mock.assert_async().await;
	items_mock.assert_async().await;
	create_mock.assert_async().await;
}

#[tokio::test]
async fn payouts_create_and_fetch() {
	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payouts").json_body(json!({
				"bank_code": "058",
				"account_number": "0123456789",
				"amount": "2500",
				"currency": "NGN",
				"email": "ops@acme.dev"
			}));
			then.status(201)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Payout queued", "reference": "po_ref" }));
		})
		.await;
	let client = client_with_token(&server, "tok_po");
	let queued = client
		.payout
		.create(&CreatePayoutBody {
			bank_code: "058".into(),
			account_number: "0123456789".into(),
			amount: "2500".into(),
			currency: "NGN".into(),
			reference: None,
			naration: None,
			email: "ops@acme.dev".into(),
		})
		.await
		.expect("The payout call should succeed.")
		.typed()
		.expect("The acknowledgement should match the model.");

	assert_eq!(queued.reference, "po_ref");

	create_mock.assert_async().await;
}

#[tokio::test]
async fn webhooks_test_and_retry_by_id() {
	let server = MockServer::start_async().await;
	let test_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/webhooks/wh_1/test");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Test delivered" }));
		})
		.await;
	let retry_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/webhooks/wh_1/retry");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "Delivery retried" }));
		})
		.await;
	let client = client_with_token(&server, "tok_wh");

	client.webhook.test("wh_1").await.expect("The test call should succeed.");
	client.webhook.retry("wh_1").await.expect("The retry call should succeed.");

	test_mock.assert_async().await;
	retry_mock.assert_async().await;
}

#[tokio::test]
async fn collections_list_and_nested_transactions() {
	let server = MockServer::start_async().await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/collections")
				.query_param("page", "1")
				.query_param("limit", "10");
			then.status(200).header("content-type", "application/json").json_body(json!([]));
		})
		.await;
	let history_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/collections/col_1/transactions/colt_2");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": "colt_2" }));
		})
		.await;
	let client = client_with_token(&server, "tok_col");

	client
		.collection
		.list(PageAndLimitQuery::default())
		.await
		.expect("The listing call should succeed.");
	client
		.collection
		.transaction("col_1", "colt_2")
		.await
		.expect("The history call should succeed.");

	list_mock.assert_async().await;
	history_mock.assert_async().await;
}
