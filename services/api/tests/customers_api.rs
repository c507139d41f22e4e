//! Customer and order API integration tests.
//!
//! Exercises the identifier binding boundary (path parameters) and the
//! identifier codec (JSON bodies) over a real HTTP listener.

use serde_json::{json, Value};
use storefront_api::{api, state::AppState};
use storefront_id::{CustomerId, OrderId, ProductId};
use tokio::net::TcpListener;

const NIL_TEXT: &str = "00000000-0000-0000-0000-000000000000";

/// Test harness: a server on an ephemeral port plus a client.
struct ApiTestHarness {
    base_url: String,
    client: reqwest::Client,
}

impl ApiTestHarness {
    async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,storefront_api=debug".into()),
            )
            .with_test_writer()
            .try_init();

        let app = api::create_router(AppState::new());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("no local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    async fn create_customer(&self, name: &str, email: &str) -> CustomerId {
        let response = self
            .client
            .post(format!("{}/v1/customers", self.base_url))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
            .expect("create customer request failed");
        assert_eq!(response.status(), 201);

        let body: Value = response.json().await.expect("invalid create response");
        body["id"]
            .as_str()
            .expect("id missing")
            .parse()
            .expect("id not a valid CustomerId")
    }
}

#[tokio::test]
async fn healthz_reports_ok() {
    let harness = ApiTestHarness::new().await;

    let response = harness
        .client
        .get(format!("{}/healthz", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "storefront-api");
}

#[tokio::test]
async fn customer_roundtrips_through_create_and_get() {
    let harness = ApiTestHarness::new().await;

    let id = harness.create_customer("Ada", "ada@example.com").await;

    let response = harness
        .client
        .get(format!("{}/v1/customers/{id}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn invalid_guid_in_path_reports_one_field_error() {
    let harness = ApiTestHarness::new().await;

    let response = harness
        .client
        .get(format!("{}/v1/customers/invalid-guid", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid_identifier");

    let details = body["details"].as_array().expect("details missing");
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "customer_id");
    let message = details[0]["message"].as_str().unwrap();
    assert!(message.contains("invalid-guid"), "message was: {message}");
    assert!(message.contains("Customer"), "message was: {message}");
}

#[tokio::test]
async fn nil_guid_in_path_is_rejected() {
    let harness = ApiTestHarness::new().await;

    let response = harness
        .client
        .get(format!("{}/v1/customers/{NIL_TEXT}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    let details = body["details"].as_array().expect("details missing");
    assert_eq!(details.len(), 1);
    let message = details[0]["message"].as_str().unwrap();
    assert!(message.contains("nil UUID"), "message was: {message}");
    assert!(message.contains(NIL_TEXT), "message was: {message}");
}

#[tokio::test]
async fn unknown_but_valid_id_is_not_found() {
    let harness = ApiTestHarness::new().await;

    let id = CustomerId::new();
    let response = harness
        .client
        .get(format!("{}/v1/customers/{id}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "customer_not_found");
}

#[tokio::test]
async fn order_ids_roundtrip_through_json_bodies() {
    let harness = ApiTestHarness::new().await;

    let customer_id = harness.create_customer("Grace", "grace@example.com").await;
    let product_id = ProductId::new();

    let response = harness
        .client
        .post(format!(
            "{}/v1/customers/{customer_id}/orders",
            harness.base_url
        ))
        .json(&json!({ "product_id": product_id.to_string() }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["customer_id"], customer_id.to_string());
    assert_eq!(body["product_id"], product_id.to_string());
    // Absent guest reference serializes as the null token.
    assert!(body["guest_id"].is_null());

    let order_id: OrderId = body["id"].as_str().unwrap().parse().unwrap();
    let response = harness
        .client
        .get(format!("{}/v1/orders/{order_id}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["id"], order_id.to_string());
    assert_eq!(fetched["product_id"], product_id.to_string());
}

#[tokio::test]
async fn malformed_product_id_in_body_is_rejected() {
    let harness = ApiTestHarness::new().await;

    let customer_id = harness.create_customer("Alan", "alan@example.com").await;

    let response = harness
        .client
        .post(format!(
            "{}/v1/customers/{customer_id}/orders",
            harness.base_url
        ))
        .json(&json!({ "product_id": "not-a-guid" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let body = response.text().await.unwrap();
    assert!(body.contains("Product"), "body was: {body}");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let harness = ApiTestHarness::new().await;

    let id = harness.create_customer("Edsger", "edsger@example.com").await;

    let response = harness
        .client
        .delete(format!("{}/v1/customers/{id}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = harness
        .client
        .get(format!("{}/v1/customers/{id}", harness.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
