//! Order API endpoints.
//!
//! Orders are nested under customers: /v1/customers/{customer_id}/orders.
//! The optional guest reference shows an absent identifier crossing
//! the codec boundary as a null token.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_id::{CustomerId, CustomerKind, GuestId, OrderId, OrderKind, ProductId};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::extract::PathId;
use crate::state::{AppState, OrderRecord};

/// Create order routes nested under a customer.
pub fn customer_order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
}

/// Create top-level order routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{order_id}", get(get_order))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Request to place an order for a customer.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateOrderRequest {
    /// Product being ordered.
    pub product_id: ProductId,

    /// Present when the order was started by an anonymous guest
    /// before sign-in.
    #[serde(default)]
    pub guest_id: Option<GuestId>,
}

/// Response for a single order.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct OrderResponse {
    /// Order ID.
    pub id: OrderId,

    /// Owning customer.
    pub customer_id: CustomerId,

    /// Ordered product.
    pub product_id: ProductId,

    /// Originating guest, if any. Serializes as null when absent.
    pub guest_id: Option<GuestId>,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// Response for listing a customer's orders.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ListOrdersResponse {
    /// Orders for the customer, ordered by id.
    pub items: Vec<OrderResponse>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            product_id: record.product_id,
            guest_id: record.guest_id,
            created_at: record.created_at,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn create_order(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerKind>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Response, ApiError> {
    if state.customer(customer_id).is_none() {
        return Err(ApiError::not_found(
            "customer_not_found",
            format!("no customer {customer_id}"),
        ));
    }

    let record = OrderRecord {
        id: OrderId::new(),
        customer_id,
        product_id: request.product_id,
        guest_id: request.guest_id,
        created_at: Utc::now(),
    };

    info!(order_id = %record.id, customer_id = %customer_id, "order placed");
    let response = OrderResponse::from(record.clone());
    state.insert_order(record);

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn list_orders(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerKind>,
) -> Json<ListOrdersResponse> {
    let items = state
        .orders_for_customer(customer_id)
        .into_iter()
        .map(OrderResponse::from)
        .collect();
    Json(ListOrdersResponse { items })
}

async fn get_order(
    State(state): State<AppState>,
    PathId(order_id): PathId<OrderKind>,
) -> Result<Json<OrderResponse>, ApiError> {
    let record = state
        .order(order_id)
        .ok_or_else(|| ApiError::not_found("order_not_found", format!("no order {order_id}")))?;
    Ok(Json(record.into()))
}
