//! Customer API endpoints.
//!
//! Thin CRUD surface over the in-memory store; the interesting part is
//! the typed-identifier traffic: ids bind from the path via
//! [`PathId`] and cross JSON bodies through the identifier codec.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_id::{CustomerId, CustomerKind};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::extract::PathId;
use crate::state::{AppState, CustomerRecord};

/// Create customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/{customer_id}", get(get_customer))
        .route("/{customer_id}", delete(delete_customer))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Request to register a new customer.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCustomerRequest {
    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,
}

/// Response for a single customer.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct CustomerResponse {
    /// Customer ID.
    pub id: CustomerId,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// When the customer was registered.
    pub created_at: DateTime<Utc>,
}

/// Response for listing customers.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ListCustomersResponse {
    /// List of customers, ordered by id.
    pub items: Vec<CustomerResponse>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct DeleteResponse {
    pub ok: bool,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            created_at: record.created_at,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Response, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request(
            "invalid_name",
            "customer name cannot be empty",
        ));
    }
    if !request.email.contains('@') {
        return Err(ApiError::bad_request(
            "invalid_email",
            "customer email must contain '@'",
        ));
    }

    let record = CustomerRecord {
        id: CustomerId::new(),
        name: request.name,
        email: request.email,
        created_at: Utc::now(),
    };

    info!(customer_id = %record.id, "customer created");
    let response = CustomerResponse::from(record.clone());
    state.insert_customer(record);

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn list_customers(State(state): State<AppState>) -> Json<ListCustomersResponse> {
    let items = state
        .customers()
        .into_iter()
        .map(CustomerResponse::from)
        .collect();
    Json(ListCustomersResponse { items })
}

async fn get_customer(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerKind>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let record = state.customer(customer_id).ok_or_else(|| {
        ApiError::not_found("customer_not_found", format!("no customer {customer_id}"))
    })?;
    Ok(Json(record.into()))
}

async fn delete_customer(
    State(state): State<AppState>,
    PathId(customer_id): PathId<CustomerKind>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.remove_customer(customer_id).is_none() {
        return Err(ApiError::not_found(
            "customer_not_found",
            format!("no customer {customer_id}"),
        ));
    }
    info!(customer_id = %customer_id, "customer deleted");
    Ok(Json(DeleteResponse { ok: true }))
}
