//! API v1 routes.

mod customers;
mod orders;

use axum::Router;

use crate::state::AppState;

/// Create API v1 routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::routes())
        // Orders are nested under customers: /v1/customers/{customer_id}/orders
        .nest("/customers/{customer_id}/orders", orders::customer_order_routes())
        .nest("/orders", orders::routes())
}
