//! Application state shared across request handlers.
//!
//! Storage is an in-memory map per resource; persistence is out of
//! scope for this service.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use storefront_id::{CustomerId, GuestId, OrderId, ProductId};

/// A stored customer.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A stored order.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    /// Set when the order was placed on behalf of an anonymous guest.
    pub guest_id: Option<GuestId>,
    pub created_at: DateTime<Utc>,
}

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    customers: RwLock<HashMap<CustomerId, CustomerRecord>>,
    orders: RwLock<HashMap<OrderId, OrderRecord>>,
}

impl AppState {
    /// Create a new application state with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_customer(&self, record: CustomerRecord) {
        self.inner
            .customers
            .write()
            .expect("customer store poisoned")
            .insert(record.id, record);
    }

    pub fn customer(&self, id: CustomerId) -> Option<CustomerRecord> {
        self.inner
            .customers
            .read()
            .expect("customer store poisoned")
            .get(&id)
            .cloned()
    }

    pub fn customers(&self) -> Vec<CustomerRecord> {
        let mut records: Vec<_> = self
            .inner
            .customers
            .read()
            .expect("customer store poisoned")
            .values()
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }

    pub fn remove_customer(&self, id: CustomerId) -> Option<CustomerRecord> {
        self.inner
            .customers
            .write()
            .expect("customer store poisoned")
            .remove(&id)
    }

    pub fn insert_order(&self, record: OrderRecord) {
        self.inner
            .orders
            .write()
            .expect("order store poisoned")
            .insert(record.id, record);
    }

    pub fn order(&self, id: OrderId) -> Option<OrderRecord> {
        self.inner
            .orders
            .read()
            .expect("order store poisoned")
            .get(&id)
            .cloned()
    }

    pub fn orders_for_customer(&self, customer_id: CustomerId) -> Vec<OrderRecord> {
        let mut records: Vec<_> = self
            .inner
            .orders
            .read()
            .expect("order store poisoned")
            .values()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }
}
