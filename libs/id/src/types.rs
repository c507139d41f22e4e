//! Typed identifier declarations for all storefront resources.
//!
//! Each kind gets a marker type and an alias over the shared
//! [`Id`](crate::Id) core; cross-kind mixing is rejected at compile
//! time.

use crate::define_id;

// =============================================================================
// Parties
// =============================================================================

define_id!(
    /// Identifier for a registered customer.
    CustomerId,
    CustomerKind,
    "Customer",
    "customer_id"
);

define_id!(
    /// Identifier for an anonymous guest.
    GuestId,
    GuestKind,
    "Guest",
    "guest_id"
);

// =============================================================================
// Commerce
// =============================================================================

define_id!(
    /// Identifier for an order.
    OrderId,
    OrderKind,
    "Order",
    "order_id"
);

define_id!(
    /// Identifier for a product.
    ProductId,
    ProductKind,
    "Product",
    "product_id"
);

// =============================================================================
// Tests
// =============================================================================
