//! # Domain Types
//!
//! Shared value objects used across the Oakmart core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ShippingAddress │   │  OrderSnapshot  │   │AssignmentSnapshot│      │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  full_name      │   │  order_number   │   │  partner_id     │       │
//! │  │  street, city   │   │  status         │   │  delivery_status│       │
//! │  │  state          │   │  total_amount   │   │  assigned_at    │       │
//! │  │  zip_code,phone │   │  created_at     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderStatus    │   │  CustomerTier   │   │  ShippingTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Placed         │   │  Standard       │   │  Standard       │       │
//! │  │  Processing     │   │  Gold           │   │  Express        │       │
//! │  │  ...Delivered   │   │  Enterprise     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! The `*Snapshot` records mirror rows the hosted backend hands us. They are
//! read-only aggregation inputs, never persisted from here. Numeric fields
//! that may be absent in stored rows are `Option` (or defaulted) and read
//! through accessors that spell out the missing-means-zero rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Shipping Address
// =============================================================================

/// The address a checkout ships to. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingAddress {
    /// Recipient's full name.
    pub full_name: String,
    /// Street line, including house/flat number.
    pub street: String,
    pub city: String,
    pub state: String,
    /// 6-digit postal code.
    pub zip_code: String,
    /// 10-digit contact number.
    pub phone: String,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the shopper intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    /// Card captured by the payment gateway.
    Card,
    /// UPI transfer captured by the payment gateway.
    Upi,
}

// =============================================================================
// Shipping Tier
// =============================================================================

/// Requested delivery service level.
///
/// Anything the UI sends that is not recognised collapses to `Standard`,
/// which is also what legacy carts without a tier field get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ShippingTier {
    Express,
    // serde requires the catch-all to be the last variant
    #[default]
    #[serde(other)]
    Standard,
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Wholesale account tier driving promotion eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Gold,
    Enterprise,
    // serde requires the catch-all to be the last variant
    #[default]
    #[serde(other)]
    Standard,
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
///
/// `Unknown` absorbs rows with a missing or unrecognised status so that
/// aggregation never fails on dirty data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Processing,
    AssignedToDelivery,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether this order still needs attention (not yet delivered or cancelled).
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Processing | OrderStatus::AssignedToDelivery
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Processing => "processing",
            OrderStatus::AssignedToDelivery => "assigned_to_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

// =============================================================================
// Delivery Status
// =============================================================================

/// Lifecycle status of a delivery-partner assignment.
/// Distinct from [`OrderStatus`]: an assignment has its own lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    OutForDelivery,
    Delivered,
    // serde requires the catch-all to be the last variant
    #[default]
    #[serde(other)]
    Assigned,
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// A read-only view of an order row, as handed over by the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSnapshot {
    /// Human-facing order number (e.g. "OM-2025-0142").
    pub order_number: String,
    /// Missing/unrecognised statuses deserialize as [`OrderStatus::Unknown`].
    #[serde(default)]
    pub status: OrderStatus,
    /// Grand total. Absent on some legacy rows; read via [`Self::total_amount`].
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderSnapshot {
    /// The order total, with a missing field counted as zero.
    #[inline]
    pub fn total_amount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// A read-only view of a catalog product row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSnapshot {
    pub name: String,
    /// List price. Missing field counts as zero.
    #[serde(default)]
    pub price: f64,
    /// Units on hand. Missing field counts as zero.
    #[serde(default)]
    pub stock_quantity: i64,
}

// =============================================================================
// Assignment Snapshot
// =============================================================================

/// A read-only view of a delivery-partner assignment row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssignmentSnapshot {
    pub partner_id: String,
    /// Missing/unrecognised statuses deserialize as [`DeliveryStatus::Assigned`],
    /// which keeps them counted as active.
    #[serde(default)]
    pub delivery_status: DeliveryStatus,
    #[ts(as = "String")]
    #[serde(alias = "created_at")]
    pub assigned_at: DateTime<Utc>,
}

// =============================================================================
// Order Item Line
// =============================================================================

/// One line of a placed order, used by the top-product summary.
///
/// Different call sites store the captured price under different column
/// names (`unit_price` on order_items, `price_at_purchase` on the legacy
/// table); the alias accepts both.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItemLine {
    pub product_name: String,
    /// Units ordered. Missing field counts as zero.
    #[serde(default)]
    pub quantity: i64,
    /// Captured unit price. Missing field counts as zero via [`Self::revenue`].
    #[serde(default, alias = "price_at_purchase")]
    pub unit_price: Option<f64>,
}

impl OrderItemLine {
    /// Revenue contributed by this line (`quantity × unit_price`),
    /// with a missing price counted as zero.
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.quantity as f64 * self.unit_price.unwrap_or(0.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_names() {
        let status: OrderStatus = serde_json::from_str("\"assigned_to_delivery\"").unwrap();
        assert_eq!(status, OrderStatus::AssignedToDelivery);
        assert_eq!(status.to_string(), "assigned_to_delivery");
    }

    #[test]
    fn test_unrecognised_status_becomes_unknown() {
        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_missing_status_defaults_to_unknown() {
        let order: OrderSnapshot = serde_json::from_str(
            r#"{"order_number":"OM-1","total_amount":100,"created_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.total_amount(), 100.0);
    }

    #[test]
    fn test_missing_total_counts_as_zero() {
        let order: OrderSnapshot = serde_json::from_str(
            r#"{"order_number":"OM-2","status":"placed","created_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.total_amount(), 0.0);
    }

    #[test]
    fn test_shipping_tier_catch_all() {
        let tier: ShippingTier = serde_json::from_str("\"overnight\"").unwrap();
        assert_eq!(tier, ShippingTier::Standard);
        let tier: ShippingTier = serde_json::from_str("\"express\"").unwrap();
        assert_eq!(tier, ShippingTier::Express);
    }

    #[test]
    fn test_customer_tier_catch_all() {
        let tier: CustomerTier = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(tier, CustomerTier::Standard);
        let tier: CustomerTier = serde_json::from_str("\"gold\"").unwrap();
        assert_eq!(tier, CustomerTier::Gold);
        let tier: CustomerTier = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(tier, CustomerTier::Enterprise);
    }

    #[test]
    fn test_delivery_status_catch_all_stays_active() {
        // An unrecognised status must land on Assigned so the assignment
        // keeps counting as active in the KPIs.
        let status: DeliveryStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(status, DeliveryStatus::Assigned);
        let status: DeliveryStatus = serde_json::from_str("\"out_for_delivery\"").unwrap();
        assert_eq!(status, DeliveryStatus::OutForDelivery);
        let status: DeliveryStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_order_item_price_alias() {
        let line: OrderItemLine = serde_json::from_str(
            r#"{"product_name":"Oak Desk","quantity":2,"price_at_purchase":4500}"#,
        )
        .unwrap();
        assert_eq!(line.unit_price, Some(4500.0));
        assert_eq!(line.revenue(), 9000.0);
    }

    #[test]
    fn test_order_item_missing_price_is_zero_revenue() {
        let line: OrderItemLine =
            serde_json::from_str(r#"{"product_name":"Oak Desk","quantity":2}"#).unwrap();
        assert_eq!(line.revenue(), 0.0);
    }

    #[test]
    fn test_open_statuses() {
        assert!(OrderStatus::Placed.is_open());
        assert!(OrderStatus::Processing.is_open());
        assert!(OrderStatus::AssignedToDelivery.is_open());
        assert!(!OrderStatus::Delivered.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
        assert!(!OrderStatus::Unknown.is_open());
    }
}
