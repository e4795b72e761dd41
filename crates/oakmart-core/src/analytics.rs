//! # Admin Analytics
//!
//! Collection-to-summary aggregations behind the admin, showroom, and
//! delivery dashboards. Every function here takes read-only snapshot slices
//! and returns a fresh summary; there is no shared state between calls.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hosted backend rows                    Dashboard widgets               │
//! │                                                                         │
//! │  orders ──────┬──► build_admin_kpis ──────────► KPI cards              │
//! │               ├──► compute_fulfillment_metrics ► funnel / progress bar  │
//! │               ├──► collect_status_breakdown ──► status chart            │
//! │               ├──► build_operational_alerts ──► alert banner            │
//! │               └──► build_orders_csv ──────────► export button           │
//! │  products ────┬──► build_admin_kpis                                     │
//! │               └──► apply_bulk_discount ───────► repricing preview       │
//! │  assignments ─┬──► build_partner_assignment_stats ► partner table       │
//! │               └──► build_operational_alerts                             │
//! │  order items ────► summarize_top_products ────► top-5 list              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time-relative functions take `now` as a parameter; nothing here reads
//! the system clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{round_to_cents, sanitize_amount};
use crate::types::{
    AssignmentSnapshot, DeliveryStatus, OrderItemLine, OrderSnapshot, OrderStatus, ProductSnapshot,
};
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Constants
// =============================================================================

/// Pending order count at which the dashboard raises a spike flag.
pub const PENDING_SPIKE_MIN: usize = 10;

/// Low-stock product count at which the dashboard raises a stock risk flag.
pub const LOW_STOCK_RISK_MIN: usize = 5;

/// Cancellation rate at which the dashboard raises a cancellation risk flag.
pub const CANCELLATION_RISK_RATE: f64 = 0.15;

/// How many products the top-product summary keeps.
pub const TOP_PRODUCT_LIMIT: usize = 5;

/// A placed order older than this is considered stale.
pub const STALE_ORDER_HOURS: i64 = 24;

/// An undelivered assignment older than this is considered long-running.
pub const LONG_RUNNING_ASSIGNMENT_HOURS: i64 = 18;

/// Largest bulk discount the repricing tool will apply.
pub const MAX_BULK_DISCOUNT_PERCENT: f64 = 90.0;

/// Floor price after bulk discounting; prevents zero or negative prices.
pub const BULK_DISCOUNT_PRICE_FLOOR: f64 = 1.0;

// =============================================================================
// Admin KPIs
// =============================================================================

/// The headline numbers on the admin dashboard. Recomputed on every call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminKpis {
    pub total_products: usize,
    /// Orders still in flight (placed / processing / assigned to delivery).
    pub open_orders: usize,
    /// Products at or below [`LOW_STOCK_THRESHOLD`] units.
    pub low_stock_count: usize,
    /// Revenue counts delivered orders only.
    pub total_revenue: f64,
    /// Assignments whose delivery status is not yet delivered.
    pub active_assignments: usize,
}

/// Builds the admin KPI card values.
pub fn build_admin_kpis(
    orders: &[OrderSnapshot],
    products: &[ProductSnapshot],
    assignments: &[AssignmentSnapshot],
) -> AdminKpis {
    let total_revenue = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .map(OrderSnapshot::total_amount)
        .sum();

    AdminKpis {
        total_products: products.len(),
        open_orders: orders.iter().filter(|o| o.status.is_open()).count(),
        low_stock_count: products
            .iter()
            .filter(|p| p.stock_quantity <= LOW_STOCK_THRESHOLD)
            .count(),
        total_revenue,
        active_assignments: assignments
            .iter()
            .filter(|a| a.delivery_status != DeliveryStatus::Delivered)
            .count(),
    }
}

/// Mean order total across all orders, regardless of status.
/// 0 when there are no orders; missing totals count as zero.
pub fn average_order_value(orders: &[OrderSnapshot]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let revenue: f64 = orders.iter().map(OrderSnapshot::total_amount).sum();
    revenue / orders.len() as f64
}

// =============================================================================
// Partner Assignment Stats
// =============================================================================

/// Per-partner delivery performance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartnerAssignmentStats {
    pub partner_id: String,
    pub total: usize,
    pub delivered: usize,
}

/// Counts total and delivered assignments per partner.
///
/// Partners appear in first-occurrence order of their assignments, so the
/// table renders stably across refreshes.
pub fn build_partner_assignment_stats(
    assignments: &[AssignmentSnapshot],
) -> Vec<PartnerAssignmentStats> {
    let mut stats: Vec<PartnerAssignmentStats> = Vec::new();

    for assignment in assignments {
        let delivered = usize::from(assignment.delivery_status == DeliveryStatus::Delivered);
        match stats
            .iter_mut()
            .find(|s| s.partner_id == assignment.partner_id)
        {
            Some(entry) => {
                entry.total += 1;
                entry.delivered += delivered;
            }
            None => stats.push(PartnerAssignmentStats {
                partner_id: assignment.partner_id.clone(),
                total: 1,
                delivered,
            }),
        }
    }

    stats
}

// =============================================================================
// Order Filtering
// =============================================================================

/// Status filter as selected in the orders table dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderFilter {
    /// Show everything (the dropdown's "all" option, and the default).
    #[default]
    All,
    Status(OrderStatus),
}

/// Filters orders by status. `OrderFilter::All` is an identity pass-through.
pub fn filter_orders_by_status<'a>(
    orders: &'a [OrderSnapshot],
    filter: OrderFilter,
) -> Vec<&'a OrderSnapshot> {
    match filter {
        OrderFilter::All => orders.iter().collect(),
        OrderFilter::Status(status) => orders.iter().filter(|o| o.status == status).collect(),
    }
}

// =============================================================================
// Fulfillment Metrics
// =============================================================================

/// The fulfillment funnel: how many orders landed where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FulfillmentMetrics {
    pub total: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Everything neither delivered nor cancelled.
    pub pending: usize,
    /// Delivered share of all orders, rounded to a whole percent. 0 when empty.
    pub progress: u32,
}

/// Computes the fulfillment funnel over a set of orders.
pub fn compute_fulfillment_metrics(orders: &[OrderSnapshot]) -> FulfillmentMetrics {
    let total = orders.len();
    let delivered = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .count();
    let cancelled = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Cancelled)
        .count();
    let pending = total - delivered - cancelled;

    let progress = if total == 0 {
        0
    } else {
        (delivered as f64 / total as f64 * 100.0).round() as u32
    };

    FulfillmentMetrics {
        total,
        delivered,
        cancelled,
        pending,
        progress,
    }
}

// =============================================================================
// Status Breakdown
// =============================================================================

/// One slice of the status chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

/// Groups orders by status, in first-occurrence order.
///
/// Rows with a missing or unrecognised status were already folded into
/// [`OrderStatus::Unknown`] at the serde boundary, so they group together.
pub fn collect_status_breakdown(orders: &[OrderSnapshot]) -> Vec<StatusCount> {
    let mut breakdown: Vec<StatusCount> = Vec::new();

    for order in orders {
        match breakdown.iter_mut().find(|s| s.status == order.status) {
            Some(entry) => entry.count += 1,
            None => breakdown.push(StatusCount {
                status: order.status,
                count: 1,
            }),
        }
    }

    breakdown
}

// =============================================================================
// Operational Flags
// =============================================================================

/// Pre-aggregated inputs for the risk flags, as computed by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OperationalSnapshot {
    pub pending_orders: usize,
    pub low_stock_count: usize,
    /// Cancelled share of all orders, 0.0 to 1.0.
    pub cancellation_rate: f64,
}

/// Threshold booleans rendered as warning badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OperationalFlags {
    pub pending_spike: bool,
    pub low_stock_risk: bool,
    pub cancellation_risk: bool,
}

/// Evaluates the operational risk thresholds.
pub fn detect_operational_flags(snapshot: &OperationalSnapshot) -> OperationalFlags {
    OperationalFlags {
        pending_spike: snapshot.pending_orders >= PENDING_SPIKE_MIN,
        low_stock_risk: snapshot.low_stock_count >= LOW_STOCK_RISK_MIN,
        cancellation_risk: snapshot.cancellation_rate >= CANCELLATION_RISK_RATE,
    }
}

// =============================================================================
// Top Products
// =============================================================================

/// Aggregated sales for one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSales {
    pub name: String,
    pub quantity: i64,
    pub revenue: f64,
}

/// Aggregates quantity and revenue per product name and returns the top 5
/// by revenue.
///
/// The sort is stable, so products with equal revenue keep their
/// first-occurrence order.
pub fn summarize_top_products(items: &[OrderItemLine]) -> Vec<ProductSales> {
    let mut sales: Vec<ProductSales> = Vec::new();

    for item in items {
        match sales.iter_mut().find(|s| s.name == item.product_name) {
            Some(entry) => {
                entry.quantity += item.quantity;
                entry.revenue += item.revenue();
            }
            None => sales.push(ProductSales {
                name: item.product_name.clone(),
                quantity: item.quantity,
                revenue: item.revenue(),
            }),
        }
    }

    sales.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sales.truncate(TOP_PRODUCT_LIMIT);
    sales
}

// =============================================================================
// Operational Alerts
// =============================================================================

/// Aged-work counters for the alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OperationalAlerts {
    /// Placed orders that have sat unprocessed for 24h or more.
    pub stale_placed_orders: usize,
    /// Undelivered assignments running for 18h or more.
    pub long_running_assignments: usize,
}

/// Counts stale placed orders and long-running assignments as of `now`.
///
/// `now` is injected by the caller (the serverless handler passes the
/// request time); this function never reads the clock, so tests pin it.
pub fn build_operational_alerts(
    orders: &[OrderSnapshot],
    assignments: &[AssignmentSnapshot],
    now: DateTime<Utc>,
) -> OperationalAlerts {
    let stale_after = Duration::hours(STALE_ORDER_HOURS);
    let long_running_after = Duration::hours(LONG_RUNNING_ASSIGNMENT_HOURS);

    let stale_placed_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Placed && now - o.created_at >= stale_after)
        .count();

    let long_running_assignments = assignments
        .iter()
        .filter(|a| {
            a.delivery_status != DeliveryStatus::Delivered
                && now - a.assigned_at >= long_running_after
        })
        .count();

    OperationalAlerts {
        stale_placed_orders,
        long_running_assignments,
    }
}

// =============================================================================
// Bulk Discount Preview
// =============================================================================

/// One row of the bulk repricing preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkDiscountPreview {
    pub name: String,
    pub price: f64,
    pub discounted_price: f64,
}

/// Simulates applying a percentage discount to every product.
///
/// The percent is clamped to [0, 90] and each discounted price is floored
/// at [`BULK_DISCOUNT_PRICE_FLOOR`] and rounded to 2 decimals, so the tool
/// can never produce a zero or negative price.
pub fn apply_bulk_discount(products: &[ProductSnapshot], percent: f64) -> Vec<BulkDiscountPreview> {
    let percent = sanitize_amount(percent).min(MAX_BULK_DISCOUNT_PERCENT);
    let factor = 1.0 - percent / 100.0;

    products
        .iter()
        .map(|p| BulkDiscountPreview {
            name: p.name.clone(),
            price: p.price,
            discounted_price: round_to_cents((p.price * factor).max(BULK_DISCOUNT_PRICE_FLOOR)),
        })
        .collect()
}

// =============================================================================
// CSV Export
// =============================================================================

/// Column header of the orders export.
pub const ORDERS_CSV_HEADER: &str = "order_number,status,total_amount,created_at";

/// Renders orders as CSV for the export button.
///
/// Known limitation, kept for compatibility with the existing export:
/// fields are joined with commas and NOT quoted or escaped. Order numbers
/// are system-generated and never contain commas; do not feed free-text
/// fields through this.
pub fn build_orders_csv(orders: &[OrderSnapshot]) -> String {
    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(ORDERS_CSV_HEADER.to_string());

    for order in orders {
        lines.push(format!(
            "{},{},{},{}",
            order.order_number,
            order.status,
            order.total_amount(),
            order
                .created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ));
    }

    lines.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(iso: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(iso)
            .expect("test timestamp")
            .with_timezone(&Utc)
    }

    fn order(number: &str, status: OrderStatus, total: f64, created_at: &str) -> OrderSnapshot {
        OrderSnapshot {
            order_number: number.to_string(),
            status,
            total_amount: Some(total),
            created_at: at(created_at),
        }
    }

    fn product(name: &str, price: f64, stock: i64) -> ProductSnapshot {
        ProductSnapshot {
            name: name.to_string(),
            price,
            stock_quantity: stock,
        }
    }

    fn assignment(partner: &str, status: DeliveryStatus, assigned_at: &str) -> AssignmentSnapshot {
        AssignmentSnapshot {
            partner_id: partner.to_string(),
            delivery_status: status,
            assigned_at: at(assigned_at),
        }
    }

    fn item(name: &str, quantity: i64, unit_price: f64) -> OrderItemLine {
        OrderItemLine {
            product_name: name.to_string(),
            quantity,
            unit_price: Some(unit_price),
        }
    }

    const T0: &str = "2025-01-01T00:00:00Z";

    #[test]
    fn test_admin_kpis() {
        let orders = [
            order("OM-1", OrderStatus::Delivered, 10_000.0, T0),
            order("OM-2", OrderStatus::Delivered, 5_000.0, T0),
            order("OM-3", OrderStatus::Placed, 2_000.0, T0),
            order("OM-4", OrderStatus::Processing, 3_000.0, T0),
            order("OM-5", OrderStatus::AssignedToDelivery, 4_000.0, T0),
            order("OM-6", OrderStatus::Cancelled, 9_999.0, T0),
        ];
        let products = [
            product("Oak Desk", 12_000.0, 3),
            product("Teak Chair", 4_000.0, 5),
            product("Pine Shelf", 2_500.0, 40),
        ];
        let assignments = [
            assignment("p1", DeliveryStatus::Assigned, T0),
            assignment("p1", DeliveryStatus::Delivered, T0),
            assignment("p2", DeliveryStatus::OutForDelivery, T0),
        ];

        let kpis = build_admin_kpis(&orders, &products, &assignments);
        assert_eq!(
            kpis,
            AdminKpis {
                total_products: 3,
                open_orders: 3,
                low_stock_count: 2, // stock of exactly 5 counts as low
                total_revenue: 15_000.0,
                active_assignments: 2,
            }
        );
    }

    #[test]
    fn test_kpis_on_empty_inputs() {
        let kpis = build_admin_kpis(&[], &[], &[]);
        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.open_orders, 0);
    }

    #[test]
    fn test_revenue_ignores_missing_totals() {
        let mut delivered = order("OM-1", OrderStatus::Delivered, 0.0, T0);
        delivered.total_amount = None;
        let orders = [delivered, order("OM-2", OrderStatus::Delivered, 500.0, T0)];
        let kpis = build_admin_kpis(&orders, &[], &[]);
        assert_eq!(kpis.total_revenue, 500.0);
    }

    #[test]
    fn test_average_order_value() {
        let orders = [
            order("OM-1", OrderStatus::Delivered, 1000.0, T0),
            order("OM-2", OrderStatus::Placed, 3000.0, T0),
            order("OM-3", OrderStatus::Cancelled, 2000.0, T0),
        ];
        assert_eq!(average_order_value(&orders), 2000.0);
    }

    #[test]
    fn test_average_order_value_empty_and_missing_totals() {
        assert_eq!(average_order_value(&[]), 0.0);

        let mut blank = order("OM-1", OrderStatus::Placed, 0.0, T0);
        blank.total_amount = None;
        let orders = [blank, order("OM-2", OrderStatus::Placed, 500.0, T0)];
        assert_eq!(average_order_value(&orders), 250.0);
    }

    #[test]
    fn test_partner_stats_first_occurrence_order() {
        let assignments = [
            assignment("beta", DeliveryStatus::Delivered, T0),
            assignment("alpha", DeliveryStatus::Assigned, T0),
            assignment("beta", DeliveryStatus::Assigned, T0),
            assignment("beta", DeliveryStatus::Delivered, T0),
        ];
        let stats = build_partner_assignment_stats(&assignments);
        assert_eq!(
            stats,
            vec![
                PartnerAssignmentStats {
                    partner_id: "beta".to_string(),
                    total: 3,
                    delivered: 2,
                },
                PartnerAssignmentStats {
                    partner_id: "alpha".to_string(),
                    total: 1,
                    delivered: 0,
                },
            ]
        );
    }

    #[test]
    fn test_filter_all_is_identity() {
        let orders = [
            order("OM-1", OrderStatus::Placed, 1.0, T0),
            order("OM-2", OrderStatus::Delivered, 2.0, T0),
        ];
        let filtered = filter_orders_by_status(&orders, OrderFilter::All);
        assert_eq!(filtered.len(), 2);
        let filtered = filter_orders_by_status(&orders, OrderFilter::default());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_by_exact_status() {
        let orders = [
            order("OM-1", OrderStatus::Placed, 1.0, T0),
            order("OM-2", OrderStatus::Delivered, 2.0, T0),
            order("OM-3", OrderStatus::Placed, 3.0, T0),
        ];
        let filtered = filter_orders_by_status(&orders, OrderFilter::Status(OrderStatus::Placed));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|o| o.status == OrderStatus::Placed));
    }

    #[test]
    fn test_fulfillment_metrics() {
        let orders = [
            order("OM-1", OrderStatus::Delivered, 1.0, T0),
            order("OM-2", OrderStatus::Delivered, 1.0, T0),
            order("OM-3", OrderStatus::Cancelled, 1.0, T0),
            order("OM-4", OrderStatus::Placed, 1.0, T0),
            order("OM-5", OrderStatus::Processing, 1.0, T0),
            order("OM-6", OrderStatus::Unknown, 1.0, T0),
        ];
        let metrics = compute_fulfillment_metrics(&orders);
        assert_eq!(metrics.total, 6);
        assert_eq!(metrics.delivered, 2);
        assert_eq!(metrics.cancelled, 1);
        assert_eq!(metrics.pending, 3);
        assert_eq!(metrics.progress, 33); // round(2/6 × 100)
    }

    #[test]
    fn test_fulfillment_metrics_empty() {
        let metrics = compute_fulfillment_metrics(&[]);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.progress, 0);
    }

    #[test]
    fn test_status_breakdown_insertion_order() {
        let orders = [
            order("OM-1", OrderStatus::Processing, 1.0, T0),
            order("OM-2", OrderStatus::Placed, 1.0, T0),
            order("OM-3", OrderStatus::Processing, 1.0, T0),
            order("OM-4", OrderStatus::Unknown, 1.0, T0),
        ];
        let breakdown = collect_status_breakdown(&orders);
        assert_eq!(
            breakdown,
            vec![
                StatusCount {
                    status: OrderStatus::Processing,
                    count: 2,
                },
                StatusCount {
                    status: OrderStatus::Placed,
                    count: 1,
                },
                StatusCount {
                    status: OrderStatus::Unknown,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_operational_flags_thresholds() {
        let flags = detect_operational_flags(&OperationalSnapshot {
            pending_orders: 9,
            low_stock_count: 4,
            cancellation_rate: 0.149,
        });
        assert!(!flags.pending_spike);
        assert!(!flags.low_stock_risk);
        assert!(!flags.cancellation_risk);

        let flags = detect_operational_flags(&OperationalSnapshot {
            pending_orders: 10,
            low_stock_count: 5,
            cancellation_rate: 0.15,
        });
        assert!(flags.pending_spike);
        assert!(flags.low_stock_risk);
        assert!(flags.cancellation_risk);
    }

    #[test]
    fn test_top_products_aggregates_and_sorts() {
        let items = [
            item("Oak Desk", 1, 12_000.0),
            item("Teak Chair", 10, 4_000.0),
            item("Oak Desk", 2, 12_000.0),
            item("Pine Shelf", 4, 2_500.0),
        ];
        let top = summarize_top_products(&items);
        assert_eq!(top[0].name, "Teak Chair");
        assert_eq!(top[0].revenue, 40_000.0);
        assert_eq!(top[1].name, "Oak Desk");
        assert_eq!(top[1].quantity, 3);
        assert_eq!(top[1].revenue, 36_000.0);
        assert_eq!(top[2].name, "Pine Shelf");
    }

    #[test]
    fn test_top_products_limit_and_tie_order() {
        let items: Vec<OrderItemLine> = (0..8)
            .map(|i| item(&format!("P{i}"), 1, 100.0))
            .collect();
        let top = summarize_top_products(&items);
        assert_eq!(top.len(), 5);
        // Equal revenue: stable sort keeps first-occurrence order.
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["P0", "P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_operational_alerts_reference_scenario() {
        let orders = [order("OM-1", OrderStatus::Placed, 100.0, T0)];
        let alerts = build_operational_alerts(&orders, &[], at("2025-01-03T00:00:00Z"));
        assert_eq!(alerts.stale_placed_orders, 1);
        assert_eq!(alerts.long_running_assignments, 0);
    }

    #[test]
    fn test_alert_boundaries_are_inclusive() {
        let orders = [order("OM-1", OrderStatus::Placed, 100.0, T0)];
        // Exactly 24h old counts.
        let alerts = build_operational_alerts(&orders, &[], at("2025-01-02T00:00:00Z"));
        assert_eq!(alerts.stale_placed_orders, 1);
        // One second younger does not.
        let alerts = build_operational_alerts(&orders, &[], at("2025-01-01T23:59:59Z"));
        assert_eq!(alerts.stale_placed_orders, 0);

        let assignments = [assignment("p1", DeliveryStatus::OutForDelivery, T0)];
        let alerts = build_operational_alerts(&[], &assignments, at("2025-01-01T18:00:00Z"));
        assert_eq!(alerts.long_running_assignments, 1);
    }

    #[test]
    fn test_alerts_ignore_other_statuses() {
        let orders = [
            order("OM-1", OrderStatus::Processing, 100.0, T0),
            order("OM-2", OrderStatus::Delivered, 100.0, T0),
        ];
        let assignments = [assignment("p1", DeliveryStatus::Delivered, T0)];
        let alerts = build_operational_alerts(&orders, &assignments, at("2025-02-01T00:00:00Z"));
        assert_eq!(alerts.stale_placed_orders, 0);
        assert_eq!(alerts.long_running_assignments, 0);
    }

    #[test]
    fn test_bulk_discount_basic() {
        let products = [product("Oak Desk", 4999.0, 10)];
        let preview = apply_bulk_discount(&products, 10.0);
        assert_eq!(preview[0].price, 4999.0);
        assert_eq!(preview[0].discounted_price, 4499.1);
    }

    #[test]
    fn test_bulk_discount_clamps_percent() {
        let products = [product("Oak Desk", 1000.0, 10)];
        // 250% clamps to 90%.
        let preview = apply_bulk_discount(&products, 250.0);
        assert_eq!(preview[0].discounted_price, 100.0);
        // Negative clamps to 0%.
        let preview = apply_bulk_discount(&products, -10.0);
        assert_eq!(preview[0].discounted_price, 1000.0);
    }

    #[test]
    fn test_bulk_discount_price_floor() {
        let products = [product("Sample Swatch", 5.0, 10)];
        let preview = apply_bulk_discount(&products, 90.0);
        // 0.50 would undercut the floor.
        assert_eq!(preview[0].discounted_price, 1.0);
    }

    #[test]
    fn test_orders_csv_layout() {
        let orders = [
            order("OM-1", OrderStatus::Placed, 1162.0, T0),
            order("OM-2", OrderStatus::Delivered, 500.5, "2025-01-02T08:30:00Z"),
        ];
        let csv = build_orders_csv(&orders);
        assert_eq!(
            csv,
            "order_number,status,total_amount,created_at\n\
             OM-1,placed,1162,2025-01-01T00:00:00Z\n\
             OM-2,delivered,500.5,2025-01-02T08:30:00Z"
        );
    }

    #[test]
    fn test_orders_csv_header_only_when_empty() {
        assert_eq!(build_orders_csv(&[]), ORDERS_CSV_HEADER);
    }

    #[test]
    fn test_orders_csv_does_not_escape_commas() {
        // Documented limitation: embedded commas pass through untouched.
        let orders = [order("OM,1", OrderStatus::Placed, 10.0, T0)];
        let csv = build_orders_csv(&orders);
        assert!(csv.contains("OM,1,placed,10,"));
    }
}
