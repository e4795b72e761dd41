//! # Pricing Aggregator
//!
//! Combines subtotal, discount percent, tax rate, and flat shipping into the
//! final totals breakdown shown on the order summary.
//!
//! ## Computation Order (load-bearing)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sanitize each input independently (non-finite / negative → 0)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discount_amount = subtotal × discount_percent / 100                    │
//! │  taxable_amount  = max(0, subtotal − discount_amount)                   │
//! │  tax_amount      = taxable_amount × tax_rate                            │
//! │  total           = taxable_amount + tax_amount + shipping_amount        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax applies to the POST-discount amount, never the raw subtotal. Stored
//! orders were written with exactly this ordering; changing it would make
//! recomputed totals disagree with what shoppers were charged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::sanitize_amount;

// =============================================================================
// Inputs and Outputs
// =============================================================================

/// Raw pricing inputs as collected by the checkout handler.
///
/// Callers pass whatever they have; sanitization happens inside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutCharges {
    /// Pre-discount, pre-tax, pre-shipping order value.
    pub subtotal: f64,
    /// Discount as a percentage of the subtotal (10 = 10%).
    pub discount_percent: f64,
    /// Tax as a fraction of the taxable amount (0.18 = 18%).
    pub tax_rate: f64,
    /// Flat shipping charge, already resolved by the shipping calculator.
    pub shipping_flat: f64,
}

/// The final totals breakdown.
///
/// Invariant: every field is non-negative and
/// `total == taxable_amount + tax_amount + shipping_amount` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    /// Subtotal after discount, before tax.
    pub taxable_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub total: f64,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the totals breakdown for a checkout.
///
/// ## Example
/// ```rust
/// use oakmart_core::pricing::{calculate_checkout_totals, CheckoutCharges};
///
/// let totals = calculate_checkout_totals(&CheckoutCharges {
///     subtotal: 1000.0,
///     discount_percent: 10.0,
///     tax_rate: 0.18,
///     shipping_flat: 100.0,
/// });
/// assert_eq!(totals.discount_amount, 100.0);
/// assert_eq!(totals.taxable_amount, 900.0);
/// assert_eq!(totals.tax_amount, 162.0);
/// assert_eq!(totals.total, 1162.0);
/// ```
pub fn calculate_checkout_totals(charges: &CheckoutCharges) -> CheckoutTotals {
    let subtotal = sanitize_amount(charges.subtotal);
    let discount_percent = sanitize_amount(charges.discount_percent);
    let tax_rate = sanitize_amount(charges.tax_rate);
    let shipping_amount = sanitize_amount(charges.shipping_flat);

    let discount_amount = subtotal * discount_percent / 100.0;
    let taxable_amount = (subtotal - discount_amount).max(0.0);
    let tax_amount = taxable_amount * tax_rate;
    let total = taxable_amount + tax_amount + shipping_amount;

    CheckoutTotals {
        subtotal,
        discount_amount,
        taxable_amount,
        tax_amount,
        shipping_amount,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
