//! # Shipping Calculator
//!
//! Derives the shipping charge from the order subtotal and the requested
//! service tier.
//!
//! ## Tier Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal <= 0              →    0   (degenerate cart, nothing to ship) │
//! │                                                                         │
//! │  Express    subtotal ≥ 5000 →  149                                      │
//! │             otherwise       →  249                                      │
//! │                                                                         │
//! │  Standard   subtotal ≥ 3000 →    0   (free shipping threshold)          │
//! │             otherwise       →   99                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unrecognised tier strings from the UI already collapse to
//! [`ShippingTier::Standard`] at the serde boundary.

use crate::types::ShippingTier;
use crate::FREE_SHIPPING_MIN_SUBTOTAL;

// =============================================================================
// Constants
// =============================================================================

/// Standard shipping charge below the free-shipping threshold.
pub const STANDARD_SHIPPING_FEE: f64 = 99.0;

/// Express charge for orders of at least [`EXPRESS_DISCOUNT_MIN_SUBTOTAL`].
pub const EXPRESS_REDUCED_FEE: f64 = 149.0;

/// Express charge for smaller orders.
pub const EXPRESS_BASE_FEE: f64 = 249.0;

/// Subtotal at which the express charge drops to the reduced fee.
pub const EXPRESS_DISCOUNT_MIN_SUBTOTAL: f64 = 5000.0;

// =============================================================================
// Calculator
// =============================================================================

/// Returns the shipping charge for a subtotal and service tier.
///
/// A non-positive subtotal is a degenerate cart (empty, or upstream handed
/// us garbage) and ships for free rather than erroring.
///
/// ## Example
/// ```rust
/// use oakmart_core::shipping::shipping_amount;
/// use oakmart_core::types::ShippingTier;
///
/// assert_eq!(shipping_amount(2500.0, ShippingTier::Standard), 99.0);
/// assert_eq!(shipping_amount(3500.0, ShippingTier::Standard), 0.0);
/// assert_eq!(shipping_amount(3500.0, ShippingTier::Express), 249.0);
/// ```
pub fn shipping_amount(subtotal: f64, tier: ShippingTier) -> f64 {
    if subtotal <= 0.0 {
        return 0.0;
    }

    match tier {
        ShippingTier::Express => {
            if subtotal >= EXPRESS_DISCOUNT_MIN_SUBTOTAL {
                EXPRESS_REDUCED_FEE
            } else {
                EXPRESS_BASE_FEE
            }
        }
        ShippingTier::Standard => {
            if subtotal >= FREE_SHIPPING_MIN_SUBTOTAL {
                0.0
            } else {
                STANDARD_SHIPPING_FEE
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
