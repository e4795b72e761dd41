//! # Fraud Screen
//!
//! A cheap, synchronous pass/fail gate run before an order is accepted.
//!
//! ## What This Is (and Is Not)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  This is a HEURISTIC GATE, not a fraud verdict.                         │
//! │                                                                         │
//! │  It runs inline in checkout, costs nothing, and is deliberately        │
//! │  conservative: a false hold goes to manual review and gets released;   │
//! │  a missed fraudulent COD order costs a truck roll and the goods.       │
//! │                                                                         │
//! │  Rejection triggers (independent, OR-combined):                        │
//! │    1. subtotal > 150,000 AND payment is cash-on-delivery               │
//! │    2. street line under 8 characters (too sparse to verify)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{PaymentMethod, ShippingAddress};
use crate::{COD_REVIEW_LIMIT, MIN_VERIFIABLE_STREET_LEN};

// =============================================================================
// Context and Decision
// =============================================================================

/// Everything the screen looks at. Assembled by the checkout handler.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FraudContext {
    pub subtotal: f64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

/// The screen's verdict. A hold carries the advisory copy shown to the
/// shopper; an approval carries nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FraudDecision {
    pub approved: bool,
    pub message: Option<String>,
}

/// Advisory copy for held orders. Fixed on purpose: the message must not
/// leak which trigger fired.
pub const FRAUD_HOLD_MESSAGE: &str =
    "We could not accept this order automatically. Our team will review it and contact you shortly.";

// =============================================================================
// Screening
// =============================================================================

/// Screens an order before acceptance.
///
/// ## Example
/// ```rust
/// use oakmart_core::fraud::screen_order;
/// use oakmart_core::fraud::FraudContext;
/// use oakmart_core::types::{PaymentMethod, ShippingAddress};
///
/// let ctx = FraudContext {
///     subtotal: 200_000.0,
///     shipping_address: ShippingAddress {
///         full_name: "A".to_string(),
///         street: "A".to_string(),
///         city: "B".to_string(),
///         state: "C".to_string(),
///         zip_code: "411001".to_string(),
///         phone: "9876543210".to_string(),
///     },
///     payment_method: PaymentMethod::Cod,
/// };
/// assert!(!screen_order(&ctx).approved);
/// ```
pub fn screen_order(context: &FraudContext) -> FraudDecision {
    let high_value_cod =
        context.subtotal > COD_REVIEW_LIMIT && context.payment_method == PaymentMethod::Cod;
    let unverifiable_street =
        context.shipping_address.street.trim().len() < MIN_VERIFIABLE_STREET_LEN;

    if high_value_cod || unverifiable_street {
        FraudDecision {
            approved: false,
            message: Some(FRAUD_HOLD_MESSAGE.to_string()),
        }
    } else {
        FraudDecision {
            approved: true,
            message: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn context(subtotal: f64, street: &str, payment_method: PaymentMethod) -> FraudContext {
        FraudContext {
            subtotal,
            shipping_address: ShippingAddress {
                full_name: "Asha Verma".to_string(),
                street: street.to_string(),
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                zip_code: "411001".to_string(),
                phone: "9876543210".to_string(),
            },
            payment_method,
        }
    }

    #[test]
    fn test_high_value_cod_is_held() {
        let decision = screen_order(&context(200_000.0, "14 Banyan Avenue", PaymentMethod::Cod));
        assert!(!decision.approved);
        assert_eq!(decision.message.as_deref(), Some(FRAUD_HOLD_MESSAGE));
    }

    #[test]
    fn test_high_value_prepaid_passes() {
        // Same amount on card: the COD trigger does not fire.
        let decision = screen_order(&context(200_000.0, "14 Banyan Avenue", PaymentMethod::Card));
        assert!(decision.approved);
        assert_eq!(decision.message, None);
    }

    #[test]
    fn test_cod_at_limit_passes() {
        // The trigger is strictly greater-than.
        let decision = screen_order(&context(150_000.0, "14 Banyan Avenue", PaymentMethod::Cod));
        assert!(decision.approved);
    }

    #[test]
    fn test_sparse_street_is_held() {
        let decision = screen_order(&context(2000.0, "A", PaymentMethod::Card));
        assert!(!decision.approved);

        // 7 characters after trimming still fails.
        let decision = screen_order(&context(2000.0, "  12 Elm  ", PaymentMethod::Card));
        assert!(!decision.approved);
    }

    #[test]
    fn test_eight_character_street_passes() {
        let decision = screen_order(&context(2000.0, "12 Elm St", PaymentMethod::Upi));
        assert!(decision.approved);
    }

    #[test]
    fn test_both_triggers_give_single_fixed_message() {
        let decision = screen_order(&context(200_000.0, "A", PaymentMethod::Cod));
        assert!(!decision.approved);
        assert_eq!(decision.message.as_deref(), Some(FRAUD_HOLD_MESSAGE));
    }
}
