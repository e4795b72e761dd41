//! # Promotion Evaluator
//!
//! Produces the list of promotional discounts a checkout qualifies for.
//!
//! ## Rules (independent, non-exclusive)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. First order       AND subtotal ≥  2,000  →  250 flat                │
//! │  2. Gold tier         AND subtotal ≥  5,000  →  400 flat                │
//! │  3. Enterprise tier   AND subtotal ≥ 10,000  →  7% of subtotal (no cap) │
//! │                                                                         │
//! │  Each rule is checked against the full context on its own; outcomes    │
//! │  ACCUMULATE in rule order. There is no "best offer wins" selection -   │
//! │  a first-time gold buyer over 5,000 gets rules 1 AND 2.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::CustomerTier;

// =============================================================================
// Constants
// =============================================================================

/// Minimum subtotal for the first-order discount.
pub const FIRST_ORDER_MIN_SUBTOTAL: f64 = 2000.0;
/// Flat amount awarded on a qualifying first order.
pub const FIRST_ORDER_DISCOUNT: f64 = 250.0;

/// Minimum subtotal for the gold tier bonus.
pub const GOLD_MIN_SUBTOTAL: f64 = 5000.0;
/// Flat amount awarded to qualifying gold accounts.
pub const GOLD_DISCOUNT: f64 = 400.0;

/// Minimum subtotal for the enterprise volume discount.
pub const ENTERPRISE_MIN_SUBTOTAL: f64 = 10_000.0;
/// Enterprise discount as a fraction of the subtotal. Uncapped.
pub const ENTERPRISE_DISCOUNT_RATE: f64 = 0.07;

// =============================================================================
// Context and Outcome
// =============================================================================

/// Customer/order context the rules are evaluated against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromotionContext {
    pub is_first_order: bool,
    pub subtotal: f64,
    pub customer_tier: CustomerTier,
}

/// One applicable promotion: a display label and a discount amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromotionOutcome {
    pub label: String,
    pub discount_amount: f64,
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates all promotion rules and returns the outcomes in rule order.
///
/// ## Example
/// ```rust
/// use oakmart_core::promotion::{evaluate_promotions, PromotionContext};
/// use oakmart_core::types::CustomerTier;
///
/// let outcomes = evaluate_promotions(&PromotionContext {
///     is_first_order: true,
///     subtotal: 6000.0,
///     customer_tier: CustomerTier::Gold,
/// });
/// // First-order and gold bonuses both apply.
/// assert_eq!(outcomes.len(), 2);
/// ```
pub fn evaluate_promotions(context: &PromotionContext) -> Vec<PromotionOutcome> {
    let mut outcomes = Vec::new();

    if context.is_first_order && context.subtotal >= FIRST_ORDER_MIN_SUBTOTAL {
        outcomes.push(PromotionOutcome {
            label: "First order discount".to_string(),
            discount_amount: FIRST_ORDER_DISCOUNT,
        });
    }

    if context.customer_tier == CustomerTier::Gold && context.subtotal >= GOLD_MIN_SUBTOTAL {
        outcomes.push(PromotionOutcome {
            label: "Gold tier bonus".to_string(),
            discount_amount: GOLD_DISCOUNT,
        });
    }

    if context.customer_tier == CustomerTier::Enterprise
        && context.subtotal >= ENTERPRISE_MIN_SUBTOTAL
    {
        outcomes.push(PromotionOutcome {
            label: "Enterprise volume discount".to_string(),
            discount_amount: context.subtotal * ENTERPRISE_DISCOUNT_RATE,
        });
    }

    outcomes
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn context(is_first_order: bool, subtotal: f64, tier: CustomerTier) -> PromotionContext {
        PromotionContext {
            is_first_order,
            subtotal,
            customer_tier: tier,
        }
    }

    #[test]
    fn test_no_rules_match() {
        let outcomes = evaluate_promotions(&context(false, 1500.0, CustomerTier::Standard));
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_first_order_threshold() {
        let outcomes = evaluate_promotions(&context(true, 1999.0, CustomerTier::Standard));
        assert!(outcomes.is_empty());

        let outcomes = evaluate_promotions(&context(true, 2000.0, CustomerTier::Standard));
        assert_eq!(
            outcomes,
            vec![PromotionOutcome {
                label: "First order discount".to_string(),
                discount_amount: 250.0,
            }]
        );
    }

    #[test]
    fn test_gold_bonus() {
        let outcomes = evaluate_promotions(&context(false, 5000.0, CustomerTier::Gold));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].discount_amount, 400.0);

        // Below the gold threshold nothing fires.
        let outcomes = evaluate_promotions(&context(false, 4999.0, CustomerTier::Gold));
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_enterprise_discount_is_proportional_and_uncapped() {
        let outcomes = evaluate_promotions(&context(false, 15_000.0, CustomerTier::Enterprise));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].discount_amount, 1050.0);

        let outcomes = evaluate_promotions(&context(false, 1_000_000.0, CustomerTier::Enterprise));
        assert_eq!(outcomes[0].discount_amount, 1_000_000.0 * 0.07);
    }

    #[test]
    fn test_rules_accumulate_without_exclusivity() {
        // First-time gold buyer above both thresholds: both rules fire,
        // in rule order.
        let outcomes = evaluate_promotions(&context(true, 6000.0, CustomerTier::Gold));
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].label, "First order discount");
        assert_eq!(outcomes[1].label, "Gold tier bonus");
    }

    #[test]
    fn test_first_time_enterprise_stacks() {
        let outcomes = evaluate_promotions(&context(true, 15_000.0, CustomerTier::Enterprise));
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].discount_amount, 250.0);
        assert_eq!(outcomes[1].discount_amount, 1050.0);
    }

    #[test]
    fn test_tier_rules_do_not_cross() {
        // Gold money never triggers the enterprise rule and vice versa.
        let outcomes = evaluate_promotions(&context(false, 50_000.0, CustomerTier::Gold));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].label, "Gold tier bonus");
    }
}
