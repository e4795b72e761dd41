//! # Coupon Engine
//!
//! Evaluates a coupon code against an order subtotal and the static rule
//! table, returning either an applied discount or a typed rejection whose
//! message the storefront shows verbatim.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "  welcome10 " ──► trim + uppercase ──► "WELCOME10"                    │
//! │        │                                                                │
//! │        ├── empty?          → Err(EmptyCode)                             │
//! │        ├── not in table?   → Err(UnknownCode)                           │
//! │        ├── below minimum?  → Err(BelowMinimum { min_subtotal })         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  raw discount:  percent → subtotal × value / 100                        │
//! │                 flat    → value                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  clamp to max_discount ──► Ok(AppliedCoupon)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Table
//!
//! | Code      | kind    | value | min_subtotal | max_discount |
//! |-----------|---------|-------|--------------|--------------|
//! | WELCOME10 | percent | 10    | 1000         | 4000         |
//! | SAVE5     | percent | 5     | 500          | 1500         |
//! | FLAT250   | flat    | 250   | 3000         | 250          |
//!
//! The table is compile-time constant. Marketing changes ship as code
//! changes; nothing mutates it at runtime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CouponError;
use crate::money::format_amount;

// =============================================================================
// Rule Table
// =============================================================================

/// How a coupon's `value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `value` is a percentage of the subtotal.
    Percent,
    /// `value` is a fixed amount.
    Flat,
}

/// A single coupon's terms.
///
/// Invariant: the awarded discount never exceeds `max_discount`,
/// regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CouponRule {
    pub kind: CouponKind,
    pub value: f64,
    pub min_subtotal: f64,
    pub max_discount: f64,
}

/// Looks up the rule for a normalized (trimmed, uppercased) code.
fn rule_for(code: &str) -> Option<CouponRule> {
    const WELCOME10: CouponRule = CouponRule {
        kind: CouponKind::Percent,
        value: 10.0,
        min_subtotal: 1000.0,
        max_discount: 4000.0,
    };
    const SAVE5: CouponRule = CouponRule {
        kind: CouponKind::Percent,
        value: 5.0,
        min_subtotal: 500.0,
        max_discount: 1500.0,
    };
    const FLAT250: CouponRule = CouponRule {
        kind: CouponKind::Flat,
        value: 250.0,
        min_subtotal: 3000.0,
        max_discount: 250.0,
    };

    match code {
        "WELCOME10" => Some(WELCOME10),
        "SAVE5" => Some(SAVE5),
        "FLAT250" => Some(FLAT250),
        _ => None,
    }
}

// =============================================================================
// Applied Coupon
// =============================================================================

/// A successfully applied coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedCoupon {
    /// The normalized code ("WELCOME10", never " welcome10 ").
    pub code: String,
    /// The discount awarded, already clamped to the rule's cap.
    pub discount_amount: f64,
    /// Confirmation copy shown in the checkout banner.
    pub message: String,
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates a coupon code against an order subtotal.
///
/// The code is trimmed and uppercased before lookup, so shopper input like
/// `" welcome10 "` matches `WELCOME10`.
///
/// ## Example
/// ```rust
/// use oakmart_core::coupon::evaluate_coupon;
///
/// let applied = evaluate_coupon("FLAT250", 5000.0).unwrap();
/// assert_eq!(applied.discount_amount, 250.0);
///
/// assert!(evaluate_coupon("BOGUS", 5000.0).is_err());
/// ```
pub fn evaluate_coupon(code: &str, subtotal: f64) -> Result<AppliedCoupon, CouponError> {
    let code = code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return Err(CouponError::EmptyCode);
    }

    let rule = rule_for(&code).ok_or(CouponError::UnknownCode)?;

    if subtotal < rule.min_subtotal {
        return Err(CouponError::BelowMinimum {
            min_subtotal: rule.min_subtotal,
        });
    }

    let raw = match rule.kind {
        CouponKind::Percent => subtotal * rule.value / 100.0,
        CouponKind::Flat => rule.value,
    };
    let discount_amount = raw.min(rule.max_discount);

    let message = format!(
        "Coupon {code} applied. You save {}.",
        format_amount(discount_amount)
    );
    Ok(AppliedCoupon {
        code,
        discount_amount,
        message,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
