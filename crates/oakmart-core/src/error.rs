//! # Error Types
//!
//! Rejection types for the Oakmart core.
//!
//! ## Message Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rejection Flow                                   │
//! │                                                                         │
//! │  oakmart-core errors (this file)                                        │
//! │  ├── AddressError   - shipping address validation failures              │
//! │  └── CouponError    - coupon evaluation failures                        │
//! │                                                                         │
//! │  Every Display string here is shown to the shopper VERBATIM.           │
//! │  The UI layer does `err.to_string()` and renders it in a banner;       │
//! │  it never inspects variants for checkout copy.                         │
//! │                                                                         │
//! │  Business rejections that are not errors (fraud holds, promotion      │
//! │  misses) are plain result structs in their own modules.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. Every variant maps to one fixed user-facing message
//! 4. Nothing in this crate panics; all failure is typed

use thiserror::Error;

use crate::money::format_amount;

// =============================================================================
// Address Error
// =============================================================================

/// Shipping address validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    /// At least one required field is blank.
    ///
    /// Deliberately does not name the offending field: the checkout form
    /// highlights required fields itself, and the legacy storefront shipped
    /// this exact generic copy.
    #[error("Please fill in all the address fields.")]
    IncompleteFields,

    /// ZIP code is not exactly 6 digits.
    #[error("Enter a valid 6-digit ZIP code.")]
    InvalidZipCode,

    /// Phone number is not exactly 10 digits.
    #[error("Enter a valid 10-digit phone number.")]
    InvalidPhone,
}

// =============================================================================
// Coupon Error
// =============================================================================

/// Coupon evaluation failures.
///
/// An unknown code is a business rejection like any other, not a system
/// error; all three variants surface the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponError {
    /// The shopper submitted an empty code.
    #[error("Enter a coupon code first.")]
    EmptyCode,

    /// The code is not in the rule table.
    #[error("This coupon is not valid.")]
    UnknownCode,

    /// The order subtotal is below the coupon's minimum.
    #[error("Add items worth at least {} to use this coupon.", fmt_min(.min_subtotal))]
    BelowMinimum { min_subtotal: f64 },
}

fn fmt_min(min_subtotal: &f64) -> String {
    format_amount(*min_subtotal)
}

// =============================================================================
// Unit Tests
// =============================================================================
