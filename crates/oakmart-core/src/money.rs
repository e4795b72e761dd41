//! # Money Helpers
//!
//! Amount sanitization, rounding, and display formatting shared by the
//! pricing, coupon, and analytics modules.
//!
//! ## Why f64 Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AMOUNTS ARE f64 BY CONTRACT                                            │
//! │                                                                         │
//! │  The hosted backend stores totals as JSON numbers and every caller     │
//! │  (storefront, admin, serverless handlers) exchanges them as such.      │
//! │  The checkout math must reproduce those numbers bit-for-bit, so this   │
//! │  crate computes on f64 in the same operation order as the callers      │
//! │  expect, and defends the boundary instead:                             │
//! │                                                                         │
//! │    • sanitize_amount: non-finite or negative input → 0                 │
//! │    • round_to_cents: explicit 2-decimal rounding where displayed       │
//! │                                                                         │
//! │  Nothing in this crate ever feeds an unchecked float onwards.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Sanitization
// =============================================================================

/// Clamps an amount to a usable value: non-finite or negative inputs become 0.
///
/// Every externally supplied number entering the checkout math goes through
/// here first, so `NaN`, infinities, and negative amounts can never poison a
/// totals breakdown.
///
/// ## Example
/// ```rust
/// use oakmart_core::money::sanitize_amount;
///
/// assert_eq!(sanitize_amount(149.0), 149.0);
/// assert_eq!(sanitize_amount(-20.0), 0.0);
/// assert_eq!(sanitize_amount(f64::NAN), 0.0);
/// assert_eq!(sanitize_amount(f64::INFINITY), 0.0);
/// ```
#[inline]
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to 2 decimal places (half away from zero).
///
/// ## Example
/// ```rust
/// use oakmart_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(4499.1), 4499.1);
/// assert_eq!(round_to_cents(99.994999), 99.99);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount with thousands separators for user-facing messages.
///
/// Whole amounts render without a fraction ("1,000"); fractional amounts
/// render with two decimals ("1,249.50"). No currency symbol: the
/// presentation layer owns symbols and localisation.
///
/// ## Example
/// ```rust
/// use oakmart_core::money::format_amount;
///
/// assert_eq!(format_amount(1000.0), "1,000");
/// assert_eq!(format_amount(150000.0), "150,000");
/// assert_eq!(format_amount(1249.5), "1,249.50");
/// assert_eq!(format_amount(999.0), "999");
/// ```
pub fn format_amount(value: f64) -> String {
    let value = round_to_cents(sanitize_amount(value));
    let whole = value.trunc() as i64;
    let cents = ((value - value.trunc()) * 100.0).round() as i64;

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents == 0 {
        grouped
    } else {
        format!("{grouped}.{cents:02}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
