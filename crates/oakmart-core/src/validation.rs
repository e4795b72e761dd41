//! # Validation Module
//!
//! Shipping address validation for checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Checkout form (React)                                        │
//! │  ├── Required-field hints, input masks                                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before the order is accepted)                   │
//! │  ├── Trims and re-checks every field                                   │
//! │  └── Format rules for ZIP code and phone                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted backend constraints (NOT NULL etc.)                   │
//! │                                                                         │
//! │  Defense in depth: the form can be bypassed; this module cannot        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::AddressError;
use crate::types::ShippingAddress;

/// Result type for address validation.
pub type AddressResult = Result<(), AddressError>;

// =============================================================================
// Shipping Address
// =============================================================================

/// Validates a shipping address before checkout proceeds.
///
/// ## Rules (checked in order, first failure wins)
/// 1. All six fields non-blank after trimming. The failure message is
///    generic ("fill in all the address fields") and does not name the
///    field - the checkout form already marks required inputs.
/// 2. ZIP code is exactly 6 ASCII digits after trimming.
/// 3. Phone is exactly 10 ASCII digits after trimming.
///
/// ## Example
/// ```rust
/// use oakmart_core::types::ShippingAddress;
/// use oakmart_core::validation::validate_shipping_address;
///
/// let address = ShippingAddress {
///     full_name: "Asha Verma".to_string(),
///     street: "14 Banyan Avenue".to_string(),
///     city: "Pune".to_string(),
///     state: "Maharashtra".to_string(),
///     zip_code: "411001".to_string(),
///     phone: "9876543210".to_string(),
/// };
/// assert!(validate_shipping_address(&address).is_ok());
/// ```
pub fn validate_shipping_address(address: &ShippingAddress) -> AddressResult {
    let fields = [
        &address.full_name,
        &address.street,
        &address.city,
        &address.state,
        &address.zip_code,
        &address.phone,
    ];

    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(AddressError::IncompleteFields);
    }

    if !is_exact_digits(address.zip_code.trim(), 6) {
        return Err(AddressError::InvalidZipCode);
    }

    if !is_exact_digits(address.phone.trim(), 10) {
        return Err(AddressError::InvalidPhone);
    }

    Ok(())
}

/// Whether `value` consists of exactly `len` ASCII digits.
fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================
