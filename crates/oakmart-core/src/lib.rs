//! # oakmart-core: Pure Business Logic for the Oakmart Storefront
//!
//! This crate is the **heart** of the Oakmart wholesale storefront. It holds
//! every piece of checkout, promotion, and analytics logic as pure functions
//! with zero I/O dependencies. The storefront UI, the admin dashboard, and
//! the serverless handlers all call into this crate with plain data and get
//! plain data back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Oakmart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Storefront / Admin / Delivery UIs (React)          │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Orders ──► Dashboards     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ oakmart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │  │validation│ │ coupon  │ │ shipping │ │  fraud  │ │ pricing │ │   │
//! │  │  └──────────┘ └─────────┘ └──────────┘ └─────────┘ └─────────┘ │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────┐ ┌───────┐               │   │
//! │  │  │ promotion │ │ analytics │ │ money │ │ types │               │   │
//! │  │  └───────────┘ └───────────┘ └───────┘ └───────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Hosted backend (auth, storage, functions)          │   │
//! │  │           owns persistence; never reached from here             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain value objects (addresses, order snapshots, tiers)
//! - [`money`] - Amount sanitization, rounding, thousands formatting
//! - [`error`] - Rejection messages as typed errors
//! - [`validation`] - Shipping address checks
//! - [`coupon`] - Coupon code evaluation against the static rule table
//! - [`shipping`] - Shipping cost tiers
//! - [`fraud`] - Pre-acceptance fraud screening
//! - [`pricing`] - Checkout totals breakdown
//! - [`promotion`] - Promotional discount evaluation
//! - [`analytics`] - Admin dashboard aggregations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system, and clock access is FORBIDDEN here
//! 3. **Result Shapes, Not Panics**: Rejections are typed values whose messages
//!    are shown to the shopper verbatim; nothing in this crate throws
//! 4. **Injected Time**: Anything time-relative takes `now` as a parameter
//!
//! ## Example Usage
//!
//! ```rust
//! use oakmart_core::coupon::evaluate_coupon;
//!
//! let applied = evaluate_coupon("welcome10", 100_000.0).unwrap();
//! assert_eq!(applied.code, "WELCOME10");
//! // 10% of 100,000 would be 10,000 - clamped to the coupon's cap
//! assert_eq!(applied.discount_amount, 4_000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod coupon;
pub mod error;
pub mod fraud;
pub mod money;
pub mod pricing;
pub mod promotion;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use oakmart_core::CheckoutTotals` instead of
// `use oakmart_core::pricing::CheckoutTotals`

pub use error::{AddressError, CouponError};
pub use pricing::{CheckoutCharges, CheckoutTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which a product counts as low stock.
///
/// ## Business Reason
/// Wholesale buyers order in bulk; anything at 5 units or fewer is
/// effectively unsellable and shows up in the admin KPIs and risk flags.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Subtotal at which standard shipping becomes free.
pub const FREE_SHIPPING_MIN_SUBTOTAL: f64 = 3000.0;

/// Cash-on-delivery orders above this subtotal are held for manual review.
pub const COD_REVIEW_LIMIT: f64 = 150_000.0;

/// Shortest street line the fraud screen will accept as verifiable.
pub const MIN_VERIFIABLE_STREET_LEN: usize = 8;
