//! # Fleet Pricing
//!
//! Live quote calculation for the Fleet Builder.
//!
//! ## Pricing Formula
//!
//! ```text
//! rate     = base × region × service          (per vehicle type)
//! rental   = Σ rate × qty × days
//! insure   = Σ fee  × qty × days
//! deliver  = Σ fee  × qty
//! subtotal = rental + insure + deliver
//! total    = max(0, subtotal − subtotal × discount(days))
//! ```
//!
//! Where `days` counts the rental period inclusively and `discount(days)` is
//! the duration tier: 3% from 30 days, 7% from 90, 12% from 180.
//!
//! Pricing is a total function. There is no error path: unknown keys,
//! malformed quantities and missing dates all resolve to defaults.

pub mod format;
pub mod pricing;

use fleet_common::{QuoteBreakdown, QuoteRequest};

pub use format::{format_eur, QuoteSummary};
pub use pricing::{
    discount::{duration_discount, DiscountTier, DURATION_DISCOUNTS},
    duration::{rental_days, total_days},
    engine::PricingEngine,
};

/// Price a request with the standard reference tables
pub fn calculate_price(request: &QuoteRequest) -> QuoteBreakdown {
    PricingEngine::new().calculate(request)
}
