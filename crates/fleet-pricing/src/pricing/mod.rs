//! Pricing module
//!
//! Provides the quote calculation with:
//! - Inclusive rental-day counting
//! - Region and service multipliers on vehicle base rates
//! - Per-day insurance and one-time delivery fees
//! - A single duration discount on the combined subtotal

pub mod discount;
pub mod duration;
pub mod engine;

pub use engine::PricingEngine;
