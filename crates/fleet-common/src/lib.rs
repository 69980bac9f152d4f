//! # Fleet Common
//!
//! Shared types and reference data for Fleet Builder quoting.
//!
//! ## Core Types
//!
//! - [`QuoteRequest`]: the selections a customer made in the builder
//! - [`QuoteBreakdown`]/[`LineItem`]: the itemized price of those selections
//! - [`QuantityInput`]: a raw, possibly malformed, requested quantity
//!
//! ## Reference Tables
//!
//! - [`types::catalog`]: regions, service levels, insurance tiers, delivery
//!   modes and vehicle types, each with a keyed lookup
//!
//! Reference tables are static and never mutated. Every lookup that feeds the
//! price degrades to a documented default instead of failing.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{FleetError, Result};
pub use types::{
    catalog::{
        delivery_mode, insurance_tier, region, service_level, vehicle_type, DeliveryMode,
        InsuranceTier, Region, ServiceLevel, VehicleCategory, VehicleType, DELIVERY_MODES,
        INSURANCE_TIERS, REGIONS, SERVICE_LEVELS, VEHICLE_TYPES,
    },
    quote::{LineItem, QuantityInput, QuoteBreakdown, QuoteRequest},
};

/// Fleet Builder version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound for a single vehicle-type quantity
pub const MAX_QUANTITY: u32 = 999_999_999;

/// Rental duration used when the request carries no usable date range
pub const DEFAULT_RENTAL_DAYS: u64 = 30;

/// Display currency (ISO 4217)
pub const CURRENCY: &str = "EUR";
