//! Reference tables - regions, service levels, insurance, delivery, vehicles
//!
//! Each table is an ordered static slice plus one lookup function. Lookups
//! for the four selection tables never fail: an unknown or missing key
//! resolves to the table's default record, which is always the cheapest or
//! most basic tier.
//!
//! | Table | Default |
//! |---|---|
//! | Region | `national` (factor 1.00) |
//! | Service level | `payg` (multiplier 1.0) |
//! | Insurance | `none` (0 per asset per day) |
//! | Delivery | `pickup` (0 per asset) |
//!
//! Vehicle types have no default. An unknown vehicle key is priced at a base
//! rate of zero by the engine, so [`vehicle_type`] returns an `Option`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

/// Records addressable by a stable string key
pub trait Keyed {
    /// Table name used in diagnostics
    const TABLE: &'static str;

    /// Stable lookup key
    fn key(&self) -> &'static str;
}

/// Operational region scope with a multiplicative price factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub key: &'static str,
    pub label: &'static str,
    /// Applied to every vehicle's base daily rate
    pub factor: Decimal,
}

/// Maintenance service tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceLevel {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Applied to every vehicle's base daily rate
    pub multiplier: Decimal,
}

/// Insurance cover, charged per asset per rental day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsuranceTier {
    pub key: &'static str,
    pub label: &'static str,
    pub per_asset_per_day: Decimal,
}

/// Delivery option, charged once per asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryMode {
    pub key: &'static str,
    pub label: &'static str,
    pub per_asset: Decimal,
}

/// Broad vehicle grouping used for catalogue listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Tractor units, rigid trucks, vans
    Truck,
    /// Purpose-built municipal vehicles
    Specialized,
    /// Towed units
    Trailer,
}

/// Rentable vehicle type with its base daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleType {
    pub key: &'static str,
    pub label: &'static str,
    pub category: VehicleCategory,
    /// Daily rate before region and service multipliers
    pub base_daily_rate: Decimal,
}

/// Fleet goal offered by the builder. Informational only, never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetGoal {
    pub key: &'static str,
    pub label: &'static str,
}

pub static REGIONS: [Region; 3] = [
    Region { key: "regional", label: "Regional", factor: dec!(0.99) },
    Region { key: "national", label: "National", factor: dec!(1.00) },
    Region { key: "international", label: "International", factor: dec!(1.06) },
];

pub static SERVICE_LEVELS: [ServiceLevel; 3] = [
    ServiceLevel {
        key: "payg",
        label: "Pay as you go",
        description: "Reactive maintenance, parts billed, no SLA",
        multiplier: dec!(1.0),
    },
    ServiceLevel {
        key: "smartcare",
        label: "SmartCare (limited)",
        description: "PM plan + priority line, 24-48h response",
        multiplier: dec!(1.1),
    },
    ServiceLevel {
        key: "totalcare",
        label: "TotalCare (full)",
        description: "Full service, courtesy vehicle, 8-24h SLA",
        multiplier: dec!(1.25),
    },
];

pub static INSURANCE_TIERS: [InsuranceTier; 3] = [
    InsuranceTier { key: "none", label: "No insurance", per_asset_per_day: dec!(0) },
    InsuranceTier { key: "essential", label: "Essential coverage", per_asset_per_day: dec!(6) },
    InsuranceTier { key: "full", label: "Full coverage", per_asset_per_day: dec!(12) },
];

pub static DELIVERY_MODES: [DeliveryMode; 3] = [
    DeliveryMode { key: "pickup", label: "Pickup at depot", per_asset: dec!(0) },
    DeliveryMode { key: "delivered", label: "Delivered (standard)", per_asset: dec!(150) },
    DeliveryMode { key: "express", label: "Express delivery", per_asset: dec!(300) },
];

pub static VEHICLE_TYPES: [VehicleType; 14] = [
    // Trucks & vans
    vehicle("tractor_4x2", "Tractor Unit 4x2", VehicleCategory::Truck, dec!(180)),
    vehicle("tractor_6x2", "Tractor Unit 6x2", VehicleCategory::Truck, dec!(195)),
    vehicle("rigid", "Rigid Truck", VehicleCategory::Truck, dec!(150)),
    vehicle("van", "Van (L2H2)", VehicleCategory::Truck, dec!(90)),
    // Specialized
    vehicle("garbage", "Garbage Truck", VehicleCategory::Specialized, dec!(220)),
    vehicle("cleaning_cart", "Street Cleaning Cart", VehicleCategory::Specialized, dec!(85)),
    // Trailers
    vehicle("box", "Box Trailer", VehicleCategory::Trailer, dec!(55)),
    vehicle("curtain", "Curtain Sider Trailer", VehicleCategory::Trailer, dec!(50)),
    vehicle("reefer", "Reefer Trailer", VehicleCategory::Trailer, dec!(65)),
    vehicle("flatbed", "Flatbed Trailer", VehicleCategory::Trailer, dec!(48)),
    vehicle("double_decker", "Double Decker Trailer", VehicleCategory::Trailer, dec!(75)),
    vehicle("chassis", "Container Chassis", VehicleCategory::Trailer, dec!(45)),
    vehicle("kipper", "Kipper Trailer", VehicleCategory::Trailer, dec!(80)),
    vehicle("tanker", "Tanker Trailer", VehicleCategory::Trailer, dec!(95)),
];

pub static INDUSTRIES: [&str; 7] = [
    "General Logistics",
    "Retail & E-commerce",
    "Food & Beverage (Cold Chain)",
    "Construction",
    "Waste & Recycling",
    "Field Services",
    "Other",
];

pub static FLEET_GOALS: [FleetGoal; 5] = [
    FleetGoal { key: "downtime", label: "Reduce downtime" },
    FleetGoal { key: "tco", label: "Lower total cost" },
    FleetGoal { key: "scale", label: "Scale up capacity" },
    FleetGoal { key: "peak", label: "Cover seasonal peak" },
    FleetGoal { key: "compliance", label: "Compliance/standards" },
];

// Positions of the default records in their tables
const DEFAULT_REGION: usize = 1;
const DEFAULT_SERVICE_LEVEL: usize = 0;
const DEFAULT_INSURANCE_TIER: usize = 0;
const DEFAULT_DELIVERY_MODE: usize = 0;

const fn vehicle(
    key: &'static str,
    label: &'static str,
    category: VehicleCategory,
    base_daily_rate: Decimal,
) -> VehicleType {
    VehicleType {
        key,
        label,
        category,
        base_daily_rate,
    }
}

impl Keyed for Region {
    const TABLE: &'static str = "region";
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for ServiceLevel {
    const TABLE: &'static str = "service_level";
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for InsuranceTier {
    const TABLE: &'static str = "insurance";
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for DeliveryMode {
    const TABLE: &'static str = "delivery";
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for VehicleType {
    const TABLE: &'static str = "vehicle_type";
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for FleetGoal {
    const TABLE: &'static str = "fleet_goal";
    fn key(&self) -> &'static str {
        self.key
    }
}

/// Exact-match lookup by key
pub fn find<T: Keyed>(table: &'static [T], key: &str) -> Option<&'static T> {
    table.iter().find(|record| record.key() == key)
}

/// Lookup that resolves missing or unknown keys to `default`
fn find_or_default<T: Keyed>(
    table: &'static [T],
    key: Option<&str>,
    default: &'static T,
) -> &'static T {
    match key {
        Some(k) => find(table, k).unwrap_or_else(|| {
            debug!(
                table = T::TABLE,
                key = %k,
                fallback = default.key(),
                "Unknown key, using default"
            );
            default
        }),
        None => {
            debug!(table = T::TABLE, fallback = default.key(), "No key given, using default");
            default
        }
    }
}

/// Region by key, `national` when missing or unknown
pub fn region(key: Option<&str>) -> &'static Region {
    find_or_default(&REGIONS, key, &REGIONS[DEFAULT_REGION])
}

/// Service level by key, `payg` when missing or unknown
pub fn service_level(key: Option<&str>) -> &'static ServiceLevel {
    find_or_default(&SERVICE_LEVELS, key, &SERVICE_LEVELS[DEFAULT_SERVICE_LEVEL])
}

/// Insurance tier by key, `none` when missing or unknown
pub fn insurance_tier(key: Option<&str>) -> &'static InsuranceTier {
    find_or_default(&INSURANCE_TIERS, key, &INSURANCE_TIERS[DEFAULT_INSURANCE_TIER])
}

/// Delivery mode by key, `pickup` when missing or unknown
pub fn delivery_mode(key: Option<&str>) -> &'static DeliveryMode {
    find_or_default(&DELIVERY_MODES, key, &DELIVERY_MODES[DEFAULT_DELIVERY_MODE])
}

/// Vehicle type by key. Unknown vehicles have no default record.
pub fn vehicle_type(key: &str) -> Option<&'static VehicleType> {
    find(&VEHICLE_TYPES, key)
}

/// Vehicle types of one category, in catalogue order
pub fn vehicles_in(category: VehicleCategory) -> impl Iterator<Item = &'static VehicleType> {
    VEHICLE_TYPES
        .iter()
        .filter(move |vehicle| vehicle.category == category)
}
