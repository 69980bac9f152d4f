//! Quote Types - selections in, itemized price out
//!
//! A [`QuoteRequest`] is what the builder collected from the customer. Every
//! field is optional and every value is accepted: malformed input degrades to
//! a documented default rather than an error, both when decoding JSON and when
//! pricing. A [`QuoteBreakdown`] is the priced result, with one [`LineItem`]
//! per requested vehicle type in request order.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::MAX_QUANTITY;

/// Requested quantity as supplied by the caller
///
/// Front ends send numbers, numeric strings, or garbage. The raw value is kept
/// and only interpreted by [`QuantityInput::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, null, arrays, objects
    Other(Value),
}

impl QuantityInput {
    /// Interpret as a whole quantity in `[0, MAX_QUANTITY]`
    ///
    /// Strings use their leading integer (`" 12 trucks"` is 12, `"abc"` is 0),
    /// floats truncate toward zero, anything non-numeric is 0.
    pub fn resolve(&self) -> u32 {
        let raw = match self {
            QuantityInput::Integer(n) => *n,
            // `as` saturates and maps NaN to 0
            QuantityInput::Float(f) => f.trunc() as i64,
            QuantityInput::Text(s) => leading_integer(s),
            QuantityInput::Other(_) => 0,
        };
        let clamped = raw.clamp(0, i64::from(MAX_QUANTITY));
        if clamped != raw || !matches!(self, QuantityInput::Integer(_)) {
            debug!(input = ?self, quantity = clamped, "Coerced vehicle quantity");
        }
        // Clamped into u32 range above
        clamped as u32
    }
}

/// Integer prefix of a string: optional sign then ASCII digits, 0 if none
fn leading_integer(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

impl From<i64> for QuantityInput {
    fn from(n: i64) -> Self {
        QuantityInput::Integer(n)
    }
}

impl From<i32> for QuantityInput {
    fn from(n: i32) -> Self {
        QuantityInput::Integer(i64::from(n))
    }
}

impl From<u32> for QuantityInput {
    fn from(n: u32) -> Self {
        QuantityInput::Integer(i64::from(n))
    }
}

impl From<f64> for QuantityInput {
    fn from(f: f64) -> Self {
        QuantityInput::Float(f)
    }
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        QuantityInput::Text(s.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(s: String) -> Self {
        QuantityInput::Text(s)
    }
}

/// Selections to be priced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    /// Region key (`regional`, `national`, `international`)
    #[serde(alias = "regionKey", deserialize_with = "lenient_key")]
    pub region_key: Option<String>,

    /// Service level key (`payg`, `smartcare`, `totalcare`)
    #[serde(alias = "serviceKey", deserialize_with = "lenient_key")]
    pub service_key: Option<String>,

    /// Insurance key (`none`, `essential`, `full`)
    #[serde(alias = "insuranceKey", deserialize_with = "lenient_key")]
    pub insurance_key: Option<String>,

    /// Delivery key (`pickup`, `delivered`, `express`)
    #[serde(alias = "deliveryKey", deserialize_with = "lenient_key")]
    pub delivery_key: Option<String>,

    /// Vehicle type key to requested quantity, in selection order
    #[serde(deserialize_with = "lenient_vehicles")]
    pub vehicles: IndexMap<String, QuantityInput>,

    /// First rental day (inclusive)
    #[serde(alias = "startDate", deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,

    /// Last rental day (inclusive)
    #[serde(alias = "endDate", deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

impl QuoteRequest {
    /// Create an empty request; everything resolves to defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set region
    pub fn with_region(mut self, key: impl Into<String>) -> Self {
        self.region_key = Some(key.into());
        self
    }

    /// Set service level
    pub fn with_service(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Set insurance tier
    pub fn with_insurance(mut self, key: impl Into<String>) -> Self {
        self.insurance_key = Some(key.into());
        self
    }

    /// Set delivery mode
    pub fn with_delivery(mut self, key: impl Into<String>) -> Self {
        self.delivery_key = Some(key.into());
        self
    }

    /// Add or replace a vehicle line. Replacing keeps the original position.
    pub fn with_vehicle(mut self, key: impl Into<String>, quantity: impl Into<QuantityInput>) -> Self {
        self.vehicles.insert(key.into(), quantity.into());
        self
    }

    /// Set the rental period, both ends inclusive
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

fn lenient_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_vehicles<'de, D>(deserializer: D) -> Result<IndexMap<String, QuantityInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => {
            let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                debug!(date = %s, "Unparseable date, treating as absent");
            }
            parsed
        }
        _ => None,
    })
}

/// Priced contribution of one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Vehicle type key as requested
    pub key: String,
    /// Catalogue label, or the raw key for unknown vehicle types
    pub label: String,
    /// Resolved quantity
    pub quantity: u32,
    /// Base daily rate x region factor x service multiplier
    pub daily_rate: Decimal,
    /// daily_rate x quantity x days
    pub rental: Decimal,
    /// insurance fee x quantity x days
    pub insurance: Decimal,
    /// delivery fee x quantity, not multiplied by days
    pub delivery: Decimal,
}

impl LineItem {
    /// Everything this line contributes before discount
    pub fn total(&self) -> Decimal {
        self.rental + self.insurance + self.delivery
    }
}

/// Itemized quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Resolved region key
    pub region: String,
    /// Resolved service level key
    pub service: String,
    /// Resolved insurance key
    pub insurance: String,
    /// Resolved delivery key
    pub delivery: String,

    /// One line per requested vehicle type, request order
    pub lines: Vec<LineItem>,

    /// Inclusive rental days
    pub total_days: u64,

    pub rental_total: Decimal,
    pub insurance_total: Decimal,
    pub delivery_total: Decimal,

    /// rental_total + insurance_total + delivery_total
    pub subtotal: Decimal,

    /// Duration discount rate (0.00 - 0.12)
    pub discount_rate: Decimal,

    /// subtotal x discount_rate
    pub discount: Decimal,

    /// max(0, subtotal - discount)
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// Number of assets across all lines
    pub fn asset_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Discount rate as a percentage, e.g. 7 for 0.07
    pub fn discount_percent(&self) -> Decimal {
        (self.discount_rate * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn has_discount(&self) -> bool {
        self.discount_rate > Decimal::ZERO
    }
}
