//! # fleet-quote
//!
//! Command-line front end for the Fleet Builder pricing engine. Reads one
//! JSON quote request, prices it, and writes the breakdown as JSON or as the
//! plain-text pricing panel.

pub mod config;

use std::io::{Read, Write};

use fleet_common::types::catalog::{
    vehicles_in, DeliveryMode, FleetGoal, InsuranceTier, Region, ServiceLevel, VehicleCategory,
    VehicleType, DELIVERY_MODES, FLEET_GOALS, INDUSTRIES, INSURANCE_TIERS, REGIONS,
    SERVICE_LEVELS,
};
use fleet_common::{FleetError, QuoteBreakdown, QuoteRequest, Result, CURRENCY};
use fleet_pricing::{calculate_price, QuoteSummary};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{OutputFormat, QuoteCliConfig};

/// Decode a request. Only non-JSON or non-object input is rejected.
pub fn read_request<R: Read>(mut reader: R) -> Result<QuoteRequest> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    let value: Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(FleetError::InvalidRequest(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Render a breakdown in the configured format
pub fn render(quote: &QuoteBreakdown, config: &QuoteCliConfig) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(quote)?,
        OutputFormat::Json => serde_json::to_string(quote)?,
        OutputFormat::Summary => QuoteSummary(quote).to_string(),
    })
}

/// Everything a front end needs to build its selection steps
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub currency: &'static str,
    pub industries: &'static [&'static str],
    pub regions: &'static [Region],
    pub goals: &'static [FleetGoal],
    pub trucks: Vec<&'static VehicleType>,
    pub specialized: Vec<&'static VehicleType>,
    pub trailers: Vec<&'static VehicleType>,
    pub service_levels: &'static [ServiceLevel],
    pub insurance: &'static [InsuranceTier],
    pub delivery: &'static [DeliveryMode],
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            currency: CURRENCY,
            industries: &INDUSTRIES,
            regions: &REGIONS,
            goals: &FLEET_GOALS,
            trucks: vehicles_in(VehicleCategory::Truck).collect(),
            specialized: vehicles_in(VehicleCategory::Specialized).collect(),
            trailers: vehicles_in(VehicleCategory::Trailer).collect(),
            service_levels: &SERVICE_LEVELS,
            insurance: &INSURANCE_TIERS,
            delivery: &DELIVERY_MODES,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the reference catalogue as JSON
pub fn write_catalog<W: Write>(mut output: W, config: &QuoteCliConfig) -> Result<()> {
    let catalog = Catalog::new();
    let json = if config.pretty {
        serde_json::to_string_pretty(&catalog)?
    } else {
        serde_json::to_string(&catalog)?
    };
    writeln!(output, "{json}")?;
    output.flush()?;
    Ok(())
}

/// Read, price, and write one quote
pub fn run<R: Read, W: Write>(input: R, mut output: W, config: &QuoteCliConfig) -> Result<QuoteBreakdown> {
    let request = read_request(input)?;
    debug!(vehicle_types = request.vehicles.len(), "Request decoded");

    let quote = calculate_price(&request);
    writeln!(output, "{}", render(&quote, config)?)?;
    output.flush()?;

    Ok(quote)
}
