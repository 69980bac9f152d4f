//! Quote pricing engine
//!
//! Resolves the selections against the reference tables, prices each vehicle
//! line, then applies one duration discount to the combined subtotal:
//! - Rental: effective daily rate × quantity × days
//! - Insurance: per-asset daily fee × quantity × days
//! - Delivery: per-asset fee × quantity, once
//!
//! No rounding happens here. Lines sum exactly to the aggregates.

use fleet_common::{
    delivery_mode, insurance_tier, region, service_level, vehicle_type, DeliveryMode,
    InsuranceTier, LineItem, QuantityInput, QuoteBreakdown, QuoteRequest,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::discount::duration_discount;
use super::duration::total_days;

/// Stateless quote calculator over the static reference tables
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

/// Per-quote inputs shared by every line
struct LineContext {
    /// region factor × service multiplier
    rate_multiplier: Decimal,
    insurance: &'static InsuranceTier,
    delivery: &'static DeliveryMode,
    days: Decimal,
}

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Price a request. Never fails; see module docs for the fallbacks.
    #[instrument(skip(self, request), fields(vehicle_types = request.vehicles.len()))]
    pub fn calculate(&self, request: &QuoteRequest) -> QuoteBreakdown {
        let region = region(request.region_key.as_deref());
        let service = service_level(request.service_key.as_deref());
        let insurance = insurance_tier(request.insurance_key.as_deref());
        let delivery = delivery_mode(request.delivery_key.as_deref());
        let days = total_days(request.start_date, request.end_date);

        let ctx = LineContext {
            rate_multiplier: region.factor * service.multiplier,
            insurance,
            delivery,
            days: Decimal::from(days),
        };

        let lines: Vec<LineItem> = request
            .vehicles
            .iter()
            .map(|(key, quantity)| Self::price_line(&ctx, key, quantity))
            .collect();

        let rental_total: Decimal = lines.iter().map(|line| line.rental).sum();
        let insurance_total: Decimal = lines.iter().map(|line| line.insurance).sum();
        let delivery_total: Decimal = lines.iter().map(|line| line.delivery).sum();

        let subtotal = rental_total + insurance_total + delivery_total;
        let discount_rate = duration_discount(days);
        let discount = subtotal * discount_rate;
        let total = (subtotal - discount).max(Decimal::ZERO);

        debug!(
            days,
            lines = lines.len(),
            subtotal = %subtotal,
            discount_rate = %discount_rate,
            total = %total,
            "Quote calculated"
        );

        QuoteBreakdown {
            region: region.key.to_string(),
            service: service.key.to_string(),
            insurance: insurance.key.to_string(),
            delivery: delivery.key.to_string(),
            lines,
            total_days: days,
            rental_total,
            insurance_total,
            delivery_total,
            subtotal,
            discount_rate,
            discount,
            total,
        }
    }

    fn price_line(ctx: &LineContext, key: &str, quantity: &QuantityInput) -> LineItem {
        let catalogued = vehicle_type(key);
        if catalogued.is_none() {
            debug!(vehicle_type = %key, "Unknown vehicle type, pricing at zero");
        }

        let quantity = quantity.resolve();
        let qty = Decimal::from(quantity);
        let base = catalogued.map(|v| v.base_daily_rate).unwrap_or(Decimal::ZERO);
        let daily_rate = base * ctx.rate_multiplier;

        LineItem {
            key: key.to_string(),
            label: catalogued.map(|v| v.label).unwrap_or(key).to_string(),
            quantity,
            daily_rate,
            rental: daily_rate * qty * ctx.days,
            insurance: ctx.insurance.per_asset_per_day * qty * ctx.days,
            delivery: ctx.delivery.per_asset * qty,
        }
    }
}
