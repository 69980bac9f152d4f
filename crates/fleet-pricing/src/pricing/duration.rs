//! Rental-day counting

use chrono::NaiveDate;
use fleet_common::DEFAULT_RENTAL_DAYS;
use tracing::debug;

/// Days in `[start, end]`, both ends included
///
/// A same-day booking is 1 day. An end before the start is 0 days, not an
/// error.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> u64 {
    let raw = end.signed_duration_since(start).num_days() + 1;
    u64::try_from(raw).unwrap_or(0)
}

/// Days to price for an optional date range
///
/// Falls back to [`DEFAULT_RENTAL_DAYS`] only when a date is missing. A
/// present but inverted range still counts as 0 days.
pub fn total_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u64 {
    match (start, end) {
        (Some(start), Some(end)) => rental_days(start, end),
        _ => {
            debug!(days = DEFAULT_RENTAL_DAYS, "Incomplete date range, using default duration");
            DEFAULT_RENTAL_DAYS
        }
    }
}
