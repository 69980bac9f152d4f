//! Display formatting for quotes
//!
//! Amounts are rounded here and nowhere else. The format follows the Dutch
//! euro convention with no decimals: `€ 6.741`, where the separator after the
//! sign is a no-break space and thousands are grouped with `.`.

use std::fmt;

use fleet_common::QuoteBreakdown;
use rust_decimal::{Decimal, RoundingStrategy};

const NBSP: char = '\u{a0}';

/// Format an amount as whole euros, e.g. `€ 1.234.567`
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("€{NBSP}{sign}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Plain-text rendering of the pricing panel
pub struct QuoteSummary<'a>(pub &'a QuoteBreakdown);

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.0;

        writeln!(f, "Per-type breakdown ({} days)", quote.total_days)?;
        if quote.lines.is_empty() {
            writeln!(f, "  No vehicle types selected yet.")?;
        }
        for line in &quote.lines {
            let name = format!("{} x{}", line.label, line.quantity);
            writeln!(f, "  {:<34}{:>16}", name, format_eur(line.total()))?;
        }

        writeln!(f)?;
        writeln!(f, "{:<36}{:>16}", "Rental", format_eur(quote.rental_total))?;
        writeln!(f, "{:<36}{:>16}", "Insurance", format_eur(quote.insurance_total))?;
        writeln!(f, "{:<36}{:>16}", "Delivery", format_eur(quote.delivery_total))?;
        if quote.has_discount() {
            let label = format!("Duration discount ({}%)", quote.discount_percent());
            writeln!(f, "{:<36}{:>16}", label, format!("-{}", format_eur(quote.discount)))?;
        }
        writeln!(f, "{:<36}{:>16}", "Total", format_eur(quote.total))?;
        write!(f, "{} days, {} assets", quote.total_days, quote.asset_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_price;
    use fleet_common::QuoteRequest;
    use rust_decimal_macros::dec;

    fn eur(s: &str) -> String {
        format!("€{NBSP}{s}")
    }

    #[test]
    fn test_format_eur_grouping() {
        assert_eq!(format_eur(dec!(0)), eur("0"));
        assert_eq!(format_eur(dec!(999)), eur("999"));
        assert_eq!(format_eur(dec!(1000)), eur("1.000"));
        assert_eq!(format_eur(dec!(6741.3375)), eur("6.741"));
        assert_eq!(format_eur(dec!(1234567)), eur("1.234.567"));
    }

    #[test]
    fn test_format_eur_rounding() {
        assert_eq!(format_eur(dec!(72.5)), eur("73"));
        assert_eq!(format_eur(dec!(72.49)), eur("72"));
        assert_eq!(format_eur(dec!(999.5)), eur("1.000"));
        assert_eq!(format_eur(dec!(-0.4)), eur("0"));
        assert_eq!(format_eur(dec!(-1234.5)), eur("-1.235"));
    }

    #[test]
    fn test_summary_with_discount() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "region_key": "international",
                "service_key": "totalcare",
                "insurance_key": "essential",
                "delivery_key": "delivered",
                "vehicles": {"box": 1},
                "start_date": "2025-03-01",
                "end_date": "2025-05-29"
            }"#,
        )
        .unwrap();
        let text = QuoteSummary(&calculate_price(&request)).to_string();

        assert!(text.contains("Per-type breakdown (90 days)"));
        assert!(text.contains("Box Trailer x1"));
        assert!(text.contains("Duration discount (7%)"));
        assert!(text.contains(&format!("-{}", eur("507"))));
        assert!(text.contains(&eur("6.741")));
        assert!(text.ends_with("90 days, 1 assets"));
    }

    #[test]
    fn test_summary_without_lines_or_discount() {
        let request = QuoteRequest::new().with_dates(
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        );
        let text = QuoteSummary(&calculate_price(&request)).to_string();

        assert!(text.contains("No vehicle types selected yet."));
        assert!(!text.contains("Duration discount"));
    }
}
