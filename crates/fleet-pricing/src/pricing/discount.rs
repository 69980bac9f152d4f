//! Duration discount tiers
//!
//! One rate per quote, chosen by total rental days and applied to the
//! combined subtotal. Tiers are evaluated top-down, first hit wins.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minimum rental length and the rate it unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    pub min_days: u64,
    pub rate: Decimal,
}

/// Longest tier first
pub static DURATION_DISCOUNTS: [DiscountTier; 3] = [
    DiscountTier { min_days: 180, rate: dec!(0.12) },
    DiscountTier { min_days: 90, rate: dec!(0.07) },
    DiscountTier { min_days: 30, rate: dec!(0.03) },
];

/// Discount rate for a rental of `days`; zero below the first tier
pub fn duration_discount(days: u64) -> Decimal {
    DURATION_DISCOUNTS
        .iter()
        .find(|tier| days >= tier.min_days)
        .map(|tier| tier.rate)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(duration_discount(0), Decimal::ZERO);
        assert_eq!(duration_discount(29), Decimal::ZERO);
        assert_eq!(duration_discount(30), dec!(0.03));
        assert_eq!(duration_discount(89), dec!(0.03));
        assert_eq!(duration_discount(90), dec!(0.07));
        assert_eq!(duration_discount(179), dec!(0.07));
        assert_eq!(duration_discount(180), dec!(0.12));
        assert_eq!(duration_discount(10_000), dec!(0.12));
    }

    #[test]
    fn test_tiers_sorted_descending() {
        assert!(DURATION_DISCOUNTS
            .windows(2)
            .all(|pair| pair[0].min_days > pair[1].min_days && pair[0].rate > pair[1].rate));
    }
}
