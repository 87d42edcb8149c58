//! Fixed commission rules.
//!
//! Both tables are ordered; the calculators emit one row per entry in the
//! order given here.

use rust_decimal_macros::dec;

use crate::models::{AverageUnitsTier, SalesTier};

/// Sales bands as fractions of the target. Contiguous over `[0, +inf)`.
pub const SALES_TIERS: [SalesTier; 5] = [
    SalesTier {
        label: "Up to 50 %",
        lower_fraction: dec!(0.0),
        upper_fraction: Some(dec!(0.5)),
        rate: dec!(0.000),
    },
    SalesTier {
        label: "50 % – 80 %",
        lower_fraction: dec!(0.5),
        upper_fraction: Some(dec!(0.8)),
        rate: dec!(0.008),
    },
    SalesTier {
        label: "80 % – 90 %",
        lower_fraction: dec!(0.8),
        upper_fraction: Some(dec!(0.9)),
        rate: dec!(0.011),
    },
    SalesTier {
        label: "90 % – 100 %",
        lower_fraction: dec!(0.9),
        upper_fraction: Some(dec!(1.0)),
        rate: dec!(0.014),
    },
    SalesTier {
        label: "Above 100 %",
        lower_fraction: dec!(1.0),
        upper_fraction: None,
        rate: dec!(0.018),
    },
];

/// Average units per sale bands. Labels use the store's decimal-comma notation.
pub const AVERAGE_UNITS_TIERS: [AverageUnitsTier; 5] = [
    AverageUnitsTier {
        label: "< 1,70",
        rate: dec!(0.0000),
    },
    AverageUnitsTier {
        label: "1,70 – 1,79",
        rate: dec!(0.0005),
    },
    AverageUnitsTier {
        label: "1,80 – 2,09",
        rate: dec!(0.0010),
    },
    AverageUnitsTier {
        label: "2,10 – 2,19",
        rate: dec!(0.0020),
    },
    AverageUnitsTier {
        label: "≥ 2,20",
        rate: dec!(0.0050),
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sales_tiers_are_contiguous_from_zero() {
        assert_eq!(SALES_TIERS[0].lower_fraction, dec!(0));

        for pair in SALES_TIERS.windows(2) {
            assert_eq!(pair[0].upper_fraction, Some(pair[1].lower_fraction));
        }
    }

    #[test]
    fn only_last_sales_tier_is_open_ended() {
        let open: Vec<_> = SALES_TIERS.iter().filter(|t| t.is_open_ended()).collect();

        assert_eq!(open.len(), 1);
        assert!(SALES_TIERS[4].is_open_ended());
    }

    #[test]
    fn sales_rates_never_decrease() {
        assert!(SALES_TIERS.windows(2).all(|p| p[0].rate <= p[1].rate));
    }

    #[test]
    fn average_units_rates_match_rules() {
        let rates: Vec<_> = AVERAGE_UNITS_TIERS.iter().map(|t| t.rate).collect();

        assert_eq!(
            rates,
            vec![
                dec!(0),
                dec!(0.0005),
                dec!(0.0010),
                dec!(0.0020),
                dec!(0.0050)
            ]
        );
    }
}
