//! Money helpers

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to cents (half-up) and pad to exactly two fractional digits
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Clamp negative amounts to zero
#[inline]
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Multiplier `1 - percent/100` for a percentage-point discount
#[inline]
pub fn percent_off_multiplier(percent: Decimal) -> Decimal {
    Decimal::ONE - percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_money(dec("10.005")).to_string(), "10.01");
        assert_eq!(round_money(dec("489.294")).to_string(), "489.29");
        assert_eq!(round_money(dec("0.125")).to_string(), "0.13");
        assert_eq!(round_money(dec("0.124999")).to_string(), "0.12");
    }

    #[test]
    fn test_round_pads_to_two_places() {
        assert_eq!(round_money(Decimal::from(242)).to_string(), "242.00");
        assert_eq!(round_money(dec("177.8")).to_string(), "177.80");
        assert_eq!(round_money(dec("177.85")).scale(), 2);
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(floor_at_zero(dec("-12.5")), Decimal::ZERO);
        assert_eq!(floor_at_zero(dec("12.5")), dec("12.5"));
    }

    #[test]
    fn test_percent_off_multiplier() {
        assert_eq!(percent_off_multiplier(Decimal::from(15)), dec("0.85"));
        assert_eq!(percent_off_multiplier(Decimal::ZERO), Decimal::ONE);
        assert!(percent_off_multiplier(Decimal::from(150)) < Decimal::ZERO);
    }
}
