//! Rate Tables
//!
//! Membership discount rates, promo discount functions and the two event
//! surcharges. These are fixed business rules.

use super::money::percent_off_multiplier;
use rust_decimal::Decimal;
use shared::{MembershipTier, Promo, PromoType};

/// Weekend surcharge (+10%) on the seat subtotal
pub const WEEKEND_SURCHARGE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// High-demand surcharge (+20%) after all discounts
pub const HIGH_DEMAND_SURCHARGE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

const GOLD_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
const SILVER_DISCOUNT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Discount rate for a membership tier (0.10 = 10% off)
pub const fn discount_rate(tier: MembershipTier) -> Decimal {
    match tier {
        MembershipTier::Gold => GOLD_DISCOUNT_RATE,
        MembershipTier::Silver => SILVER_DISCOUNT_RATE,
        MembershipTier::None => Decimal::ZERO,
    }
}

/// Multiply by `1 - discount_rate(tier)`
pub fn apply_membership_discount(running_total: Decimal, tier: MembershipTier) -> Decimal {
    running_total * (Decimal::ONE - discount_rate(tier))
}

/// Apply a promo to the running total
///
/// PERCENT and STUDENT take `value` percentage points off, FIXED subtracts
/// `value`. A promo never raises the total and never takes more than the
/// whole total: percent values are clamped to `0..=100` and fixed deductions
/// to `0..=running_total`, so arbitrarily large values cannot overflow.
pub fn apply_promo(running_total: Decimal, promo: Option<&Promo>) -> Decimal {
    let Some(promo) = promo else {
        return running_total;
    };

    match promo.promo_type {
        PromoType::Percent | PromoType::Student => {
            let percent = promo.value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            running_total * percent_off_multiplier(percent)
        }
        PromoType::Fixed => {
            let deduction = promo.value.clamp(Decimal::ZERO, running_total.max(Decimal::ZERO));
            running_total - deduction
        }
        PromoType::None => running_total,
    }
}

/// Multiply by `1 + rate`
#[inline]
pub fn apply_surcharge(running_total: Decimal, rate: Decimal) -> Decimal {
    running_total * (Decimal::ONE + rate)
}
