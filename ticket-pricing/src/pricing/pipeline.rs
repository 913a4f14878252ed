//! Pricing Pipeline Steps
//!
//! Each step is a pure function of the running total and the booking request.
//! Steps run in [`PricingStep::ORDER`]; every step works on the cumulative
//! total of the step before it, so the order is part of the price.

use super::catalog::seat_subtotal;
use super::money::{floor_at_zero, round_money};
use super::rates::{
    HIGH_DEMAND_SURCHARGE_RATE, WEEKEND_SURCHARGE_RATE, apply_membership_discount, apply_promo,
    apply_surcharge,
};
use crate::booking::BookingRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named transformation in the pricing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingStep {
    /// Sum of base seat prices
    SeatSubtotal,
    /// ×1.10 when the event is on a weekend
    WeekendSurcharge,
    /// Flat fee, once per booking
    BookingFee,
    /// ×(1 - tier rate)
    MembershipDiscount,
    /// Percent/student multiplier or fixed deduction
    PromoDiscount,
    /// ×1.20 when the event is high demand
    HighDemandSurcharge,
    /// Clamp to zero, then round half-up to cents
    FloorAndRound,
}

impl PricingStep {
    /// Canonical execution order
    pub const ORDER: [PricingStep; 7] = [
        PricingStep::SeatSubtotal,
        PricingStep::WeekendSurcharge,
        PricingStep::BookingFee,
        PricingStep::MembershipDiscount,
        PricingStep::PromoDiscount,
        PricingStep::HighDemandSurcharge,
        PricingStep::FloorAndRound,
    ];

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            PricingStep::SeatSubtotal => "Seat subtotal",
            PricingStep::WeekendSurcharge => "Weekend surcharge",
            PricingStep::BookingFee => "Booking fee",
            PricingStep::MembershipDiscount => "Membership discount",
            PricingStep::PromoDiscount => "Promo discount",
            PricingStep::HighDemandSurcharge => "High-demand surcharge",
            PricingStep::FloorAndRound => "Floor and round",
        }
    }

    /// Whether this step takes effect for `request`
    ///
    /// Conditional steps that do not apply pass the running total through.
    pub fn applies_to(&self, request: &BookingRequest) -> bool {
        match self {
            PricingStep::SeatSubtotal | PricingStep::BookingFee | PricingStep::FloorAndRound => {
                true
            }
            PricingStep::WeekendSurcharge => request.event().is_weekend,
            PricingStep::MembershipDiscount => request.tier() != shared::MembershipTier::None,
            PricingStep::PromoDiscount => request.promo().is_some(),
            PricingStep::HighDemandSurcharge => request.event().is_high_demand,
        }
    }

    /// Apply this step to the running total
    pub fn apply(self, running_total: Decimal, request: &BookingRequest) -> Decimal {
        if !self.applies_to(request) {
            return running_total;
        }

        match self {
            PricingStep::SeatSubtotal => running_total + seat_subtotal(request.seats()),
            PricingStep::WeekendSurcharge => apply_surcharge(running_total, WEEKEND_SURCHARGE_RATE),
            PricingStep::BookingFee => running_total + request.event().booking_fee,
            PricingStep::MembershipDiscount => {
                apply_membership_discount(running_total, request.tier())
            }
            PricingStep::PromoDiscount => apply_promo(running_total, request.promo()),
            PricingStep::HighDemandSurcharge => {
                apply_surcharge(running_total, HIGH_DEMAND_SURCHARGE_RATE)
            }
            PricingStep::FloorAndRound => round_money(floor_at_zero(running_total)),
        }
    }
}

impl fmt::Display for PricingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Event, MembershipTier, Promo, SeatZone};

    fn weekday_request() -> BookingRequest {
        BookingRequest::new(
            Event::new("Movie Night", false, Decimal::from(2)),
            vec![SeatZone::Standard; 3],
            MembershipTier::None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_order_ends_with_floor_and_round() {
        assert_eq!(PricingStep::ORDER[0], PricingStep::SeatSubtotal);
        assert_eq!(PricingStep::ORDER[6], PricingStep::FloorAndRound);
        let demand = PricingStep::ORDER
            .iter()
            .position(|s| *s == PricingStep::HighDemandSurcharge);
        let promo = PricingStep::ORDER
            .iter()
            .position(|s| *s == PricingStep::PromoDiscount);
        assert!(demand > promo);
    }

    #[test]
    fn test_conditional_steps_pass_through() {
        let request = weekday_request();
        let total = Decimal::from(240);
        assert_eq!(PricingStep::WeekendSurcharge.apply(total, &request), total);
        assert_eq!(PricingStep::MembershipDiscount.apply(total, &request), total);
        assert_eq!(PricingStep::PromoDiscount.apply(total, &request), total);
        assert_eq!(PricingStep::HighDemandSurcharge.apply(total, &request), total);
    }

    #[test]
    fn test_seat_subtotal_adds_to_running_total() {
        let request = weekday_request();
        assert_eq!(
            PricingStep::SeatSubtotal.apply(Decimal::ZERO, &request),
            Decimal::from(240)
        );
    }

    #[test]
    fn test_booking_fee_is_flat() {
        let request = weekday_request();
        assert_eq!(
            PricingStep::BookingFee.apply(Decimal::from(240), &request),
            Decimal::from(242)
        );
    }

    #[test]
    fn test_floor_and_round() {
        let request = weekday_request();
        let negative = Decimal::from(-40);
        assert_eq!(
            PricingStep::FloorAndRound.apply(negative, &request).to_string(),
            "0.00"
        );
        let residue = Decimal::from_str_exact("489.294").unwrap();
        assert_eq!(
            PricingStep::FloorAndRound.apply(residue, &request).to_string(),
            "489.29"
        );
    }

    #[test]
    fn test_promo_step_applies_only_with_active_promo() {
        let request = BookingRequest::new(
            Event::new("Sport Day", true, Decimal::from(5)),
            vec![SeatZone::Balcony],
            MembershipTier::Silver,
            Some(Promo::none()),
        )
        .unwrap();
        assert!(!PricingStep::PromoDiscount.applies_to(&request));
        assert!(PricingStep::WeekendSurcharge.applies_to(&request));
        assert!(PricingStep::MembershipDiscount.applies_to(&request));
    }
}
