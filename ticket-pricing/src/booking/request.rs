//! Booking Request

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Event, MembershipTier, PricingError, PricingResult, Promo, SeatZone};

/// Largest booking fee a request may carry
pub const MAX_BOOKING_FEE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Immutable input bundle for one pricing run
///
/// Only constructible through [`BookingRequest::new`], so every instance has a
/// non-empty seat selection, a booking fee within `0..=MAX_BOOKING_FEE` and
/// no active promo with a negative value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    event: Event,
    seats: Vec<SeatZone>,
    tier: MembershipTier,
    promo: Option<Promo>,
}

impl BookingRequest {
    /// Validate and build a booking request
    ///
    /// The empty-selection check runs first, then the booking fee, then the
    /// promo value. A `NONE` promo's value is never inspected.
    pub fn new(
        event: Event,
        seats: Vec<SeatZone>,
        tier: MembershipTier,
        promo: Option<Promo>,
    ) -> PricingResult<Self> {
        if seats.is_empty() {
            return Err(PricingError::EmptySelection);
        }

        if event.booking_fee < Decimal::ZERO || event.booking_fee > MAX_BOOKING_FEE {
            return Err(PricingError::InvalidAmount {
                field: "booking_fee",
                value: event.booking_fee,
            });
        }

        if let Some(promo) = promo.as_ref().filter(|p| p.is_active()) {
            if promo.value < Decimal::ZERO {
                return Err(PricingError::InvalidAmount {
                    field: "promo_value",
                    value: promo.value,
                });
            }
        }

        Ok(Self {
            event,
            seats,
            tier,
            promo,
        })
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Seat selections in the order they were made
    pub fn seats(&self) -> &[SeatZone] {
        &self.seats
    }

    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    /// The promo, if present and not `NONE`
    pub fn promo(&self) -> Option<&Promo> {
        self.promo.as_ref().filter(|p| p.is_active())
    }

    /// The promo exactly as supplied
    pub fn raw_promo(&self) -> Option<&Promo> {
        self.promo.as_ref()
    }
}
