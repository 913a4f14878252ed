//! Booking Price Calculator
//!
//! Runs the pipeline over a booking request and keeps every intermediate
//! running total for display.

use super::pipeline::PricingStep;
use crate::booking::BookingRequest;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Event, MembershipTier, PricingResult, Promo, SeatZone};

/// Running total after one pipeline step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepAmount {
    pub step: PricingStep,
    /// Running total after this step
    pub amount: Decimal,
    /// False when a conditional step passed the total through unchanged
    pub applied: bool,
}

/// Result of booking price calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    /// One entry per step, in [`PricingStep::ORDER`]
    pub steps: Vec<StepAmount>,
    /// Final payable total, two decimal places
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Running total right after `step`
    pub fn amount_after(&self, step: PricingStep) -> Option<Decimal> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| s.amount)
    }

    pub fn seat_subtotal(&self) -> Option<Decimal> {
        self.amount_after(PricingStep::SeatSubtotal)
    }

    /// Steps that changed the running total
    pub fn applied_steps(&self) -> impl Iterator<Item = &StepAmount> {
        self.steps.iter().filter(|s| s.applied)
    }
}

/// Calculate the price of a booking, keeping all intermediate totals
///
/// # Calculation Steps
/// 1. Seat subtotal
/// 2. Weekend surcharge (+10%, on the subtotal)
/// 3. Booking fee (flat)
/// 4. Membership discount
/// 5. Promo discount
/// 6. High-demand surcharge (+20%, after discounts)
/// 7. Floor at zero, round half-up to cents
pub fn calculate_booking_price(request: &BookingRequest) -> PriceBreakdown {
    let mut running_total = Decimal::ZERO;
    let mut steps = Vec::with_capacity(PricingStep::ORDER.len());

    for step in PricingStep::ORDER {
        let applied = step.applies_to(request);
        running_total = step.apply(running_total, request);
        tracing::debug!(
            step = step.label(),
            applied,
            running_total = %running_total,
            "Pricing step"
        );
        steps.push(StepAmount {
            step,
            amount: running_total,
            applied,
        });
    }

    tracing::debug!(
        event = %request.event().name,
        seats = request.seats().len(),
        total = %running_total,
        "Booking priced"
    );

    PriceBreakdown {
        steps,
        total: running_total,
    }
}

/// Final payable total for a booking request
pub fn final_price(request: &BookingRequest) -> Decimal {
    calculate_booking_price(request).total
}

/// Compute the final price from loose inputs
///
/// # Errors
/// - `EmptySelection` when `seat_zones` is empty; nothing is computed
/// - `InvalidAmount` when the booking fee is outside `0..=MAX_BOOKING_FEE`
///   or an active promo carries a negative value
pub fn compute_final_price(
    event: &Event,
    seat_zones: &[SeatZone],
    tier: MembershipTier,
    promo: Option<Promo>,
) -> PricingResult<Decimal> {
    let request = BookingRequest::new(event.clone(), seat_zones.to_vec(), tier, promo)?;
    Ok(final_price(&request))
}
