//! Reference scenarios printed by `ticket-pricing scenarios`

use crate::booking::BookingRequest;
use rust_decimal::Decimal;
use shared::{Event, MembershipTier, PricingResult, Promo, SeatZone};

/// A titled sample booking
#[derive(Debug, Clone)]
pub struct Scenario {
    pub title: String,
    pub request: BookingRequest,
}

/// Concert, movie night and sport day sample bookings
pub fn reference_scenarios() -> PricingResult<Vec<Scenario>> {
    let concert = Event::new("Campus Concert", true, Decimal::from(5)).with_high_demand(true);
    let movie_night = Event::new("Movie Night", false, Decimal::from(2));
    let sport_day = Event::new("Campus Sport Day", true, Decimal::from(5));

    Ok(vec![
        Scenario {
            title: "Payment Summary 1 (Concert)".to_string(),
            request: BookingRequest::new(
                concert,
                vec![SeatZone::Vip, SeatZone::Vip, SeatZone::Premium],
                MembershipTier::Gold,
                Some(Promo::student(Decimal::from(15))),
            )?,
        },
        Scenario {
            title: "Payment Summary 2 (Movie Night)".to_string(),
            request: BookingRequest::new(
                movie_night,
                vec![SeatZone::Standard; 3],
                MembershipTier::None,
                None,
            )?,
        },
        Scenario {
            title: "Payment Summary 3 (Sport Day)".to_string(),
            request: BookingRequest::new(
                sport_day,
                vec![SeatZone::Balcony; 3],
                MembershipTier::Silver,
                Some(Promo::fixed(Decimal::from(15))),
            )?,
        },
    ])
}
