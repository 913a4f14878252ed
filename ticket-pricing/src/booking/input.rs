//! Booking Request Input
//!
//! Wire shape of a booking as a calling layer receives it. Zone, tier and
//! promo type arrive as plain strings and are checked against their
//! enumerations when converted; unknown names are never replaced by defaults.

use super::request::BookingRequest;
use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{Event, MembershipTier, PricingError, PricingResult, Promo, PromoType, SeatZone};
use std::path::Path;

/// Untyped booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequestInput {
    pub event: Event,
    /// Seat zone names, e.g. `["VIP", "PREMIUM"]`
    pub seats: Vec<String>,
    /// Membership tier name (absent = NONE)
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub promo: Option<PromoInput>,
}

/// Untyped promo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoInput {
    #[serde(rename = "type")]
    pub promo_type: String,
    pub value: Decimal,
}

impl PromoInput {
    fn into_promo(self) -> PricingResult<Promo> {
        let promo_type: PromoType = self.promo_type.parse()?;
        Ok(Promo::new(promo_type, self.value))
    }
}

impl BookingRequestInput {
    /// Convert into a validated [`BookingRequest`]
    ///
    /// An empty seat list fails with `EmptySelection` before any name is parsed.
    pub fn into_request(self) -> PricingResult<BookingRequest> {
        if self.seats.is_empty() {
            return Err(PricingError::EmptySelection);
        }

        let seats = self
            .seats
            .iter()
            .map(|name| name.parse::<SeatZone>())
            .collect::<PricingResult<Vec<_>>>()?;

        let tier = match self.membership.as_deref() {
            Some(name) => name.parse::<MembershipTier>()?,
            None => MembershipTier::None,
        };

        let promo = self.promo.map(PromoInput::into_promo).transpose()?;

        BookingRequest::new(self.event, seats, tier, promo)
    }
}

impl TryFrom<BookingRequestInput> for BookingRequest {
    type Error = PricingError;

    fn try_from(input: BookingRequestInput) -> Result<Self, Self::Error> {
        input.into_request()
    }
}

/// Read a JSON booking file and validate it
pub fn load_booking(path: &Path) -> anyhow::Result<BookingRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read booking file {}", path.display()))?;
    let input: BookingRequestInput = serde_json::from_str(&content)
        .with_context(|| format!("Invalid booking JSON in {}", path.display()))?;
    let request = input
        .into_request()
        .with_context(|| format!("Invalid booking request in {}", path.display()))?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> BookingRequestInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_input_defaults() {
        let input = parse(
            r#"{
                "event": {"name": "Movie Night", "is_weekend": false, "booking_fee": 2.0},
                "seats": ["STANDARD", "standard", "Standard"]
            }"#,
        );
        let request = input.into_request().unwrap();
        assert_eq!(request.seats(), &[SeatZone::Standard; 3]);
        assert_eq!(request.tier(), MembershipTier::None);
        assert!(request.raw_promo().is_none());
    }

    #[test]
    fn test_unknown_zone_surfaces() {
        let input = parse(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": ["VIP", "FRONT_ROW"],
                "membership": "GOLD"
            }"#,
        );
        assert_eq!(
            input.into_request(),
            Err(PricingError::UnknownZone("FRONT_ROW".to_string()))
        );
    }

    #[test]
    fn test_unknown_tier_and_promo_type_surface() {
        let tier = parse(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": ["VIP"],
                "membership": "PLATINUM"
            }"#,
        );
        assert_eq!(
            tier.into_request(),
            Err(PricingError::unknown_tier("PLATINUM"))
        );

        let promo = parse(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": ["VIP"],
                "promo": {"type": "BOGO", "value": 50}
            }"#,
        );
        assert_eq!(
            promo.into_request(),
            Err(PricingError::unknown_promo_type("BOGO"))
        );
    }

    #[test]
    fn test_promo_without_value_rejected() {
        let result: Result<BookingRequestInput, _> = serde_json::from_str(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": ["VIP"],
                "promo": {"type": "FIXED"}
            }"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field `value`"));
    }

    #[test]
    fn test_negative_promo_value_surfaces() {
        let input = parse(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": ["VIP"],
                "promo": {"type": "PERCENT", "value": -20}
            }"#,
        );
        assert!(matches!(
            input.into_request(),
            Err(PricingError::InvalidAmount { field: "promo_value", .. })
        ));
    }

    #[test]
    fn test_empty_seats_checked_first() {
        let input = parse(
            r#"{
                "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
                "seats": [],
                "membership": "PLATINUM"
            }"#,
        );
        assert_eq!(
            BookingRequest::try_from(input),
            Err(PricingError::EmptySelection)
        );
    }
}
