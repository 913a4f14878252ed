//! Seat Zone Model

use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seating category (座位区域)
///
/// A category, not an individual numbered seat. Availability is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatZone {
    Vip,
    Premium,
    Standard,
    Balcony,
}

impl SeatZone {
    /// All zones, most expensive first
    pub const ALL: [SeatZone; 4] = [
        SeatZone::Vip,
        SeatZone::Premium,
        SeatZone::Standard,
        SeatZone::Balcony,
    ];

    /// Upper-case tag used on the wire and in summaries
    pub const fn as_str(&self) -> &'static str {
        match self {
            SeatZone::Vip => "VIP",
            SeatZone::Premium => "PREMIUM",
            SeatZone::Standard => "STANDARD",
            SeatZone::Balcony => "BALCONY",
        }
    }
}

impl fmt::Display for SeatZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatZone {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VIP" => Ok(SeatZone::Vip),
            "PREMIUM" => Ok(SeatZone::Premium),
            "STANDARD" => Ok(SeatZone::Standard),
            "BALCONY" => Ok(SeatZone::Balcony),
            _ => Err(PricingError::UnknownZone(s.to_string())),
        }
    }
}
