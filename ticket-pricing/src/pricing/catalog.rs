//! Seat Zone Catalog
//!
//! Fixed base unit price per seat zone.

use rust_decimal::Decimal;
use shared::{PricingResult, SeatZone};

const VIP_PRICE: Decimal = Decimal::from_parts(18000, 0, 0, false, 2);
const PREMIUM_PRICE: Decimal = Decimal::from_parts(12000, 0, 0, false, 2);
const STANDARD_PRICE: Decimal = Decimal::from_parts(8000, 0, 0, false, 2);
const BALCONY_PRICE: Decimal = Decimal::from_parts(6000, 0, 0, false, 2);

/// Base price of one seat in `zone`
pub const fn base_price(zone: SeatZone) -> Decimal {
    match zone {
        SeatZone::Vip => VIP_PRICE,
        SeatZone::Premium => PREMIUM_PRICE,
        SeatZone::Standard => STANDARD_PRICE,
        SeatZone::Balcony => BALCONY_PRICE,
    }
}

/// Base price for an untyped zone name (e.g. from deserialized input)
///
/// Fails with `UnknownZone` for names outside the catalog; no default price
/// is substituted.
pub fn base_price_for(name: &str) -> PricingResult<Decimal> {
    let zone: SeatZone = name.parse()?;
    Ok(base_price(zone))
}

/// Sum of base prices over every selected seat
pub fn seat_subtotal(zones: &[SeatZone]) -> Decimal {
    zones.iter().map(|zone| base_price(*zone)).sum()
}
