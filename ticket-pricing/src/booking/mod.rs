//! Booking Request Module
//!
//! - [`BookingRequest`]: validated, immutable pricing input
//! - [`BookingRequestInput`]: untyped wire shape received from a calling layer

mod input;
mod request;

pub use input::{BookingRequestInput, PromoInput, load_booking};
pub use request::{BookingRequest, MAX_BOOKING_FEE};
