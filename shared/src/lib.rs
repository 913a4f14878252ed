//! Shared types for the ticket pricing workspace
//!
//! Domain models and the error system used by the pricing engine and by
//! any calling layer that builds booking requests.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorCode, PricingError, PricingResult};
pub use models::{Event, MembershipTier, Promo, PromoType, SeatZone};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
