//! Data models
//!
//! Value objects for a single booking. All of them are immutable once built
//! and carry no identity beyond their fields.

pub mod event;
pub mod membership;
pub mod promo;
pub mod seat_zone;

// Re-exports
pub use event::*;
pub use membership::*;
pub use promo::*;
pub use seat_zone::*;
