//! Caller/Reporting
//!
//! Presentation of priced bookings. Nothing here affects the price.

mod scenarios;
mod summary;

pub use scenarios::{Scenario, reference_scenarios};
pub use summary::{format_promo, format_seats, render_breakdown, render_summary};
