//! Ticket Pricing Module
//!
//! Seat catalog, rate tables and the ordered pricing pipeline.
//! All arithmetic uses rust_decimal; totals are rounded to cents only at the
//! end of the pipeline.

pub mod catalog;
mod calculator;
pub mod money;
pub mod pipeline;
pub mod rates;

pub use calculator::*;
pub use catalog::{base_price, base_price_for, seat_subtotal};
pub use pipeline::PricingStep;
pub use rates::{apply_membership_discount, apply_promo, discount_rate};
