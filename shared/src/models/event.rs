//! Event Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event attributes that affect pricing (活动)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// +10% on the seat subtotal
    pub is_weekend: bool,
    /// Flat fee, charged once per booking
    pub booking_fee: Decimal,
    /// +20% applied after all discounts
    #[serde(default)]
    pub is_high_demand: bool,
}

impl Event {
    /// Create an event without demand pricing
    pub fn new(name: impl Into<String>, is_weekend: bool, booking_fee: Decimal) -> Self {
        Self {
            name: name.into(),
            is_weekend,
            booking_fee,
            is_high_demand: false,
        }
    }

    /// Set the high-demand flag
    pub fn with_high_demand(mut self, is_high_demand: bool) -> Self {
        self.is_high_demand = is_high_demand;
        self
    }
}
