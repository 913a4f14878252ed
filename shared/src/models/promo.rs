//! Promo Model

use crate::error::PricingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Promo type enum
///
/// `Student` behaves like `Percent`; it is kept separate so receipts and
/// reports can tell the two apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoType {
    #[default]
    None,
    Percent,
    Fixed,
    Student,
}

impl PromoType {
    pub const ALL: [PromoType; 4] = [
        PromoType::None,
        PromoType::Percent,
        PromoType::Fixed,
        PromoType::Student,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PromoType::None => "NONE",
            PromoType::Percent => "PERCENT",
            PromoType::Fixed => "FIXED",
            PromoType::Student => "STUDENT",
        }
    }
}

impl fmt::Display for PromoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromoType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(PromoType::None),
            "PERCENT" => Ok(PromoType::Percent),
            "FIXED" => Ok(PromoType::Fixed),
            "STUDENT" => Ok(PromoType::Student),
            _ => Err(PricingError::unknown_promo_type(s)),
        }
    }
}

/// Promotional discount attached to a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promo {
    #[serde(rename = "type")]
    pub promo_type: PromoType,
    /// Percentage points for PERCENT/STUDENT (15 = 15%), currency amount for FIXED
    pub value: Decimal,
}

impl Promo {
    pub fn new(promo_type: PromoType, value: Decimal) -> Self {
        Self { promo_type, value }
    }

    pub fn none() -> Self {
        Self::new(PromoType::None, Decimal::ZERO)
    }

    pub fn percent(value: Decimal) -> Self {
        Self::new(PromoType::Percent, value)
    }

    pub fn fixed(value: Decimal) -> Self {
        Self::new(PromoType::Fixed, value)
    }

    pub fn student(value: Decimal) -> Self {
        Self::new(PromoType::Student, value)
    }

    /// Whether this promo changes the price at all
    pub fn is_active(&self) -> bool {
        self.promo_type != PromoType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_promo_type() {
        assert_eq!("student".parse::<PromoType>(), Ok(PromoType::Student));
        assert_eq!(
            "BOGO".parse::<PromoType>(),
            Err(PricingError::unknown_promo_type("BOGO"))
        );
    }

    #[test]
    fn test_promo_wire_format() {
        let promo: Promo = serde_json::from_str(r#"{"type":"FIXED","value":15.0}"#).unwrap();
        assert_eq!(promo, Promo::fixed(Decimal::from(15)));
        assert!(promo.is_active());
        assert!(!Promo::none().is_active());
    }
}
