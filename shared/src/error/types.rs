//! Pricing error type

use super::codes::ErrorCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or pricing a booking
///
/// Every variant is a precondition failure: the pipeline checks them before
/// computing anything and never fails partway through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The seat-zone list has zero elements
    #[error("Seat selection cannot be empty")]
    EmptySelection,

    /// A zone name outside the catalog reached a lookup
    #[error("Unknown seat zone: {0}")]
    UnknownZone(String),

    /// A tier or promo type name outside its enumeration
    #[error("Unknown {kind}: {value}")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// A monetary input outside its allowed range
    #[error("{field} out of range, got {value}")]
    InvalidAmount { field: &'static str, value: Decimal },
}

impl PricingError {
    /// Kind label for membership tier lookups
    pub const MEMBERSHIP_TIER: &'static str = "membership tier";
    /// Kind label for promo type lookups
    pub const PROMO_TYPE: &'static str = "promo type";

    /// Create an unknown membership tier error
    pub fn unknown_tier(value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            kind: Self::MEMBERSHIP_TIER,
            value: value.into(),
        }
    }

    /// Create an unknown promo type error
    pub fn unknown_promo_type(value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            kind: Self::PROMO_TYPE,
            value: value.into(),
        }
    }

    /// Map this error to its [`ErrorCode`]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptySelection => ErrorCode::EmptySeatSelection,
            Self::UnknownZone(_) => ErrorCode::UnknownSeatZone,
            Self::UnknownEnumValue { kind, .. } if *kind == Self::MEMBERSHIP_TIER => {
                ErrorCode::UnknownMembershipTier
            }
            Self::UnknownEnumValue { kind, .. } if *kind == Self::PROMO_TYPE => {
                ErrorCode::UnknownPromoType
            }
            Self::UnknownEnumValue { .. } => ErrorCode::InvalidFormat,
            Self::InvalidAmount { .. } => ErrorCode::InvalidAmount,
        }
    }
}

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
