//! Error codes for the ticket pricing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Money errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so calling layers can
/// forward them without knowing the Rust types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 4xxx: Booking ====================
    /// Seat selection is empty
    EmptySeatSelection = 4001,
    /// Seat zone is not in the catalog
    UnknownSeatZone = 4002,
    /// Membership tier is not defined
    UnknownMembershipTier = 4003,
    /// Promo type is not defined
    UnknownPromoType = 4004,

    // ==================== 5xxx: Money ====================
    /// Monetary amount out of range
    InvalidAmount = 5001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",

            ErrorCode::EmptySeatSelection => "Seat selection cannot be empty",
            ErrorCode::UnknownSeatZone => "Unknown seat zone",
            ErrorCode::UnknownMembershipTier => "Unknown membership tier",
            ErrorCode::UnknownPromoType => "Unknown promo type",

            ErrorCode::InvalidAmount => "Invalid monetary amount",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),

            // Booking
            4001 => Ok(ErrorCode::EmptySeatSelection),
            4002 => Ok(ErrorCode::UnknownSeatZone),
            4003 => Ok(ErrorCode::UnknownMembershipTier),
            4004 => Ok(ErrorCode::UnknownPromoType),

            // Money
            5001 => Ok(ErrorCode::InvalidAmount),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
