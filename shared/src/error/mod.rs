//! Error system for ticket pricing
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`PricingError`]: Precondition failures raised by the pricing engine
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Money errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCode, PricingError};
//!
//! let err = PricingError::EmptySelection;
//! assert_eq!(err.code(), ErrorCode::EmptySeatSelection);
//! assert_eq!(err.code().code(), 4001);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{PricingError, PricingResult};
