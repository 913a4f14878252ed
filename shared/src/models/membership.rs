//! Membership Tier Model

use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership tier (会员等级)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    #[default]
    None,
    Silver,
    Gold,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::None,
        MembershipTier::Silver,
        MembershipTier::Gold,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::None => "NONE",
            MembershipTier::Silver => "SILVER",
            MembershipTier::Gold => "GOLD",
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(MembershipTier::None),
            "SILVER" => Ok(MembershipTier::Silver),
            "GOLD" => Ok(MembershipTier::Gold),
            _ => Err(PricingError::unknown_tier(s)),
        }
    }
}
