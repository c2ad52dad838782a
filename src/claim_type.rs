use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The kinds of claims a profile can hold.
///
/// Every function keyed on a claim type matches on it exhaustively, so a new
/// variant will not compile until each of them handles it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Basic,
    Twitter,
}

impl ClaimType {
    /// Every claim type, in the order defaults are added to a claim map.
    pub const ALL: [ClaimType; 2] = [ClaimType::Basic, ClaimType::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Twitter => "twitter",
        }
    }

    /// Map a verifiable credential `type` entry to the claim type it denotes.
    pub fn from_credential_type(vc_type: &str) -> Option<Self> {
        match vc_type {
            "BasicProfile" => Some(Self::Basic),
            "TwitterVerification" => Some(Self::Twitter),
            _ => None,
        }
    }

    /// The verifiable credential `type` entry issued for this claim type.
    pub fn credential_type(&self) -> &'static str {
        match self {
            Self::Basic => "BasicProfile",
            Self::Twitter => "TwitterVerification",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = Error;
    fn from_str(claim_type: &str) -> Result<Self, Self::Err> {
        match claim_type {
            "basic" => Ok(Self::Basic),
            "twitter" => Ok(Self::Twitter),
            other => Err(Error::UnknownClaimType(other.to_string())),
        }
    }
}
