use serde::{Deserialize, Serialize};
use std::fmt;

/// Product marker listed in an environment's bill of materials.
///
/// Unknown markers deserialize to `Other` so a new platform product never
/// breaks manifest parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "PING_ONE_BASE")]
    Base,
    #[serde(rename = "PING_ONE_MFA")]
    Mfa,
    #[serde(rename = "PING_ONE_RISK")]
    Risk,
    #[serde(rename = "PING_ONE_VERIFY")]
    Verify,
    #[serde(rename = "PING_ONE_DAVINCI")]
    DaVinci,
    #[serde(untagged)]
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Base => "PING_ONE_BASE",
            ProductType::Mfa => "PING_ONE_MFA",
            ProductType::Risk => "PING_ONE_RISK",
            ProductType::Verify => "PING_ONE_VERIFY",
            ProductType::DaVinci => "PING_ONE_DAVINCI",
            ProductType::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
