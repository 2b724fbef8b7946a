use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic deployment of the platform tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    #[default]
    NA,
    EU,
    AP,
    CA,
}

impl Region {
    pub const VALID_VALUES: &'static [&'static str] = &["NA", "EU", "AP", "CA"];

    /// Top-level domain serving this region
    pub fn domain(&self) -> &'static str {
        match self {
            Region::NA => "pingone.com",
            Region::EU => "pingone.eu",
            Region::AP => "pingone.asia",
            Region::CA => "pingone.ca",
        }
    }

    pub fn api_hostname(&self) -> String {
        format!("api.{}", self.domain())
    }

    pub fn auth_hostname(&self) -> String {
        format!("auth.{}", self.domain())
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NA" => Some(Region::NA),
            "EU" => Some(Region::EU),
            "AP" | "ASIA" => Some(Region::AP),
            "CA" => Some(Region::CA),
            _ => None,
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::parse(s).ok_or_else(|| {
            format!(
                "unknown region '{}' (expected one of {})",
                s,
                Region::VALID_VALUES.join(", ")
            )
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::AP => "AP",
            Region::CA => "CA",
        };
        f.write_str(s)
    }
}
