use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Driving license category, ordered by privilege (`A` lowest, `E` highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    A,
    B,
    C,
    D,
    E,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown license type '{0}'")]
pub struct ParseLicenseError(pub String);

impl LicenseType {
    pub const ALL: [LicenseType; 5] = [
        LicenseType::A,
        LicenseType::B,
        LicenseType::C,
        LicenseType::D,
        LicenseType::E,
    ];

    /// True when a holder of `self` may operate a truck requiring `required`.
    pub fn covers(self, required: LicenseType) -> bool {
        self >= required
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LicenseType::A => "A",
            LicenseType::B => "B",
            LicenseType::C => "C",
            LicenseType::D => "D",
            LicenseType::E => "E",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseType {
    type Err = ParseLicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(LicenseType::A),
            "B" | "b" => Ok(LicenseType::B),
            "C" | "c" => Ok(LicenseType::C),
            "D" | "d" => Ok(LicenseType::D),
            "E" | "e" => Ok(LicenseType::E),
            other => Err(ParseLicenseError(other.to_string())),
        }
    }
}
