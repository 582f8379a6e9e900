//! Network operating system identifiers.
//!
//! The adapter supports a fixed set of four NOS families. Validation happens
//! at the string boundary; a constructed [`Nos`] is always valid.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported network operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nos {
    /// Cisco IOS
    Ios,
    /// Cisco IOS-XE
    IosXe,
    /// Cisco IOS-XR
    IosXr,
    /// Cisco NX-OS
    Nxos,
}

impl Nos {
    /// Every supported NOS, in canonical order.
    pub const ALL: [Nos; 4] = [Nos::Ios, Nos::IosXe, Nos::IosXr, Nos::Nxos];

    /// Canonical lowercase identifier for this NOS.
    pub fn as_str(&self) -> &'static str {
        match self {
            Nos::Ios => "ios",
            Nos::IosXe => "iosxe",
            Nos::IosXr => "iosxr",
            Nos::Nxos => "nxos",
        }
    }
}

impl fmt::Display for Nos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nos {
    type Err = Error;

    /// Exact-membership check: only the four canonical identifiers are
    /// accepted, no aliases or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Nos::Ios),
            "iosxe" => Ok(Nos::IosXe),
            "iosxr" => Ok(Nos::IosXr),
            "nxos" => Ok(Nos::Nxos),
            _ => Err(Error::UnsupportedNos {
                given: s.to_string(),
            }),
        }
    }
}
