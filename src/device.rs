//! Device capability shim for offline parsing.
//!
//! Parser implementations expect to pull output from a device. Offline there
//! is no device, so the adapter substitutes a canned stand-in exposing just
//! the execute capability, plus a context describing how the registry
//! resolves a parser for it.

use crate::platform::Nos;
use serde::{Deserialize, Serialize};

/// The single capability a parser may rely on from its device.
pub trait ShowDevice {
    /// Execute a show command and return its raw output.
    fn execute(&self, command: &str) -> String;
}

/// Stand-in device that answers every command with one canned output.
#[derive(Debug, Clone)]
pub struct CannedDevice {
    output: String,
}

impl CannedDevice {
    /// Create a device that returns `output` for every execute call.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl ShowDevice for CannedDevice {
    fn execute(&self, _command: &str) -> String {
        self.output.clone()
    }
}

/// Dimensions the registry consults when resolving a parser, in priority
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbstractionToken {
    /// Resolve by network operating system.
    Os,
}

/// Identity the registry needs to resolve a parser: which NOS the output
/// came from, and in what order the lookup dimensions apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceContext {
    os: Nos,
    abstraction_order: Vec<AbstractionToken>,
}

impl DeviceContext {
    /// Context for a device running `os`, resolving by OS only.
    pub fn new(os: Nos) -> Self {
        Self {
            os,
            abstraction_order: vec![AbstractionToken::Os],
        }
    }

    /// The NOS this context is tagged with.
    pub fn os(&self) -> Nos {
        self.os
    }

    /// Lookup dimensions in the order the registry consults them.
    pub fn abstraction_order(&self) -> &[AbstractionToken] {
        &self.abstraction_order
    }
}
