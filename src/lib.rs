//! # Showparse - Offline Show Command Parsing
//!
//! Showparse parses network device show-command output into structured data
//! without a live device connection or an inventory definition. Point it at
//! a raw output string (or a file of captured output), name the command and
//! the network operating system, and it resolves the registered parser for
//! that combination and runs it.
//!
//! ## Core Concepts
//!
//! - **NOS**: one of four supported network operating systems (`ios`,
//!   `iosxe`, `iosxr`, `nxos`)
//! - **Parsers**: [`ShowParser`](registry::ShowParser) implementations
//!   registered per NOS and command; they do the actual pattern matching
//! - **Registry**: ranked lookup from (command, device context) to a parser
//! - **Canned device**: a stand-in exposing just the `execute` capability
//!   parsers expect, answering with the captured output
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use showparse::prelude::*;
//! use std::sync::Arc;
//!
//! let mut parser = OfflineParser::new("iosxe")?;
//! parser
//!     .registry_mut()
//!     .register(Nos::IosXe, "show version", Arc::new(ShowVersionParser));
//!
//! let parsed = parser.parse_string("show version", &captured_output)?;
//! println!("{}", serde_json::to_string_pretty(&parsed)?);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of the types most callers need.

    pub use crate::device::{AbstractionToken, CannedDevice, DeviceContext, ShowDevice};
    pub use crate::error::{Error, Result};
    pub use crate::parse::OfflineParser;
    pub use crate::platform::Nos;
    pub use crate::registry::{ParsedOutput, ParserRegistry, ShowParser};
}

/// Error types and result aliases for showparse operations.
pub mod error;

/// The fixed set of supported network operating system identifiers.
pub mod platform;

/// Device capability shim: the single-method [`ShowDevice`](device::ShowDevice)
/// trait parsers pull output through, the canned stand-in that satisfies it
/// offline, and the context the registry resolves parsers against.
pub mod device;

/// Parser registry with ranked (command, NOS) lookup.
///
/// The registry is the seam to the actual parsing implementations; this
/// crate ships none of its own.
pub mod registry;

/// The offline parse adapter tying the pieces together.
pub mod parse;

/// Returns the current version of showparse.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
