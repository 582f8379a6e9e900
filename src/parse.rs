//! Offline show-command parse adapter.
//!
//! [`OfflineParser`] is the public entry point: validate a NOS once, then
//! feed it command/output pairs (inline strings or files) and get back the
//! structured mapping the registered parser produces.

use crate::device::{CannedDevice, DeviceContext};
use crate::error::{Error, Result};
use crate::platform::Nos;
use crate::registry::{normalize_spaces, ParsedOutput, ParserRegistry};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parses show-command output against registered parsers, no device needed.
///
/// One instance holds the command/output pair of the call in flight, so it
/// is not safe to share across threads without external locking.
#[derive(Clone)]
pub struct OfflineParser {
    nos: Nos,
    context: DeviceContext,
    registry: ParserRegistry,
    show_command: Option<String>,
    show_output: Option<String>,
}

impl OfflineParser {
    /// Create an adapter for `nos`, which must be one of the supported
    /// identifiers (`ios`, `iosxe`, `iosxr`, `nxos`).
    pub fn new(nos: &str) -> Result<Self> {
        Ok(Self::with_nos(Nos::from_str(nos)?))
    }

    /// Create an adapter for an already-validated NOS.
    pub fn with_nos(nos: Nos) -> Self {
        Self {
            nos,
            context: DeviceContext::new(nos),
            registry: ParserRegistry::new(),
            show_command: None,
            show_output: None,
        }
    }

    /// Replace the parser registry.
    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The NOS this adapter was built for.
    pub fn nos(&self) -> Nos {
        self.nos
    }

    /// The registry parsers are resolved from.
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Mutable registry access for incremental parser registration.
    pub fn registry_mut(&mut self) -> &mut ParserRegistry {
        &mut self.registry
    }

    /// Parse `output` as the result of `show_command`.
    ///
    /// The command's whitespace is normalized before lookup; lookup or
    /// parser failure comes back as [`Error::ParserNotFound`] carrying the
    /// command, the NOS, and the underlying cause.
    pub fn parse_string(&mut self, show_command: &str, output: &str) -> Result<ParsedOutput> {
        validate_command(show_command)?;
        self.show_output = Some(output.to_string());
        self.show_command = Some(show_command.to_string());
        self.parse()
    }

    /// Parse the contents of the file at `path` as the result of
    /// `show_command`.
    ///
    /// Same contract as [`parse_string`](Self::parse_string), except the
    /// output text comes from the file; file-access failures propagate as
    /// [`Error::Io`]. The command is validated before the file is touched.
    pub fn parse_file(
        &mut self,
        show_command: &str,
        path: impl AsRef<Path>,
    ) -> Result<ParsedOutput> {
        validate_command(show_command)?;
        self.show_output = Some(fs::read_to_string(path)?);
        self.show_command = Some(show_command.to_string());
        self.parse()
    }

    /// Resolve the first ranked candidate for the stored command and run it
    /// against a canned device carrying the stored output.
    fn parse(&self) -> Result<ParsedOutput> {
        let command = self.show_command.as_deref().unwrap_or_default();
        let key = normalize_spaces(command);
        debug!(nos = %self.nos, command = %key, "resolving parser");

        let device = CannedDevice::new(self.show_output.clone().unwrap_or_default());
        let candidates = self.registry.lookup(&key, &self.context);
        let Some(parser) = candidates.first() else {
            return Err(Error::parser_not_found(
                command,
                self.nos,
                "no registered parser matches",
                None,
            ));
        };
        parser.parse(&device).map_err(|e| {
            Error::parser_not_found(command, self.nos, e.to_string(), Some(Box::new(e)))
        })
    }
}

impl std::fmt::Debug for OfflineParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineParser")
            .field("nos", &self.nos)
            .field("registered_parsers", &self.registry.len())
            .field("show_command", &self.show_command)
            .finish()
    }
}

/// Reject commands that cannot form a lookup key.
fn validate_command(command: &str) -> Result<()> {
    if command.contains('\0') {
        return Err(Error::InvalidCommand(
            "command contains a NUL byte".to_string(),
        ));
    }
    if command.split_whitespace().next().is_none() {
        return Err(Error::InvalidCommand(
            "command must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_command_rejects_empty() {
        assert!(matches!(
            validate_command("").unwrap_err(),
            Error::InvalidCommand(_)
        ));
        assert!(matches!(
            validate_command("   \t ").unwrap_err(),
            Error::InvalidCommand(_)
        ));
    }

    #[test]
    fn test_validate_command_rejects_nul() {
        assert!(matches!(
            validate_command("show\0version").unwrap_err(),
            Error::InvalidCommand(_)
        ));
    }

    #[test]
    fn test_validate_command_accepts_show() {
        assert!(validate_command("show ip route").is_ok());
    }

    #[test]
    fn test_new_builds_context_for_nos() {
        let parser = OfflineParser::new("iosxr").unwrap();
        assert_eq!(parser.nos(), Nos::IosXr);
        assert!(parser.registry().is_empty());
    }
}
