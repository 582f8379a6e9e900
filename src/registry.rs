//! Parser registry and ranked lookup.
//!
//! The registry is the seam to the actual parsing implementations: callers
//! register a parser per (NOS, command), and the adapter resolves the best
//! match at parse time. Ranking is deterministic: an exact command match
//! wins, then word-boundary prefix matches from longest to shortest, then
//! registration order.

use crate::device::{AbstractionToken, DeviceContext, ShowDevice};
use crate::error::Result;
use crate::platform::Nos;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Structured data produced by a parser. The shape is parser-defined; the
/// adapter passes it through untouched.
pub type ParsedOutput = serde_json::Map<String, serde_json::Value>;

/// A parser for one show command on one NOS.
pub trait ShowParser: Send + Sync {
    /// Pull output from the device and parse it into a mapping.
    fn parse(&self, device: &dyn ShowDevice) -> Result<ParsedOutput>;
}

#[derive(Clone)]
struct ParserEntry {
    command: String,
    parser: Arc<dyn ShowParser>,
}

/// Registry mapping (NOS, command) to parser implementations.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<Nos, Vec<ParserEntry>>,
}

impl ParserRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser for `command` on `nos`.
    ///
    /// The command's whitespace is normalized so registration and lookup
    /// share one key form.
    pub fn register(
        &mut self,
        nos: Nos,
        command: impl Into<String>,
        parser: Arc<dyn ShowParser>,
    ) {
        let command = normalize_spaces(&command.into());
        debug!(nos = %nos, command = %command, "registering parser");
        self.parsers
            .entry(nos)
            .or_default()
            .push(ParserEntry { command, parser });
    }

    /// Resolve the ranked candidate parsers for a normalized command.
    ///
    /// Walks the context's abstraction order; entries registered under a
    /// different NOS never match.
    pub fn lookup(&self, command: &str, context: &DeviceContext) -> Vec<Arc<dyn ShowParser>> {
        let mut candidates = Vec::new();
        for token in context.abstraction_order() {
            match token {
                AbstractionToken::Os => {
                    let Some(entries) = self.parsers.get(&context.os()) else {
                        continue;
                    };
                    let mut prefixed: Vec<&ParserEntry> = Vec::new();
                    for entry in entries {
                        if entry.command == command {
                            candidates.push(Arc::clone(&entry.parser));
                        } else if is_word_prefix(&entry.command, command) {
                            prefixed.push(entry);
                        }
                    }
                    // Stable sort keeps registration order among equal lengths.
                    prefixed.sort_by(|a, b| b.command.len().cmp(&a.command.len()));
                    candidates.extend(prefixed.into_iter().map(|e| Arc::clone(&e.parser)));
                }
            }
        }
        trace!(command = %command, count = candidates.len(), "ranked parser candidates");
        candidates
    }

    /// Number of registered parsers across all NOS tables.
    pub fn len(&self) -> usize {
        self.parsers.values().map(Vec::len).sum()
    }

    /// True when no parser has been registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.values().all(Vec::is_empty)
    }
}

/// True when `registered` covers `command` up to a word boundary.
fn is_word_prefix(registered: &str, command: &str) -> bool {
    command.len() > registered.len()
        && command.starts_with(registered)
        && command.as_bytes()[registered.len()] == b' '
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub(crate) fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TaggedParser(i64);

    impl ShowParser for TaggedParser {
        fn parse(&self, _device: &dyn ShowDevice) -> Result<ParsedOutput> {
            let mut out = ParsedOutput::new();
            out.insert("id".to_string(), json!(self.0));
            Ok(out)
        }
    }

    fn id_of(parser: &Arc<dyn ShowParser>) -> i64 {
        let device = crate::device::CannedDevice::new("");
        parser.parse(&device).unwrap()["id"].as_i64().unwrap()
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("show   ip   route"), "show ip route");
        assert_eq!(normalize_spaces("  show version\t"), "show version");
        assert_eq!(normalize_spaces(""), "");
    }

    #[test]
    fn test_register_normalizes_command() {
        let mut registry = ParserRegistry::new();
        registry.register(Nos::Ios, "show   ip   route", Arc::new(TaggedParser(1)));

        let context = DeviceContext::new(Nos::Ios);
        let candidates = registry.lookup("show ip route", &context);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_exact_match_outranks_prefix() {
        let mut registry = ParserRegistry::new();
        registry.register(Nos::Ios, "show ip route", Arc::new(TaggedParser(1)));
        registry.register(
            Nos::Ios,
            "show ip route 10.0.0.0/8",
            Arc::new(TaggedParser(2)),
        );

        let context = DeviceContext::new(Nos::Ios);
        let candidates = registry.lookup("show ip route 10.0.0.0/8", &context);
        assert_eq!(candidates.len(), 2);
        assert_eq!(id_of(&candidates[0]), 2);
        assert_eq!(id_of(&candidates[1]), 1);
    }

    #[test]
    fn test_longer_prefix_outranks_shorter() {
        let mut registry = ParserRegistry::new();
        registry.register(Nos::Nxos, "show interface", Arc::new(TaggedParser(1)));
        registry.register(
            Nos::Nxos,
            "show interface status",
            Arc::new(TaggedParser(2)),
        );

        let context = DeviceContext::new(Nos::Nxos);
        let candidates = registry.lookup("show interface status err-disabled", &context);
        assert_eq!(id_of(&candidates[0]), 2);
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        let mut registry = ParserRegistry::new();
        registry.register(Nos::Ios, "show ip", Arc::new(TaggedParser(1)));

        let context = DeviceContext::new(Nos::Ios);
        assert!(registry.lookup("show ipv6 route", &context).is_empty());
    }

    #[test]
    fn test_cross_nos_entries_invisible() {
        let mut registry = ParserRegistry::new();
        registry.register(Nos::Nxos, "show version", Arc::new(TaggedParser(1)));

        let context = DeviceContext::new(Nos::Ios);
        assert!(registry.lookup("show version", &context).is_empty());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
