//! Host entries and the host-list grammar.
//!
//! A host list is the segment of a DSN between the credentials and the
//! path. Entries are separated by `,`, `;` or whitespace and may be wrapped
//! in parentheses:
//!
//! ```text
//! db1:3306, db2:3307 ; (db3) !db4
//! ```
//!
//! Each entry may carry a protocol override (`tcp://db1`), a port, and its
//! own query string (`db1?weight=2`). A leading `!` flags the entry as
//! excluded.

use crate::options::ParserOptions;
use crate::params::{ParamValue, Parameters, decode_parameters_with};
use regex_lite::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Unicode `White_Space` outside ASCII; `\s` in regex-lite is ASCII-only.
const UNICODE_SPACE: &str = r"\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}";

static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    let ws = UNICODE_SPACE;
    Regex::new(&format!(
        concat!(
            r"(?P<excluded>![,;\s{ws}(]?)?",
            r"(?:(?P<protocol>[\w\\]+)://)?",
            r"(?P<host>[^!?#/:@,;\s{ws}()][^?#/:@,;\s{ws}()]*)",
            r"(?::(?P<port>\d+))?",
            r"(?:\?(?P<query>[^#,;\s{ws})]*))?",
        ),
        ws = ws
    ))
    .expect("host grammar is a valid regex")
});

/// One host of a (possibly multi-host) DSN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    /// Host name or address.
    pub host: String,
    /// Port, when given as a digit run that fits a `u32`.
    pub port: Option<u32>,
    /// Per-host protocol override.
    pub protocol: Option<String>,
    /// Per-host query parameters.
    #[serde(default)]
    pub parameters: Parameters,
    /// Whether the entry was prefixed with the `!` marker.
    #[serde(default)]
    pub excluded: bool,
}

impl HostEntry {
    /// Create an entry with just a host name.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            protocol: None,
            parameters: Parameters::new(),
            excluded: false,
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the protocol override.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// The host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, if any.
    pub fn port(&self) -> Option<u32> {
        self.port
    }

    /// The per-host protocol override, if any.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Per-host query parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// A single per-host parameter.
    pub fn parameter(&self, key: &str) -> Option<&ParamValue> {
        self.parameters.get(key)
    }

    /// Whether the entry carried the `!` marker.
    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    fn from_captures(caps: &Captures<'_>, options: &ParserOptions) -> Option<Self> {
        let host = caps.name("host")?.as_str();
        let port = caps.name("port").and_then(|m| match m.as_str().parse::<u32>() {
            Ok(port) => Some(port),
            Err(_) => {
                debug!(host = %host, port = %m.as_str(), "Ignoring out-of-range port");
                None
            }
        });
        let parameters = caps
            .name("query")
            .map(|m| decode_parameters_with(m.as_str(), options))
            .unwrap_or_default();

        Some(Self {
            host: host.to_string(),
            port,
            protocol: caps.name("protocol").map(|m| m.as_str().to_string()),
            parameters,
            excluded: caps.name("excluded").is_some(),
        })
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref protocol) = self.protocol {
            write!(f, "{}://", protocol)?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Parse a host-list segment using default options.
///
/// ```rust
/// use dsn_parser::parse_host_list;
///
/// let hosts = parse_host_list("db1:3306, tcp://db2?weight=2 !db3");
/// assert_eq!(hosts.len(), 3);
/// assert_eq!(hosts[0].port(), Some(3306));
/// assert_eq!(hosts[1].protocol(), Some("tcp"));
/// assert!(hosts[2].is_excluded());
/// ```
pub fn parse_host_list(segment: &str) -> Vec<HostEntry> {
    parse_host_list_with(segment, &ParserOptions::default())
}

/// Parse a host-list segment.
pub fn parse_host_list_with(segment: &str, options: &ParserOptions) -> Vec<HostEntry> {
    let hosts: Vec<HostEntry> = HOST_RE
        .captures_iter(segment)
        .filter_map(|caps| HostEntry::from_captures(&caps, options))
        .collect();
    trace!(count = hosts.len(), "Host list parsed");
    hosts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_host() {
        let hosts = parse_host_list("127.0.0.1");
        assert_eq!(hosts, vec![HostEntry::new("127.0.0.1")]);
    }

    #[test]
    fn test_host_with_port() {
        let hosts = parse_host_list("localhost:5432");
        assert_eq!(hosts, vec![HostEntry::new("localhost").with_port(5432)]);
    }

    #[test]
    fn test_separators() {
        let hosts = parse_host_list("a:1,b:2;c:3 d\te\n(f)");
        let names: Vec<_> = hosts.iter().map(HostEntry::host).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(hosts[2].port(), Some(3));
        assert_eq!(hosts[3].port(), None);
    }

    #[test]
    fn test_parenthesised_group() {
        let hosts = parse_host_list("(db1:1000,db2:2000)");
        assert_eq!(
            hosts,
            vec![
                HostEntry::new("db1").with_port(1000),
                HostEntry::new("db2").with_port(2000),
            ]
        );
    }

    #[test]
    fn test_protocol_override() {
        let hosts = parse_host_list("tcp://db1:3306,unix://db2");
        assert_eq!(hosts[0], HostEntry::new("db1").with_port(3306).with_protocol("tcp"));
        assert_eq!(hosts[1], HostEntry::new("db2").with_protocol("unix"));
    }

    #[test]
    fn test_namespaced_protocol_override() {
        let hosts = parse_host_list(r"Vendor\Driver://db1");
        assert_eq!(hosts[0].protocol(), Some(r"Vendor\Driver"));
        assert_eq!(hosts[0].host(), "db1");
    }

    #[test]
    fn test_per_host_parameters() {
        let hosts = parse_host_list("db1?weight=2&primary=true, db2?weight=1");
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].parameter("weight"), Some(&ParamValue::from("2")));
        assert_eq!(hosts[0].parameter("primary"), Some(&ParamValue::Bool(true)));
        assert_eq!(hosts[1].parameter("weight"), Some(&ParamValue::from("1")));
        assert!(hosts[1].parameter("primary").is_none());
    }

    #[test]
    fn test_excluded_marker() {
        let hosts = parse_host_list("db1,!db2 !,db3");
        assert_eq!(hosts.len(), 3);
        assert!(!hosts[0].is_excluded());
        assert!(hosts[1].is_excluded());
        assert_eq!(hosts[1].host(), "db2");
        assert!(hosts[2].is_excluded());
        assert_eq!(hosts[2].host(), "db3");
    }

    #[test]
    fn test_non_numeric_port_is_not_a_port() {
        let hosts = parse_host_list("db1:abc");
        assert_eq!(hosts[0], HostEntry::new("db1"));
    }

    #[test]
    fn test_port_above_u16() {
        let hosts = parse_host_list("db1:70000");
        assert_eq!(hosts, vec![HostEntry::new("db1").with_port(70000)]);
    }

    #[test]
    fn test_out_of_range_port() {
        let hosts = parse_host_list("db1:99999999999");
        assert_eq!(hosts, vec![HostEntry::new("db1")]);
    }

    #[test]
    fn test_unicode_whitespace_separates_hosts() {
        let hosts = parse_host_list("db1\u{3000}db2\u{A0}db3\u{2009}!\u{2028}db4");
        let names: Vec<_> = hosts.iter().map(HostEntry::host).collect();
        assert_eq!(names, ["db1", "db2", "db3", "db4"]);
        assert!(hosts[3].is_excluded());
        for host in &hosts {
            assert!(!host.host().chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_unicode_whitespace_ends_host_query() {
        let hosts = parse_host_list("db1?w=1\u{3000}db2");
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].parameter("w"), Some(&ParamValue::from("1")));
    }

    #[test]
    fn test_lone_marker_is_not_a_host() {
        assert!(parse_host_list("!").is_empty());
        let hosts = parse_host_list("db1, !");
        assert_eq!(hosts, vec![HostEntry::new("db1")]);
        let hosts = parse_host_list("db!1");
        assert_eq!(hosts[0].host(), "db!1");
    }

    #[test]
    fn test_empty_segment() {
        assert!(parse_host_list("").is_empty());
        assert!(parse_host_list("  \t ").is_empty());
        assert!(parse_host_list(",;()").is_empty());
    }

    #[test]
    fn test_display() {
        let entry = HostEntry::new("db1").with_port(3306).with_protocol("tcp");
        assert_eq!(entry.to_string(), "tcp://db1:3306");
        assert_eq!(HostEntry::new("db2").to_string(), "db2");
    }
}
