//! # dsn-parser
//!
//! A tolerant parser for single-line connection strings (DSNs).
//!
//! A DSN has the general shape
//!
//! ```text
//! protocol://[user[:password]@]host[:port][,host[:port]...][/database[/table]][?query][#fragment]
//! ```
//!
//! Parsing never fails. Malformed input still produces a [`ParsedDsn`] whose
//! fields are filled as far as possible; [`ParsedDsn::is_valid`] says whether
//! it names both a protocol and at least one host.
//!
//! ## Single host
//!
//! ```rust
//! use dsn_parser::ParsedDsn;
//!
//! let dsn = ParsedDsn::parse("mysql://root@127.0.0.1:3306/test_db");
//! assert!(dsn.is_valid());
//! assert_eq!(dsn.username(), Some("root"));
//! assert_eq!(dsn.password(), None);
//! assert_eq!(dsn.first_port(), Some(3306));
//! ```
//!
//! ## Multiple hosts and parameters
//!
//! ```rust
//! use dsn_parser::{ParamValue, ParsedDsn};
//!
//! let dsn = ParsedDsn::parse("mongodb://user:pw@db1:27017,db2:27018/app?replicaSet=rs0&ssl=true&w");
//! let hosts: Vec<String> = dsn.hosts().iter().map(|h| h.to_string()).collect();
//! assert_eq!(hosts, ["db1:27017", "db2:27018"]);
//! assert_eq!(dsn.parameter("replicaSet"), Some(&ParamValue::from("rs0")));
//! assert_eq!(dsn.parameter("ssl"), Some(&ParamValue::Bool(true)));
//! assert_eq!(dsn.parameter("w"), Some(&ParamValue::Null));
//! ```
//!
//! ## Invalid input
//!
//! ```rust
//! use dsn_parser::ParsedDsn;
//!
//! let dsn = ParsedDsn::parse("myql:127.0.0.1/test_db");
//! assert!(!dsn.is_valid());
//! assert_eq!(dsn.dsn(), "myql:127.0.0.1/test_db");
//!
//! // The strict path returns an error instead.
//! assert!("myql://".parse::<ParsedDsn>().is_err());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod dsn;
pub mod error;
pub mod host;
pub mod logging;
pub mod options;
pub mod params;
pub mod parser;

pub use dsn::{Authentication, ParsedDsn};
pub use error::{DsnError, DsnResult};
pub use host::{HostEntry, parse_host_list, parse_host_list_with};
pub use options::ParserOptions;
pub use params::{ParamValue, Parameters, coerce, decode_parameters, decode_parameters_with};
pub use parser::DsnParser;

/// Parse a DSN with default options.
///
/// Shorthand for [`ParsedDsn::parse`].
pub fn parse(raw: &str) -> ParsedDsn {
    ParsedDsn::parse(raw)
}
