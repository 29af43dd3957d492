//! Error types for strict DSN handling.
//!
//! Parsing itself never fails: [`ParsedDsn::parse`](crate::ParsedDsn::parse)
//! always produces a value and reports problems through
//! [`is_valid`](crate::ParsedDsn::is_valid). These errors only surface from the
//! strict entry points ([`ParsedDsn::validate`](crate::ParsedDsn::validate),
//! [`str::parse`]) and from loading [`ParserOptions`](crate::ParserOptions).
//!
//! ```rust
//! use dsn_parser::{DsnError, ParsedDsn};
//!
//! let err = "myql:127.0.0.1/test_db".parse::<ParsedDsn>().unwrap_err();
//! assert!(matches!(err, DsnError::MissingProtocol { .. }));
//! ```

use thiserror::Error;

/// Result type for strict DSN operations.
pub type DsnResult<T> = Result<T, DsnError>;

/// Errors reported by the strict DSN entry points.
///
/// Messages never include the input (it may hold a password); use
/// [`DsnError::dsn`] to get at it.
#[derive(Error, Debug)]
pub enum DsnError {
    /// No `protocol://` prefix was recognised.
    #[error("DSN has no recognisable protocol (expected 'protocol://...')")]
    MissingProtocol {
        /// The offending input.
        dsn: String,
    },

    /// A protocol was found but no host token followed it.
    #[error("DSN does not name any host")]
    MissingHost {
        /// The offending input.
        dsn: String,
    },

    /// Parser options could not be loaded.
    #[error("Invalid parser options: {source}")]
    InvalidOptions {
        /// The underlying TOML error.
        #[from]
        source: toml::de::Error,
    },
}

impl DsnError {
    /// The DSN this error refers to, if any.
    pub fn dsn(&self) -> Option<&str> {
        match self {
            Self::MissingProtocol { dsn } | Self::MissingHost { dsn } => Some(dsn),
            Self::InvalidOptions { .. } => None,
        }
    }
}
