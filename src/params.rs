//! Query-parameter decoding.
//!
//! The same decoder serves the global `?query` of a DSN and the per-host
//! queries of a multi-host list. Decoding follows
//! `application/x-www-form-urlencoded` rules, after which every value goes
//! through [`coerce`]:
//!
//! | raw value        | decoded as               |
//! |------------------|--------------------------|
//! | `true`           | `ParamValue::Bool(true)` |
//! | `false`          | `ParamValue::Bool(false)`|
//! | `null`, empty    | `ParamValue::Null`       |
//! | anything else    | `ParamValue::String(..)` |
//!
//! ```rust
//! use dsn_parser::{ParamValue, decode_parameters};
//!
//! let params = decode_parameters("a=true&b=false&c=null&d=");
//! assert_eq!(params["a"], ParamValue::Bool(true));
//! assert_eq!(params["b"], ParamValue::Bool(false));
//! assert!(params["c"].is_null());
//! assert!(params["d"].is_null());
//! ```

use crate::options::ParserOptions;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded query parameters, in order of first appearance.
pub type Parameters = IndexMap<String, ParamValue>;

/// Suffix that turns a key into a list accumulator (`hosts[]=a&hosts[]=b`).
const LIST_SUFFIX: &str = "[]";

/// A single decoded parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `null`, or a key without a value.
    Null,
    /// Literal `true` / `false`.
    Bool(bool),
    /// Any other value, percent-decoded.
    String(String),
    /// Values collected from repeated `key[]` pairs.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The collected values, if this is a list.
    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => f.write_str(s),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Map a decoded raw value onto its typed form.
pub fn coerce(value: String) -> ParamValue {
    match value.as_str() {
        "true" => ParamValue::Bool(true),
        "false" => ParamValue::Bool(false),
        "null" | "" => ParamValue::Null,
        _ => ParamValue::String(value),
    }
}

/// Decode a query string (without the leading `?`) using default options.
pub fn decode_parameters(query: &str) -> Parameters {
    decode_parameters_with(query, &ParserOptions::default())
}

/// Decode a query string (without the leading `?`).
pub fn decode_parameters_with(query: &str, options: &ParserOptions) -> Parameters {
    let mut params = Parameters::new();
    if query.is_empty() {
        return params;
    }

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = if options.coerce_values {
            coerce(value.into_owned())
        } else {
            ParamValue::String(value.into_owned())
        };

        let list_key = if options.list_parameters {
            key.strip_suffix(LIST_SUFFIX)
        } else {
            None
        };

        match list_key {
            Some(name) => push_list_value(&mut params, name, value),
            None => {
                params.insert(key.into_owned(), value);
            }
        }
    }

    params
}

fn push_list_value(params: &mut Parameters, name: &str, value: ParamValue) {
    match params.entry(name.to_string()) {
        Entry::Occupied(mut entry) => match entry.get_mut() {
            ParamValue::List(values) => values.push(value),
            // A plain `key=` seen earlier is replaced, as a repeated key would be.
            other => *other = ParamValue::List(vec![value]),
        },
        Entry::Vacant(entry) => {
            entry.insert(ParamValue::List(vec![value]));
        }
    }
}
