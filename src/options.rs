//! Parser options.

use crate::error::DsnResult;
use serde::{Deserialize, Serialize};

/// Options controlling how query parameters are decoded.
///
/// The defaults reproduce the standard behavior: values are coerced and
/// `key[]` pairs are collected into lists.
///
/// ```rust
/// use dsn_parser::ParserOptions;
///
/// let options = ParserOptions::from_toml("coerce_values = false").unwrap();
/// assert!(!options.coerce_values);
/// assert!(options.list_parameters);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Map `true`/`false`/`null`/empty values onto typed values.
    pub coerce_values: bool,
    /// Collect `key[]` pairs into [`ParamValue::List`](crate::ParamValue::List).
    pub list_parameters: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            coerce_values: true,
            list_parameters: true,
        }
    }
}

impl ParserOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> DsnResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Enable or disable value coercion.
    pub fn with_coerce_values(mut self, enabled: bool) -> Self {
        self.coerce_values = enabled;
        self
    }

    /// Enable or disable `key[]` list collection.
    pub fn with_list_parameters(mut self, enabled: bool) -> Self {
        self.list_parameters = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DsnError;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::new();
        assert!(options.coerce_values);
        assert!(options.list_parameters);
    }

    #[test]
    fn test_builder() {
        let options = ParserOptions::new()
            .with_coerce_values(false)
            .with_list_parameters(false);
        assert!(!options.coerce_values);
        assert!(!options.list_parameters);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(ParserOptions::from_toml("").unwrap(), ParserOptions::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = ParserOptions::from_toml("coerce_values = \"yes\"").unwrap_err();
        assert!(matches!(err, DsnError::InvalidOptions { .. }));
    }
}
