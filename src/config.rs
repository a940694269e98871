use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATOR: &str = " ";

/// Vectorizer configuration
///
/// Only the term separator is configurable. Missing fields fall back to the defaults
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// String used to split documents and queries into terms.
    /// An empty separator splits into single characters.
    pub separator: String,
}

impl VectorizerConfig {
    pub fn new(separator: impl Into<String>) -> Self {
        Self { separator: separator.into() }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_separator_is_space() {
        assert_eq!(VectorizerConfig::default().separator, " ");
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: VectorizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VectorizerConfig::default());

        let config: VectorizerConfig = serde_json::from_str(r#"{"separator":"-"}"#).unwrap();
        assert_eq!(config.separator, "-");
    }
}
