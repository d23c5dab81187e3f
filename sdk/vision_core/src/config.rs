//! Provider configuration parameters.

use std::collections::HashMap;

use crate::error::{VisionError, VisionResult};

/// String-keyed parameters for one configured backend entry.
///
/// The platform hands each provider its own map; the keys a provider
/// recognizes are defined by that provider's adapter crate. Unrecognized
/// keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    params: HashMap<String, String>,
}

impl ProviderConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning the configuration for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`, if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the value for `key` or a [`VisionError::MissingConfig`].
    pub fn require(&self, key: &str) -> VisionResult<&str> {
        self.get(key).ok_or_else(|| {
            VisionError::MissingConfig(format!("provider parameter `{key}` is required"))
        })
    }
}

impl From<HashMap<String, String>> for ProviderConfig {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}

impl FromIterator<(String, String)> for ProviderConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_set_values() {
        let config = ProviderConfig::new().with("region", "eu-west-1");
        assert_eq!(config.get("region"), Some("eu-west-1"));
        assert_eq!(config.get("accessKey"), None);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let config = ProviderConfig::new().with("region", "");
        assert_eq!(config.get("region"), None);
        assert!(config.require("region").is_err());
    }

    #[test]
    fn require_names_the_missing_key() {
        let config = ProviderConfig::new();
        let err = config.require("secretKey").unwrap_err();
        assert!(matches!(err, VisionError::MissingConfig(_)));
        assert!(err.to_string().contains("secretKey"), "error: {err}");
    }

    #[test]
    fn builds_from_a_plain_map() {
        let mut map = HashMap::new();
        map.insert("accessKey".to_string(), "AKID".to_string());
        let config = ProviderConfig::from(map);
        assert_eq!(config.get("accessKey"), Some("AKID"));
    }
}
