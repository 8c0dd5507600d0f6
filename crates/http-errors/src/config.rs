use serde::Deserialize;

/// Error factory configuration
///
/// Meant to be embedded as a section of the host application's config.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactoryConfig {
    /// Log a warning when a non-error status code is coerced to 500
    #[serde(default = "default_warn_on_invalid_status")]
    pub warn_on_invalid_status: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            warn_on_invalid_status: default_warn_on_invalid_status(),
        }
    }
}

const fn default_warn_on_invalid_status() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_config() {
        let config: FactoryConfig = toml::from_str("").unwrap();
        assert!(config.warn_on_invalid_status);
    }

    #[test]
    fn deserialize_disabled_warnings() {
        let config: FactoryConfig = toml::from_str("warn_on_invalid_status = false").unwrap();
        assert!(!config.warn_on_invalid_status);
    }

    #[test]
    fn reject_unknown_fields() {
        let result: Result<FactoryConfig, _> = toml::from_str("default_status = 400");
        assert!(result.is_err());
    }
}
