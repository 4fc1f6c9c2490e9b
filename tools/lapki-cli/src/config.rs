//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use lapki_commerce::{Money, StoreFeatures};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["lapki.toml", ".lapki.toml", "lapki.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Optional page features.
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Delivery pricing.
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Storefront features described by this config.
    pub fn store_features(&self) -> StoreFeatures {
        StoreFeatures {
            delivery_estimator: self.features.delivery_estimator,
            lightbox: self.features.lightbox,
            free_delivery_threshold: Money::new(self.delivery.free_threshold),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Optional page features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Enable the city delivery estimator.
    #[serde(default = "default_true")]
    pub delivery_estimator: bool,

    /// Enable the gallery lightbox.
    #[serde(default = "default_true")]
    pub lightbox: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            delivery_estimator: true,
            lightbox: true,
        }
    }
}

/// Delivery pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Order subtotal (rubles) from which quoted delivery is free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: i64,
}

fn default_free_threshold() -> i64 {
    2000
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            free_threshold: default_free_threshold(),
        }
    }
}

/// Generate a default lapki.toml config file.
pub fn generate_default_config() -> String {
    r#"# LapkiLakomki storefront configuration

[features]
delivery_estimator = true
lightbox = true

[delivery]
# Quoted delivery is waived from this subtotal (rubles).
free_threshold = 2000

[logging]
# trace | debug | info | warn | error
level = "info"
# human | json
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.features.delivery_estimator);
        assert!(config.features.lightbox);
        assert_eq!(config.delivery.free_threshold, 2000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[features]\nlightbox = false\n").unwrap();
        let features = config.store_features();
        assert!(features.delivery_estimator);
        assert!(!features.lightbox);
        assert_eq!(features.free_delivery_threshold, Money::new(2000));
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"delivery": {"free_threshold": 1500}}"#).unwrap();
        assert_eq!(config.store_features().free_delivery_threshold, Money::new(1500));
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("lapki.json")));
        assert!(!is_json(Path::new("lapki.toml")));
    }
}
