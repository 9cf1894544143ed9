use crate::assets::AssetLoader;
use serde::{Deserialize, Deserializer};
use swatch_color::DistanceMetric;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Metric used when a request does not name one
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub default_metric: DistanceMetric,

    /// Number of matches returned when a request does not set a limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound for requested limits
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn deserialize_metric<'de, D>(deserializer: D) -> Result<DistanceMetric, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        default_metric = %config.default_metric,
                        default_limit = config.default_limit,
                        max_limit = config.max_limit,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a requested result count: default when absent, capped at
    /// `max_limit`.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_metric: DistanceMetric::default(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}
