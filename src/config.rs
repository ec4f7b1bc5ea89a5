// Manager configuration: hotel identity and pricing knobs

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HOTEL_NAME: &str = "Luchadores";
pub const DEFAULT_BASE_PRICE: f64 = 20.0;
pub const DEFAULT_BREAKFAST_MULTIPLIER: f64 = 1.25;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    pub hotel_name: String,
    // per client, per night
    pub base_price: f64,
    pub breakfast_multiplier: f64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            base_price: DEFAULT_BASE_PRICE,
            breakfast_multiplier: DEFAULT_BREAKFAST_MULTIPLIER,
        }
    }
}

impl ManagerConfig {
    // Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ManagerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hotel_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "hotel_name",
                reason: "must not be empty".to_string(),
            });
        }

        for (field, value) in [
            ("base_price", self.base_price),
            ("breakfast_multiplier", self.breakfast_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a positive number, got {}", value),
                });
            }
        }

        // Breakfast is a surcharge, never a discount
        if self.breakfast_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "breakfast_multiplier",
                reason: format!("must be at least 1.0, got {}", self.breakfast_multiplier),
            });
        }

        Ok(())
    }
}
