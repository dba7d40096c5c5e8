//! # Session Configuration
//!
//! [`MapConfig`] collects the few knobs a session has. Every field has a default, so a
//! config file only needs the keys it changes:
//!
//! ```json
//! { "camera_padding": 64 }
//! ```
//!
//! Environment overrides use the `RESTAURANT_MAP_` prefix:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RESTAURANT_MAP_MAILBOX_CAPACITY` | `mailbox_capacity` |
//! | `RESTAURANT_MAP_CAMERA_PADDING` | `camera_padding` |
//! | `RESTAURANT_MAP_DEFAULT_FILTER` | `default_filter` |

use crate::map::DEFAULT_CAMERA_PADDING;
use crate::model::CuisineFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Capacity of the controller's request mailbox.
    pub mailbox_capacity: usize,
    /// Inset in pixels around framed markers.
    pub camera_padding: u32,
    /// Cuisine selected when the first shell attaches.
    pub default_filter: CuisineFilter,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            camera_padding: DEFAULT_CAMERA_PADDING,
            default_filter: CuisineFilter::ALL,
        }
    }
}

impl MapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with `RESTAURANT_MAP_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each known key.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(capacity) = parse_var(&lookup, "RESTAURANT_MAP_MAILBOX_CAPACITY")? {
            config.mailbox_capacity = capacity;
        }
        if let Some(padding) = parse_var(&lookup, "RESTAURANT_MAP_CAMERA_PADDING")? {
            config.camera_padding = padding;
        }
        if let Some(code) = parse_var::<u32, _>(&lookup, "RESTAURANT_MAP_DEFAULT_FILTER")? {
            config.default_filter =
                CuisineFilter::try_from(code).map_err(|_| ConfigError::InvalidValue {
                    key: "RESTAURANT_MAP_DEFAULT_FILTER".to_string(),
                    value: code.to_string(),
                })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Validation(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T, L>(lookup: &L, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
