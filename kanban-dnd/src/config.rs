//! Board configuration loaded with figment
//!
//! Sources are layered in order of increasing precedence:
//!
//! 1. built-in defaults
//! 2. an optional configuration file (`.toml`, `.yaml`/`.yml` or `.json`)
//! 3. environment variables prefixed with `KANBAN_DND_`
//!
//! ```toml
//! group_title_prefix = "Lane"
//! item_content_prefix = "Card"
//! activation_distance = 12.0
//! ```

use crate::error::{DndError, Result};
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KANBAN_DND_";

/// Default pointer travel, in pixels, before a press becomes a drag
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 30.0;

/// Tunables for default labels and drag activation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// New groups are titled `"{prefix} {n}"`
    pub group_title_prefix: String,
    /// New items get the content `"{prefix} {n}"`
    pub item_content_prefix: String,
    /// Pointer travel required before a press turns into a drag
    pub activation_distance: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            group_title_prefix: "Column".to_string(),
            item_content_prefix: "Task".to_string(),
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl BoardConfig {
    /// Load defaults overlaid with `KANBAN_DND_*` environment variables
    pub fn load() -> Result<Self> {
        Self::extract(Self::base_figment().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Load defaults, then `path`, then `KANBAN_DND_*` environment variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DndError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let figment = match format.as_str() {
            "toml" => Self::base_figment().merge(Toml::file(path)),
            "yaml" | "yml" => Self::base_figment().merge(Yaml::file(path)),
            "json" => Self::base_figment().merge(Json::file(path)),
            _ => return Err(DndError::UnsupportedFormat { format }),
        };

        debug!(path = %path.display(), "loading board configuration file");
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Set the group title prefix
    pub fn with_group_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.group_title_prefix = prefix.into();
        self
    }

    /// Set the item content prefix
    pub fn with_item_content_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.item_content_prefix = prefix.into();
        self
    }

    /// Set the drag activation distance
    pub fn with_activation_distance(mut self, distance: f64) -> Self {
        self.activation_distance = distance;
        self
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(DndError::invalid_value(
                "activation_distance",
                format!(
                    "must be a finite, non-negative number, got {}",
                    self.activation_distance
                ),
            ));
        }
        if self.group_title_prefix.trim().is_empty() {
            return Err(DndError::invalid_value(
                "group_title_prefix",
                "must not be blank",
            ));
        }
        if self.item_content_prefix.trim().is_empty() {
            return Err(DndError::invalid_value(
                "item_content_prefix",
                "must not be blank",
            ));
        }
        Ok(())
    }

    /// Default title for the `n`th group (1-based)
    pub fn group_title(&self, n: usize) -> String {
        format!("{} {}", self.group_title_prefix, n)
    }

    /// Default content for the `n`th item (1-based)
    pub fn item_content(&self, n: usize) -> String {
        format!("{} {}", self.item_content_prefix, n)
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.group_title(1), "Column 1");
        assert_eq!(config.item_content(3), "Task 3");
        assert_eq!(config.activation_distance, 30.0);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_negative_distance() {
        let config = BoardConfig::default().with_activation_distance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(DndError::InvalidValue { ref field, .. }) if field == "activation_distance"
        ));
    }

    #[test]
    fn test_validate_rejects_nan_distance() {
        let config = BoardConfig::default().with_activation_distance(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_prefix() {
        let config = BoardConfig::default().with_item_content_prefix("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = BoardConfig::load_from("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DndError::ConfigFileNotFound { .. }));
    }
}
