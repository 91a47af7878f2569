use serde::Deserialize;

use crate::menu::{FoodItem, PresentOption, default_menu, default_presents};
use crate::{BuiltinCatalog, Locale};

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Alcohol present id {0} is not among the configured presents")]
    UnknownAlcoholPresent(u32),
}

/// Settings for a survey deployment.
///
/// Every key is optional; missing keys take the defaults.
///
/// ```toml
/// alcohol_present_id = 3
/// locale = "ja"
///
/// [[menu]]
/// id = 0
/// name = "Shoyu ramen"
/// price = 780
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnqueteConfig {
    /// The present that is reserved for adults.
    pub alcohol_present_id: u32,

    /// Language of the built-in message catalog.
    pub locale: Locale,

    pub menu: Vec<FoodItem>,

    pub presents: Vec<PresentOption>,
}

impl Default for EnqueteConfig {
    fn default() -> Self {
        Self {
            alcohol_present_id: 3,
            locale: Locale::default(),
            menu: default_menu(),
            presents: default_presents(),
        }
    }
}

impl EnqueteConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if !config
            .presents
            .iter()
            .any(|present| present.id == config.alcohol_present_id)
        {
            return Err(ConfigError::UnknownAlcoholPresent(config.alcohol_present_id));
        }
        Ok(config)
    }

    /// The built-in catalog for the configured locale.
    pub fn catalog(&self) -> BuiltinCatalog {
        BuiltinCatalog::new(self.locale)
    }
}
