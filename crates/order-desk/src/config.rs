//! Desk configuration loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working desk. [`DeskConfig::validate`] runs after every load.
//!
//! ```toml
//! [restaurant]
//! name = "La Esquina"
//! primary_color = "#3b82f6"
//! portal_base_url = "https://pedidos.example.com"
//!
//! [timeline]
//! unit_ms = 1000
//!
//! [kitchen]
//! tick_secs = 1
//! default_prep_minutes = 15
//!
//! [store]
//! buffer_size = 32
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the config file path for the binary.
pub const CONFIG_ENV: &str = "ORDER_DESK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub restaurant: RestaurantConfig,
    pub timeline: TimelineConfig,
    pub kitchen: KitchenConfig,
    pub store: StoreConfig,
}

/// Display settings for the landing page and portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub show_features: bool,
    pub features: Vec<FeatureConfig>,
    /// Base URL the table links point at.
    pub portal_base_url: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "[TU_RESTAURANTE]".to_string(),
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#f59e0b".to_string(),
            hero_title: "Sistema Inteligente de Gestión de Pedidos".to_string(),
            hero_subtitle: "Ordena desde tu mesa, gestiona desde la cocina. Todo en tiempo real."
                .to_string(),
            show_features: true,
            features: vec![
                FeatureConfig::new("🎯", "Tiempo Real", "Sincronización instantánea de todos los pedidos"),
                FeatureConfig::new("📱", "Multiplataforma", "Web, móvil, tablet o pantalla en cocina"),
                FeatureConfig::new("🔄", "Seguimiento", "Clientes ven estado actualizado de su pedido"),
            ],
            portal_base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl FeatureConfig {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of one schedule unit in milliseconds.
    pub unit_ms: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { unit_ms: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Board refresh interval, 1..=60 seconds.
    pub tick_secs: u64,
    /// Prep estimate for orders created without one. 0 disables it.
    pub default_prep_minutes: u32,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            tick_secs: 1,
            default_prep_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the order actor's request channel.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl DeskConfig {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads from `ORDER_DESK_CONFIG` when it is set, defaults otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60).contains(&self.kitchen.tick_secs) {
            return Err(ConfigError::Invalid {
                field: "kitchen.tick_secs",
                reason: format!("{} is outside 1..=60", self.kitchen.tick_secs),
            });
        }
        if self.timeline.unit_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timeline.unit_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "store.buffer_size",
                reason: "must be greater than 0".to_string(),
            });
        }
        for (field, color) in [
            ("restaurant.primary_color", &self.restaurant.primary_color),
            ("restaurant.secondary_color", &self.restaurant.secondary_color),
        ] {
            if !is_hex_color(color) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{color:?} is not a #rrggbb color"),
                });
            }
        }
        Ok(())
    }

    pub fn timeline_unit(&self) -> Duration {
        Duration::from_millis(self.timeline.unit_ms)
    }

    pub fn kitchen_tick(&self) -> Duration {
        Duration::from_secs(self.kitchen.tick_secs)
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
