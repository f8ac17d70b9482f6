//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level sky map configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Constellation datasets and projection.
    pub catalog: CatalogConfig,
    /// Background starfield.
    pub starfield: StarfieldConfig,
    /// Highlight style adjustments.
    pub style: StyleConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Constellation dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Radius of the constellation sphere in scene units.
    pub radius: f64,
    /// Path to the constellation line dataset (GeoJSON feature collection).
    pub line_data: PathBuf,
    /// Path to the constellation info dataset (GeoJSON feature collection).
    pub info_data: PathBuf,
}

/// Background starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Generate the starfield at all.
    pub enabled: bool,
    /// Seed for deterministic placement.
    pub seed: u64,
    /// Number of stars.
    pub count: u32,
    /// Inner radius of the star shell.
    pub radius: f32,
    /// Thickness of the star shell.
    pub depth: f32,
    /// Point size factor.
    pub factor: f32,
    /// Color saturation (0.0 = white).
    pub saturation: f32,
}

/// Highlight style adjustments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Multiplier for all constellation star sizes.
    pub star_size_scale: f32,
    /// Multiplier for all constellation line widths.
    pub line_width_scale: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            radius: 150.0,
            line_data: PathBuf::from("data/constellations.lines.json"),
            info_data: PathBuf::from("data/constellations.json"),
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: 42,
            count: 10_000,
            radius: 300.0,
            depth: 100.0,
            factor: 4.0,
            saturation: 0.0,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            star_size_scale: 1.0,
            line_width_scale: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: cfg!(debug_assertions),
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject values the catalog and starfield cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.catalog.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "catalog.radius",
                reason: format!("must be a positive finite number, got {radius}"),
            });
        }
        let s = &self.starfield;
        if !s.radius.is_finite() || s.radius < 0.0 || !s.depth.is_finite() || s.depth < 0.0 {
            return Err(ConfigError::Invalid {
                field: "starfield",
                reason: format!("shell radius {} / depth {} must be non-negative", s.radius, s.depth),
            });
        }
        if !(0.0..=1.0).contains(&s.saturation) {
            return Err(ConfigError::Invalid {
                field: "starfield.saturation",
                reason: format!("must be within [0, 1], got {}", s.saturation),
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
