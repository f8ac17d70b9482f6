//! A loaded sky map: the immutable catalog and starfield plus the mutable
//! interaction state.

use serde_json::Value;
use skymap_catalog::{
    ConstellationDetails, DatasetError, RenderEntry, SkyCatalog, load_json_file,
};
use skymap_config::{Config, ConfigError};
use skymap_scene::{
    InteractionState, Palette, SceneEvent, SceneItem, StarPoint, StarfieldGenerator,
    visible_constellations,
};
use tracing::info;

/// Errors that stop the application from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Platform(#[from] crate::platform::PlatformError),
}

/// Everything the presentation layer needs for one session.
#[derive(Debug)]
pub struct SkyMapSession {
    catalog: SkyCatalog,
    starfield: Vec<StarPoint>,
    palette: Palette,
    interaction: InteractionState,
}

impl SkyMapSession {
    /// Read both datasets named in `config` and build the session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for an invalid config and
    /// [`AppError::Dataset`] if a dataset file cannot be read or parsed.
    /// A file that parses but has the wrong shape yields an empty catalog.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        config.validate()?;
        let lines = load_json_file(&config.catalog.line_data)?;
        let infos = load_json_file(&config.catalog.info_data)?;
        Ok(Self::from_values(&lines, &infos, config))
    }

    /// Build the session from already parsed datasets.
    pub fn from_values(lines: &Value, infos: &Value, config: &Config) -> Self {
        let catalog = SkyCatalog::from_json(lines, infos, config.catalog.radius);

        let s = &config.starfield;
        let starfield = if s.enabled {
            StarfieldGenerator::new(s.seed, s.count)
                .with_shell(s.radius, s.depth)
                .with_factor(s.factor)
                .with_saturation(s.saturation)
                .generate()
        } else {
            Vec::new()
        };

        let palette = Palette::default().scaled(
            config.style.star_size_scale,
            config.style.line_width_scale,
        );

        info!(
            constellations = catalog.len(),
            background_stars = starfield.len(),
            "Sky map session ready"
        );

        Self {
            catalog,
            starfield,
            palette,
            interaction: InteractionState::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &SkyCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn starfield(&self) -> &[StarPoint] {
        &self.starfield
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Apply a pointer event. Returns `true` if anything visible changed.
    pub fn handle(&mut self, event: SceneEvent) -> bool {
        self.interaction.update(event)
    }

    /// Constellations to draw with their current styling.
    pub fn frame(&self) -> impl Iterator<Item = SceneItem<'_>> {
        visible_constellations(&self.catalog, &self.interaction, &self.palette)
    }

    /// The catalog entry whose details panel is open.
    #[must_use]
    pub fn open_entry(&self) -> Option<&RenderEntry> {
        self.interaction
            .details()
            .and_then(|id| self.catalog.get(id))
    }

    /// Display text for the open details panel.
    #[must_use]
    pub fn open_details(&self) -> Option<ConstellationDetails> {
        self.open_entry()
            .map(|entry| ConstellationDetails::from_info(&entry.info))
    }
}
