//! Configuration for the tiling engine and its atlas

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{CatalogEntry, TileCatalog};
use crate::render::AtlasLayout;
use crate::shoreline::ShorelineScheme;
use crate::transform::MapTransformer;

/// Main configuration, usually read from YAML at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub atlas: AtlasConfig,
    #[serde(default)]
    pub shoreline: ShorelineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Full replacement for the built-in variant table. Must cover every variant.
    #[serde(default)]
    pub catalog: Option<Vec<CatalogEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub texture_width: Option<u32>,
    #[serde(default)]
    pub texture_height: Option<u32>,
    pub tile_width: u32,
    pub tile_height: u32,
    #[serde(default)]
    pub gap: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShorelineConfig {
    #[serde(default)]
    pub scheme: ShorelineScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// 16x16 cells, one pixel apart, standard table, compound shorelines
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            atlas: AtlasConfig {
                texture: None,
                texture_width: None,
                texture_height: None,
                tile_width: 16,
                tile_height: 16,
                gap: 1,
            },
            shoreline: ShorelineConfig::default(),
            logging: LoggingConfig::default(),
            catalog: None,
        }
    }

    pub fn build_catalog(&self) -> Result<TileCatalog> {
        let catalog = match &self.catalog {
            Some(entries) => TileCatalog::from_entries(entries.iter().copied())
                .with_context(|| format!("Invalid tile catalog in config '{}'", self.name))?,
            None => TileCatalog::standard(),
        };
        Ok(catalog)
    }

    pub fn build_layout(&self) -> Result<AtlasLayout> {
        let layout = AtlasLayout::new(
            self.atlas.tile_width,
            self.atlas.tile_height,
            self.atlas.gap,
        )?;
        Ok(layout)
    }

    /// Everything the engine needs, validated up front: catalog totality,
    /// pixel-addressable sprites and, when the texture size is known, that
    /// every sprite fits on the sheet.
    pub fn build_transformer(&self) -> Result<(MapTransformer, AtlasLayout)> {
        let catalog = self.build_catalog()?;
        let layout = self.build_layout()?;
        layout
            .check_addressable(&catalog)
            .with_context(|| format!("Invalid atlas in config '{}'", self.name))?;
        if let (Some(width), Some(height)) = (self.atlas.texture_width, self.atlas.texture_height)
        {
            layout
                .check_catalog(&catalog, width, height)
                .with_context(|| format!("Tile catalog does not fit {width}x{height} atlas"))?;
        }
        let transformer = MapTransformer::new(catalog, self.shoreline.scheme.policy());
        Ok((transformer, layout))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
