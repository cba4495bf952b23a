pub mod catalog;
pub mod config;
pub mod grid;
pub mod render;
pub mod shoreline;
pub mod snapshot;
pub mod terrain;
pub mod transform;

pub use catalog::{AtlasCoordinate, CatalogError, TileCatalog, TileVariant};
pub use config::Config;
pub use grid::{Tile, TileGrid, TilePos};
pub use shoreline::{ShorelinePolicy, ShorelineScheme};
pub use terrain::{RawTerrain, RawTerrainGrid};
pub use transform::{MalformedMap, MapTransformer};
