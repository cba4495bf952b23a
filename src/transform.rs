//! Raw terrain -> resolved tile grid

use thiserror::Error;
use tracing::info;

use crate::catalog::TileCatalog;
use crate::grid::TileGrid;
use crate::shoreline::{ClassifyReport, ShorelineClassifier, ShorelinePolicy, ShorelineScheme};
use crate::terrain::{RawTerrain, RawTerrainGrid};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedMap {
    #[error("malformed map: dimensions {width}x{height} must both be positive")]
    Dimensions { width: i64, height: i64 },
    #[error("malformed map: expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("malformed map: unknown terrain code {code} at tile {index}")]
    TerrainCode { index: usize, code: i64 },
}

pub struct MapTransformer {
    catalog: TileCatalog,
    policy: Box<dyn ShorelinePolicy>,
}

impl MapTransformer {
    pub fn new(catalog: TileCatalog, policy: Box<dyn ShorelinePolicy>) -> Self {
        Self { catalog, policy }
    }

    /// Standard catalog with the compound shoreline scheme.
    pub fn standard() -> Self {
        Self::new(TileCatalog::standard(), ShorelineScheme::Compound.policy())
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn transform(&self, raw: &RawTerrainGrid) -> Result<TileGrid, MalformedMap> {
        self.transform_with_report(raw).map(|(grid, _)| grid)
    }

    /// All-or-nothing: validation happens before any grid is allocated.
    pub fn transform_with_report(
        &self,
        raw: &RawTerrainGrid,
    ) -> Result<(TileGrid, ClassifyReport), MalformedMap> {
        let (width, height, terrain) = validate(raw)?;
        let mut grid = TileGrid::from_raw(width, height, terrain, &self.catalog);
        let report = ShorelineClassifier::new(&self.catalog, self.policy.as_ref()).classify(&mut grid);
        info!(
            width,
            height,
            policy = self.policy.name(),
            shoreline_tiles = report.reclassified,
            "map transformed"
        );
        Ok((grid, report))
    }
}

impl Default for MapTransformer {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate(raw: &RawTerrainGrid) -> Result<(usize, usize, Vec<RawTerrain>), MalformedMap> {
    let dimensions = MalformedMap::Dimensions {
        width: raw.width,
        height: raw.height,
    };
    if raw.width <= 0 || raw.height <= 0 {
        return Err(dimensions);
    }
    let width = usize::try_from(raw.width).map_err(|_| dimensions.clone())?;
    let height = usize::try_from(raw.height).map_err(|_| dimensions.clone())?;
    let expected = width.checked_mul(height).ok_or(dimensions)?;

    if raw.tiles.len() != expected {
        return Err(MalformedMap::TileCount {
            expected,
            found: raw.tiles.len(),
        });
    }

    let terrain = raw
        .tiles
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            RawTerrain::from_code(code).ok_or(MalformedMap::TerrainCode { index, code })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((width, height, terrain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileVariant;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let transformer = MapTransformer::standard();
        for (width, height) in [(0, 3), (3, 0), (-2, 4), (0, 0)] {
            let raw = RawTerrainGrid::new(width, height, Vec::new());
            assert_eq!(
                transformer.transform(&raw),
                Err(MalformedMap::Dimensions { width, height })
            );
        }
    }

    #[test]
    fn test_rejects_wrong_tile_count() {
        let raw = RawTerrainGrid::new(2, 2, vec![0, 1, 0]);
        assert_eq!(
            MapTransformer::standard().transform(&raw),
            Err(MalformedMap::TileCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_rejects_unknown_code() {
        let raw = RawTerrainGrid::new(2, 1, vec![1, 7]);
        assert_eq!(
            MapTransformer::standard().transform(&raw),
            Err(MalformedMap::TerrainCode { index: 1, code: 7 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = MalformedMap::TerrainCode { index: 4, code: -1 };
        assert_eq!(
            err.to_string(),
            "malformed map: unknown terrain code -1 at tile 4"
        );
    }

    #[test]
    fn test_single_water_cell() {
        let raw = RawTerrainGrid::new(1, 1, vec![0]);
        let grid = MapTransformer::standard().transform(&raw).unwrap();
        assert_eq!(grid.variant_at(0, 0), Some(TileVariant::Water));
    }

    #[test]
    fn test_policy_is_swappable() {
        let raw = RawTerrainGrid::from_rows(&["#~", "~~"]);
        let compound = MapTransformer::standard().transform(&raw).unwrap();
        let edge = MapTransformer::new(TileCatalog::standard(), ShorelineScheme::Edge.policy())
            .transform(&raw)
            .unwrap();
        assert_eq!(compound.variant_at(1, 1), Some(TileVariant::WaterLandTopLeft));
        assert_eq!(edge.variant_at(1, 1), Some(TileVariant::WaterLandTop));
    }
}
