//! Tile catalog - variant identities and their sprite sheet coordinates

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::terrain::RawTerrain;

/// Fully resolved visual identity of a cell.
///
/// Shoreline variants are named after the sides of the water cell that touch
/// land. The `*Edges` corners are the compound variants: diagonal land plus
/// both adjoining edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileVariant {
    Water,
    Land,
    Dirt,
    Rock,
    WaterLandTop,
    WaterLandBottom,
    WaterLandLeft,
    WaterLandRight,
    WaterLandTopLeft,
    WaterLandTopRight,
    WaterLandBottomLeft,
    WaterLandBottomRight,
    WaterLandTopLeftEdges,
    WaterLandTopRightEdges,
    WaterLandBottomLeftEdges,
    WaterLandBottomRightEdges,
}

impl TileVariant {
    pub const COUNT: usize = 16;

    pub const ALL: [TileVariant; Self::COUNT] = [
        TileVariant::Water,
        TileVariant::Land,
        TileVariant::Dirt,
        TileVariant::Rock,
        TileVariant::WaterLandTop,
        TileVariant::WaterLandBottom,
        TileVariant::WaterLandLeft,
        TileVariant::WaterLandRight,
        TileVariant::WaterLandTopLeft,
        TileVariant::WaterLandTopRight,
        TileVariant::WaterLandBottomLeft,
        TileVariant::WaterLandBottomRight,
        TileVariant::WaterLandTopLeftEdges,
        TileVariant::WaterLandTopRightEdges,
        TileVariant::WaterLandBottomLeftEdges,
        TileVariant::WaterLandBottomRightEdges,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Plain variant for an unprocessed terrain cell.
    pub fn base(raw: RawTerrain) -> Self {
        match raw {
            RawTerrain::Water => TileVariant::Water,
            RawTerrain::Land => TileVariant::Land,
            RawTerrain::Dirt => TileVariant::Dirt,
            RawTerrain::Rock => TileVariant::Rock,
        }
    }

    /// Terrain at the centre of the sprite.
    pub fn base_terrain(self) -> RawTerrain {
        match self {
            TileVariant::Land => RawTerrain::Land,
            TileVariant::Dirt => RawTerrain::Dirt,
            TileVariant::Rock => RawTerrain::Rock,
            _ => RawTerrain::Water,
        }
    }

    pub fn is_land(self) -> bool {
        !self.base_terrain().is_water()
    }

    pub fn is_shoreline(self) -> bool {
        !matches!(
            self,
            TileVariant::Water | TileVariant::Land | TileVariant::Dirt | TileVariant::Rock
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TileVariant::Water => "water",
            TileVariant::Land => "land",
            TileVariant::Dirt => "dirt",
            TileVariant::Rock => "rock",
            TileVariant::WaterLandTop => "water_land_top",
            TileVariant::WaterLandBottom => "water_land_bottom",
            TileVariant::WaterLandLeft => "water_land_left",
            TileVariant::WaterLandRight => "water_land_right",
            TileVariant::WaterLandTopLeft => "water_land_top_left",
            TileVariant::WaterLandTopRight => "water_land_top_right",
            TileVariant::WaterLandBottomLeft => "water_land_bottom_left",
            TileVariant::WaterLandBottomRight => "water_land_bottom_right",
            TileVariant::WaterLandTopLeftEdges => "water_land_top_left_edges",
            TileVariant::WaterLandTopRightEdges => "water_land_top_right_edges",
            TileVariant::WaterLandBottomLeftEdges => "water_land_bottom_left_edges",
            TileVariant::WaterLandBottomRightEdges => "water_land_bottom_right_edges",
        }
    }
}

/// Column/row of a cell in the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtlasCoordinate {
    pub column: u32,
    pub row: u32,
}

impl AtlasCoordinate {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub variant: TileVariant,
    pub column: u32,
    pub row: u32,
}

impl CatalogEntry {
    pub const fn new(variant: TileVariant, column: u32, row: u32) -> Self {
        Self {
            variant,
            column,
            row,
        }
    }
}

// The left edge sits at (2, 1) between the compound corners, not at (0, 1):
// that cell belongs to the plain top-left corner.
pub const STANDARD_ENTRIES: [CatalogEntry; TileVariant::COUNT] = [
    CatalogEntry::new(TileVariant::Water, 0, 0),
    CatalogEntry::new(TileVariant::Land, 5, 0),
    CatalogEntry::new(TileVariant::Dirt, 3, 3),
    CatalogEntry::new(TileVariant::Rock, 4, 4),
    CatalogEntry::new(TileVariant::WaterLandTopLeftEdges, 2, 0),
    CatalogEntry::new(TileVariant::WaterLandTop, 3, 0),
    CatalogEntry::new(TileVariant::WaterLandTopRightEdges, 4, 0),
    CatalogEntry::new(TileVariant::WaterLandLeft, 2, 1),
    CatalogEntry::new(TileVariant::WaterLandRight, 4, 1),
    CatalogEntry::new(TileVariant::WaterLandBottomLeftEdges, 2, 2),
    CatalogEntry::new(TileVariant::WaterLandBottom, 3, 2),
    CatalogEntry::new(TileVariant::WaterLandBottomRightEdges, 4, 2),
    CatalogEntry::new(TileVariant::WaterLandTopLeft, 0, 1),
    CatalogEntry::new(TileVariant::WaterLandTopRight, 1, 1),
    CatalogEntry::new(TileVariant::WaterLandBottomLeft, 0, 2),
    CatalogEntry::new(TileVariant::WaterLandBottomRight, 1, 2),
];

/// Standard table resolved at compile time; a duplicate or missing variant in
/// `STANDARD_ENTRIES` fails the build.
const STANDARD_COORDS: [AtlasCoordinate; TileVariant::COUNT] = resolve_standard();

const fn resolve_standard() -> [AtlasCoordinate; TileVariant::COUNT] {
    let mut slots: [Option<AtlasCoordinate>; TileVariant::COUNT] = [None; TileVariant::COUNT];
    let mut i = 0;
    while i < STANDARD_ENTRIES.len() {
        let entry = STANDARD_ENTRIES[i];
        let index = entry.variant as usize;
        assert!(slots[index].is_none(), "standard catalog lists a variant twice");
        slots[index] = Some(AtlasCoordinate::new(entry.column, entry.row));
        i += 1;
    }

    let mut coords = [AtlasCoordinate::new(0, 0); TileVariant::COUNT];
    let mut index = 0;
    while index < TileVariant::COUNT {
        match slots[index] {
            Some(coord) => coords[index] = coord,
            None => panic!("standard catalog is missing a variant"),
        }
        index += 1;
    }
    coords
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("tile catalog has no atlas coordinate for variant '{}'", .0.name())]
    Gap(TileVariant),
    #[error("tile catalog lists variant '{}' more than once", .0.name())]
    Duplicate(TileVariant),
}

/// Immutable variant -> atlas table. Built once at startup and shared by
/// reference; every variant is guaranteed to have a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCatalog {
    coords: [AtlasCoordinate; TileVariant::COUNT],
}

impl TileCatalog {
    pub fn standard() -> Self {
        Self {
            coords: STANDARD_COORDS,
        }
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut slots: [Option<AtlasCoordinate>; TileVariant::COUNT] = [None; TileVariant::COUNT];
        for entry in entries {
            let slot = &mut slots[entry.variant.index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate(entry.variant));
            }
            *slot = Some(AtlasCoordinate::new(entry.column, entry.row));
        }

        let mut coords = [AtlasCoordinate::new(0, 0); TileVariant::COUNT];
        for variant in TileVariant::ALL {
            coords[variant.index()] = slots[variant.index()].ok_or(CatalogError::Gap(variant))?;
        }

        let catalog = Self { coords };
        for (a, b) in catalog.shared_coordinates() {
            warn!(
                first = a.name(),
                second = b.name(),
                "tile variants share an atlas coordinate"
            );
        }
        Ok(catalog)
    }

    pub fn base_variant(&self, raw: RawTerrain) -> TileVariant {
        TileVariant::base(raw)
    }

    pub fn atlas_coordinate(&self, variant: TileVariant) -> AtlasCoordinate {
        self.coords[variant.index()]
    }

    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        TileVariant::ALL.into_iter().map(|variant| {
            let coord = self.atlas_coordinate(variant);
            CatalogEntry::new(variant, coord.column, coord.row)
        })
    }

    /// Pairs of distinct variants drawn from the same sprite.
    pub fn shared_coordinates(&self) -> Vec<(TileVariant, TileVariant)> {
        let mut pairs = Vec::new();
        for (i, a) in TileVariant::ALL.iter().enumerate() {
            for b in &TileVariant::ALL[i + 1..] {
                if self.atlas_coordinate(*a) == self.atlas_coordinate(*b) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_variant_in_index_order() {
        for (i, variant) in TileVariant::ALL.iter().enumerate() {
            assert_eq!(variant.index(), i);
        }
    }

    #[test]
    fn test_standard_entries_are_total() {
        let rebuilt = TileCatalog::from_entries(STANDARD_ENTRIES).unwrap();
        assert_eq!(rebuilt, TileCatalog::standard());
        assert!(rebuilt.shared_coordinates().is_empty());
    }

    #[test]
    fn test_standard_left_edge_has_its_own_cell() {
        let catalog = TileCatalog::standard();
        assert_eq!(
            catalog.atlas_coordinate(TileVariant::WaterLandLeft),
            AtlasCoordinate::new(2, 1)
        );
        assert_ne!(
            catalog.atlas_coordinate(TileVariant::WaterLandLeft),
            catalog.atlas_coordinate(TileVariant::WaterLandTopLeft)
        );
    }

    #[test]
    fn test_base_variants() {
        let catalog = TileCatalog::standard();
        assert_eq!(catalog.base_variant(RawTerrain::Water), TileVariant::Water);
        assert_eq!(catalog.base_variant(RawTerrain::Land), TileVariant::Land);
        assert_eq!(catalog.base_variant(RawTerrain::Dirt), TileVariant::Dirt);
        assert_eq!(catalog.base_variant(RawTerrain::Rock), TileVariant::Rock);
        assert_eq!(
            catalog.atlas_coordinate(TileVariant::Land),
            AtlasCoordinate::new(5, 0)
        );
    }

    #[test]
    fn test_missing_variant_is_a_gap() {
        let entries = STANDARD_ENTRIES
            .into_iter()
            .filter(|entry| entry.variant != TileVariant::WaterLandRight);
        assert_eq!(
            TileCatalog::from_entries(entries),
            Err(CatalogError::Gap(TileVariant::WaterLandRight))
        );
    }

    #[test]
    fn test_duplicate_variant_rejected() {
        let mut entries = STANDARD_ENTRIES.to_vec();
        entries.push(CatalogEntry::new(TileVariant::Dirt, 9, 9));
        assert_eq!(
            TileCatalog::from_entries(entries),
            Err(CatalogError::Duplicate(TileVariant::Dirt))
        );
    }

    #[test]
    fn test_shared_coordinates_reported() {
        let entries = STANDARD_ENTRIES.map(|entry| {
            if entry.variant == TileVariant::WaterLandLeft {
                CatalogEntry::new(entry.variant, 0, 1)
            } else {
                entry
            }
        });
        let catalog = TileCatalog::from_entries(entries).unwrap();
        assert_eq!(
            catalog.shared_coordinates(),
            vec![(TileVariant::WaterLandLeft, TileVariant::WaterLandTopLeft)]
        );
    }

    #[test]
    fn test_land_distinction() {
        assert!(TileVariant::Dirt.is_land());
        assert!(TileVariant::Rock.is_land());
        assert!(!TileVariant::Water.is_land());
        assert!(!TileVariant::WaterLandTopLeftEdges.is_land());
        assert!(TileVariant::WaterLandTop.is_shoreline());
        assert!(!TileVariant::Land.is_shoreline());
    }
}
