//! Resolved tile grid and neighbor sampling

use serde::{Deserialize, Serialize};

use crate::catalog::{AtlasCoordinate, TileCatalog, TileVariant};
use crate::terrain::RawTerrain;

/// Tile position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: usize,
    pub y: usize,
}

impl TilePos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub raw: RawTerrain,
    pub variant: TileVariant,
    pub atlas: AtlasCoordinate,
    /// Reserved; always 0.
    pub elevation: i32,
}

impl Tile {
    pub fn from_raw(raw: RawTerrain, catalog: &TileCatalog) -> Self {
        let variant = catalog.base_variant(raw);
        Self {
            raw,
            variant,
            atlas: catalog.atlas_coordinate(variant),
            elevation: 0,
        }
    }
}

/// The eight cells around a tile. Screen convention: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Offset {
    pub const ALL: [Offset; 8] = [
        Offset::TopLeft,
        Offset::Top,
        Offset::TopRight,
        Offset::Left,
        Offset::Right,
        Offset::BottomLeft,
        Offset::Bottom,
        Offset::BottomRight,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Offset::TopLeft => (-1, -1),
            Offset::Top => (0, -1),
            Offset::TopRight => (1, -1),
            Offset::Left => (-1, 0),
            Offset::Right => (1, 0),
            Offset::BottomLeft => (-1, 1),
            Offset::Bottom => (0, 1),
            Offset::BottomRight => (1, 1),
        }
    }
}

/// Row-major grid of resolved tiles. Only the transformer mutates it; callers
/// get a read-only view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub(crate) fn from_raw(
        width: usize,
        height: usize,
        terrain: impl IntoIterator<Item = RawTerrain>,
        catalog: &TileCatalog,
    ) -> Self {
        let tiles: Vec<Tile> = terrain
            .into_iter()
            .map(|raw| Tile::from_raw(raw, catalog))
            .collect();
        debug_assert_eq!(tiles.len(), width * height);
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn index_of(&self, pos: TilePos) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }

    pub fn pos_of(&self, index: usize) -> Option<TilePos> {
        if index < self.tiles.len() {
            Some(TilePos::new(index % self.width, index / self.width))
        } else {
            None
        }
    }

    pub fn get(&self, pos: TilePos) -> Option<&Tile> {
        self.index_of(pos).map(|index| &self.tiles[index])
    }

    pub fn variant_at(&self, x: usize, y: usize) -> Option<TileVariant> {
        self.get(TilePos::new(x, y)).map(|tile| tile.variant)
    }

    /// Tiles with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, &Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, tile)| (TilePos::new(index % width, index / width), tile))
    }

    /// Current variant of the cell at `(x + dx, y + dy)`, or `None` when that
    /// cell lies outside the grid. `None` is the unknown sentinel and is never
    /// stored in a tile.
    pub fn neighbor_variant(&self, x: usize, y: usize, dx: i64, dy: i64) -> Option<TileVariant> {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
            return None;
        }
        Some(self.tiles[ny as usize * self.width + nx as usize].variant)
    }

    pub fn neighbor(&self, pos: TilePos, offset: Offset) -> Option<TileVariant> {
        let (dx, dy) = offset.delta();
        self.neighbor_variant(pos.x, pos.y, dx, dy)
    }

    /// Write a variant and the matching atlas coordinate together.
    pub(crate) fn set_variant(&mut self, index: usize, variant: TileVariant, catalog: &TileCatalog) {
        let tile = &mut self.tiles[index];
        tile.variant = variant;
        tile.atlas = catalog.atlas_coordinate(variant);
    }

    /// Count of tiles per variant, in `TileVariant::ALL` order, skipping zeros.
    pub fn variant_counts(&self) -> Vec<(TileVariant, usize)> {
        TileVariant::ALL
            .iter()
            .map(|variant| {
                let count = self.tiles.iter().filter(|t| t.variant == *variant).count();
                (*variant, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize, raw: &[RawTerrain]) -> TileGrid {
        TileGrid::from_raw(width, height, raw.iter().copied(), &TileCatalog::standard())
    }

    #[test]
    fn test_pos_index_conversion() {
        let grid = grid(3, 2, &[RawTerrain::Water; 6]);
        let pos = TilePos::new(2, 1);
        let index = grid.index_of(pos).unwrap();
        assert_eq!(index, 5);
        assert_eq!(grid.pos_of(index), Some(pos));
        assert_eq!(grid.index_of(TilePos::new(3, 0)), None);
        assert_eq!(grid.pos_of(6), None);
    }

    #[test]
    fn test_neighbor_out_of_bounds_is_unknown() {
        let grid = grid(2, 2, &[RawTerrain::Land; 4]);
        assert_eq!(grid.neighbor_variant(0, 0, -1, -1), None);
        assert_eq!(grid.neighbor_variant(0, 0, 0, -1), None);
        assert_eq!(grid.neighbor_variant(0, 0, -1, 0), None);
        assert_eq!(grid.neighbor_variant(1, 1, 1, 0), None);
        assert_eq!(grid.neighbor_variant(1, 1, 0, 1), None);
        assert_eq!(grid.neighbor_variant(0, 0, 1, 1), Some(TileVariant::Land));
    }

    #[test]
    fn test_neighbor_offsets() {
        use RawTerrain::*;
        #[rustfmt::skip]
        let grid = grid(3, 3, &[
            Land, Dirt, Rock,
            Water, Water, Land,
            Rock, Dirt, Water,
        ]);
        let center = TilePos::new(1, 1);
        let seen: Vec<_> = Offset::ALL
            .iter()
            .map(|offset| grid.neighbor(center, *offset))
            .collect();
        assert_eq!(
            seen,
            vec![
                Some(TileVariant::Land),
                Some(TileVariant::Dirt),
                Some(TileVariant::Rock),
                Some(TileVariant::Water),
                Some(TileVariant::Land),
                Some(TileVariant::Rock),
                Some(TileVariant::Dirt),
                Some(TileVariant::Water),
            ]
        );
    }

    #[test]
    fn test_variant_counts_skip_absent_variants() {
        use RawTerrain::*;
        let grid = grid(3, 2, &[Land, Water, Land, Rock, Water, Land]);
        assert_eq!(
            grid.variant_counts(),
            vec![
                (TileVariant::Water, 2),
                (TileVariant::Land, 3),
                (TileVariant::Rock, 1),
            ]
        );
    }

    #[test]
    fn test_set_variant_updates_atlas() {
        let catalog = TileCatalog::standard();
        let mut grid = grid(1, 1, &[RawTerrain::Water]);
        grid.set_variant(0, TileVariant::WaterLandTop, &catalog);
        let tile = grid.get(TilePos::new(0, 0)).unwrap();
        assert_eq!(tile.variant, TileVariant::WaterLandTop);
        assert_eq!(tile.atlas, catalog.atlas_coordinate(TileVariant::WaterLandTop));
        assert_eq!(tile.raw, RawTerrain::Water);
    }
}
