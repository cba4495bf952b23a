//! Interface exposed to the rendering side: per-cell atlas lookups and
//! source rectangles into a fixed-cell sprite sheet.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{AtlasCoordinate, TileCatalog, TileVariant};
use crate::grid::TileGrid;

/// Cell size and spacing of the sprite sheet. Owned by the renderer.
/// Built through [`AtlasLayout::new`], which guarantees `tile + gap` fits `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtlasLayout {
    tile_width: u32,
    tile_height: u32,
    gap: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("atlas cell size must be positive, got {width}x{height}")]
    EmptyCell { width: u32, height: u32 },
    #[error("atlas cell size {tile} plus gap {gap} overflows the pixel range")]
    StrideOverflow { tile: u32, gap: u32 },
    #[error(
        "variant '{}' at atlas cell ({}, {}) lies beyond the addressable pixel range",
        .variant.name(), .coord.column, .coord.row
    )]
    CoordinateOverflow {
        variant: TileVariant,
        coord: AtlasCoordinate,
    },
    #[error(
        "variant '{}' maps to atlas cell ({}, {}) outside a {columns}x{rows} sheet",
        .variant.name(), .coord.column, .coord.row
    )]
    OutOfBounds {
        variant: TileVariant,
        coord: AtlasCoordinate,
        columns: u32,
        rows: u32,
    },
}

impl AtlasLayout {
    pub fn new(tile_width: u32, tile_height: u32, gap: u32) -> Result<Self, AtlasError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(AtlasError::EmptyCell {
                width: tile_width,
                height: tile_height,
            });
        }
        for tile in [tile_width, tile_height] {
            if tile.checked_add(gap).is_none() {
                return Err(AtlasError::StrideOverflow { tile, gap });
            }
        }
        Ok(Self {
            tile_width,
            tile_height,
            gap,
        })
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    fn stride(&self) -> (u32, u32) {
        (self.tile_width + self.gap, self.tile_height + self.gap)
    }

    /// Pixel rectangle for `coord`, or `None` if any edge of it would not fit
    /// in `u32`.
    pub fn checked_source_rect(&self, coord: AtlasCoordinate) -> Option<SourceRect> {
        let (stride_x, stride_y) = self.stride();
        let x = coord.column.checked_mul(stride_x)?;
        let y = coord.row.checked_mul(stride_y)?;
        x.checked_add(self.tile_width)?;
        y.checked_add(self.tile_height)?;
        Some(SourceRect {
            x,
            y,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Pixel rectangle for `coord`. Coordinates are expected to have passed
    /// [`AtlasLayout::check_addressable`]; anything beyond saturates.
    pub fn source_rect(&self, coord: AtlasCoordinate) -> SourceRect {
        let (stride_x, stride_y) = self.stride();
        self.checked_source_rect(coord).unwrap_or(SourceRect {
            x: coord.column.saturating_mul(stride_x),
            y: coord.row.saturating_mul(stride_y),
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Columns and rows available in a texture of the given pixel size.
    /// The last row needs no trailing gap; the last column is counted with one.
    pub fn grid_size(&self, texture_width: u32, texture_height: u32) -> (u32, u32) {
        let (stride_x, stride_y) = self.stride();
        let columns = texture_width / stride_x;
        let rows = (u64::from(texture_height) + u64::from(self.gap)) / u64::from(stride_y);
        (columns, rows as u32)
    }

    /// Fail if any catalog sprite would land outside the `u32` pixel range.
    pub fn check_addressable(&self, catalog: &TileCatalog) -> Result<(), AtlasError> {
        for entry in catalog.entries() {
            let coord = AtlasCoordinate::new(entry.column, entry.row);
            if self.checked_source_rect(coord).is_none() {
                return Err(AtlasError::CoordinateOverflow {
                    variant: entry.variant,
                    coord,
                });
            }
        }
        Ok(())
    }

    /// Fail if any catalog coordinate falls outside the sheet.
    pub fn check_catalog(
        &self,
        catalog: &TileCatalog,
        texture_width: u32,
        texture_height: u32,
    ) -> Result<(), AtlasError> {
        let (columns, rows) = self.grid_size(texture_width, texture_height);
        for entry in catalog.entries() {
            if entry.column >= columns || entry.row >= rows {
                return Err(AtlasError::OutOfBounds {
                    variant: entry.variant,
                    coord: AtlasCoordinate::new(entry.column, entry.row),
                    columns,
                    rows,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    pub x: usize,
    pub y: usize,
    pub variant: TileVariant,
    pub atlas: AtlasCoordinate,
    pub source: SourceRect,
}

pub fn render_cells<'a>(
    grid: &'a TileGrid,
    layout: &'a AtlasLayout,
) -> impl Iterator<Item = RenderCell> + 'a {
    grid.iter().map(move |(pos, tile)| RenderCell {
        x: pos.x,
        y: pos.y,
        variant: tile.variant,
        atlas: tile.atlas,
        source: layout.source_rect(tile.atlas),
    })
}

/// Serializable dump of a resolved grid.
#[derive(Debug, Serialize)]
pub struct GridExport {
    pub width: usize,
    pub height: usize,
    pub scheme: String,
    pub layout: AtlasLayout,
    pub cells: Vec<RenderCell>,
}

impl GridExport {
    pub fn new(grid: &TileGrid, layout: &AtlasLayout, scheme: &str) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            scheme: scheme.to_string(),
            layout: *layout,
            cells: render_cells(grid, layout).collect(),
        }
    }
}

/// Glyph used by the text preview.
pub fn preview_glyph(variant: TileVariant) -> char {
    match variant {
        TileVariant::Water => '~',
        TileVariant::Land => '#',
        TileVariant::Dirt => '.',
        TileVariant::Rock => '^',
        TileVariant::WaterLandTop => '-',
        TileVariant::WaterLandBottom => '_',
        TileVariant::WaterLandLeft | TileVariant::WaterLandRight => '|',
        TileVariant::WaterLandTopLeft | TileVariant::WaterLandBottomRight => '\\',
        TileVariant::WaterLandTopRight | TileVariant::WaterLandBottomLeft => '/',
        TileVariant::WaterLandTopLeftEdges
        | TileVariant::WaterLandTopRightEdges
        | TileVariant::WaterLandBottomLeftEdges
        | TileVariant::WaterLandBottomRightEdges => '+',
    }
}

pub fn preview(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (pos, tile) in grid.iter() {
        out.push(preview_glyph(tile.variant));
        if pos.x + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}
