//! Shoreline classification - turns water next to land into transition tiles
//!
//! The scan is row-major and writes each result back into the grid before
//! moving on, so later cells sample already-classified neighbors. Which
//! shoreline variant a cell receives is decided by a [`ShorelinePolicy`];
//! the scan itself never changes between policies.

mod cascade;
mod compound;
mod edge;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{TileCatalog, TileVariant};
use crate::grid::{Offset, TileGrid, TilePos};

pub use cascade::CascadeShoreline;
pub use compound::CompoundShoreline;
pub use edge::EdgeShoreline;

/// Which of the eight neighbors count as land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub top_left: bool,
    pub top: bool,
    pub top_right: bool,
    pub left: bool,
    pub right: bool,
    pub bottom_left: bool,
    pub bottom: bool,
    pub bottom_right: bool,
}

impl Neighborhood {
    /// Sample the live grid around `pos`. Out-of-bounds neighbors are never land.
    pub fn sample(grid: &TileGrid, pos: TilePos) -> Self {
        let land = |offset| grid.neighbor(pos, offset).is_some_and(TileVariant::is_land);
        Self {
            top_left: land(Offset::TopLeft),
            top: land(Offset::Top),
            top_right: land(Offset::TopRight),
            left: land(Offset::Left),
            right: land(Offset::Right),
            bottom_left: land(Offset::BottomLeft),
            bottom: land(Offset::Bottom),
            bottom_right: land(Offset::BottomRight),
        }
    }

    pub fn any(&self) -> bool {
        self.edges().iter().any(|flag| *flag) || self.corners().iter().any(|flag| *flag)
    }

    /// `[top, bottom, left, right]`
    pub fn edges(&self) -> [bool; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    /// `[top_left, top_right, bottom_left, bottom_right]`
    pub fn corners(&self) -> [bool; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn edge_count(&self) -> usize {
        self.edges().iter().filter(|flag| **flag).count()
    }

    pub fn corner_count(&self) -> usize {
        self.corners().iter().filter(|flag| **flag).count()
    }
}

/// One of the four diagonals, with the two edges that adjoin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub(crate) const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub(crate) fn diagonal(self, n: &Neighborhood) -> bool {
        match self {
            Corner::TopLeft => n.top_left,
            Corner::TopRight => n.top_right,
            Corner::BottomLeft => n.bottom_left,
            Corner::BottomRight => n.bottom_right,
        }
    }

    /// The vertical and horizontal edge flags touching this corner.
    pub(crate) fn adjacent_edges(self, n: &Neighborhood) -> (bool, bool) {
        match self {
            Corner::TopLeft => (n.top, n.left),
            Corner::TopRight => (n.top, n.right),
            Corner::BottomLeft => (n.bottom, n.left),
            Corner::BottomRight => (n.bottom, n.right),
        }
    }

    pub(crate) fn plain(self) -> TileVariant {
        match self {
            Corner::TopLeft => TileVariant::WaterLandTopLeft,
            Corner::TopRight => TileVariant::WaterLandTopRight,
            Corner::BottomLeft => TileVariant::WaterLandBottomLeft,
            Corner::BottomRight => TileVariant::WaterLandBottomRight,
        }
    }

    pub(crate) fn compound(self) -> TileVariant {
        match self {
            Corner::TopLeft => TileVariant::WaterLandTopLeftEdges,
            Corner::TopRight => TileVariant::WaterLandTopRightEdges,
            Corner::BottomLeft => TileVariant::WaterLandBottomLeftEdges,
            Corner::BottomRight => TileVariant::WaterLandBottomRightEdges,
        }
    }
}

/// Variant for a water cell with exactly one land edge, if that is the case.
pub(crate) fn single_edge(n: &Neighborhood) -> Option<TileVariant> {
    match (n.top, n.bottom, n.left, n.right) {
        (true, false, false, false) => Some(TileVariant::WaterLandTop),
        (false, true, false, false) => Some(TileVariant::WaterLandBottom),
        (false, false, true, false) => Some(TileVariant::WaterLandLeft),
        (false, false, false, true) => Some(TileVariant::WaterLandRight),
        _ => None,
    }
}

/// Fallback for neighborhoods no rule resolves uniquely.
pub const AMBIGUOUS_FALLBACK: TileVariant = TileVariant::WaterLandTop;

/// Strategy deciding the shoreline variant for a water cell.
///
/// `resolve` is only called when at least one neighbor is land, and must
/// return a water-centred variant.
pub trait ShorelinePolicy {
    fn name(&self) -> &'static str;
    fn resolve(&self, neighborhood: &Neighborhood) -> TileVariant;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShorelineScheme {
    #[default]
    Compound,
    Edge,
    Cascade,
}

impl ShorelineScheme {
    pub fn policy(self) -> Box<dyn ShorelinePolicy> {
        match self {
            ShorelineScheme::Compound => Box::new(CompoundShoreline),
            ShorelineScheme::Edge => Box::new(EdgeShoreline),
            ShorelineScheme::Cascade => Box::new(CascadeShoreline),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifyReport {
    pub water_cells: usize,
    pub reclassified: usize,
    pub by_variant: BTreeMap<TileVariant, usize>,
}

pub struct ShorelineClassifier<'a> {
    catalog: &'a TileCatalog,
    policy: &'a dyn ShorelinePolicy,
}

impl<'a> ShorelineClassifier<'a> {
    pub fn new(catalog: &'a TileCatalog, policy: &'a dyn ShorelinePolicy) -> Self {
        Self { catalog, policy }
    }

    /// Single in-place pass over the grid, y then x.
    pub fn classify(&self, grid: &mut TileGrid) -> ClassifyReport {
        let mut report = ClassifyReport::default();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = TilePos::new(x, y);
                let index = y * grid.width() + x;
                if !grid.tiles()[index].raw.is_water() {
                    continue;
                }
                report.water_cells += 1;

                let neighborhood = Neighborhood::sample(grid, pos);
                if !neighborhood.any() {
                    continue;
                }

                let variant = self.policy.resolve(&neighborhood);
                debug_assert!(!variant.is_land(), "policy returned a land variant");
                grid.set_variant(index, variant, self.catalog);
                if variant != TileVariant::Water {
                    report.reclassified += 1;
                    *report.by_variant.entry(variant).or_default() += 1;
                }
            }
        }
        debug!(
            policy = self.policy.name(),
            water_cells = report.water_cells,
            reclassified = report.reclassified,
            "shoreline pass complete"
        );
        report
    }
}
