use super::{single_edge, Neighborhood, ShorelinePolicy, AMBIGUOUS_FALLBACK};
use crate::catalog::TileVariant;

/// Eight-variant scheme driven only by the four edges: a single land edge
/// gives that edge, two adjoining land edges give the plain corner between
/// them. Diagonals only decide whether the cell is shoreline at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeShoreline;

impl ShorelinePolicy for EdgeShoreline {
    fn name(&self) -> &'static str {
        "edge"
    }

    fn resolve(&self, n: &Neighborhood) -> TileVariant {
        if let Some(edge) = single_edge(n) {
            return edge;
        }
        match (n.top, n.bottom, n.left, n.right) {
            (true, false, true, false) => TileVariant::WaterLandTopLeft,
            (true, false, false, true) => TileVariant::WaterLandTopRight,
            (false, true, true, false) => TileVariant::WaterLandBottomLeft,
            (false, true, false, true) => TileVariant::WaterLandBottomRight,
            _ => AMBIGUOUS_FALLBACK,
        }
    }
}
