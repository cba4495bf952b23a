use super::{single_edge, Corner, Neighborhood, ShorelinePolicy, AMBIGUOUS_FALLBACK};
use crate::catalog::TileVariant;

/// Corner-first classification with compound corner variants.
///
/// Rules, first match wins:
/// 1. exactly one diagonal is land and neither of its adjoining edges is:
///    plain corner;
/// 2. exactly one diagonal is land together with both adjoining edges:
///    compound corner (an inlet rather than a straight coast);
/// 3. exactly one edge is land: that edge;
/// 4. anything else falls back to the top edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundShoreline;

impl ShorelinePolicy for CompoundShoreline {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn resolve(&self, n: &Neighborhood) -> TileVariant {
        if n.corner_count() == 1 {
            if let Some(corner) = Corner::ALL.into_iter().find(|c| c.diagonal(n)) {
                if corner.adjacent_edges(n) == (false, false) {
                    return corner.plain();
                }
            }
        }

        let mut filled = Corner::ALL
            .into_iter()
            .filter(|c| c.diagonal(n) && c.adjacent_edges(n) == (true, true));
        if let (Some(corner), None) = (filled.next(), filled.next()) {
            return corner.compound();
        }

        single_edge(n).unwrap_or(AMBIGUOUS_FALLBACK)
    }
}
