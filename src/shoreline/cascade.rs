use super::{Corner, Neighborhood, ShorelinePolicy};
use crate::catalog::TileVariant;

/// Fixed-order cascade: TL, T, TR, L, R, BL, B, BR. The first land flag in
/// that order decides the variant; corners are upgraded to their compound
/// form when both adjoining edges are land as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeShoreline;

enum Step {
    Corner(Corner),
    Edge(bool, TileVariant),
}

impl ShorelinePolicy for CascadeShoreline {
    fn name(&self) -> &'static str {
        "cascade"
    }

    fn resolve(&self, n: &Neighborhood) -> TileVariant {
        let steps = [
            Step::Corner(Corner::TopLeft),
            Step::Edge(n.top, TileVariant::WaterLandTop),
            Step::Corner(Corner::TopRight),
            Step::Edge(n.left, TileVariant::WaterLandLeft),
            Step::Edge(n.right, TileVariant::WaterLandRight),
            Step::Corner(Corner::BottomLeft),
            Step::Edge(n.bottom, TileVariant::WaterLandBottom),
            Step::Corner(Corner::BottomRight),
        ];
        for step in steps {
            match step {
                Step::Corner(corner) if corner.diagonal(n) => {
                    return match corner.adjacent_edges(n) {
                        (true, true) => corner.compound(),
                        _ => corner.plain(),
                    };
                }
                Step::Edge(true, variant) => return variant,
                _ => {}
            }
        }
        TileVariant::Water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_wins_over_everything() {
        let n = Neighborhood {
            top_left: true,
            bottom: true,
            right: true,
            bottom_right: true,
            ..Default::default()
        };
        assert_eq!(CascadeShoreline.resolve(&n), TileVariant::WaterLandTopLeft);
    }

    #[test]
    fn test_top_edge_beats_top_right_corner() {
        let n = Neighborhood {
            top: true,
            top_right: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(CascadeShoreline.resolve(&n), TileVariant::WaterLandTop);
    }

    #[test]
    fn test_enclosed_cell_takes_top_left_compound() {
        let n = Neighborhood {
            top_left: true,
            top: true,
            top_right: true,
            left: true,
            right: true,
            bottom_left: true,
            bottom: true,
            bottom_right: true,
        };
        assert_eq!(
            CascadeShoreline.resolve(&n),
            TileVariant::WaterLandTopLeftEdges
        );
    }

    #[test]
    fn test_bottom_right_last() {
        let n = Neighborhood {
            bottom_right: true,
            bottom: true,
            right: true,
            ..Default::default()
        };
        // right edge precedes the bottom-right corner in the cascade
        assert_eq!(CascadeShoreline.resolve(&n), TileVariant::WaterLandRight);
    }
}
