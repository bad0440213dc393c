use egui::{Pos2, Rect};

use crate::elements::Node;
use crate::matrix::AdjacencyMatrix;

/// Distance from the canvas center at which every node is placed.
pub const LAYOUT_RADIUS: f32 = 120.;

/// Places one node per matrix row on a circle around the canvas center.
///
/// Node `i` sits at `(i + 1) * 360 / n` degrees, so the first node is seeded
/// one slot past the positive x axis rather than on it. The placement is
/// deterministic for a given matrix size and canvas, and node order is row
/// order.
pub fn circular(matrix: &AdjacencyMatrix, canvas: Rect) -> Vec<Node> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }

    let center = canvas.center();
    let slot = std::f32::consts::TAU / n as f32;

    log::debug!("laying out {n} nodes around {center:?}");

    (0..n)
        .map(|i| {
            let angle = (i + 1) as f32 * slot;
            let location = Pos2::new(
                center.x + LAYOUT_RADIUS * angle.cos(),
                center.y + LAYOUT_RADIUS * angle.sin(),
            );
            Node::new(i, location)
        })
        .collect()
}
