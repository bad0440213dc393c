use egui::Painter;

use crate::graph::GraphState;
use crate::settings::SettingsStyle;

use super::{edge, node};

/// Everything the drawing passes need for one frame.
pub struct DrawContext<'a> {
    pub painter: &'a Painter,
    pub style: &'a SettingsStyle,
}

/// Paints the loaded graph: the edge pass first, then the node pass on top.
///
/// Each shape carries its own stroke, fill and font, so nothing painter-global
/// is mutated between primitives.
pub struct Drawer<'a> {
    ctx: &'a DrawContext<'a>,
    state: &'a GraphState,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a GraphState, ctx: &'a DrawContext<'a>) -> Self {
        Self { ctx, state }
    }

    pub fn draw(self) {
        self.draw_edges();
        self.draw_nodes();
    }

    /// One line per unordered pair with a non-zero weight.
    fn draw_edges(&self) {
        let matrix = self.state.matrix();
        let n = matrix.size();
        for i in 0..n {
            for j in (i + 1)..n {
                let weight = matrix.weight(i, j);
                if weight <= 0. {
                    continue;
                }
                let (Some(start), Some(end)) = (self.state.node(i), self.state.node(j)) else {
                    continue;
                };
                edge::draw_edge(self.ctx, start, end, weight);
            }
        }
    }

    fn draw_nodes(&self) {
        for n in self.state.nodes() {
            node::draw_node(self.ctx, n);
        }
    }
}
