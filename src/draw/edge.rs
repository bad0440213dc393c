use egui::{Align2, FontFamily, FontId, Stroke};

use crate::elements::Node;
use crate::matrix::format_weight;

use super::drawer::DrawContext;

/// Draws one edge as a line between node centers plus its weight at the
/// segment midpoint. The edge takes the highlight color only when both
/// endpoints are highlighted.
pub(super) fn draw_edge(ctx: &DrawContext<'_>, start: &Node, end: &Node, weight: f32) {
    let style = ctx.style;
    let color = if start.highlighted() && end.highlighted() {
        style.highlight_color
    } else {
        style.default_color
    };

    ctx.painter.line_segment(
        [start.location(), end.location()],
        Stroke::new(style.edge_width, color),
    );

    let midpoint = start.location().lerp(end.location(), 0.5);
    ctx.painter.text(
        midpoint,
        Align2::CENTER_CENTER,
        format_weight(weight),
        FontId::new(style.weight_font_size, FontFamily::Monospace),
        style.weight_color,
    );
}
