use egui::{Align2, FontFamily, FontId, Stroke};

use crate::elements::Node;

use super::drawer::DrawContext;

/// Draws one node as a filled, stroked circle with its letter label centered
/// on top.
pub(super) fn draw_node(ctx: &DrawContext<'_>, node: &Node) {
    let style = ctx.style;
    let color = if node.highlighted() {
        style.highlight_color
    } else {
        style.default_color
    };

    ctx.painter.circle(
        node.location(),
        style.node_radius,
        color,
        Stroke::new(1., color),
    );
    ctx.painter.text(
        node.location(),
        Align2::CENTER_CENTER,
        node.label(),
        FontId::new(style.node_font_size, FontFamily::Monospace),
        style.label_color,
    );
}
