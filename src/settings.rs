use egui::Color32;

/// Visual radius of a node circle. Hit boxes use the same half-extent, so the
/// clickable area always matches the default rendering.
pub const DEFAULT_NODE_RADIUS: f32 = 30.;

/// Colors and sizes used by the drawing passes.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Fill and stroke for highlighted nodes and for edges whose both
    /// endpoints are highlighted.
    pub highlight_color: Color32,

    /// Fill and stroke for everything that is not highlighted.
    pub default_color: Color32,

    /// Accent color of the edge weight text.
    pub weight_color: Color32,

    /// Color of the node letter labels.
    pub label_color: Color32,

    /// Node circle radius.
    pub node_radius: f32,

    /// Edge stroke width.
    pub edge_width: f32,

    /// Monospace size of node letters.
    pub node_font_size: f32,

    /// Monospace size of edge weight text.
    pub weight_font_size: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            highlight_color: Color32::from_rgba_unmultiplied(0x0F, 0xFF, 0xF0, 0xAA),
            default_color: Color32::BLACK,
            weight_color: Color32::RED,
            label_color: Color32::WHITE,
            node_radius: DEFAULT_NODE_RADIUS,
            edge_width: 2.,
            node_font_size: 24.,
            weight_font_size: 18.,
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlight_color(mut self, color: Color32) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn with_default_color(mut self, color: Color32) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }
}

/// Which pointer interactions the widget applies to the graph state.
#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Node dragging
    pub node_drag: bool,

    /// Hover highlighting of a node and its neighbors
    pub hover_highlight: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            node_drag: true,
            hover_highlight: true,
        }
    }
}

impl SettingsInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dragging_enabled(mut self, enabled: bool) -> Self {
        self.node_drag = enabled;
        self
    }

    pub fn with_hover_enabled(mut self, enabled: bool) -> Self {
        self.hover_highlight = enabled;
        self
    }
}
