use egui::{Pos2, Response, Sense, Ui, Widget};
use instant::Instant;

use crate::draw::{DrawContext, Drawer};
use crate::graph::GraphState;
use crate::metadata::{Metadata, RESIZE_QUIET_PERIOD};
use crate::settings::{SettingsInteraction, SettingsStyle};

#[cfg(feature = "events")]
use crate::events::{
    Event, PayloadNodeDragEnd, PayloadNodeDragStart, PayloadNodeHoverEnter, PayloadNodeHoverLeave,
    PayloadNodeMove,
};

/// Widget showing the loaded graph and feeding pointer input back into it.
///
/// The widget keeps no graph data of its own: it borrows the [`GraphState`]
/// for one frame, applies interactions and paints the result. Resizes are
/// debounced; the re-layout fires once the canvas has kept its size for the
/// quiet period, recentering the circle on the new dimensions.
pub struct GraphView<'a> {
    state: &'a mut GraphState,
    settings_style: SettingsStyle,
    settings_interaction: SettingsInteraction,
    id: Option<String>,

    #[cfg(feature = "events")]
    events_publisher: Option<&'a crossbeam::channel::Sender<Event>>,
}

impl Widget for &mut GraphView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let mut meta = Metadata::new(self.id.clone()).load(ui);
        self.sync_layout(&response, &mut meta);
        self.handle_pointer(&response);

        let ctx = DrawContext {
            painter: &painter,
            style: &self.settings_style,
        };
        Drawer::new(self.state, &ctx).draw();

        meta.save(ui);
        response
    }
}

impl<'a> GraphView<'a> {
    pub fn new(state: &'a mut GraphState) -> Self {
        Self {
            state,
            settings_style: SettingsStyle::default(),
            settings_interaction: SettingsInteraction::default(),
            id: None,

            #[cfg(feature = "events")]
            events_publisher: None,
        }
    }

    /// Keys the widget's persisted metadata, for showing several graphs in one
    /// application.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_styles(mut self, settings_style: SettingsStyle) -> Self {
        self.settings_style = settings_style;
        self
    }

    pub fn with_interactions(mut self, settings_interaction: SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction;
        self
    }

    /// Publishes interaction [`Event`]s to the given channel.
    #[cfg(feature = "events")]
    pub fn with_events(mut self, events_publisher: &'a crossbeam::channel::Sender<Event>) -> Self {
        self.events_publisher = Some(events_publisher);
        self
    }

    /// Tracks canvas size changes and applies the debounced re-layout.
    fn sync_layout(&mut self, response: &Response, meta: &mut Metadata) {
        let canvas = response.rect;

        // A stale layout (state constructed or reloaded for another canvas)
        // goes through the same debounce as a live resize.
        let stale = self.state.layout_canvas().is_some_and(|c| c != canvas);
        if canvas != meta.canvas || (stale && !meta.resize.is_pending()) {
            meta.canvas = canvas;
            meta.resize.note(canvas, Instant::now());
        }

        if let Some(settled) = meta.resize.poll(Instant::now()) {
            if self.state.layout_canvas() != Some(settled) {
                self.state.relayout(settled);
            }
        }

        if meta.resize.is_pending() {
            response.ctx.request_repaint_after(RESIZE_QUIET_PERIOD);
        }
    }

    /// Adapts the egui pointer state to the graph's pointer transitions. A
    /// pointer outside the canvas counts as a cancel and unconditionally drops
    /// the drag.
    fn handle_pointer(&mut self, response: &Response) {
        if !self.settings_interaction.node_drag && !self.settings_interaction.hover_highlight {
            return;
        }

        #[cfg(feature = "events")]
        let before = self.interaction_snapshot();

        match self.pointer_pos(response) {
            Some(pos) => {
                if self.settings_interaction.node_drag && response.drag_started() {
                    self.state.pointer_down(pos);
                }
                if self.state.dragged_node().is_some() || self.settings_interaction.hover_highlight
                {
                    self.state.pointer_move(pos);
                }
                if response.drag_stopped() {
                    self.state.pointer_up();
                }
            }
            None => self.state.pointer_cancel(),
        }

        #[cfg(feature = "events")]
        self.publish_changes(before);
    }

    fn pointer_pos(&self, response: &Response) -> Option<Pos2> {
        response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
            .filter(|pos| response.rect.contains(*pos))
    }

    #[cfg(feature = "events")]
    fn interaction_snapshot(&self) -> (Option<usize>, Option<usize>, Option<Pos2>) {
        let dragged = self.state.dragged_node();
        let location = dragged
            .and_then(|idx| self.state.node(idx))
            .map(crate::Node::location);
        (dragged, self.state.hovered_node(), location)
    }

    #[cfg(feature = "events")]
    fn publish_changes(&self, before: (Option<usize>, Option<usize>, Option<Pos2>)) {
        let (prev_dragged, prev_hovered, prev_location) = before;
        let dragged = self.state.dragged_node();
        let hovered = self.state.hovered_node();

        match (prev_dragged, dragged) {
            (None, Some(id)) => self.publish_event(Event::NodeDragStart(PayloadNodeDragStart { id })),
            (Some(id), None) => self.publish_event(Event::NodeDragEnd(PayloadNodeDragEnd { id })),
            _ => {}
        }

        if let Some(id) = dragged.filter(|id| prev_dragged == Some(*id)) {
            let location = self.state.node(id).map(crate::Node::location);
            if let Some(new_pos) = location.filter(|loc| prev_location != Some(*loc)) {
                self.publish_event(Event::NodeMove(PayloadNodeMove {
                    id,
                    new_pos: [new_pos.x, new_pos.y],
                }));
            }
        }

        if prev_hovered != hovered {
            if let Some(id) = prev_hovered {
                self.publish_event(Event::NodeHoverLeave(PayloadNodeHoverLeave { id }));
            }
            if let Some(id) = hovered {
                self.publish_event(Event::NodeHoverEnter(PayloadNodeHoverEnter { id }));
            }
        }
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sender) = self.events_publisher {
            if sender.send(event).is_err() {
                log::warn!("events receiver dropped, event lost");
            }
        }
    }
}
