use std::collections::HashSet;

use egui::{Pos2, Rect};

use crate::elements::Node;
use crate::error::{ImportError, ShapeError};
use crate::io;
use crate::layout;
use crate::matrix::AdjacencyMatrix;
use crate::settings::DEFAULT_NODE_RADIUS;

/// Owner of the loaded graph: the adjacency matrix, its laid-out nodes and the
/// current interaction state.
///
/// All mutation goes through discrete operations (load, relayout, pointer
/// transitions); [`crate::GraphView`] only borrows the state per frame.
/// Loading a matrix replaces matrix and nodes wholesale.
#[derive(Clone, Debug)]
pub struct GraphState {
    matrix: AdjacencyMatrix,
    nodes: Vec<Node>,

    /// Canvas the current circular layout was computed for. `None` after an
    /// import, whose node positions were supplied by the payload.
    layout_canvas: Option<Rect>,

    dragged: Option<usize>,
    hovered: Option<usize>,
}

impl GraphState {
    /// Loads a validated matrix, laying its nodes out on a circle around the
    /// canvas center.
    pub fn new(matrix: AdjacencyMatrix, canvas: Rect) -> Self {
        let nodes = layout::circular(&matrix, canvas);
        log::debug!("loaded graph with {} nodes", nodes.len());
        Self {
            matrix,
            nodes,
            layout_canvas: Some(canvas),
            dragged: None,
            hovered: None,
        }
    }

    /// Parses, validates and loads user-typed matrix JSON. On failure nothing
    /// changes for the caller: no state is constructed.
    pub fn from_json(text: &str, canvas: Rect) -> Result<Self, ShapeError> {
        Ok(Self::new(AdjacencyMatrix::parse(text)?, canvas))
    }

    /// Loads a randomly generated matrix with `node_count` nodes.
    pub fn random(node_count: usize, canvas: Rect) -> Result<Self, ShapeError> {
        Ok(Self::new(AdjacencyMatrix::random(node_count)?, canvas))
    }

    /// Reads a previously exported graph, keeping the exported node positions.
    pub fn import(text: &str) -> Result<Self, ImportError> {
        let (matrix, nodes) = io::import_graph(text)?;
        Ok(Self {
            matrix,
            nodes,
            layout_canvas: None,
            dragged: None,
            hovered: None,
        })
    }

    /// Export payload of the loaded graph, in node insertion order.
    pub fn export(&self) -> Vec<crate::ExportedNode> {
        io::export_graph(self)
    }

    /// Serialized export payload, ready to be written to a `.json` file.
    pub fn export_json(&self) -> String {
        io::export_json(self)
    }

    /// Recomputes the circular layout around the center of `canvas`, dropping
    /// drag positions and highlights. Used for the initial placement and for
    /// the debounced resize re-layout.
    pub fn relayout(&mut self, canvas: Rect) {
        self.nodes = layout::circular(&self.matrix, canvas);
        self.layout_canvas = Some(canvas);
        self.dragged = None;
        self.hovered = None;
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adjacency row of node `idx`; the matrix owns the row, nodes address it
    /// by their positional id.
    pub fn edges_of(&self, idx: usize) -> &[f32] {
        self.matrix.row(idx)
    }

    pub fn layout_canvas(&self) -> Option<Rect> {
        self.layout_canvas
    }

    pub fn dragged_node(&self) -> Option<usize> {
        self.dragged
    }

    pub fn hovered_node(&self) -> Option<usize> {
        self.hovered
    }

    /// Finds the node whose square hit box (± node radius around its center)
    /// contains the point. First match wins, so overlapping boxes resolve to
    /// the lowest id.
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.nodes.iter().position(|node| {
            let loc = node.location();
            (pos.x - loc.x).abs() <= DEFAULT_NODE_RADIUS && (pos.y - loc.y).abs() <= DEFAULT_NODE_RADIUS
        })
    }

    /// The hovered node plus every node its adjacency row connects it to.
    pub fn highlight_set(&self, idx: usize) -> HashSet<usize> {
        let mut set: HashSet<usize> = self.matrix.neighbors(idx).collect();
        set.insert(idx);
        set
    }

    /// Starts a drag if the point hits a node. The dragged node is exclusively
    /// owned by the down..up interval.
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.dragged = self.hit_test(pos);
        if let Some(idx) = self.dragged {
            log::trace!("drag start on node {idx}");
        }
    }

    /// Moves the dragged node to the pointer, or derives hover highlights when
    /// no drag is active.
    pub fn pointer_move(&mut self, pos: Pos2) {
        if let Some(idx) = self.dragged {
            if let Some(node) = self.nodes.get_mut(idx) {
                node.set_location(pos);
            }
            return;
        }

        self.set_hovered(self.hit_test(pos));
    }

    /// Ends the drag interval.
    pub fn pointer_up(&mut self) {
        if let Some(idx) = self.dragged.take() {
            log::trace!("drag end on node {idx}");
        }
    }

    /// Pointer left the surface: drop the drag and all highlights.
    pub fn pointer_cancel(&mut self) {
        self.dragged = None;
        self.set_hovered(None);
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;

        let set = hovered.map(|idx| self.highlight_set(idx)).unwrap_or_default();
        for node in &mut self.nodes {
            let highlighted = set.contains(&node.id());
            node.set_highlighted(highlighted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_max(Pos2::ZERO, Pos2::new(800., 600.))
    }

    fn triangle() -> GraphState {
        // 0-1 and 1-2 connected, 0-2 not
        let matrix = AdjacencyMatrix::parse("[[0,2,0],[2,0,3],[0,3,0]]").unwrap();
        GraphState::new(matrix, canvas())
    }

    #[test]
    fn hit_test_misses_outside_every_box() {
        let state = triangle();
        assert_eq!(state.hit_test(Pos2::new(-500., -500.)), None);
    }

    #[test]
    fn hit_test_finds_the_node_under_the_point() {
        let state = triangle();
        for node in state.nodes() {
            let inside = node.location() + egui::vec2(DEFAULT_NODE_RADIUS / 2., 0.);
            assert_eq!(state.hit_test(inside), Some(node.id()));
        }
    }

    #[test]
    fn hit_test_prefers_the_lowest_id_on_overlap() {
        let mut state = triangle();
        let shared = Pos2::new(100., 100.);
        state.nodes[1].set_location(shared);
        state.nodes[2].set_location(shared);
        assert_eq!(state.hit_test(shared), Some(1));
    }

    #[test]
    fn highlight_set_is_the_node_plus_its_neighbors() {
        let state = triangle();
        assert_eq!(state.highlight_set(0), HashSet::from([0, 1]));
        assert_eq!(state.highlight_set(1), HashSet::from([0, 1, 2]));
    }

    #[test]
    fn hover_marks_the_set_and_clears_on_empty_space() {
        let mut state = triangle();
        let over_node_0 = state.nodes[0].location();

        state.pointer_move(over_node_0);
        assert_eq!(state.hovered_node(), Some(0));
        assert!(state.nodes[0].highlighted());
        assert!(state.nodes[1].highlighted());
        assert!(!state.nodes[2].highlighted());

        state.pointer_move(Pos2::new(-500., -500.));
        assert_eq!(state.hovered_node(), None);
        assert!(state.nodes().iter().all(|n| !n.highlighted()));
    }

    #[test]
    fn hover_recomputes_when_sliding_between_nodes() {
        let mut state = triangle();
        state.pointer_move(state.nodes[0].location());
        state.pointer_move(state.nodes[2].location());

        assert_eq!(state.hovered_node(), Some(2));
        assert!(!state.nodes[0].highlighted());
        assert!(state.nodes[1].highlighted());
        assert!(state.nodes[2].highlighted());
    }

    #[test]
    fn drag_moves_the_node_until_release() {
        let mut state = triangle();
        let start = state.nodes[1].location();
        let target = Pos2::new(42., 43.);

        state.pointer_down(start);
        assert_eq!(state.dragged_node(), Some(1));

        state.pointer_move(target);
        assert_eq!(state.nodes[1].location(), target);

        state.pointer_up();
        assert_eq!(state.dragged_node(), None);

        // moves after release hover instead of dragging
        state.pointer_move(Pos2::new(-500., -500.));
        assert_eq!(state.nodes[1].location(), target);
    }

    #[test]
    fn pointer_down_on_empty_space_selects_nothing() {
        let mut state = triangle();
        state.pointer_down(Pos2::new(-500., -500.));
        assert_eq!(state.dragged_node(), None);
    }

    #[test]
    fn pointer_cancel_clears_drag_and_highlights() {
        let mut state = triangle();
        state.pointer_move(state.nodes[0].location());
        state.pointer_down(state.nodes[0].location());

        state.pointer_cancel();
        assert_eq!(state.dragged_node(), None);
        assert_eq!(state.hovered_node(), None);
        assert!(state.nodes().iter().all(|n| !n.highlighted()));
    }

    #[test]
    fn relayout_recenters_and_drops_interaction_state() {
        let mut state = triangle();
        state.pointer_down(state.nodes[0].location());
        state.pointer_move(Pos2::new(10., 10.));

        let wider = Rect::from_min_max(Pos2::ZERO, Pos2::new(1600., 600.));
        state.relayout(wider);

        assert_eq!(state.layout_canvas(), Some(wider));
        assert_eq!(state.dragged_node(), None);
        let expected = layout::circular(state.matrix(), wider);
        assert_eq!(state.nodes(), expected.as_slice());
    }

    #[test]
    fn load_replaces_state_wholesale() {
        let mut state = triangle();
        state.pointer_move(state.nodes[0].location());

        state = GraphState::from_json("[[0,1],[1,0]]", canvas()).unwrap();
        assert_eq!(state.node_count(), 2);
        assert_eq!(state.hovered_node(), None);
        assert_eq!(state.edges_of(0), &[0., 1.]);
    }
}
