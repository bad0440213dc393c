//! Interactive weighted-graph visualization widget for egui, driven by an
//! adjacency matrix.
//!
//! Load a matrix (typed JSON, randomly generated, or a previous export) into a
//! [`GraphState`], then show it with [`GraphView`]: nodes are laid out on a
//! circle, edges carry their weights, nodes can be dragged, and hovering a
//! node highlights it together with its neighbors.

mod draw;
mod elements;
mod error;
mod graph;
mod graph_view;
mod io;
mod matrix;
mod metadata;
mod settings;
mod transform;

pub mod layout;

#[cfg(feature = "events")]
pub mod events;

pub use self::draw::{DrawContext, Drawer};
pub use self::elements::Node;
pub use self::error::{ImportError, ShapeError};
pub use self::graph::GraphState;
pub use self::graph_view::GraphView;
pub use self::io::{export_graph, export_json, import_graph, ExportedNode};
pub use self::matrix::{AdjacencyMatrix, MAX_RANDOM_NODES, MIN_RANDOM_NODES};
pub use self::metadata::{reset_metadata, Metadata};
pub use self::settings::{SettingsInteraction, SettingsStyle, DEFAULT_NODE_RADIUS};
pub use self::transform::{from_stable_graph, to_stable_graph};
