use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::elements::Node;
use crate::error::ImportError;
use crate::graph::GraphState;
use crate::matrix::AdjacencyMatrix;

/// One node of the export payload. The serialized field names are the wire
/// contract; `edges` is the node's adjacency row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    #[serde(rename = "nodeId")]
    pub node_id: usize,
    pub x: f32,
    pub y: f32,
    pub edges: Vec<f32>,
}

/// Snapshot of the loaded graph in export order (= node insertion order).
pub fn export_graph(state: &GraphState) -> Vec<ExportedNode> {
    state
        .nodes()
        .iter()
        .map(|node| ExportedNode {
            node_id: node.id(),
            x: node.location().x,
            y: node.location().y,
            edges: state.edges_of(node.id()).to_vec(),
        })
        .collect()
}

/// Serialized export payload, ready to be written to a `.json` file.
pub fn export_json(state: &GraphState) -> String {
    serde_json::to_string(&export_graph(state)).expect("export payload serializes")
}

/// Rebuilds matrix and nodes from an export payload.
///
/// Edge rows are redistributed into a fresh matrix keyed by `nodeId`, so a
/// reordered node array imports fine as long as the ids are a permutation of
/// `0..n`. Node positions are taken from the payload; nodes come back ordered
/// by id so that id and array position agree again.
pub fn import_graph(text: &str) -> Result<(AdjacencyMatrix, Vec<Node>), ImportError> {
    let exported: Vec<ExportedNode> = serde_json::from_str(text)?;
    let count = exported.len();

    let mut rows: Vec<Option<Vec<f32>>> = vec![None; count];
    let mut locations: Vec<Pos2> = vec![Pos2::ZERO; count];
    for node in exported {
        if node.node_id >= count {
            return Err(ImportError::IdOutOfRange {
                id: node.node_id,
                count,
            });
        }
        if rows[node.node_id].is_some() {
            return Err(ImportError::DuplicateId(node.node_id));
        }
        locations[node.node_id] = Pos2::new(node.x, node.y);
        rows[node.node_id] = Some(node.edges);
    }

    // n ids, all in range, none duplicated: every slot is filled here
    let matrix = AdjacencyMatrix::from_rows(rows.into_iter().flatten().collect())?;
    let nodes = locations
        .into_iter()
        .enumerate()
        .map(|(id, location)| Node::new(id, location))
        .collect();

    log::debug!("imported graph with {count} nodes");
    Ok((matrix, nodes))
}
