use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::error::ShapeError;
use crate::matrix::AdjacencyMatrix;

/// Builds an undirected petgraph view of the matrix: one node per row with the
/// row index as payload, and one edge per unordered pair with non-zero weight.
pub fn to_stable_graph(matrix: &AdjacencyMatrix) -> StableUnGraph<usize, f32> {
    let n = matrix.size();
    let mut g = StableUnGraph::with_capacity(n, 0);
    let indices: Vec<NodeIndex> = (0..n).map(|i| g.add_node(i)).collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = matrix.weight(i, j);
            if weight > 0. {
                g.add_edge(indices[i], indices[j], weight);
            }
        }
    }

    g
}

/// Collapses an undirected petgraph into a symmetric adjacency matrix.
///
/// Node payloads are ignored and rows follow petgraph's node iteration order.
/// Parallel edges keep the last weight seen; self-loops land on the diagonal.
pub fn from_stable_graph<N>(g: &StableUnGraph<N, f32>) -> Result<AdjacencyMatrix, ShapeError> {
    let positions: HashMap<NodeIndex, usize> = g
        .node_indices()
        .enumerate()
        .map(|(position, idx)| (idx, position))
        .collect();

    let n = positions.len();
    let mut rows = vec![vec![0.; n]; n];
    for edge in g.edge_references() {
        let a = positions[&edge.source()];
        let b = positions[&edge.target()];
        rows[a][b] = *edge.weight();
        rows[b][a] = *edge.weight();
    }

    AdjacencyMatrix::from_rows(rows)
}
