use thiserror::Error;

use crate::matrix::{MAX_RANDOM_NODES, MIN_RANDOM_NODES};

/// Rejections produced while decoding or building an adjacency matrix.
///
/// Every variant is a user-input error: the requested operation is aborted and
/// the previously loaded graph stays untouched.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The input text is not valid JSON at all.
    #[error("adjacency matrix is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded value is not an array of arrays of numbers.
    #[error("adjacency matrix must be an array of arrays of numbers")]
    NotAnArray,

    /// A row length differs from the row count.
    #[error("row {row} has {len} entries, expected {expected}: adjacency matrix must be square")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Edge weights are non-negative; 0 means no edge.
    #[error("edge weight at ({row}, {col}) is negative")]
    NegativeWeight { row: usize, col: usize },

    /// Random generation accepts one node per letter of the alphabet.
    #[error("node count must be between {MIN_RANDOM_NODES} and {MAX_RANDOM_NODES}, got {requested}")]
    NodeCountOutOfRange { requested: usize },
}

/// Rejections produced while reading a previously exported graph.
///
/// Like [`ShapeError`], recovery is local: the import is aborted and the
/// current graph is left as it was.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The payload does not decode into the export format.
    #[error("import payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes claim the same id.
    #[error("duplicate node id {0}")]
    DuplicateId(usize),

    /// Node ids must be a permutation of `0..n`.
    #[error("node id {id} is out of range for {count} nodes")]
    IdOutOfRange { id: usize, count: usize },

    /// The redistributed edge rows do not form a valid adjacency matrix.
    #[error("imported edge rows do not form a valid adjacency matrix: {0}")]
    Shape(#[from] ShapeError),
}
