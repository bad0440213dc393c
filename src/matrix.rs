use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::ShapeError;

/// Smallest graph the random generator will produce.
pub const MIN_RANDOM_NODES: usize = 3;
/// One node per letter of the alphabet.
pub const MAX_RANDOM_NODES: usize = 26;

const MIN_WEIGHT: u32 = 1;
const MAX_WEIGHT: u32 = 10;

/// Square matrix of non-negative edge weights.
///
/// Entry `(i, j)` is the weight of the edge between node `i` and node `j`;
/// 0 means no edge. Symmetry is the convention for undirected input but is not
/// enforced by the validator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<f32>>,
}

impl AdjacencyMatrix {
    /// Decodes and validates user-typed matrix JSON. Indentation and other
    /// whitespace are cosmetic; the value must be a square array of arrays of
    /// non-negative numbers.
    pub fn parse(text: &str) -> Result<Self, ShapeError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Array(raw_rows) = value else {
            return Err(ShapeError::NotAnArray);
        };

        let mut rows = Vec::with_capacity(raw_rows.len());
        for raw_row in raw_rows {
            let Value::Array(cells) = raw_row else {
                return Err(ShapeError::NotAnArray);
            };
            let mut row = Vec::with_capacity(cells.len());
            for cell in cells {
                let Some(weight) = cell.as_f64() else {
                    return Err(ShapeError::NotAnArray);
                };
                row.push(weight as f32);
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Validates pre-built rows: every row length must equal the row count and
    /// every weight must be non-negative.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ShapeError> {
        let expected = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(ShapeError::NotSquare {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            for (col, weight) in cells.iter().enumerate() {
                if *weight < 0. {
                    return Err(ShapeError::NegativeWeight { row, col });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Starter matrix shown on first load.
    pub fn sample() -> Self {
        Self {
            rows: vec![
                vec![0., 6., 1., 0., 5., 2.],
                vec![6., 0., 5., 2., 5., 1.],
                vec![1., 5., 0., 0., 7., 0.],
                vec![0., 2., 0., 0., 5., 9.],
                vec![5., 5., 7., 5., 0., 1.],
                vec![2., 1., 0., 9., 1., 0.],
            ],
        }
    }

    /// Generates a random symmetric matrix with zero diagonal.
    ///
    /// A random subset of the upper triangle gets weights in `[1, 10]`; a row
    /// that ends up with no edge gets one forced edge to a random other node,
    /// so no node is ever isolated.
    pub fn random(node_count: usize) -> Result<Self, ShapeError> {
        Self::random_with(node_count, &mut rand::rng())
    }

    /// [`Self::random`] with a caller-supplied source of randomness.
    pub fn random_with<R: Rng + ?Sized>(
        node_count: usize,
        rng: &mut R,
    ) -> Result<Self, ShapeError> {
        if !(MIN_RANDOM_NODES..=MAX_RANDOM_NODES).contains(&node_count) {
            return Err(ShapeError::NodeCountOutOfRange {
                requested: node_count,
            });
        }

        let mut rows = vec![vec![0.; node_count]; node_count];
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if rng.random_bool(0.5) {
                    let weight = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT) as f32;
                    rows[i][j] = weight;
                    rows[j][i] = weight;
                }
            }
        }

        for i in 0..node_count {
            if rows[i].iter().all(|weight| *weight == 0.) {
                // retry until the forced edge is not a self-loop
                let mut j = i;
                while j == i {
                    j = rng.random_range(0..node_count);
                }
                let weight = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT) as f32;
                rows[i][j] = weight;
                rows[j][i] = weight;
            }
        }

        log::debug!("generated random {node_count}x{node_count} matrix");
        Ok(Self { rows })
    }

    /// Number of nodes, which equals the number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Weight of the edge between `i` and `j`; 0 means no edge.
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.rows[i][j]
    }

    /// Adjacency row of node `i`.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.rows[i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Indices of every node connected to `i` by a non-zero weight.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[i]
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0.)
            .map(|(j, _)| j)
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Cosmetic one-row-per-line rendering for the matrix text box.
    pub fn to_pretty_json(&self) -> String {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = row.iter().map(|w| format_weight(*w)).collect::<Vec<_>>();
                format!("[{}]", cells.join(","))
            })
            .collect::<Vec<_>>();
        format!("[\n{}\n]", rows.join(",\n"))
    }
}

/// Renders a weight without a trailing `.0` for integral values, the way
/// weights are typed in matrix JSON.
pub(crate) fn format_weight(weight: f32) -> String {
    if weight.fract() == 0. {
        format!("{}", weight as i64)
    } else {
        weight.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parse_accepts_square_matrices() {
        for text in ["[]", "[[0]]", "[[0,0],[0,0]]", "[[0, 1.5],\n [1.5, 0]]"] {
            let matrix = AdjacencyMatrix::parse(text).unwrap();
            let cells: usize = matrix.rows().map(<[f32]>::len).sum();
            assert_eq!(matrix.size() * matrix.size(), cells);
        }
    }

    #[test]
    fn parse_rejects_non_array_input() {
        assert!(matches!(
            AdjacencyMatrix::parse("42"),
            Err(ShapeError::NotAnArray)
        ));
        assert!(matches!(
            AdjacencyMatrix::parse("\"[[0]]\""),
            Err(ShapeError::NotAnArray)
        ));
        assert!(matches!(
            AdjacencyMatrix::parse("[[0,1],[1,\"x\"]]"),
            Err(ShapeError::NotAnArray)
        ));
        assert!(matches!(
            AdjacencyMatrix::parse("[0,1,2]"),
            Err(ShapeError::NotAnArray)
        ));
        assert!(matches!(
            AdjacencyMatrix::parse("not json"),
            Err(ShapeError::Json(_))
        ));
    }

    #[test]
    fn parse_rejects_ragged_matrices() {
        let err = AdjacencyMatrix::parse("[[0,1],[1]]").unwrap_err();
        assert!(matches!(
            err,
            ShapeError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));

        // three rows of two entries each is ragged too
        assert!(matches!(
            AdjacencyMatrix::parse("[[0,1],[1,0],[0,0]]"),
            Err(ShapeError::NotSquare { row: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_negative_weights() {
        assert!(matches!(
            AdjacencyMatrix::parse("[[0,-1],[-1,0]]"),
            Err(ShapeError::NegativeWeight { row: 0, col: 1 })
        ));
    }

    #[test]
    fn random_rejects_out_of_range_node_counts() {
        for n in [0, 1, 2, 27, 100] {
            assert!(matches!(
                AdjacencyMatrix::random(n),
                Err(ShapeError::NodeCountOutOfRange { requested }) if requested == n
            ));
        }
    }

    #[test]
    fn random_matrices_are_symmetric_with_zero_diagonal() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [MIN_RANDOM_NODES, 7, 13, MAX_RANDOM_NODES] {
            let matrix = AdjacencyMatrix::random_with(n, &mut rng).unwrap();
            assert_eq!(matrix.size(), n);
            assert!(matrix.is_symmetric());
            for i in 0..n {
                assert_eq!(matrix.weight(i, i), 0.);
            }
        }
    }

    #[test]
    fn random_never_leaves_a_row_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..50 {
            let matrix = AdjacencyMatrix::random_with(MIN_RANDOM_NODES, &mut rng)
                .unwrap_or_else(|_| panic!("round {round}"));
            for i in 0..matrix.size() {
                assert!(
                    matrix.row(i).iter().any(|w| *w > 0.),
                    "row {i} is all-zero in round {round}"
                );
            }
        }
    }

    #[test]
    fn random_weights_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let matrix = AdjacencyMatrix::random_with(10, &mut rng).unwrap();
        for row in matrix.rows() {
            for weight in row.iter().filter(|w| **w > 0.) {
                assert!((MIN_WEIGHT as f32..=MAX_WEIGHT as f32).contains(weight));
            }
        }
    }

    #[test]
    fn neighbors_follow_the_adjacency_row() {
        let matrix = AdjacencyMatrix::parse("[[0,2,0],[2,0,1],[0,1,0]]").unwrap();
        assert_eq!(matrix.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(matrix.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(matrix.neighbors(2).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn pretty_json_reparses_to_the_same_matrix() {
        let matrix = AdjacencyMatrix::sample();
        let pretty = matrix.to_pretty_json();
        assert_eq!(pretty.lines().count(), matrix.size() + 2);
        assert_eq!(AdjacencyMatrix::parse(&pretty).unwrap(), matrix);
    }

    #[test]
    fn weights_format_without_trailing_zero() {
        assert_eq!(format_weight(7.), "7");
        assert_eq!(format_weight(2.5), "2.5");
    }
}
