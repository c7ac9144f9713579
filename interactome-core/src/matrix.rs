//! Dense adjacency-matrix view of a network.

use crate::graph::{GraphModel, Vertex};

/// Symmetric 0/1 matrix indexed by the ascending vertex order.
///
/// # Examples
/// ```
/// use interactome_core::GraphModel;
///
/// let graph = GraphModel::from_pairs("toy", [("B", "A"), ("B", "C")]);
/// let matrix = graph.adjacency_matrix();
/// assert_eq!(matrix.order(), 3);
/// assert_eq!(matrix.rows().collect::<Vec<_>>(), [[0, 1, 0], [1, 0, 1], [0, 1, 0]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix<'a> {
    vertices: &'a [Vertex],
    cells: Vec<u8>,
}

impl<'a> AdjacencyMatrix<'a> {
    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertex labelling rows and columns.
    #[must_use]
    pub fn vertices(&self) -> &'a [Vertex] {
        self.vertices
    }

    /// Returns the cell at row `row`, column `column`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        let order = self.order();
        if row >= order || column >= order {
            return None;
        }
        self.cells.get(row * order + column).copied()
    }

    /// Iterates over the rows in vertex order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        // `max(1)` keeps `chunks_exact` valid for the empty matrix.
        self.cells.chunks_exact(self.order().max(1))
    }
}

impl GraphModel {
    /// Materialises the dense adjacency matrix of the network.
    ///
    /// The diagonal is always zero since neighbour lists never contain the
    /// vertex itself.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<'_> {
        let order = self.vertex_count();
        let mut cells = vec![0_u8; order * order];
        let topology = self.topology();
        for row in 0..order {
            for &column in topology.neighbours(row) {
                if let Some(cell) = cells.get_mut(row * order + column) {
                    *cell = 1;
                }
            }
        }
        AdjacencyMatrix {
            vertices: self.vertices(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::GraphModel;

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let graph = GraphModel::from_pairs(
            "toy",
            [("A", "B"), ("A", "C"), ("B", "C"), ("B", "D"), ("D", "D")],
        );
        let matrix = graph.adjacency_matrix();
        for i in 0..matrix.order() {
            assert_eq!(matrix.get(i, i), Some(0));
            for j in 0..matrix.order() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(1, 3), Some(1));
        assert_eq!(matrix.get(0, 3), Some(0));
        assert_eq!(matrix.get(4, 0), None);
    }

    #[test]
    fn empty_network_has_empty_matrix() {
        let graph = GraphModel::from_pairs("empty", std::iter::empty::<(&str, &str)>());
        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.order(), 0);
        assert_eq!(matrix.rows().count(), 0);
    }
}
