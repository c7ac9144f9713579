//! Degree, density and clustering statistics over a [`GraphModel`].
//!
//! None of these queries mutate the network.

use std::collections::{BTreeMap, HashSet};

use crate::{
    Result,
    error::InteractomeError,
    graph::{GraphModel, Vertex},
};

/// Vertices sharing the highest degree in a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxDegree<'a> {
    /// Tied vertices in ascending identifier order.
    pub vertices: Vec<&'a Vertex>,
    /// The highest degree, `0` for an empty network.
    pub degree: usize,
}

impl GraphModel {
    /// Returns the number of distinct neighbours of `vertex`.
    ///
    /// # Errors
    /// Returns [`InteractomeError::UnknownVertex`] if `vertex` is absent.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("A", "C"), ("C", "A")]);
    /// assert_eq!(graph.degree("A")?, 2);
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    pub fn degree(&self, vertex: &str) -> Result<usize> {
        let position = self.position(vertex)?;
        Ok(self.topology().neighbours(position).len())
    }

    /// Returns every vertex at the highest degree together with that degree.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("B", "C"), ("C", "D")]);
    /// let max = graph.max_degree();
    /// assert_eq!(max.degree, 2);
    /// assert_eq!(max.vertices, ["B", "C"]);
    /// ```
    #[must_use]
    pub fn max_degree(&self) -> MaxDegree<'_> {
        let degree = self.degrees().max().unwrap_or(0);
        let vertices = self
            .vertices()
            .iter()
            .zip(self.degrees())
            .filter_map(|(vertex, current)| (current == degree).then_some(vertex))
            .collect();
        MaxDegree { vertices, degree }
    }

    /// Returns the mean degree rounded half away from zero to one decimal.
    ///
    /// # Errors
    /// Returns [`InteractomeError::DegenerateGraph`] for a network without vertices.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("B", "C")]);
    /// assert_eq!(graph.average_degree()?, 1.3);
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    pub fn average_degree(&self) -> Result<f64> {
        let count = self.vertex_count();
        if count == 0 {
            return Err(self.degenerate("average_degree"));
        }
        let total: usize = self.degrees().sum();
        let mean = total as f64 / count as f64;
        Ok((mean * 10.0).round() / 10.0)
    }

    /// Returns the number of vertices whose degree is exactly `degree`.
    #[must_use]
    pub fn count_degree(&self, degree: usize) -> usize {
        self.degrees().filter(|&current| current == degree).count()
    }

    /// Maps every degree in `min..=max` to the number of vertices having it.
    ///
    /// An inverted range yields an empty histogram.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("B", "C")]);
    /// let histogram = graph.degree_histogram(0, 2);
    /// assert_eq!(histogram.into_iter().collect::<Vec<_>>(), [(0, 0), (1, 2), (2, 1)]);
    /// ```
    #[must_use]
    pub fn degree_histogram(&self, min: usize, max: usize) -> BTreeMap<usize, usize> {
        let mut histogram: BTreeMap<usize, usize> = (min..=max).map(|degree| (degree, 0)).collect();
        for degree in self.degrees() {
            if let Some(slot) = histogram.get_mut(&degree) {
                *slot += 1;
            }
        }
        histogram
    }

    /// Returns the ratio of present edges to the maximum possible on this
    /// vertex set: `2|E| / (|V| (|V| - 1))`. Self-interactions are not counted.
    ///
    /// # Errors
    /// Returns [`InteractomeError::DegenerateGraph`] when the network has fewer
    /// than two vertices.
    pub fn density(&self) -> Result<f64> {
        let vertices = self.vertex_count();
        if vertices <= 1 {
            return Err(self.degenerate("density"));
        }
        let possible = vertices * (vertices - 1);
        Ok((2 * self.edge_count()) as f64 / possible as f64)
    }

    /// Returns the local clustering coefficient of `vertex`.
    ///
    /// Vertices with fewer than two neighbours score `0.0`. Otherwise the
    /// result is the fraction of neighbour pairs that are themselves joined.
    ///
    /// # Errors
    /// Returns [`InteractomeError::UnknownVertex`] if `vertex` is absent.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("A", "C"), ("B", "C"), ("A", "D")]);
    /// assert!((graph.clustering("A")? - 1.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(graph.clustering("D")?, 0.0);
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    pub fn clustering(&self, vertex: &str) -> Result<f64> {
        let position = self.position(vertex)?;
        let neighbours = self.topology().neighbours(position);
        let count = neighbours.len();
        if count <= 1 {
            return Ok(0.0);
        }
        let members: HashSet<usize> = neighbours.iter().copied().collect();
        let links = self
            .topology()
            .edges()
            .iter()
            .filter(|edge| {
                !edge.is_self_loop()
                    && members.contains(&edge.source())
                    && members.contains(&edge.target())
            })
            .count();
        Ok((2 * links) as f64 / (count * (count - 1)) as f64)
    }

    fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.topology().adjacency().iter().map(Vec::len)
    }

    pub(crate) fn degenerate(&self, operation: &'static str) -> InteractomeError {
        InteractomeError::DegenerateGraph {
            operation,
            vertices: self.vertex_count(),
            edges: self.edge_count(),
        }
    }
}
