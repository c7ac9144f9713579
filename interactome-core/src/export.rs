//! Clean edge-list export.

use crate::{
    graph::{GraphModel, Vertex},
    source::RawEdgeList,
};

/// Canonical edge list with self-loops removed, ready to be written back out
/// as a count line followed by one interaction per line.
///
/// # Examples
/// ```
/// use interactome_core::GraphModel;
///
/// let graph = GraphModel::from_pairs("toy", [("B", "A"), ("A", "A"), ("A", "B")]);
/// let export = graph.clean_export();
/// assert_eq!(export.count(), 1);
/// assert_eq!(export.edges()[0].0.as_str(), "A");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanExport<'a> {
    edges: Vec<(&'a Vertex, &'a Vertex)>,
}

impl<'a> CleanExport<'a> {
    /// Returns the value written on the count line.
    #[must_use]
    pub fn count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in ascending canonical order.
    #[must_use]
    pub fn edges(&self) -> &[(&'a Vertex, &'a Vertex)] {
        &self.edges
    }

    /// Converts the export into an in-memory source that validates cleanly.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::{GraphModel, InteractionSource};
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("C", "C")]);
    /// let raw = graph.clean_export().to_raw_edge_list("toy.clean");
    /// assert_eq!(raw.header(), Some("1"));
    /// ```
    #[must_use]
    pub fn to_raw_edge_list(&self, name: impl Into<String>) -> RawEdgeList {
        RawEdgeList::from_pairs(
            name,
            self.edges
                .iter()
                .map(|(a, b)| (a.as_str().to_owned(), b.as_str().to_owned())),
        )
    }
}

impl GraphModel {
    /// Produces the clean export of the network.
    #[must_use]
    pub fn clean_export(&self) -> CleanExport<'_> {
        CleanExport {
            edges: self.clean_edges().collect(),
        }
    }
}
