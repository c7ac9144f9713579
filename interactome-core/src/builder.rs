//! Builder for assembling a [`GraphModel`] from individual interactions.

use crate::{Result, graph::GraphModel, source::RawEdgeList};

const DEFAULT_NAME: &str = "interactome";

/// Collects a network name and interaction pairs, then validates and builds
/// the network.
///
/// # Examples
/// ```
/// use interactome_core::GraphModelBuilder;
///
/// let graph = GraphModelBuilder::new()
///     .with_name("toy")
///     .with_edge("A", "B")
///     .with_edges([("B", "C"), ("C", "A")])
///     .build()
///     .expect("builder input is valid");
/// assert_eq!(graph.name(), "toy");
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GraphModelBuilder {
    name: String,
    pairs: Vec<(String, String)>,
}

impl Default for GraphModelBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            pairs: Vec::new(),
        }
    }
}

impl GraphModelBuilder {
    /// Creates an empty builder named `interactome`.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModelBuilder;
    ///
    /// let builder = GraphModelBuilder::new();
    /// assert_eq!(builder.name(), "interactome");
    /// assert!(builder.pairs().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the network name used in diagnostics.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the configured name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends one interaction.
    #[must_use]
    pub fn with_edge(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.pairs.push((a.into(), b.into()));
        self
    }

    /// Appends several interactions in order.
    #[must_use]
    pub fn with_edges<I, A, B>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        self.pairs
            .extend(pairs.into_iter().map(|(a, b)| (a.into(), b.into())));
        self
    }

    /// Returns the interactions collected so far.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Validates the collected interactions and constructs the network.
    ///
    /// # Errors
    /// Returns [`InteractomeError::InvalidFormat`](crate::InteractomeError::InvalidFormat)
    /// if validation fails.
    pub fn build(self) -> Result<GraphModel> {
        let raw = RawEdgeList::from_pairs(self.name, self.pairs);
        GraphModel::from_source(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_empty_network() {
        let graph = GraphModelBuilder::new()
            .build()
            .expect("zero interactions are valid");
        assert_eq!(graph.name(), DEFAULT_NAME);
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let builder = GraphModelBuilder::new()
            .with_edge("B", "A")
            .with_edges([("C", "B")]);
        assert_eq!(
            builder.pairs(),
            [
                ("B".to_owned(), "A".to_owned()),
                ("C".to_owned(), "B".to_owned()),
            ]
        );
        let graph = builder.build().expect("valid input");
        let neighbours: Vec<&str> = graph
            .neighbours("B")
            .expect("B exists")
            .map(|vertex| vertex.as_str())
            .collect();
        assert_eq!(neighbours, ["A", "C"]);
    }
}
