//! The in-memory interaction network.
//!
//! A [`GraphModel`] owns a sorted vertex set, a symmetric adjacency list and
//! the canonical edge list. Vertices are addressed internally by their
//! position in the sorted vertex set, so index order and identifier order
//! coincide and a canonical edge `(min, max)` is simply `source <= target`.

use std::{
    borrow::Borrow,
    collections::{BTreeSet, HashMap},
    fmt,
    sync::Arc,
};

use tracing::{Span, field, info, instrument, warn};

use crate::{
    Result,
    error::InteractomeError,
    source::InteractionSource,
    validate::{ValidatedEdgeList, validate},
};

/// Opaque protein identifier.
///
/// Ordering is lexicographic on the underlying string and is used for
/// canonicalisation and deterministic iteration.
///
/// # Examples
/// ```
/// use interactome_core::Vertex;
///
/// let a = Vertex::from("A");
/// let b = Vertex::from("B");
/// assert!(a < b);
/// assert_eq!(a.as_str(), "A");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(Arc<str>);

impl Vertex {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for Vertex {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Vertex {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Vertex {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical undirected edge between two vertex positions, `source <= target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates the canonical edge joining `a` and `b` in either orientation.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::Edge;
    ///
    /// assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
    /// assert_eq!(Edge::new(3, 1).source(), 1);
    /// ```
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            source: a.min(b),
            target: a.max(b),
        }
    }

    /// Returns the lower vertex position.
    #[must_use]
    pub fn source(self) -> usize {
        self.source
    }

    /// Returns the higher vertex position.
    #[must_use]
    pub fn target(self) -> usize {
        self.target
    }

    /// Returns whether both endpoints coincide.
    #[must_use]
    pub fn is_self_loop(self) -> bool {
        self.source == self.target
    }
}

/// Adjacency and edge state of a network over a fixed number of vertices.
///
/// This is the part of a [`GraphModel`] that generators replace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topology {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Returns the number of vertex slots the topology covers.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the canonical edges in ascending order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges joining two distinct vertices.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.edges.iter().filter(|edge| !edge.is_self_loop()).count()
    }

    /// Returns the neighbour positions of `vertex` in insertion order.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}

/// Incrementally accumulates a [`Topology`].
///
/// Neighbour lists stay free of duplicates and self-references; the edge set
/// keeps self-loops so that clean exports can strip them explicitly.
///
/// # Examples
/// ```
/// use interactome_core::TopologyBuilder;
///
/// let mut builder = TopologyBuilder::new(3);
/// assert!(builder.connect(0, 1));
/// assert!(!builder.connect(1, 0));
/// assert_eq!(builder.degree(1), 1);
/// let topology = builder.finish();
/// assert_eq!(topology.edges().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TopologyBuilder {
    adjacency: Vec<Vec<usize>>,
    edges: BTreeSet<Edge>,
    total_degree: usize,
}

impl TopologyBuilder {
    /// Creates a builder with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: BTreeSet::new(),
            total_degree: 0,
        }
    }

    /// Records an interaction between `a` and `b`.
    ///
    /// Returns `true` when the canonical edge was not present before.
    /// Positions outside the vertex range are ignored.
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        let count = self.adjacency.len();
        if a >= count || b >= count {
            return false;
        }
        if a != b {
            self.link(a, b);
            self.link(b, a);
        }
        self.edges.insert(Edge::new(a, b))
    }

    fn link(&mut self, from: usize, to: usize) {
        if let Some(neighbours) = self.adjacency.get_mut(from) {
            if !neighbours.contains(&to) {
                neighbours.push(to);
                self.total_degree += 1;
            }
        }
    }

    /// Returns the current degree of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Returns the running sum of all degrees.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.total_degree
    }

    /// Returns whether `a` and `b` are already neighbours.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Finalises the accumulated state.
    #[must_use]
    pub fn finish(self) -> Topology {
        Topology {
            adjacency: self.adjacency,
            edges: self.edges.into_iter().collect(),
        }
    }
}

/// Undirected protein-protein interaction network.
///
/// # Examples
/// ```
/// use interactome_core::GraphModel;
///
/// let graph = GraphModel::from_pairs("toy", [("B", "A"), ("A", "B"), ("B", "C")]);
/// assert_eq!(graph.vertices(), ["A", "B", "C"]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GraphModel {
    name: Arc<str>,
    vertices: Vec<Vertex>,
    index: HashMap<Vertex, usize>,
    topology: Topology,
}

impl GraphModel {
    /// Builds a network from raw interaction pairs that are already known to
    /// be structurally valid.
    ///
    /// Every identifier seen in either column becomes a vertex. Repeated
    /// interactions (in either orientation) collapse into one edge.
    #[must_use]
    pub fn from_pairs<I, A, B>(name: impl Into<Arc<str>>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let pairs: Vec<(Vertex, Vertex)> = pairs
            .into_iter()
            .map(|(a, b)| (Vertex::from(a.as_ref()), Vertex::from(b.as_ref())))
            .collect();
        Self::build(name.into(), pairs)
    }

    /// Validates `source` and builds the network it describes.
    ///
    /// # Errors
    /// Returns [`InteractomeError::InvalidFormat`] when the source fails
    /// structural validation; no partial network is produced.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::{GraphModel, RawEdgeList};
    ///
    /// let raw = RawEdgeList::from_pairs("toy", [("A", "B")]);
    /// let graph = GraphModel::from_source(&raw)?;
    /// assert_eq!(graph.name(), "toy");
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    pub fn from_source<S: InteractionSource + ?Sized>(source: &S) -> Result<Self> {
        let list = validate(source)?;
        Ok(Self::from_validated(list))
    }

    /// Builds the network described by a validated interaction list.
    #[must_use]
    pub fn from_validated(list: ValidatedEdgeList) -> Self {
        let (name, pairs) = list.into_parts();
        let pairs = pairs
            .into_iter()
            .map(|(a, b)| (Vertex::from(a), Vertex::from(b)))
            .collect();
        Self::build(name, pairs)
    }

    #[instrument(
        name = "core.build",
        skip(pairs),
        fields(network = %name, pairs = pairs.len(), vertices = field::Empty, edges = field::Empty),
    )]
    fn build(name: Arc<str>, pairs: Vec<(Vertex, Vertex)>) -> Self {
        let vertices: Vec<Vertex> = pairs
            .iter()
            .flat_map(|(a, b)| [a, b])
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<Vertex, usize> = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(position, vertex)| (vertex, position))
            .collect();

        let mut builder = TopologyBuilder::new(vertices.len());
        for (a, b) in &pairs {
            if let (Some(&left), Some(&right)) = (index.get(a), index.get(b)) {
                builder.connect(left, right);
            }
        }
        let topology = builder.finish();
        let edges = topology.interaction_count();

        let span = Span::current();
        span.record("vertices", vertices.len());
        span.record("edges", edges);
        if vertices.is_empty() {
            warn!(network = %name, "network has no interactions");
        } else {
            info!(
                vertices = vertices.len(),
                edges,
                "network constructed"
            );
        }

        Self {
            name,
            vertices,
            index,
            topology,
        }
    }

    /// Returns the network name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertices in ascending identifier order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of interactions between distinct vertices.
    ///
    /// Self-interactions stay visible through [`GraphModel::edges`] but are
    /// not counted, so the degree sum is always twice this value.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.topology.interaction_count()
    }

    /// Returns whether `vertex` is part of the network.
    #[must_use]
    pub fn contains(&self, vertex: &str) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the current adjacency and edge state.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the neighbours of `vertex` in the order they were first seen.
    ///
    /// # Errors
    /// Returns [`InteractomeError::UnknownVertex`] if `vertex` is absent.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "C"), ("A", "B")]);
    /// let neighbours: Vec<&str> = graph.neighbours("A")?.map(|v| v.as_str()).collect();
    /// assert_eq!(neighbours, ["C", "B"]);
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    pub fn neighbours(&self, vertex: &str) -> Result<impl ExactSizeIterator<Item = &Vertex> + '_> {
        let position = self.position(vertex)?;
        let neighbours: Vec<&Vertex> = self
            .topology
            .neighbours(position)
            .iter()
            .filter_map(|&neighbour| self.vertices.get(neighbour))
            .collect();
        Ok(neighbours.into_iter())
    }

    /// Iterates over the canonical edges in ascending order, self-loops included.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        self.topology
            .edges
            .iter()
            .filter_map(|edge| self.endpoints(*edge))
    }

    /// Iterates over the canonical edges with self-loops removed.
    pub fn clean_edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        self.topology
            .edges
            .iter()
            .filter(|edge| !edge.is_self_loop())
            .filter_map(|edge| self.endpoints(*edge))
    }

    /// Swaps in a new adjacency and edge state over the same vertex set.
    ///
    /// # Errors
    /// Returns [`InteractomeError::InvalidParameter`] when `topology` covers a
    /// different number of vertices; the model is left unchanged.
    pub fn replace_topology(&mut self, topology: Topology) -> Result<()> {
        if topology.vertex_count() != self.vertices.len() {
            return Err(InteractomeError::InvalidParameter {
                parameter: "topology",
                reason: format!(
                    "covers {} vertices but the network has {}",
                    topology.vertex_count(),
                    self.vertices.len()
                ),
            });
        }
        self.topology = topology;
        Ok(())
    }

    pub(crate) fn position(&self, vertex: &str) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| InteractomeError::unknown_vertex(vertex))
    }

    pub(crate) fn endpoints(&self, edge: Edge) -> Option<(&Vertex, &Vertex)> {
        Some((
            self.vertices.get(edge.source)?,
            self.vertices.get(edge.target)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::suite_proptest_config;
    use proptest::prelude::*;
    use rstest::rstest;

    fn names<'a>(iter: impl Iterator<Item = &'a Vertex>) -> Vec<&'a str> {
        iter.map(Vertex::as_str).collect()
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let graph = GraphModel::from_pairs(
            "toy",
            [("A", "B"), ("A", "C"), ("B", "C"), ("B", "D"), ("D", "E"), ("D", "F")],
        );
        assert_eq!(graph.vertices(), ["A", "B", "C", "D", "E", "F"]);
        let expected: [(&str, &[&str]); 6] = [
            ("A", &["B", "C"]),
            ("B", &["A", "C", "D"]),
            ("C", &["A", "B"]),
            ("D", &["B", "E", "F"]),
            ("E", &["D"]),
            ("F", &["D"]),
        ];
        for (vertex, neighbours) in expected {
            let actual = names(graph.neighbours(vertex).expect("vertex must exist"));
            assert_eq!(actual, neighbours, "neighbours of {vertex}");
        }
    }

    #[rstest]
    #[case::same_orientation(&[("A", "B"), ("A", "B")])]
    #[case::flipped(&[("A", "B"), ("B", "A")])]
    fn repeated_interactions_collapse(#[case] pairs: &[(&str, &str)]) {
        let once = GraphModel::from_pairs("once", [("A", "B")]);
        let twice = GraphModel::from_pairs("twice", pairs.iter().copied());
        assert_eq!(once.topology(), twice.topology());
        assert_eq!(twice.edge_count(), 1);
    }

    #[test]
    fn self_loop_stays_out_of_adjacency_but_in_edges() {
        let graph = GraphModel::from_pairs("loop", [("A", "A"), ("A", "B")]);
        assert_eq!(names(graph.neighbours("A").expect("A exists")), ["B"]);
        let edges: Vec<(&str, &str)> = graph
            .edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(edges, [("A", "A"), ("A", "B")]);
        let clean: Vec<(&str, &str)> = graph
            .clean_edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(clean, [("A", "B")]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn singleton_self_loop_yields_isolated_vertex() {
        let graph = GraphModel::from_pairs("solo", [("X", "X")]);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.neighbours("X").expect("X exists").len(), 0);
    }

    #[test]
    fn empty_network_is_valid() {
        let graph = GraphModel::from_pairs("empty", std::iter::empty::<(&str, &str)>());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_are_canonical_and_sorted() {
        let graph = GraphModel::from_pairs("order", [("D", "B"), ("C", "A"), ("B", "A")]);
        let edges: Vec<(&str, &str)> = graph
            .edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(edges, [("A", "B"), ("A", "C"), ("B", "D")]);
    }

    #[test]
    fn unknown_vertex_is_reported() {
        let graph = GraphModel::from_pairs("toy", [("A", "B")]);
        let err = graph.neighbours("Z").err().expect("Z is absent");
        assert!(matches!(err, InteractomeError::UnknownVertex { ref vertex } if &**vertex == "Z"));
    }

    #[test]
    fn replace_topology_rejects_size_mismatch() {
        let mut graph = GraphModel::from_pairs("toy", [("A", "B")]);
        let before = graph.topology().clone();
        let err = graph
            .replace_topology(TopologyBuilder::new(5).finish())
            .expect_err("size mismatch must fail");
        assert!(matches!(err, InteractomeError::InvalidParameter { .. }));
        assert_eq!(graph.topology(), &before);
    }

    fn pair_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        let label = prop::sample::select(vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
        prop::collection::vec((label.clone(), label), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(a, b)| (a.to_owned(), b.to_owned()))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn adjacency_is_symmetric_and_degrees_sum_to_twice_edge_count(pairs in pair_strategy()) {
            let graph = GraphModel::from_pairs("prop", pairs.iter().map(|(a, b)| (a, b)));
            let topology = graph.topology();
            for vertex in 0..topology.vertex_count() {
                for &neighbour in topology.neighbours(vertex) {
                    prop_assert!(topology.neighbours(neighbour).contains(&vertex));
                }
            }
            let degree_sum: usize = (0..topology.vertex_count())
                .map(|vertex| topology.neighbours(vertex).len())
                .sum();
            prop_assert_eq!(degree_sum, 2 * graph.edge_count());
            prop_assert_eq!(graph.edge_count(), graph.clean_edges().count());
            if let Ok(density) = graph.density() {
                prop_assert!(density <= 1.0, "density {} exceeds 1", density);
            }
        }

        #[test]
        fn feeding_every_pair_twice_changes_nothing(pairs in pair_strategy()) {
            let once = GraphModel::from_pairs("once", pairs.iter().map(|(a, b)| (a, b)));
            let doubled = GraphModel::from_pairs(
                "twice",
                pairs
                    .iter()
                    .map(|(a, b)| (a, b))
                    .chain(pairs.iter().map(|(a, b)| (b, a))),
            );
            prop_assert_eq!(once.topology(), doubled.topology());
        }
    }

    #[test]
    fn builder_ignores_out_of_range_positions() {
        let mut builder = TopologyBuilder::new(2);
        assert!(!builder.connect(0, 2));
        assert_eq!(builder.total_degree(), 0);
        assert!(builder.connect(0, 1));
        assert_eq!(builder.total_degree(), 2);
        assert!(builder.has_edge(1, 0));
    }
}
