//! Connected-component discovery.
//!
//! Components are found by a depth-first traversal driven by an explicit
//! frame stack, so chain-shaped networks of any length are walked without
//! growing the native call stack. Discovery order matches a recursive
//! preorder walk: roots are taken in ascending vertex order and neighbours in
//! insertion order.

use std::fmt;

use tracing::{Span, field, info, instrument};

use crate::{Result, graph::{GraphModel, Vertex}};

/// Partition of a network's vertices into connected components.
///
/// The partition borrows the network it was computed from, so the network
/// cannot be regenerated while a partition is alive.
///
/// # Examples
/// ```
/// use interactome_core::GraphModel;
///
/// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("C", "D"), ("D", "E")]);
/// let partition = graph.connected_components();
/// assert_eq!(partition.count_and_sizes(), (2, vec![2, 3]));
/// assert_eq!(partition.index_per_vertex(), [0, 0, 1, 1, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct ComponentPartition<'a> {
    graph: &'a GraphModel,
    groups: Vec<Vec<usize>>,
    membership: Vec<usize>,
}

impl<'a> ComponentPartition<'a> {
    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether the network had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the component count and the size of each component in
    /// discovery order.
    #[must_use]
    pub fn count_and_sizes(&self) -> (usize, Vec<usize>) {
        (self.groups.len(), self.groups.iter().map(Vec::len).collect())
    }

    /// Returns the members of component `index` in visitation order.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<Vec<&'a Vertex>> {
        self.groups.get(index).map(|members| self.resolve(members))
    }

    /// Iterates over the components in discovery order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = Vec<&'a Vertex>> + '_ {
        self.groups.iter().map(|members| self.resolve(members))
    }

    /// Returns the component that contains `vertex`.
    ///
    /// # Errors
    /// Returns [`InteractomeError::UnknownVertex`](crate::InteractomeError::UnknownVertex)
    /// if `vertex` is absent from the network.
    pub fn containing(&self, vertex: &str) -> Result<Option<Vec<&'a Vertex>>> {
        let position = self.graph.position(vertex)?;
        Ok(self
            .membership
            .get(position)
            .and_then(|&index| self.group(index)))
    }

    /// Returns each vertex's component index, parallel to
    /// [`GraphModel::vertices`].
    #[must_use]
    pub fn index_per_vertex(&self) -> &[usize] {
        &self.membership
    }

    fn resolve(&self, members: &[usize]) -> Vec<&'a Vertex> {
        let vertices = self.graph.vertices();
        members
            .iter()
            .filter_map(|&position| vertices.get(position))
            .collect()
    }
}

/// One line per component: the size, then the members in visitation order,
/// separated by single spaces.
impl fmt::Display for ComponentPartition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for members in self.groups() {
            write!(f, "{}", members.len())?;
            for vertex in members {
                write!(f, " {vertex}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl GraphModel {
    /// Discovers the connected components of the network.
    #[must_use]
    #[instrument(
        name = "core.components",
        skip(self),
        fields(network = %self.name(), vertices = self.vertex_count(), components = field::Empty),
    )]
    pub fn connected_components(&self) -> ComponentPartition<'_> {
        let count = self.vertex_count();
        let topology = self.topology();
        let mut marked = vec![false; count];
        let mut membership = vec![0; count];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..count {
            if marked[root] {
                continue;
            }
            let component = groups.len();
            let mut group = vec![root];
            marked[root] = true;
            membership[root] = component;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (vertex, cursor) = *frame;
                match topology.neighbours(vertex).get(cursor) {
                    Some(&next) => {
                        frame.1 += 1;
                        if !marked[next] {
                            marked[next] = true;
                            membership[next] = component;
                            group.push(next);
                            stack.push((next, 0));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
            groups.push(group);
        }

        Span::current().record("components", groups.len());
        info!(components = groups.len(), "components discovered");
        ComponentPartition {
            graph: self,
            groups,
            membership,
        }
    }

    /// Returns the number of components and their sizes in discovery order.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::GraphModel;
    ///
    /// let graph = GraphModel::from_pairs("toy", [("A", "B"), ("B", "C"), ("X", "Y")]);
    /// assert_eq!(graph.component_count_and_sizes(), (2, vec![3, 2]));
    /// ```
    #[must_use]
    pub fn component_count_and_sizes(&self) -> (usize, Vec<usize>) {
        self.connected_components().count_and_sizes()
    }

    /// Returns the component containing `vertex`, in visitation order.
    ///
    /// `Ok(None)` is unreachable for a well-formed network.
    ///
    /// # Errors
    /// Returns [`InteractomeError::UnknownVertex`](crate::InteractomeError::UnknownVertex)
    /// if `vertex` is absent.
    pub fn component_containing(&self, vertex: &str) -> Result<Option<Vec<&Vertex>>> {
        self.connected_components().containing(vertex)
    }

    /// Returns each vertex's 0-based component index, parallel to
    /// [`GraphModel::vertices`].
    #[must_use]
    pub fn component_index_per_vertex(&self) -> Vec<usize> {
        self.connected_components().membership
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InteractomeError;
    use rstest::{fixture, rstest};

    fn names(members: &[&Vertex]) -> Vec<String> {
        members.iter().map(ToString::to_string).collect()
    }

    #[fixture]
    fn three_components() -> GraphModel {
        GraphModel::from_pairs(
            "toy2",
            [
                ("A", "G"),
                ("A", "C"),
                ("C", "G"),
                ("G", "D"),
                ("D", "E"),
                ("D", "F"),
                ("B", "H"),
                ("I", "J"),
                ("J", "K"),
            ],
        )
    }

    #[rstest]
    fn discovery_follows_preorder(three_components: GraphModel) {
        let partition = three_components.connected_components();
        let groups: Vec<Vec<String>> = partition.groups().map(|g| names(&g)).collect();
        assert_eq!(
            groups,
            [
                vec!["A", "G", "C", "D", "E", "F"],
                vec!["B", "H"],
                vec!["I", "J", "K"],
            ]
        );
    }

    #[rstest]
    fn sizes_and_indices_agree(three_components: GraphModel) {
        let partition = three_components.connected_components();
        assert_eq!(partition.count_and_sizes(), (3, vec![6, 2, 3]));
        assert_eq!(
            partition.index_per_vertex(),
            [0, 1, 0, 0, 0, 0, 0, 1, 2, 2, 2]
        );
    }

    #[rstest]
    #[case("B")]
    #[case("H")]
    fn containing_returns_whole_group(three_components: GraphModel, #[case] vertex: &str) {
        let group = three_components
            .component_containing(vertex)
            .expect("vertex exists")
            .expect("every vertex has a component");
        assert_eq!(names(&group), ["B", "H"]);
    }

    #[rstest]
    fn containing_unknown_vertex_fails(three_components: GraphModel) {
        let err = three_components
            .component_containing("Z")
            .expect_err("Z is absent");
        assert!(matches!(err, InteractomeError::UnknownVertex { .. }));
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let labels: Vec<String> = (0..200_000).map(|i| format!("p{i:06}")).collect();
        let pairs = labels.windows(2).map(|pair| (pair[0].as_str(), pair[1].as_str()));
        let graph = GraphModel::from_pairs("chain", pairs);
        assert_eq!(graph.component_count_and_sizes(), (1, vec![200_000]));
    }

    #[test]
    fn listing_renders_size_then_members() {
        let graph = GraphModel::from_pairs("toy", [("A", "B"), ("C", "C")]);
        assert_eq!(graph.connected_components().to_string(), "2 A B\n1 C\n");
    }

    #[test]
    fn empty_network_has_no_components() {
        let graph = GraphModel::from_pairs("empty", std::iter::empty::<(&str, &str)>());
        let partition = graph.connected_components();
        assert!(partition.is_empty());
        assert_eq!(partition.count_and_sizes(), (0, Vec::new()));
    }
}
