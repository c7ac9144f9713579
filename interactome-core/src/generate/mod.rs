//! Random-graph generators over a fixed vertex set.
//!
//! A generator produces a fresh [`Topology`] for a given number of vertex
//! positions; [`GraphModel::regenerate`] swaps it into an existing network so
//! the vertex identities survive while adjacency and edges are replaced.

mod barabasi_albert;
mod erdos_renyi;

pub use self::{barabasi_albert::BarabasiAlbert, erdos_renyi::ErdosRenyi};

use rand::RngCore;
use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    graph::{GraphModel, Topology},
};

/// Strategy producing a random topology over `vertex_count` positions.
///
/// Implementors must return a topology covering exactly `vertex_count`
/// vertices with symmetric, self-loop-free adjacency.
///
/// # Examples
/// ```
/// use interactome_core::{Result, Topology, TopologyBuilder, TopologyGenerator};
/// use rand::RngCore;
///
/// struct Path;
///
/// impl TopologyGenerator for Path {
///     fn name(&self) -> &'static str { "path" }
///
///     fn generate(&self, vertex_count: usize, _rng: &mut dyn RngCore) -> Result<Topology> {
///         let mut builder = TopologyBuilder::new(vertex_count);
///         for position in 1..vertex_count {
///             builder.connect(position - 1, position);
///         }
///         Ok(builder.finish())
///     }
/// }
///
/// let mut rng = rand::thread_rng();
/// assert_eq!(Path.generate(4, &mut rng)?.edges().len(), 3);
/// # Ok::<(), interactome_core::InteractomeError>(())
/// ```
pub trait TopologyGenerator {
    /// Short identifier used in logs and metrics labels.
    fn name(&self) -> &'static str;

    /// Produces a topology over `vertex_count` positions.
    ///
    /// # Errors
    /// Returns an error when the generator cannot operate on this many
    /// vertices.
    fn generate(&self, vertex_count: usize, rng: &mut dyn RngCore) -> Result<Topology>;
}

impl GraphModel {
    /// Replaces the adjacency and edges of the network with a topology drawn
    /// from `generator`, keeping the vertex set.
    ///
    /// On error the network is left unchanged.
    ///
    /// # Errors
    /// Propagates the generator's error.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::{ErdosRenyi, GraphModel};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut graph = GraphModel::from_pairs("toy", [("A", "B"), ("C", "D")]);
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// graph.regenerate(&ErdosRenyi::new(1.0)?, &mut rng)?;
    /// assert_eq!(graph.edge_count(), 6);
    /// assert_eq!(graph.vertices(), ["A", "B", "C", "D"]);
    /// # Ok::<(), interactome_core::InteractomeError>(())
    /// ```
    #[instrument(
        name = "core.regenerate",
        err,
        skip(self, generator, rng),
        fields(
            network = %self.name(),
            model = generator.name(),
            vertices = self.vertex_count(),
            edges = field::Empty,
        ),
    )]
    pub fn regenerate<G>(&mut self, generator: &G, rng: &mut dyn RngCore) -> Result<()>
    where
        G: TopologyGenerator + ?Sized,
    {
        let topology = generator.generate(self.vertex_count(), rng)?;
        let edges = topology.interaction_count();
        self.replace_topology(topology)?;

        Span::current().record("edges", edges);
        info!(model = generator.name(), edges, "network regenerated");
        record_generation(generator.name(), edges);
        Ok(())
    }
}

#[cfg(feature = "metrics")]
fn record_generation(model: &'static str, edges: usize) {
    metrics::counter!("random_graph_generations", "model" => model).increment(1);
    metrics::counter!("random_graph_edges", "model" => model)
        .increment(u64::try_from(edges).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_generation(_model: &'static str, _edges: usize) {}
