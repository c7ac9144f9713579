//! Barabási–Albert preferential-attachment generator.

use rand::{Rng, RngCore, seq::SliceRandom, seq::index};

use super::TopologyGenerator;
use crate::{
    Result,
    error::InteractomeError,
    graph::{Topology, TopologyBuilder},
};

/// Grows a network by preferential attachment.
///
/// Two distinct vertices are joined to seed the network. Every vertex then
/// acts as a source once, in a random order; for each other vertex in
/// position order a trial succeeds with probability
/// `degree(source) / total_degree`, where the total is refreshed only after
/// each source has been processed.
///
/// # Examples
/// ```
/// use interactome_core::{BarabasiAlbert, TopologyGenerator};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let topology = BarabasiAlbert.generate(10, &mut rng)?;
/// assert!(!topology.edges().is_empty());
/// # Ok::<(), interactome_core::InteractomeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarabasiAlbert;

impl TopologyGenerator for BarabasiAlbert {
    fn name(&self) -> &'static str {
        "barabasi_albert"
    }

    fn generate(&self, vertex_count: usize, rng: &mut dyn RngCore) -> Result<Topology> {
        if vertex_count < 2 {
            return Err(degenerate(vertex_count, 0));
        }
        let mut builder = TopologyBuilder::new(vertex_count);
        let seed = index::sample(rng, vertex_count, 2);
        builder.connect(seed.index(0), seed.index(1));

        let mut order: Vec<usize> = (0..vertex_count).collect();
        order.shuffle(rng);
        for source in order {
            let total = builder.total_degree();
            if total == 0 {
                return Err(degenerate(vertex_count, 0));
            }
            for target in (0..vertex_count).filter(|&target| target != source) {
                let ratio = builder.degree(source) as f64 / total as f64;
                if rng.gen_range(0.0..1.0) < ratio {
                    builder.connect(source, target);
                }
            }
        }
        Ok(builder.finish())
    }
}

fn degenerate(vertices: usize, edges: usize) -> InteractomeError {
    InteractomeError::DegenerateGraph {
        operation: "barabasi_albert",
        vertices,
        edges,
    }
}
