//! Erdős–Rényi `G(n, p)` generator.

use rand::{Rng, RngCore};

use super::TopologyGenerator;
use crate::{
    Result,
    error::InteractomeError,
    graph::{Topology, TopologyBuilder},
};

/// Joins every unordered pair of distinct vertices independently with
/// probability `p`.
///
/// # Examples
/// ```
/// use interactome_core::{ErdosRenyi, TopologyGenerator};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let none = ErdosRenyi::new(0.0)?.generate(5, &mut rng)?;
/// assert!(none.edges().is_empty());
/// let all = ErdosRenyi::new(1.0)?.generate(5, &mut rng)?;
/// assert_eq!(all.edges().len(), 10);
/// # Ok::<(), interactome_core::InteractomeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyi {
    probability: f64,
}

impl ErdosRenyi {
    /// Creates a generator with edge probability `probability`.
    ///
    /// # Errors
    /// Returns [`InteractomeError::InvalidParameter`] unless
    /// `0 <= probability <= 1`. `NaN` is rejected.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(InteractomeError::InvalidParameter {
                parameter: "probability",
                reason: format!("must lie in [0, 1], got {probability}"),
            });
        }
        Ok(Self { probability })
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl TopologyGenerator for ErdosRenyi {
    fn name(&self) -> &'static str {
        "erdos_renyi"
    }

    fn generate(&self, vertex_count: usize, rng: &mut dyn RngCore) -> Result<Topology> {
        let mut builder = TopologyBuilder::new(vertex_count);
        for source in 0..vertex_count {
            for target in (source + 1)..vertex_count {
                if rng.gen_bool(self.probability) {
                    builder.connect(source, target);
                }
            }
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::above(1.5)]
    #[case::below(-0.1)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn out_of_range_probability_is_rejected(#[case] probability: f64) {
        let err = ErdosRenyi::new(probability).expect_err("probability must be rejected");
        assert!(matches!(
            err,
            InteractomeError::InvalidParameter {
                parameter: "probability",
                ..
            }
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn certain_probability_yields_complete_graph(#[case] vertex_count: usize) {
        let mut rng = SmallRng::seed_from_u64(5);
        let generator = ErdosRenyi::new(1.0).expect("valid probability");
        let topology = generator
            .generate(vertex_count, &mut rng)
            .expect("generation succeeds");
        let expected = vertex_count * vertex_count.saturating_sub(1) / 2;
        assert_eq!(topology.edges().len(), expected);
        assert!(topology.edges().iter().all(|edge| !edge.is_self_loop()));
    }

    #[test]
    fn same_seed_reproduces_topology() {
        let generator = ErdosRenyi::new(0.3).expect("valid probability");
        let first = generator
            .generate(30, &mut SmallRng::seed_from_u64(99))
            .expect("generation succeeds");
        let second = generator
            .generate(30, &mut SmallRng::seed_from_u64(99))
            .expect("generation succeeds");
        assert_eq!(first, second);
    }
}
