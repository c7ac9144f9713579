//! Synthetic interaction lists.
//!
//! Endpoints are drawn uniformly from a fixed pool of protein labels, so the
//! lists contain the duplicates and self-interactions real curated files
//! carry.

use interactome_core::RawEdgeList;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while preparing synthetic interaction lists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested protein count was zero.
    #[error("protein count must be greater than zero")]
    ZeroProteins,
    /// The requested interaction count was zero.
    #[error("interaction count must be greater than zero")]
    ZeroInteractions,
}

/// Shape of a synthetic interaction list.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of distinct protein labels.
    pub protein_count: usize,
    /// Number of interaction rows.
    pub interaction_count: usize,
    /// Seed for the label sampler.
    pub seed: u64,
}

/// Deterministic generator of raw interaction lists.
#[derive(Debug)]
pub struct SyntheticInteractome;

impl SyntheticInteractome {
    /// Generates an interaction list named after its dimensions.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when either count is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<RawEdgeList, SyntheticError> {
        if config.protein_count == 0 {
            return Err(SyntheticError::ZeroProteins);
        }
        if config.interaction_count == 0 {
            return Err(SyntheticError::ZeroInteractions);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairs: Vec<(String, String)> = (0..config.interaction_count)
            .map(|_| {
                let left = rng.gen_range(0..config.protein_count);
                let right = rng.gen_range(0..config.protein_count);
                (label(left), label(right))
            })
            .collect();
        let name = format!(
            "synthetic-{}x{}",
            config.protein_count, config.interaction_count
        );
        Ok(RawEdgeList::from_pairs(name, pairs))
    }
}

fn label(index: usize) -> String {
    format!("P{index:06}")
}
