//! Benchmark parameter types.

use std::fmt;

/// Size of a synthetic network benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct NetworkBenchParams {
    /// Number of distinct protein labels drawn from.
    pub protein_count: usize,
    /// Number of interaction rows generated.
    pub interaction_count: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.protein_count, self.interaction_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_dimensions() {
        let params = NetworkBenchParams {
            protein_count: 100,
            interaction_count: 400,
        };
        assert_eq!(params.to_string(), "n=100,m=400");
    }
}
