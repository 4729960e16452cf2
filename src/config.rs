//! Pipeline configuration.

use crate::algebra::EliminationStrategy;

/// Configuration for landmark selection and local homology.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalHomologyConfig {
    /// Length of every Betti vector (dimensions 0..n).
    ///
    /// Simplices are generated up to this dimension so the top Betti
    /// number sees the next boundary map. `None` uses the embedding
    /// dimension, i.e. the number of columns of the point matrix.
    ///
    /// Default: None
    pub homology_dimensions: Option<usize>,

    /// How GF(2) boundary matrices are reduced.
    ///
    /// Default: Iterative
    pub strategy: EliminationStrategy,

    /// Seed for the first landmark. `None` starts farthest-point sampling
    /// at point 0.
    ///
    /// Default: None
    pub landmark_seed: Option<u64>,

    /// Compute vertex and edge homologies on the rayon thread pool.
    ///
    /// Default: true
    pub parallel: bool,
}

impl Default for LocalHomologyConfig {
    fn default() -> Self {
        Self {
            homology_dimensions: None,
            strategy: EliminationStrategy::default(),
            landmark_seed: None,
            parallel: true,
        }
    }
}
