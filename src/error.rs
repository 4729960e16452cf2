//! Error type shared by the algebra, topology and clustering layers.

use thiserror::Error;

/// Errors raised by matrix reduction and the local-homology pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocalHomologyError {
    /// The trailing submatrix starting at `offset` is all zero.
    ///
    /// Reduction routines treat this as the normal end of elimination.
    #[error("no non-zero entry in the trailing submatrix at offset {offset}")]
    NoNonZeroEntry { offset: usize },

    /// Homology or clustering was requested before landmark selection.
    #[error("landmarks are not ready: call get_centers_ready() first")]
    LandmarksNotReady,

    /// Clustering was requested before the local homologies were computed.
    #[error("local homologies are not ready: call calculate_homologies() first")]
    HomologiesNotReady,

    /// A Betti number came out negative, so the boundary matrices are inconsistent.
    #[error(
        "inconsistent boundary ranks in dimension {dimension}: \
         {simplices} simplices, rank {rank}, incoming rank {incoming_rank}"
    )]
    InconsistentBoundaryRanks {
        dimension: usize,
        simplices: usize,
        rank: usize,
        incoming_rank: usize,
    },

    /// Epsilon must be finite and non-negative.
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    /// The requested number of homological dimensions is unusable.
    #[error("expected at least {expected} homological dimension(s), found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, LocalHomologyError>;
