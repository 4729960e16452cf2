//! # local-homology
//!
//! Exact Smith Normal Form and GF(2) local homology for telling manifold
//! points apart from branching points in a point cloud.
//!
//! ## Theoretical Framework
//!
//! A point x of a k-dimensional manifold has local homology
//! H_*(X, X − x) ≅ H_*(ℝᵏ, ℝᵏ − 0), the same at every interior point.
//! Where several sheets meet (an open book, a bowtie) the local groups
//! jump. Computing them on small Vietoris-Rips neighborhoods of every
//! vertex and edge flags the singular locus, and linking points through
//! edges with trivial local homology clusters the cloud into pieces of
//! compatible local topology.
//!
//! ### Methodology
//!
//! 1. **Landmarks**: farthest-point sampling builds a cover of the cloud
//!    that prunes every ε-neighbor search
//!
//! 2. **Local complexes**: the open star of each vertex and each ε-edge,
//!    with relative boundary matrices over GF(2)
//!
//! 3. **Reduction**: ranks from a GF(2) elimination that agrees with the
//!    integer Smith Normal Form taken mod 2
//!
//! 4. **Clustering**: connected components of the edges whose local
//!    homology is trivial
//!
//! ## Example
//!
//! ```
//! use local_homology::{DatasetManager, Edge, euclidean};
//! use ndarray::array;
//!
//! let h = 3.0_f64.sqrt() / 2.0;
//! let points = array![
//!     [0.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.5, h],
//!     [-h, 0.5, 0.0],
//!     [0.0, 0.5, -h],
//! ];
//!
//! let mut manager = DatasetManager::new(points, |n: usize| (n as f64).sqrt() as usize, euclidean, 1.0);
//! manager.get_centers_ready()?;
//! let homologies = manager.calculate_homologies()?;
//! assert_eq!(homologies.edge_homologies[&Edge::new(0, 1)].as_slice(), &[0, 0, 2]);
//! assert_eq!(manager.cluster()?.len(), 1);
//! # Ok::<(), local_homology::LocalHomologyError>(())
//! ```
//!
//! ## References
//!
//! - Munkres, "Elements of Algebraic Topology" (1984) - local homology, §35
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Bendich et al., "Inferring local homology from sampled stratified spaces" (2007)

pub mod algebra;
pub mod topology;
pub mod cluster;
pub mod config;
pub mod error;
pub mod manager;

// Re-exports from algebra
pub use algebra::{
    // Integer Smith Normal Form
    SmithNormalForm,
    smith_normal_form,
    smith_normal_form_exact,
    reduce_in_place,
    locate_pivot,
    // GF(2) reduction
    EliminationStrategy,
    Gf2Reduction,
    reduce_recursive,
    reduce_iterative,
};

// Re-exports from topology
pub use topology::{
    Landmarks,
    Edge,
    Simplex,
    LocalComplex,
    LocalComplexBuilder,
    BettiNumbers,
    compute_betti,
    HomologyCalculator,
    LocalHomologies,
};

pub use cluster::cluster;
pub use config::LocalHomologyConfig;
pub use error::{LocalHomologyError, Result};
pub use manager::{DatasetManager, euclidean};
