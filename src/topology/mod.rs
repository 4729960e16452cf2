//! Topology Module: Local Homology of Point Clouds
//!
//! Implements the structures used to classify points by their local
//! topology:
//! - Landmark selection and the cover it induces (neighbor search)
//! - Local Vietoris-Rips complexes around vertices and edges
//! - Betti numbers of their relative boundary complexes
//!
//! ## Mathematical Background
//!
//! For a point x in a simplicial complex K, the local homology groups
//! H_*(K, K − x) only depend on the star of the simplex containing x in
//! its interior. A point on a k-manifold patch has the local homology of
//! (ℝᵏ, ℝᵏ − 0); where m sheets of a surface meet along an edge the top
//! group has rank m − 1.
//!
//! All boundary matrices are reduced over GF(2).

mod landmarks;
mod local_complex;
mod betti;
mod homology;

pub use landmarks::Landmarks;
pub use local_complex::{Edge, LocalComplex, LocalComplexBuilder, Simplex};
pub use betti::{BettiNumbers, compute_betti};
pub use homology::{HomologyCalculator, LocalHomologies};
