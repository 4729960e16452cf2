//! Betti Numbers of Local Complexes
//!
//! The k-th Betti number of a chain complex over GF(2) is
//!
//!   βₖ = dim ker ∂ₖ − dim im ∂ₖ₊₁ = (nₖ − rank ∂ₖ) − rank ∂ₖ₊₁
//!
//! where nₖ is the number of k-simplices. For the relative star complex of
//! a vertex or edge these are the local Betti numbers:
//!
//! - all zero on a manifold patch or its boundary
//! - βₖ > 0 in the top dimension where several sheets meet

use std::fmt;

use crate::algebra::{gf2_rank, EliminationStrategy};
use crate::error::{LocalHomologyError, Result};

use super::LocalComplex;

/// Betti numbers β₀, β₁, … of one local complex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BettiNumbers {
    values: Vec<usize>,
}

impl BettiNumbers {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// All-zero vector over `dimensions` homological dimensions.
    pub fn zeros(dimensions: usize) -> Self {
        Self::new(vec![0; dimensions])
    }

    /// βₖ (zero beyond the computed range)
    pub fn dim(&self, k: usize) -> usize {
        self.values.get(k).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    /// Number of homological dimensions covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// No local homology in any dimension: the neighborhood looks like a
    /// single sheet.
    pub fn is_trivial(&self) -> bool {
        self.values.iter().all(|&b| b == 0)
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }

    /// Euler characteristic χ = Σ (−1)ᵏ βₖ
    pub fn euler_characteristic(&self) -> i64 {
        self.values
            .iter()
            .enumerate()
            .map(|(k, &b)| if k % 2 == 0 { b as i64 } else { -(b as i64) })
            .sum()
    }
}

impl From<Vec<usize>> for BettiNumbers {
    fn from(values: Vec<usize>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for BettiNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

/// Betti numbers β₀ … β_{dimensions−1} of `complex`.
///
/// Needs the complex built up to simplex dimension `dimensions` so the top
/// Betti number sees the rank of the next boundary map. An empty complex
/// yields the zero vector.
pub fn compute_betti(
    complex: &LocalComplex,
    dimensions: usize,
    strategy: EliminationStrategy,
) -> Result<BettiNumbers> {
    if complex.is_empty() {
        return Ok(BettiNumbers::zeros(dimensions));
    }

    // ranks[k] = rank ∂ₖ; ∂₀ is zero
    let mut ranks = vec![0usize; dimensions + 1];
    for k in 1..=dimensions {
        if complex.num_simplices(k) > 0 && complex.num_simplices(k - 1) > 0 {
            ranks[k] = gf2_rank(complex.boundary_matrix(k), strategy);
        }
    }

    let mut values = Vec::with_capacity(dimensions);
    for k in 0..dimensions {
        let simplices = complex.num_simplices(k);
        let (rank, incoming_rank) = (ranks[k], ranks[k + 1]);
        let beta = simplices
            .checked_sub(rank)
            .and_then(|nullity| nullity.checked_sub(incoming_rank))
            .ok_or(LocalHomologyError::InconsistentBoundaryRanks {
                dimension: k,
                simplices,
                rank,
                incoming_rank,
            })?;
        values.push(beta);
    }

    Ok(BettiNumbers::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::euclidean;
    use crate::topology::{Edge, Landmarks, LocalComplexBuilder};
    use ndarray::{array, Array2};

    fn betti_of_vertex(points: &Array2<f64>, v: usize, epsilon: f64, dimensions: usize) -> BettiNumbers {
        let landmarks = Landmarks::select(points.view(), &|n: usize| n, &euclidean, None);
        let builder = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, epsilon, dimensions);
        compute_betti(&builder.vertex(v), dimensions, EliminationStrategy::Iterative).unwrap()
    }

    #[test]
    fn test_summaries() {
        let betti = BettiNumbers::new(vec![1, 2, 0, 1]);

        assert_eq!(betti.total(), 4);
        assert_eq!(betti.euler_characteristic(), -2);
        assert_eq!(betti.dim(1), 2);
        assert_eq!(betti.dim(9), 0);
        assert!(!betti.is_trivial());
        assert!(BettiNumbers::zeros(3).is_trivial());
        assert_eq!(betti.to_string(), "[1, 2, 0, 1]");
    }

    #[test]
    fn test_bowtie_center_is_singular() {
        // Two triangles sharing only the origin
        let points = array![[0.0, 0.0], [1.0, 0.5], [1.0, -0.5], [-1.0, 0.5], [-1.0, -0.5]];

        assert_eq!(betti_of_vertex(&points, 0, 1.2, 2).as_slice(), &[0, 1]);
        assert!(betti_of_vertex(&points, 1, 1.2, 2).is_trivial());
    }

    #[test]
    fn test_interior_of_disk() {
        // Hexagonal fan: the center has a circle as its link, so H₂ = 1
        let mut rows = vec![[0.0, 0.0]];
        for i in 0..6 {
            let angle = std::f64::consts::PI * i as f64 / 3.0;
            rows.push([angle.cos(), angle.sin()]);
        }
        let points = Array2::from(rows);

        assert_eq!(betti_of_vertex(&points, 0, 1.05, 3).as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn test_three_sheet_edge() {
        let h = 3.0_f64.sqrt() / 2.0;
        let points = array![
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.5, h],
            [-h, 0.5, 0.0],
            [0.0, 0.5, -h]
        ];
        let landmarks = Landmarks::select(points.view(), &|_: usize| 2, &euclidean, None);
        let builder = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 1.0, 3);

        for strategy in [EliminationStrategy::Recursive, EliminationStrategy::Iterative] {
            let junction = compute_betti(&builder.edge(Edge::new(0, 1)), 3, strategy).unwrap();
            let sheet = compute_betti(&builder.edge(Edge::new(0, 2)), 3, strategy).unwrap();

            assert_eq!(junction.as_slice(), &[0, 0, 2]);
            assert!(sheet.is_trivial());
        }
    }

    #[test]
    fn test_empty_complex() {
        let complex = LocalComplex::empty(vec![0], 2);
        let betti = compute_betti(&complex, 2, EliminationStrategy::Recursive).unwrap();

        assert_eq!(betti, BettiNumbers::zeros(2));
    }
}
