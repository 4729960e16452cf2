//! Local Vietoris-Rips Complexes
//!
//! For an anchor simplex σ (a vertex or an edge) and scale ε, the local
//! complex is the open star of σ in VR_ε(X):
//!
//!   St(σ) = { τ ∈ VR_ε(X) : σ ⊆ τ }
//!
//! A simplex σ ∪ ρ belongs to it iff every vertex of ρ is within ε of
//! every vertex of σ and ρ is itself a clique at scale ε.
//!
//! ## Relative Boundary
//!
//! The chains on St(σ) form the relative complex C(X) / C(X − St(σ)):
//! the boundary of τ ⊇ σ keeps only the faces that still contain σ. Its
//! homology is the local homology H_*(X, X − x) at a point x in the
//! interior of σ, which is trivial on a manifold patch and non-trivial
//! where several sheets meet.

use ndarray::{Array2, ArrayView1, ArrayView2};

use super::landmarks::Landmarks;

/// A simplex represented by its sorted vertex indices.
pub type Simplex = Vec<usize>;

/// Unordered pair of point indices, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(usize, usize);

impl Edge {
    pub fn new(u: usize, w: usize) -> Self {
        Self(u.min(w), u.max(w))
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, w): (usize, usize)) -> Self {
        Self::new(u, w)
    }
}

/// Open star of an anchor simplex, grouped by dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalComplex {
    anchor: Simplex,
    /// `simplices[k]` holds the k-simplices containing the anchor, sorted
    simplices: Vec<Vec<Simplex>>,
}

impl LocalComplex {
    /// Complex with no simplices up to `max_dimension`.
    pub fn empty(anchor: Simplex, max_dimension: usize) -> Self {
        Self {
            anchor,
            simplices: vec![Vec::new(); max_dimension + 1],
        }
    }

    pub fn anchor(&self) -> &[usize] {
        &self.anchor
    }

    /// Highest simplex dimension that was built.
    pub fn max_dimension(&self) -> usize {
        self.simplices.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.iter().all(Vec::is_empty)
    }

    /// k-simplices containing the anchor.
    pub fn simplices(&self, k: usize) -> &[Simplex] {
        match self.simplices.get(k) {
            Some(layer) => layer,
            None => &[],
        }
    }

    pub fn num_simplices(&self, k: usize) -> usize {
        self.simplices(k).len()
    }

    /// Relative boundary map ∂ₖ over GF(2), shape `(n_{k-1}, n_k)`.
    ///
    /// Entry (i, j) is 1 iff the i-th (k-1)-simplex is a face of the j-th
    /// k-simplex. ∂₀ has no rows.
    pub fn boundary_matrix(&self, k: usize) -> Array2<u8> {
        let columns = self.simplices(k);
        if k == 0 {
            return Array2::zeros((0, columns.len()));
        }
        let rows = self.simplices(k - 1);
        let mut boundary = Array2::zeros((rows.len(), columns.len()));

        for (j, simplex) in columns.iter().enumerate() {
            for (skip, vertex) in simplex.iter().enumerate() {
                // Faces that lose an anchor vertex are outside the star
                if self.anchor.contains(vertex) {
                    continue;
                }
                let face: Simplex = simplex
                    .iter()
                    .enumerate()
                    .filter(|&(position, _)| position != skip)
                    .map(|(_, &v)| v)
                    .collect();
                if let Ok(i) = rows.binary_search(&face) {
                    boundary[[i, j]] = 1;
                }
            }
        }

        boundary
    }
}

/// Builds local complexes over a fixed point cloud, landmark cover and scale.
pub struct LocalComplexBuilder<'a, D> {
    points: ArrayView2<'a, f64>,
    landmarks: &'a Landmarks,
    distance: &'a D,
    epsilon: f64,
    max_dimension: usize,
}

impl<'a, D> LocalComplexBuilder<'a, D>
where
    D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
{
    /// `max_dimension` is the largest simplex dimension generated.
    pub fn new(
        points: ArrayView2<'a, f64>,
        landmarks: &'a Landmarks,
        distance: &'a D,
        epsilon: f64,
        max_dimension: usize,
    ) -> Self {
        Self {
            points,
            landmarks,
            distance,
            epsilon,
            max_dimension,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    fn dist(&self, a: usize, b: usize) -> f64 {
        (self.distance)(self.points.row(a), self.points.row(b))
    }

    /// Points other than `v` within ε of it.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.landmarks
            .neighbors_within(self.points, v, self.epsilon, self.distance)
    }

    /// Local complex around vertex `v`.
    pub fn vertex(&self, v: usize) -> LocalComplex {
        self.build(vec![v])
    }

    /// Local complex around the edge `{u, w}`.
    pub fn edge(&self, edge: Edge) -> LocalComplex {
        let (u, w) = edge.endpoints();
        self.build(vec![u, w])
    }

    fn build(&self, anchor: Simplex) -> LocalComplex {
        let first = anchor[0];
        let candidates: Vec<usize> = self
            .neighbors(first)
            .into_iter()
            .filter(|p| !anchor.contains(p))
            .filter(|&p| anchor[1..].iter().all(|&a| self.dist(a, p) <= self.epsilon))
            .collect();

        if anchor.len() + candidates.len() < 2 || anchor.len() > self.max_dimension + 1 {
            return LocalComplex::empty(anchor, self.max_dimension);
        }

        // Pairwise adjacency among the candidates
        let m = candidates.len();
        let mut adjacent = Array2::from_elem((m, m), false);
        for i in 0..m {
            for j in i + 1..m {
                let linked = self.dist(candidates[i], candidates[j]) <= self.epsilon;
                adjacent[[i, j]] = linked;
                adjacent[[j, i]] = linked;
            }
        }

        let mut complex = LocalComplex::empty(anchor.clone(), self.max_dimension);
        let extra = self.max_dimension + 1 - anchor.len();
        let mut clique = Vec::with_capacity(extra);
        self.grow(&mut complex, &candidates, &adjacent, &mut clique, 0, extra);

        for layer in &mut complex.simplices {
            layer.sort();
        }
        complex
    }

    /// Depth-first enumeration of cliques among the candidates, each joined
    /// with the anchor.
    fn grow(
        &self,
        complex: &mut LocalComplex,
        candidates: &[usize],
        adjacent: &Array2<bool>,
        clique: &mut Vec<usize>,
        start: usize,
        remaining: usize,
    ) {
        let mut simplex: Simplex = complex
            .anchor
            .iter()
            .copied()
            .chain(clique.iter().map(|&c| candidates[c]))
            .collect();
        simplex.sort_unstable();
        complex.simplices[simplex.len() - 1].push(simplex);

        if remaining == 0 {
            return;
        }
        for next in start..candidates.len() {
            if clique.iter().all(|&c| adjacent[[c, next]]) {
                clique.push(next);
                self.grow(complex, candidates, adjacent, clique, next + 1, remaining - 1);
                clique.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::EliminationStrategy;
    use crate::error::LocalHomologyError;
    use crate::manager::euclidean;
    use crate::topology::compute_betti;
    use ndarray::array;

    fn three_sheets() -> Array2<f64> {
        let h = 3.0_f64.sqrt() / 2.0;
        array![
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.5, h],
            [-h, 0.5, 0.0],
            [0.0, 0.5, -h]
        ]
    }

    #[test]
    fn test_edge_normalization() {
        assert_eq!(Edge::new(4, 1), Edge::new(1, 4));
        assert_eq!(Edge::from((7, 2)).endpoints(), (2, 7));
    }

    #[test]
    fn test_star_of_junction_edge() {
        let points = three_sheets();
        let landmarks = Landmarks::select(points.view(), &|_: usize| 2, &euclidean, None);
        let builder = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 1.0, 3);

        let complex = builder.edge(Edge::new(0, 1));

        assert_eq!(complex.simplices(1), &[vec![0, 1]]);
        assert_eq!(
            complex.simplices(2),
            &[vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]]
        );
        assert_eq!(complex.num_simplices(3), 0);
        assert_eq!(complex.boundary_matrix(2), array![[1_u8, 1, 1]]);
    }

    #[test]
    fn test_star_of_vertex() {
        let points = three_sheets();
        let landmarks = Landmarks::select(points.view(), &|_: usize| 2, &euclidean, None);
        let builder = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 1.0, 3);

        let complex = builder.vertex(2);

        assert_eq!(complex.simplices(0), &[vec![2]]);
        assert_eq!(complex.simplices(1), &[vec![0, 2], vec![1, 2]]);
        assert_eq!(complex.simplices(2), &[vec![0, 1, 2]]);
        // ∂₁ only keeps the anchor vertex
        assert_eq!(complex.boundary_matrix(1), array![[1_u8, 1]]);
        assert_eq!(complex.boundary_matrix(2), array![[1_u8], [1]]);
        assert_eq!(complex.boundary_matrix(0).dim(), (0, 1));
    }

    #[test]
    fn test_isolated_vertex_is_empty() {
        let points = array![[0.0, 0.0], [5.0, 0.0]];
        let landmarks = Landmarks::select(points.view(), &|_: usize| 1, &euclidean, None);
        let builder = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 1.0, 2);

        let complex = builder.vertex(0);

        assert!(complex.is_empty());
        assert_eq!(complex.boundary_matrix(1).dim(), (0, 0));
    }

    #[test]
    fn test_dimension_cap() {
        // Four mutually close points: the full star of a vertex has a 3-simplex
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let landmarks = Landmarks::select(points.view(), &|_: usize| 2, &euclidean, None);

        let full = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 2.0, 3).vertex(0);
        assert_eq!(full.num_simplices(3), 1);

        let capped = LocalComplexBuilder::new(points.view(), &landmarks, &euclidean, 2.0, 2).vertex(0);
        assert_eq!(capped.max_dimension(), 2);
        assert_eq!(capped.num_simplices(2), 3);
        assert_eq!(capped.num_simplices(3), 0);
    }

    #[test]
    fn test_inconsistent_boundary_ranks() {
        // The triangle's face [0, 2] is missing from the star, so ∂₂ hits
        // the only edge and β₁ would be 1 − 1 − 1
        let complex = LocalComplex {
            anchor: vec![0],
            simplices: vec![vec![vec![0]], vec![vec![0, 1]], vec![vec![0, 1, 2]]],
        };

        for strategy in [EliminationStrategy::Recursive, EliminationStrategy::Iterative] {
            assert_eq!(
                compute_betti(&complex, 2, strategy).unwrap_err(),
                LocalHomologyError::InconsistentBoundaryRanks {
                    dimension: 1,
                    simplices: 1,
                    rank: 1,
                    incoming_rank: 1,
                }
            );
        }
    }
}
