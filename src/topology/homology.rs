//! Local Homology of Every Vertex and Edge
//!
//! Each vertex v and each edge {u, w} with d(u, w) ≤ ε gets the Betti
//! numbers of its relative star complex. The computations only read the
//! point cloud and the landmark cover, so they run as an independent
//! parallel map; results are gathered into ordered maps and do not
//! depend on scheduling.

use std::collections::BTreeMap;

use ndarray::ArrayView1;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::algebra::EliminationStrategy;
use crate::error::Result;

use super::{compute_betti, BettiNumbers, Edge, LocalComplexBuilder};

/// Betti vectors attached to vertices and edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalHomologies {
    pub vertex_homologies: BTreeMap<usize, BettiNumbers>,
    pub edge_homologies: BTreeMap<Edge, BettiNumbers>,
}

impl LocalHomologies {
    /// Edges whose neighborhood is not a single sheet.
    pub fn singular_edges(&self) -> Vec<Edge> {
        self.edge_homologies
            .iter()
            .filter(|(_, betti)| !betti.is_trivial())
            .map(|(&edge, _)| edge)
            .collect()
    }

    /// Vertices whose neighborhood is not a single sheet.
    pub fn singular_vertices(&self) -> Vec<usize> {
        self.vertex_homologies
            .iter()
            .filter(|(_, betti)| !betti.is_trivial())
            .map(|(&v, _)| v)
            .collect()
    }
}

/// Drives complex construction and GF(2) reduction over the whole cloud.
pub struct HomologyCalculator<'a, D> {
    builder: LocalComplexBuilder<'a, D>,
    dimensions: usize,
    strategy: EliminationStrategy,
    parallel: bool,
}

impl<'a, D> HomologyCalculator<'a, D>
where
    D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Sync,
{
    /// `dimensions` is the length of every Betti vector; the builder must
    /// generate simplices up to that dimension.
    pub fn new(
        builder: LocalComplexBuilder<'a, D>,
        dimensions: usize,
        strategy: EliminationStrategy,
        parallel: bool,
    ) -> Self {
        Self {
            builder,
            dimensions,
            strategy,
            parallel,
        }
    }

    pub fn vertex_homology(&self, v: usize) -> Result<BettiNumbers> {
        compute_betti(&self.builder.vertex(v), self.dimensions, self.strategy)
    }

    pub fn edge_homology(&self, edge: Edge) -> Result<BettiNumbers> {
        compute_betti(&self.builder.edge(edge), self.dimensions, self.strategy)
    }

    /// All edges {u, w} with d(u, w) ≤ ε, ascending.
    pub fn edges(&self, n_points: usize) -> Vec<Edge> {
        let per_vertex = |u: usize| -> Vec<Edge> {
            self.builder
                .neighbors(u)
                .into_iter()
                .filter(|&w| w > u)
                .map(|w| Edge::new(u, w))
                .collect()
        };
        let mut edges: Vec<Edge> = if self.parallel {
            (0..n_points).into_par_iter().flat_map_iter(per_vertex).collect()
        } else {
            (0..n_points).flat_map(per_vertex).collect()
        };
        edges.sort_unstable();
        edges
    }

    /// Homology of every vertex `0..n_points` and every ε-edge.
    pub fn calculate(&self, n_points: usize) -> Result<LocalHomologies> {
        let vertices: Vec<usize> = (0..n_points).collect();
        let edges = self.edges(n_points);

        let vertex_homologies = self
            .evaluate(&vertices, |&v| self.vertex_homology(v))?
            .into_iter()
            .zip(vertices)
            .map(|(betti, v)| (v, betti))
            .collect();
        let edge_homologies: BTreeMap<Edge, BettiNumbers> = self
            .evaluate(&edges, |&edge| self.edge_homology(edge))?
            .into_iter()
            .zip(edges)
            .map(|(betti, edge)| (edge, betti))
            .collect();

        let homologies = LocalHomologies {
            vertex_homologies,
            edge_homologies,
        };
        info!(
            vertices = homologies.vertex_homologies.len(),
            edges = homologies.edge_homologies.len(),
            "local homologies computed"
        );
        debug!(
            singular_vertices = homologies.singular_vertices().len(),
            singular_edges = homologies.singular_edges().len(),
            "singularities detected"
        );
        Ok(homologies)
    }

    /// Order-preserving map, in parallel when enabled.
    fn evaluate<T, F>(&self, items: &[T], f: F) -> Result<Vec<BettiNumbers>>
    where
        T: Sync,
        F: Fn(&T) -> Result<BettiNumbers> + Sync + Send,
    {
        if self.parallel {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}
