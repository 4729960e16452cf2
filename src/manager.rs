//! Dataset Manager: the Local Homology Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       DatasetManager                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  get_centers_ready()     - landmark cover of the cloud       │
//! │  calculate_homologies()  - Betti vectors per vertex / edge   │
//! │  cluster()               - components of compatible edges    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The steps must run in this order. The point cloud is read-only once
//! supplied; each step replaces the results of the steps after it.

use std::collections::BTreeSet;

use ndarray::{Array2, ArrayView1};
use typed_builder::TypedBuilder;

use crate::cluster::cluster;
use crate::config::LocalHomologyConfig;
use crate::error::{LocalHomologyError, Result};
use crate::topology::{HomologyCalculator, Landmarks, LocalComplexBuilder, LocalHomologies};

/// Euclidean distance between two rows.
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Owns a point cloud and the results of each pipeline step.
///
/// `centers_num` maps the cloud size to the landmark count and
/// `distance_funct` is the metric used for every ε comparison.
#[derive(TypedBuilder)]
pub struct DatasetManager<C, D> {
    /// One point per row
    vertices: Array2<f64>,
    centers_num: C,
    distance_funct: D,
    epsilon: f64,
    #[builder(default)]
    config: LocalHomologyConfig,

    #[builder(setter(skip), default)]
    landmarks: Option<Landmarks>,
    #[builder(setter(skip), default)]
    homologies: Option<LocalHomologies>,
    #[builder(setter(skip), default)]
    clusters: Vec<BTreeSet<usize>>,
}

impl<C, D> DatasetManager<C, D>
where
    C: Fn(usize) -> usize,
    D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Sync,
{
    pub fn new(vertices: Array2<f64>, centers_num: C, distance_funct: D, epsilon: f64) -> Self {
        Self::builder()
            .vertices(vertices)
            .centers_num(centers_num)
            .distance_funct(distance_funct)
            .epsilon(epsilon)
            .build()
    }

    pub fn n_points(&self) -> usize {
        self.vertices.nrows()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn config(&self) -> &LocalHomologyConfig {
        &self.config
    }

    /// Length of the Betti vectors produced by `calculate_homologies`.
    pub fn homology_dimensions(&self) -> usize {
        self.config
            .homology_dimensions
            .unwrap_or_else(|| self.vertices.ncols())
    }

    /// Select the landmarks. Must run before `calculate_homologies`.
    pub fn get_centers_ready(&mut self) -> Result<&Landmarks> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(LocalHomologyError::InvalidEpsilon(self.epsilon));
        }

        self.homologies = None;
        self.clusters.clear();

        let landmarks = Landmarks::select(
            self.vertices.view(),
            &self.centers_num,
            &self.distance_funct,
            self.config.landmark_seed,
        );
        Ok(self.landmarks.insert(landmarks))
    }

    /// Betti vectors of every vertex and every edge shorter than ε.
    pub fn calculate_homologies(&mut self) -> Result<&LocalHomologies> {
        let landmarks = self
            .landmarks
            .as_ref()
            .ok_or(LocalHomologyError::LandmarksNotReady)?;

        let dimensions = self.homology_dimensions();
        if dimensions == 0 {
            return Err(LocalHomologyError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }

        let builder = LocalComplexBuilder::new(
            self.vertices.view(),
            landmarks,
            &self.distance_funct,
            self.epsilon,
            dimensions,
        );
        let calculator =
            HomologyCalculator::new(builder, dimensions, self.config.strategy, self.config.parallel);
        let homologies = calculator.calculate(self.n_points())?;

        self.clusters.clear();
        Ok(self.homologies.insert(homologies))
    }

    /// Group the points into clusters. Must run after `calculate_homologies`.
    pub fn cluster(&mut self) -> Result<&[BTreeSet<usize>]> {
        if self.landmarks.is_none() {
            return Err(LocalHomologyError::LandmarksNotReady);
        }
        let homologies = self
            .homologies
            .as_ref()
            .ok_or(LocalHomologyError::HomologiesNotReady)?;

        self.clusters = cluster(self.n_points(), homologies);
        Ok(&self.clusters)
    }

    pub fn landmarks(&self) -> Option<&Landmarks> {
        self.landmarks.as_ref()
    }

    pub fn homologies(&self) -> Option<&LocalHomologies> {
        self.homologies.as_ref()
    }

    /// Clusters from the last `cluster()` call (empty before it).
    pub fn clusters(&self) -> &[BTreeSet<usize>] {
        &self.clusters
    }
}
