//! Landmark Selection by Farthest-Point Sampling
//!
//! A landmark set L ⊂ X of size m = centers_num(|X|) is grown greedily:
//! each new landmark is the point farthest from the landmarks chosen so
//! far (max-min sampling). Every point is then assigned to its nearest
//! landmark, which partitions X into cells C(ℓ) with radius
//!
//!   r(ℓ) = max_{p ∈ C(ℓ)} d(p, ℓ)
//!
//! ## Neighbor Search
//!
//! For a metric d, the triangle inequality gives
//!
//!   d(a, ℓ) > ε + r(ℓ)  ⇒  d(a, p) > ε  for every p ∈ C(ℓ)
//!
//! so whole cells can be skipped when collecting the ε-neighborhood of an
//! anchor, and the result is still exact.

use ndarray::{ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Relative slack on the cell-pruning bound so rounding never drops a neighbor.
const PRUNE_SLACK: f64 = 1e-9;

/// Landmark set with the Voronoi-style cover it induces.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    /// Point indices of the landmarks, in selection order
    centers: Vec<usize>,
    /// For each point, the position (into `centers`) of its nearest landmark
    assignment: Vec<usize>,
    /// Cell radius per landmark
    radii: Vec<f64>,
    /// Points of each cell, ascending
    members: Vec<Vec<usize>>,
}

impl Landmarks {
    /// Select `centers_num(n)` landmarks from the rows of `points`.
    ///
    /// Without a seed the sampling starts from point 0; with a seed the
    /// starting point is drawn from a `StdRng`. The count is clamped to
    /// `1..=n` for non-empty clouds.
    pub fn select<C, D>(
        points: ArrayView2<f64>,
        centers_num: &C,
        distance: &D,
        seed: Option<u64>,
    ) -> Self
    where
        C: Fn(usize) -> usize,
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        let n = points.nrows();
        if n == 0 {
            return Self {
                centers: Vec::new(),
                assignment: Vec::new(),
                radii: Vec::new(),
                members: Vec::new(),
            };
        }

        let requested = centers_num(n);
        let count = requested.clamp(1, n);
        if count != requested {
            warn!(requested, count, n, "landmark count out of range, clamped");
        }

        let start = match seed {
            Some(seed) => StdRng::seed_from_u64(seed).random_range(0..n),
            None => 0,
        };

        let mut centers = vec![start];
        let mut is_center = vec![false; n];
        is_center[start] = true;

        // Distance from each point to its nearest landmark so far
        let mut nearest: Vec<f64> = (0..n)
            .map(|i| distance(points.row(i), points.row(start)))
            .collect();
        let mut assignment = vec![0usize; n];

        while centers.len() < count {
            // Farthest non-landmark point; ties go to the lowest index
            let mut next = None;
            for i in (0..n).filter(|&i| !is_center[i]) {
                match next {
                    Some(best) if nearest[i] <= nearest[best] => {}
                    _ => next = Some(i),
                }
            }
            let Some(next) = next else {
                break;
            };

            let slot = centers.len();
            centers.push(next);
            is_center[next] = true;

            for i in 0..n {
                let d = distance(points.row(i), points.row(next));
                if d < nearest[i] || i == next {
                    nearest[i] = d;
                    assignment[i] = slot;
                }
            }
        }

        let mut radii = vec![0.0_f64; centers.len()];
        let mut members = vec![Vec::new(); centers.len()];
        for i in 0..n {
            let cell = assignment[i];
            radii[cell] = radii[cell].max(nearest[i]);
            members[cell].push(i);
        }

        let landmarks = Self {
            centers,
            assignment,
            radii,
            members,
        };
        debug!(
            count = landmarks.centers.len(),
            cover_radius = landmarks.cover_radius(),
            "landmarks selected"
        );
        landmarks
    }

    /// Landmark point indices in selection order.
    pub fn centers(&self) -> &[usize] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Landmark (point index) whose cell contains `point`.
    pub fn nearest_center(&self, point: usize) -> usize {
        self.centers[self.assignment[point]]
    }

    /// Largest cell radius: every point lies within this distance of a landmark.
    pub fn cover_radius(&self) -> f64 {
        self.radii.iter().cloned().fold(0.0, f64::max)
    }

    /// All points other than `anchor` within `epsilon` of it, ascending.
    ///
    /// `distance` must be a metric, and the same one the landmarks were
    /// selected with. Cells are skipped by the triangle inequality, so a
    /// function that violates it (squared Euclidean distance, for one) can
    /// silently lose true neighbors.
    pub fn neighbors_within<D>(
        &self,
        points: ArrayView2<f64>,
        anchor: usize,
        epsilon: f64,
        distance: &D,
    ) -> Vec<usize>
    where
        D: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        let origin = points.row(anchor);
        let mut neighbors = Vec::new();

        for (slot, &center) in self.centers.iter().enumerate() {
            let bound = (epsilon + self.radii[slot]) * (1.0 + PRUNE_SLACK);
            if distance(origin, points.row(center)) > bound {
                continue;
            }
            neighbors.extend(
                self.members[slot]
                    .iter()
                    .copied()
                    .filter(|&p| p != anchor && distance(origin, points.row(p)) <= epsilon),
            );
        }

        neighbors.sort_unstable();
        neighbors
    }
}
