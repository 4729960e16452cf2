//! Clustering by Compatible Local Topology
//!
//! Two points are linked when the edge between them has trivial local
//! homology, i.e. the edge lies inside a single sheet. Clusters are the
//! connected components of this compatibility graph, found with
//! union-find. An edge through a singular junction never links its
//! endpoints on its own; they can still meet through another path.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::topology::LocalHomologies;

/// Disjoint-set forest with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, x: usize, y: usize) {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }
}

/// Partition `0..n_points` into clusters of compatible local topology.
///
/// Clusters are ordered by their smallest member; a point with no
/// compatible edge forms its own cluster.
pub fn cluster(n_points: usize, homologies: &LocalHomologies) -> Vec<BTreeSet<usize>> {
    let mut forest = UnionFind::new(n_points);

    let mut blocked = 0;
    for (edge, betti) in &homologies.edge_homologies {
        let (u, w) = edge.endpoints();
        if betti.is_trivial() {
            forest.union(u, w);
        } else {
            blocked += 1;
        }
    }

    let mut components: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for v in 0..n_points {
        let root = forest.find(v);
        components.entry(root).or_default().insert(v);
    }

    let mut clusters: Vec<BTreeSet<usize>> = components.into_values().collect();
    clusters.sort_by_key(|members| members.first().copied());

    debug!(clusters = clusters.len(), blocked_edges = blocked, "clustering done");
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{BettiNumbers, Edge};

    fn homologies(edges: &[((usize, usize), Vec<usize>)]) -> LocalHomologies {
        LocalHomologies {
            vertex_homologies: BTreeMap::new(),
            edge_homologies: edges
                .iter()
                .map(|(pair, betti)| (Edge::from(*pair), BettiNumbers::new(betti.clone())))
                .collect(),
        }
    }

    #[test]
    fn test_singular_edge_splits() {
        let h = homologies(&[((0, 1), vec![0, 0, 2]), ((1, 2), vec![0, 0, 0])]);

        let clusters = cluster(3, &h);

        assert_eq!(clusters, vec![BTreeSet::from([0]), BTreeSet::from([1, 2])]);
    }

    #[test]
    fn test_alternative_path_joins() {
        let h = homologies(&[
            ((0, 1), vec![0, 1]),
            ((0, 2), vec![0, 0]),
            ((1, 2), vec![0, 0]),
        ]);

        assert_eq!(cluster(3, &h), vec![BTreeSet::from([0, 1, 2])]);
    }

    #[test]
    fn test_isolated_points_and_order() {
        let h = homologies(&[((3, 1), vec![0])]);

        let clusters = cluster(4, &h);

        assert_eq!(
            clusters,
            vec![
                BTreeSet::from([0]),
                BTreeSet::from([1, 3]),
                BTreeSet::from([2]),
            ]
        );
    }

    #[test]
    fn test_no_points() {
        assert!(cluster(0, &LocalHomologies::default()).is_empty());
    }
}
