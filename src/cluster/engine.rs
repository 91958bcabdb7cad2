//! The clustering engine: greedy minimum-edge merging plus incremental
//! nearest-member assignment.
//!
//! # Algorithm
//!
//! `solve(k)` starts with one singleton cluster per point and repeatedly
//! takes the lightest remaining edge of the complete graph:
//!
//! - both endpoints already share a cluster → drop the edge
//! - otherwise → the start vertex's cluster is appended onto the end
//!   vertex's cluster, and the emptied cluster leaves the cluster set
//!
//! until `k` clusters remain. This is single-linkage-style agglomeration
//! driven by the globally lightest edge. It is **not** centroid k-means;
//! there are no centroids and nothing is iterated to convergence.
//!
//! Ties go to the edge built first (see [`EdgeList::by_weight`]), so the
//! result is fully deterministic.
//!
//! `add_point(p)` never re-clusters. The new point joins whichever cluster
//! owns its nearest existing member and stays there.
//!
//! # State
//!
//! ```text
//! new(points) ──► Uninitialized ──solve(k)──► Clustered ──add_point(p)──┐
//!                      ▲                          ▲                      │
//!                      └──────── rebuild() ───────┴──────────────────────┘
//! ```

use super::disjoint_set::DisjointSet;
use super::partition::Partition;
use crate::error::{Error, Result};
use crate::graph::{squared_distance, Edge, EdgeList, Point};
use tracing::{debug, trace};

/// One merge performed by [`ClusterEngine::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeStep {
    /// Start vertex of the edge; its cluster was absorbed.
    pub start: usize,
    /// End vertex of the edge; its cluster absorbed the other.
    pub end: usize,
    /// Weight (squared distance) of the edge.
    pub weight: f64,
}

/// Owns the points, their distance graph and the current partition.
///
/// Not synchronized: mutating calls take `&mut self`, and callers sharing
/// an engine must serialize access themselves.
#[derive(Debug, Clone)]
pub struct ClusterEngine {
    /// Point store; index = insertion order.
    points: Vec<Point>,
    /// Complete graph over the first `edges.n_vertices()` points.
    edges: EdgeList,
    /// Cluster set: point indices per cluster. Empty until the first solve.
    clusters: Vec<Vec<usize>>,
    /// Merges performed by the last solve.
    merges: Vec<MergeStep>,
}

impl ClusterEngine {
    /// Build the point store and the complete edge set.
    ///
    /// Time and memory are `O(n²)` in the number of points.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        for (index, p) in points.iter().enumerate() {
            check_coordinates(p, index)?;
        }

        let edges = EdgeList::complete(&points);
        debug!(
            n_points = points.len(),
            n_edges = edges.len(),
            "built distance graph"
        );

        Ok(Self {
            points,
            edges,
            clusters: Vec::new(),
            merges: Vec::new(),
        })
    }

    /// Partition all known points into `k` clusters.
    ///
    /// `k` must lie in `1..=n`, where `n` is the number of points the
    /// distance graph was built over. Points added afterwards through
    /// [`add_point`](Self::add_point) are not part of the graph; they are
    /// re-assigned to their nearest cluster, in insertion order, once the
    /// merging is done.
    ///
    /// Every call starts again from singletons over the full edge set, so
    /// calling `solve` twice with the same `k` gives the same partition.
    pub fn solve(&mut self, k: usize) -> Result<Partition> {
        let n = self.edges.n_vertices();
        if k == 0 || k > n {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: n,
            });
        }

        // Clusters live in "slots" named after the point they started from.
        // A slot keeps its position when it absorbs another, so survivors
        // come out in the same relative order as the initial singletons.
        let mut sets = DisjointSet::new(n);
        let mut slots: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut slot_of_root: Vec<usize> = (0..n).collect();
        let mut live = n;
        let mut merges = Vec::with_capacity(n - k);

        for edge in self.edges.by_weight() {
            if live <= k {
                break;
            }
            let root_start = sets.find(edge.start);
            let root_end = sets.find(edge.end);
            if root_start == root_end {
                continue;
            }

            let absorbed = slot_of_root[root_start];
            let into = slot_of_root[root_end];
            let moved = std::mem::take(&mut slots[absorbed]);
            slots[into].extend(moved);

            let root = sets.union_roots(root_end, root_start);
            slot_of_root[root] = into;
            live -= 1;

            trace!(
                start = edge.start,
                end = edge.end,
                weight = edge.weight,
                remaining = live,
                "merged clusters"
            );
            merges.push(MergeStep {
                start: edge.start,
                end: edge.end,
                weight: edge.weight,
            });
        }

        self.clusters = slots.into_iter().filter(|s| !s.is_empty()).collect();
        self.merges = merges;

        for index in n..self.points.len() {
            let p = self.points[index];
            if let Some(c) = self.nearest_cluster(&p) {
                self.clusters[c].push(index);
            }
        }

        debug!(
            k,
            n_clusters = self.clusters.len(),
            n_merges = self.merges.len(),
            n_points = self.points.len(),
            "solved"
        );
        Ok(self.partition_unchecked())
    }

    /// Add a point to the cluster that owns its nearest member.
    ///
    /// The point gets the next index. No cluster is created, removed or
    /// merged, and no previously placed point moves. Costs one distance per
    /// point already assigned.
    pub fn add_point(&mut self, p: impl Into<Point>) -> Result<Partition> {
        let p = p.into();
        let index = self.points.len();
        check_coordinates(&p, index)?;
        let target = self.nearest_cluster(&p).ok_or(Error::NoPriorSolve)?;

        self.points.push(p);
        self.clusters[target].push(index);

        debug!(index, cluster = target, "assigned point");
        Ok(self.partition_unchecked())
    }

    /// Discard the partition and rebuild the distance graph over every
    /// known point, including those added incrementally.
    pub fn rebuild(&mut self) {
        self.edges = EdgeList::complete(&self.points);
        self.clusters.clear();
        self.merges.clear();
        debug!(
            n_points = self.points.len(),
            n_edges = self.edges.len(),
            "rebuilt distance graph"
        );
    }

    /// Position of the cluster owning the member nearest to `p`.
    ///
    /// Scans clusters in order and members in order; only a strictly
    /// smaller distance replaces the current best.
    fn nearest_cluster(&self, p: &Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (c, members) in self.clusters.iter().enumerate() {
            for &id in members {
                let d = squared_distance(&self.points[id], p);
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((c, d));
                }
            }
        }
        best.map(|(c, _)| c)
    }

    fn partition_unchecked(&self) -> Partition {
        Partition::resolve(&self.clusters, &self.points)
    }

    /// Current partition.
    pub fn partition(&self) -> Result<Partition> {
        if self.clusters.is_empty() {
            return Err(Error::NoPriorSolve);
        }
        Ok(self.partition_unchecked())
    }

    /// Cluster position of every known point, indexed by point index.
    pub fn labels(&self) -> Result<Vec<usize>> {
        if self.clusters.is_empty() {
            return Err(Error::NoPriorSolve);
        }
        let mut labels = vec![0usize; self.points.len()];
        for (c, members) in self.clusters.iter().enumerate() {
            for &id in members {
                labels[id] = c;
            }
        }
        Ok(labels)
    }

    /// All known points, by index.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of known points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: an engine holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges of the distance graph, in construction order.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Number of edges in the distance graph.
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of points the distance graph covers; the upper bound for `k`.
    pub fn n_graph_points(&self) -> usize {
        self.edges.n_vertices()
    }

    /// Whether a partition exists.
    pub fn is_clustered(&self) -> bool {
        !self.clusters.is_empty()
    }

    /// Cluster set as point indices.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Merges performed by the last [`solve`](Self::solve), in order.
    pub fn merges(&self) -> &[MergeStep] {
        &self.merges
    }
}

/// Reject coordinates the edge weights cannot order.
fn check_coordinates(p: &Point, index: usize) -> Result<()> {
    if !p.is_finite() {
        return Err(Error::NonFiniteCoordinate { index });
    }
    if !p.is_in_range() {
        return Err(Error::CoordinateOutOfRange { index });
    }
    Ok(())
}
