//! Partitions resolved to coordinates.

use crate::graph::Point;

/// Clusters of points, in cluster-set order.
///
/// The order is stable across calls on the same engine, so a consumer can
/// key colours or legends on the cluster's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    clusters: Vec<Vec<Point>>,
}

impl Partition {
    /// Resolve clusters of point indices through `points`.
    pub(crate) fn resolve(clusters: &[Vec<usize>], points: &[Point]) -> Self {
        Self {
            clusters: clusters
                .iter()
                .map(|ids| ids.iter().map(|&id| points[id]).collect())
                .collect(),
        }
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// `true` when there are no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of points across all clusters.
    pub fn n_points(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    /// Clusters as slices of points.
    pub fn clusters(&self) -> &[Vec<Point>] {
        &self.clusters
    }

    /// Cluster at position `i`.
    pub fn get(&self, i: usize) -> Option<&[Point]> {
        self.clusters.get(i).map(Vec::as_slice)
    }

    /// Position of the first cluster holding a point equal to `p`.
    pub fn cluster_of(&self, p: &Point) -> Option<usize> {
        self.clusters.iter().position(|c| c.contains(p))
    }

    /// Iterate over clusters.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Point>> {
        self.clusters.iter()
    }

    /// Take the clusters out.
    pub fn into_inner(self) -> Vec<Vec<Point>> {
        self.clusters
    }
}

impl IntoIterator for Partition {
    type Item = Vec<Point>;
    type IntoIter = std::vec::IntoIter<Vec<Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Vec<Point>;
    type IntoIter = std::slice::Iter<'a, Vec<Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        let p = Partition::resolve(&[vec![2, 0], vec![1]], &points);

        assert_eq!(p.len(), 2);
        assert_eq!(p.n_points(), 3);
        assert_eq!(p.get(0), Some(&[points[2], points[0]][..]));
        assert_eq!(p.cluster_of(&points[1]), Some(1));
        assert_eq!(p.cluster_of(&Point::new(9.0, 9.0)), None);
    }
}
