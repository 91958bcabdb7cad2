//! One-shot greedy merge clustering behind the [`Clustering`] trait.

use super::engine::ClusterEngine;
use super::traits::Clustering;
use crate::error::Result;
use crate::graph::Point;

/// Greedy minimum-edge clustering into a fixed number of groups.
///
/// A thin wrapper for callers that want labels and no incremental state.
/// Use [`ClusterEngine`] directly to keep adding points afterwards.
#[derive(Debug, Clone, Copy)]
pub struct GreedyMerge {
    /// Number of clusters to produce.
    k: usize,
}

impl GreedyMerge {
    /// Create a clusterer producing `k` clusters.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Fit and keep the engine, for callers that will add points later.
    pub fn fit(&self, points: &[Point]) -> Result<ClusterEngine> {
        let mut engine = ClusterEngine::new(points.iter().copied())?;
        engine.solve(self.k)?;
        Ok(engine)
    }
}

impl Clustering for GreedyMerge {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        self.fit(points)?.labels()
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_greedy_basic() {
        let data = vec![
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.1),
            Point::new(10.0, 10.0),
            Point::new(10.1, 10.1),
        ];

        let labels = GreedyMerge::new(2).fit_predict(&data).unwrap();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_greedy_chains() {
        // Single-linkage-style merging follows the chain; a centroid method
        // would split this line in the middle.
        let data: Vec<Point> = (0..6)
            .map(|i| Point::new(f64::from(i), 0.0))
            .chain(std::iter::once(Point::new(40.0, 0.0)))
            .collect();

        let labels = GreedyMerge::new(2).fit_predict(&data).unwrap();
        assert!(labels[..6].iter().all(|&l| l == labels[0]));
        assert_ne!(labels[0], labels[6]);
    }

    #[test]
    fn test_greedy_errors() {
        assert_eq!(GreedyMerge::new(1).fit_predict(&[]), Err(Error::EmptyInput));
        assert_eq!(
            GreedyMerge::new(3).with_k(4).fit_predict(&[Point::default(); 2]),
            Err(Error::InvalidClusterCount {
                requested: 4,
                n_items: 2
            })
        );
        assert_eq!(GreedyMerge::new(7).n_clusters(), 7);
    }
}
