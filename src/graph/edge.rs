//! Weighted edges of the complete graph.

use super::point::{squared_distance, Point};

/// An unordered pair of point indices with a precomputed weight.
///
/// `start < end` always holds for edges built by [`EdgeList::complete`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Lower point index.
    pub start: usize,
    /// Higher point index.
    pub end: usize,
    /// Squared Euclidean distance between the two points.
    pub weight: f64,
}

/// Every edge among a fixed set of points, in construction order.
///
/// Construction order is row-major over the upper triangle:
/// `(0,1), (0,2), …, (0,n-1), (1,2), …`. Ties between equal weights are
/// broken by this order, so it is part of the observable behaviour.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
    n_vertices: usize,
}

impl EdgeList {
    /// Build the complete graph over `points`.
    pub fn complete(points: &[Point]) -> Self {
        let n = points.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (p, a) in points.iter().enumerate() {
            for (q, b) in points.iter().enumerate().skip(p + 1) {
                edges.push(Edge {
                    start: p,
                    end: q,
                    weight: squared_distance(a, b),
                });
            }
        }
        Self {
            edges,
            n_vertices: n,
        }
    }

    /// Number of vertices the graph was built over.
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` when there are no edges (zero or one vertex).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in construction order.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges in the order a repeated "take the first minimum" scan would
    /// visit them.
    ///
    /// A stable sort by weight gives exactly that order: among equal
    /// weights, the earlier-constructed edge comes first. For points within
    /// [`MAX_COORDINATE`](super::MAX_COORDINATE) every weight is finite, so
    /// `total_cmp` agrees with `<`.
    pub fn by_weight(&self) -> Vec<&Edge> {
        let mut order: Vec<&Edge> = self.edges.iter().collect();
        order.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(11.0, 10.0),
        ]
    }

    #[test]
    fn complete_graph_shape() {
        let edges = EdgeList::complete(&square());
        assert_eq!(edges.n_vertices(), 4);
        assert_eq!(edges.len(), 6);

        let pairs: Vec<(usize, usize)> = edges
            .as_slice()
            .iter()
            .map(|e| (e.start, e.end))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(edges.as_slice().iter().all(|e| e.start < e.end));
    }

    #[test]
    fn single_point_has_no_edges() {
        let edges = EdgeList::complete(&[Point::new(3.0, 3.0)]);
        assert!(edges.is_empty());
        assert_eq!(edges.n_vertices(), 1);
    }

    #[test]
    fn by_weight_is_stable_on_ties() {
        // (0,1) and (2,3) both weigh 1; (0,1) was built first.
        let edges = EdgeList::complete(&square());
        let order = edges.by_weight();
        assert_eq!((order[0].start, order[0].end), (0, 1));
        assert_eq!((order[1].start, order[1].end), (2, 3));
        assert!(order.windows(2).all(|w| w[0].weight <= w[1].weight));
    }
}
