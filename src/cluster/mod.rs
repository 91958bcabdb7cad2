//! Greedy agglomerative clustering of 2-D points.
//!
//! ## The Merge Rule
//!
//! Every point starts as its own cluster. The lightest remaining edge of the
//! complete distance graph is taken next:
//!
//! | Endpoints | Action |
//! |-----------|--------|
//! | Same cluster | Drop the edge |
//! | Different clusters | Merge, drop the edge |
//!
//! Stop once `k` clusters remain. Because an edge between two clusters is
//! only ever the closest pair of their members, this behaves like
//! single linkage: long chains of near points end up together.
//!
//! ## Incremental Points
//!
//! After a solve, [`ClusterEngine::add_point`] places a new point into the
//! cluster of its nearest member. Existing assignments never change; call
//! [`ClusterEngine::rebuild`] and solve again to re-cluster from scratch.
//!
//! ## Usage
//!
//! ```rust
//! use clusterpad::cluster::ClusterEngine;
//!
//! let mut engine = ClusterEngine::new([(0, 0), (1, 0), (10, 10), (11, 10)]).unwrap();
//! let partition = engine.solve(2).unwrap();
//! assert_eq!(partition.len(), 2);
//!
//! let partition = engine.add_point((0, 1)).unwrap();
//! assert_eq!(partition.get(0).unwrap().len(), 3);
//! ```

mod disjoint_set;
mod engine;
mod greedy;
mod partition;
mod traits;

pub use engine::{ClusterEngine, MergeStep};
pub use greedy::GreedyMerge;
pub use partition::Partition;
pub use traits::Clustering;
