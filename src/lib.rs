//! # clusterpad
//!
//! Greedy minimum-edge clustering for small, interactively placed 2-D point
//! sets.
//!
//! Points go into a complete distance graph; the lightest edges are merged
//! until `k` clusters remain. New points can then be dropped onto the
//! nearest cluster without re-solving.
//!
//! ```rust
//! use clusterpad::{ClusterEngine, Point};
//!
//! let mut engine = ClusterEngine::new([(0, 0), (1, 0), (10, 10), (11, 10)])?;
//! let partition = engine.solve(2)?;
//! assert_eq!(partition.len(), 2);
//!
//! let partition = engine.add_point((0, 1))?;
//! let near_origin = partition.cluster_of(&Point::new(0.0, 0.0)).unwrap();
//! assert!(partition.clusters()[near_origin].contains(&Point::new(0.0, 1.0)));
//! # Ok::<(), clusterpad::Error>(())
//! ```
//!
//! The engine is built for a few hundred points: construction is `O(n²)` in
//! time and memory.

pub mod cluster;
/// Error types used across `clusterpad`.
pub mod error;
pub mod graph;
#[cfg(feature = "palette")]
pub mod palette;


pub use cluster::{ClusterEngine, Clustering, GreedyMerge, MergeStep, Partition};
pub use error::{Error, Result};
pub use graph::{squared_distance, Edge, EdgeList, Point};

#[cfg(feature = "palette")]
pub use palette::{Palette, Rgb};
