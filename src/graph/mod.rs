//! Points and the complete distance graph over them.
//!
//! Every pair of points known at construction time gets one [`Edge`],
//! weighted by **squared** Euclidean distance:
//!
//! ```text
//! w(p, q) = (x_p - x_q)² + (y_p - y_q)²
//! ```
//!
//! Squaring is monotone on non-negative values, so ordering edges by `w`
//! is the same as ordering them by true distance, without the `sqrt`.
//!
//! # Cost
//!
//! The graph is complete: `n(n-1)/2` edges for `n` points. That is fine for
//! the few hundred points a person clicks onto a canvas, and the wrong tool
//! for bulk data.

mod edge;
mod point;

pub use edge::{Edge, EdgeList};
pub use point::{squared_distance, Point, MAX_COORDINATE};
