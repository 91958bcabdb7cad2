use core::fmt;

/// Result alias for `clusterpad`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering engine.
///
/// Every variant is a usage error: the computation is deterministic, so
/// nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The engine was constructed from zero points.
    EmptyInput,

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of points in the distance graph.
        n_items: usize,
    },

    /// A point was added (or a partition requested) before any `solve`.
    NoPriorSolve,

    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate {
        /// Index the offending point has (or would have had).
        index: usize,
    },

    /// A coordinate exceeded `MAX_COORDINATE` in magnitude; its squared
    /// distances could overflow.
    CoordinateOutOfRange {
        /// Index the offending point has (or would have had).
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::NoPriorSolve => write!(f, "no clusters yet: call solve first"),
            Error::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Error::CoordinateOutOfRange { index } => {
                write!(f, "point {index} has a coordinate too large to square")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_counts() {
        let e = Error::InvalidClusterCount {
            requested: 5,
            n_items: 3,
        };
        assert_eq!(e.to_string(), "cannot create 5 clusters from 3 items");
        assert!(Error::NonFiniteCoordinate { index: 7 }
            .to_string()
            .contains('7'));
    }
}
