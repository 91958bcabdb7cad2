//! 2-D points.

/// Largest coordinate magnitude the engine accepts.
///
/// `sqrt(f64::MAX) / 4`: any two coordinates within this bound differ by at
/// most `sqrt(f64::MAX) / 2`, so a squared distance stays below
/// `f64::MAX / 2` and never overflows to infinity.
pub const MAX_COORDINATE: f64 = 3.351_951_982_485_649e153;

/// An immutable `(x, y)` coordinate.
///
/// Points carry no identity of their own; the engine identifies them by the
/// index they were inserted at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both coordinates lie within `±MAX_COORDINATE`.
    ///
    /// False for NaN and infinities too.
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.x.abs() <= MAX_COORDINATE && self.y.abs() <= MAX_COORDINATE
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_not_rooted() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(squared_distance(&a, &b), 25.0);
        assert_eq!(squared_distance(&b, &a), 25.0);
    }

    #[test]
    fn conversions() {
        assert_eq!(Point::from((1, -2)), Point::new(1.0, -2.0));
        assert_eq!(Point::from([0.5, 2.0]), Point::new(0.5, 2.0));
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn range_bound_keeps_distances_finite() {
        let far = Point::new(MAX_COORDINATE, MAX_COORDINATE);
        let near = Point::new(-MAX_COORDINATE, -MAX_COORDINATE);
        assert!(far.is_in_range() && near.is_in_range());
        assert!(squared_distance(&far, &near).is_finite());

        assert!(!Point::new(1e300, 0.0).is_in_range());
        assert!(!Point::new(0.0, f64::NAN).is_in_range());
        assert!(!Point::new(f64::NEG_INFINITY, 0.0).is_in_range());
    }
}
