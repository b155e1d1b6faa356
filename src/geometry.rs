//! Geometric primitives for stroke processing.
//!
//! This module provides:
//! - [`Point`]: the 2-D value type strokes are made of
//! - [`distance`], [`centroid`], [`path_length`]: the pure measures the
//!   pipeline is built from
//! - [`BoundingBox`]: axis-aligned extent of a point sequence

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D point. Plain value type with no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` toward `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Euclidean distance between two points.
#[inline]
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Arithmetic mean of a point sequence.
///
/// `points` must be non-empty; every caller in the pipeline operates on
/// sequences of at least [`MIN_SAMPLES`](crate::config::MIN_SAMPLES) points.
#[must_use]
pub fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Total arc length of the polyline through `points`.
///
/// Zero for sequences of fewer than two points or of coincident points.
#[must_use]
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Axis-aligned bounding box of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Sweep a non-empty point sequence for its extent.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut bb = Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            bb.min_x = bb.min_x.min(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_x = bb.max_x.max(p.x);
            bb.max_y = bb.max_y.max(p.y);
        }
        bb
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        assert_relative_eq!(
            distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            5.0
        );
        assert_relative_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, -2.0);
    }

    #[test]
    fn test_centroid() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let c = centroid(&points);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn test_path_length() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 104.0),
        ];
        assert_relative_eq!(path_length(&points), 105.0);

        // Degenerate cases collapse to zero, never NaN.
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(1.0, 2.0)]), 0.0);
        assert_eq!(
            path_length(&[Point::new(1.0, 2.0), Point::new(1.0, 2.0)]),
            0.0
        );
    }

    #[test]
    fn test_bounding_box() {
        let points = [
            Point::new(-1.0, 5.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 7.0),
        ];
        let bb = BoundingBox::from_points(&points);
        assert_relative_eq!(bb.min_x, -1.0);
        assert_relative_eq!(bb.max_x, 4.0);
        assert_relative_eq!(bb.width(), 5.0);
        assert_relative_eq!(bb.height(), 5.0);
    }

    #[test]
    fn test_bounding_box_single_point() {
        let bb = BoundingBox::from_points(&[Point::new(3.0, 3.0)]);
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
    }

    #[test]
    fn test_point_tuple_conversions() {
        let p: Point = (2.5, -1.5).into();
        assert_eq!(p, Point::new(2.5, -1.5));
        let t: (f64, f64) = p.into();
        assert_eq!(t, (2.5, -1.5));
    }
}
