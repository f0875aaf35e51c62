use crate::math::point_2d::points_equal;
use crate::math::{Point2, Vector2};

/// A straight segment between two points.
///
/// Conceptually undirected. Deliberately has no value equality: several
/// segments with identical endpoints can coexist in a working set, so
/// membership is always tracked by index.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `true` if either endpoint equals `p` within tolerance.
    #[must_use]
    pub fn touches(&self, p: &Point2) -> bool {
        points_equal(&self.start, p) || points_equal(&self.end, p)
    }

    /// Returns the endpoint opposite to `p`, or `None` if `p` is not an
    /// endpoint.
    #[must_use]
    pub fn other_end(&self, p: &Point2) -> Option<Point2> {
        if points_equal(&self.start, p) {
            Some(self.end)
        } else if points_equal(&self.end, p) {
            Some(self.start)
        } else {
            None
        }
    }
}
