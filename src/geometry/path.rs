use crate::math::point_2d::points_equal;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// An ordered sequence of points forming a polyline.
///
/// A path is "closed" when its last point repeats its first. Paths with
/// fewer than 3 points are degenerate and are never rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point2>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from existing points.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point2> {
        self.points.get(index)
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns `true` if the path has more than one point and its last point
    /// coincides with the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => points_equal(first, last),
            _ => false,
        }
    }

    /// Returns `true` for paths that must not be rendered.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Appends a copy of the first point unless the path is already closed.
    pub fn close(&mut self) {
        if self.points.len() > 1 && !self.is_closed() {
            self.points.push(self.points[0]);
        }
    }

    /// Removes the duplicated closing point, if any.
    pub fn unclose(&mut self) {
        if self.is_closed() {
            self.points.pop();
        }
    }

    /// Returns the points without a duplicated closing point.
    #[must_use]
    pub fn open_points(&self) -> &[Point2] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Signed area enclosed by the path, treating it as closed.
    ///
    /// Positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(self.open_points())
    }
}

impl FromIterator<Point2> for Path {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Path {
        Path::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ])
    }

    #[test]
    fn close_appends_first_point_once() {
        let mut path = triangle();
        path.close();
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
        path.close();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn unclose_removes_closing_point_once() {
        let mut path = triangle();
        path.close();
        path.unclose();
        assert_eq!(path.len(), 3);
        path.unclose();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn close_unclose_alternation_is_stable() {
        let mut path = triangle();
        for _ in 0..3 {
            path.unclose();
            path.close();
        }
        assert_eq!(path.len(), 4);
        for _ in 0..3 {
            path.close();
            path.unclose();
        }
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn single_point_never_closes() {
        let mut path = Path::from_points(vec![Point2::new(1.0, 1.0)]);
        path.close();
        assert_eq!(path.len(), 1);
        assert!(!path.is_closed());
        assert!(path.is_degenerate());
    }

    #[test]
    fn accessors() {
        let path = triangle();
        assert_eq!(path.first().unwrap(), &Point2::new(0.0, 0.0));
        assert_eq!(path.last().unwrap(), &Point2::new(0.0, 3.0));
        assert_eq!(path.get(1).unwrap(), &Point2::new(4.0, 0.0));
        assert!(path.get(3).is_none());
        assert!(Path::new().first().is_none());
    }

    #[test]
    fn signed_area_ignores_closing_point() {
        let mut path = triangle();
        assert_abs_diff_eq!(path.signed_area(), 6.0);
        path.close();
        assert_eq!(path.open_points().len(), 3);
        assert_abs_diff_eq!(path.signed_area(), 6.0);
    }
}
