mod contour;
mod prune;
mod segment_set;
mod split;
mod stitch;

use std::time::Instant;

pub use contour::PROBE_OFFSET;
pub use segment_set::SegmentSet;

use crate::geometry::{LineSegment, Path, Rectangle};

/// Computes the border outline for a boundary rectangle and a set of
/// interior cutouts.
///
/// The rectangle list always holds the boundary at index 0, followed by the
/// cutouts supplied through [`BorderState::set_widget_rectangles`]. Every
/// call to [`BorderState::compute_border_path`] rebuilds the outline from
/// the current rectangles only; the segment set is kept between calls purely
/// to reuse its buffers.
#[derive(Debug)]
pub struct BorderState {
    rectangles: Vec<Rectangle>,
    segments: SegmentSet,
}

impl Default for BorderState {
    fn default() -> Self {
        Self::new()
    }
}

impl BorderState {
    /// Creates a state with a zero-size boundary, which yields an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rectangles: vec![Rectangle::filled_outward(0.0, 0.0, 0.0, 0.0)],
            segments: SegmentSet::new(),
        }
    }

    /// Replaces the boundary rectangle, keeping the cutouts.
    pub fn set_border_rect(&mut self, rect: Rectangle) {
        match self.rectangles.first_mut() {
            Some(first) => *first = rect,
            None => self.rectangles.push(rect),
        }
    }

    /// Replaces every cutout, keeping the boundary at index 0.
    pub fn set_widget_rectangles<I>(&mut self, rectangles: I)
    where
        I: IntoIterator<Item = Rectangle>,
    {
        self.rectangles.truncate(1);
        self.rectangles.extend(rectangles);
    }

    #[must_use]
    pub fn border_rect(&self) -> &Rectangle {
        &self.rectangles[0]
    }

    #[must_use]
    pub fn widget_rectangles(&self) -> &[Rectangle] {
        &self.rectangles[1..]
    }

    /// All rectangles in processing order, boundary first.
    #[must_use]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Contour segments left by the last computation, for debug drawing.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        self.segments.segments()
    }

    /// Runs the full pipeline for the current rectangles.
    ///
    /// Returns the stitched outline, which ends on its first point when the
    /// outline forms a loop. Returns an empty path when nothing is left to
    /// draw and a partial path when the segments do not form one chain.
    pub fn compute_border_path(&mut self) -> Path {
        let started = Instant::now();
        self.segments.reset();

        for rect in &self.rectangles {
            self.segments.add_rectangle(rect);
        }
        self.segments.split_at_intersections();

        for rect in &self.rectangles {
            self.segments.prune_segments(rect);
        }
        self.segments.retain_contour(&self.rectangles);

        let path = self.segments.generate_path();
        tracing::debug!(
            rectangles = self.rectangles.len(),
            segments = self.segments.len(),
            points = path.len(),
            elapsed = ?started.elapsed(),
            "computed border path"
        );
        path
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polarity;
    use crate::math::point_2d::points_equal;
    use crate::math::Point2;

    #[test]
    fn fresh_state_computes_empty_path() {
        let mut state = BorderState::new();
        assert_eq!(state.rectangles().len(), 1);
        assert!(state.compute_border_path().is_empty());
    }

    #[test]
    fn boundary_stays_first() {
        let mut state = BorderState::new();
        let cutout = Rectangle::filled_inward(1.0, 1.0, 2.0, 2.0);
        state.set_widget_rectangles([cutout, cutout]);
        state.set_border_rect(Rectangle::filled_outward(0.0, 0.0, 10.0, 10.0));
        assert_eq!(state.rectangles().len(), 3);
        assert_eq!(state.border_rect().polarity, Polarity::FilledOutward);

        state.set_widget_rectangles(Vec::new());
        assert_eq!(state.rectangles().len(), 1);
        assert!(state.widget_rectangles().is_empty());
        assert_eq!(state.border_rect().max(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn boundary_only_yields_its_corners() {
        let mut state = BorderState::new();
        let border = Rectangle::filled_outward(0.0, 0.0, 100.0, 100.0);
        state.set_border_rect(border);
        let path = state.compute_border_path();

        assert_eq!(path.len(), 5);
        assert!(path.is_closed());
        for (p, corner) in path.points().iter().zip(border.corners()) {
            assert!(points_equal(p, &corner), "{p:?} != {corner:?}");
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let mut state = BorderState::new();
        state.set_border_rect(Rectangle::filled_outward(0.0, 0.0, 100.0, 100.0));
        state.set_widget_rectangles([Rectangle::filled_inward(40.0, -10.0, 60.0, 20.0)]);
        let first = state.compute_border_path();
        let second = state.compute_border_path();
        assert_eq!(first, second);
    }
}
