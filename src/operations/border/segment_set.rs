use crate::geometry::{LineSegment, Path, Rectangle};
use crate::math::Point2;

use super::{contour, prune, split, stitch};

/// Working set of border segments, reused from frame to frame.
///
/// Holds the segments plus the scratch buffers of every pipeline stage so
/// steady-state frames do not reallocate. [`SegmentSet::reset`] must run
/// before each rebuild; nothing from a previous frame survives it.
#[derive(Debug, Default)]
pub struct SegmentSet {
    segments: Vec<LineSegment>,
    rebuilt: Vec<LineSegment>,
    split_points: Vec<Vec<Point2>>,
    visited: Vec<bool>,
}

impl SegmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the 4 perimeter segments of `rect` in corner order
    /// (TL→TR, TR→BR, BR→BL, BL→TL). No deduplication happens here.
    pub fn add_rectangle(&mut self, rect: &Rectangle) {
        let [tl, tr, br, bl] = rect.corners();
        self.segments.extend_from_slice(&[
            LineSegment::new(tl, tr),
            LineSegment::new(tr, br),
            LineSegment::new(br, bl),
            LineSegment::new(bl, tl),
        ]);
    }

    /// Clears all segments and scratch state.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.rebuilt.clear();
        self.visited.clear();
        for points in &mut self.split_points {
            points.clear();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Splits every segment at its intersections with the others so the set
    /// forms a planar arrangement.
    pub fn split_at_intersections(&mut self) {
        split::split_into(&self.segments, &mut self.split_points, &mut self.rebuilt);
        std::mem::swap(&mut self.segments, &mut self.rebuilt);
        self.rebuilt.clear();
    }

    /// Removes segments hidden by `rect` according to its polarity.
    pub fn prune_segments(&mut self, rect: &Rectangle) {
        prune::prune(&mut self.segments, rect);
    }

    /// Keeps only segments that separate solid from open space given the
    /// full rectangle list, dropping duplicates.
    pub fn retain_contour(&mut self, rectangles: &[Rectangle]) {
        contour::retain_contour(&mut self.segments, rectangles);
    }

    /// Stitches the remaining segments into one path starting from the
    /// first segment. The working set itself is left untouched.
    pub fn generate_path(&mut self) -> Path {
        stitch::generate_path(&self.segments, &mut self.visited)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn add_rectangle_appends_perimeter_in_corner_order() {
        let mut set = SegmentSet::new();
        let rect = Rectangle::filled_outward(0.0, 0.0, 10.0, 5.0);
        set.add_rectangle(&rect);
        assert_eq!(set.len(), 4);

        let corners = rect.corners();
        for (i, seg) in set.segments().iter().enumerate() {
            assert_eq!(seg.start, corners[i]);
            assert_eq!(seg.end, corners[(i + 1) % 4]);
        }
    }

    #[test]
    fn overlapping_rectangles_are_not_deduplicated() {
        let mut set = SegmentSet::new();
        let rect = Rectangle::filled_inward(0.0, 0.0, 1.0, 1.0);
        set.add_rectangle(&rect);
        set.add_rectangle(&rect);
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn reset_clears_previous_frame() {
        let mut set = SegmentSet::new();
        set.add_rectangle(&Rectangle::filled_outward(0.0, 0.0, 10.0, 10.0));
        set.add_rectangle(&Rectangle::filled_inward(5.0, -5.0, 8.0, 5.0));
        set.split_at_intersections();
        assert!(set.len() > 8);

        set.reset();
        assert!(set.is_empty());
        assert!(set.generate_path().is_empty());

        set.add_rectangle(&Rectangle::filled_outward(0.0, 0.0, 1.0, 1.0));
        set.split_at_intersections();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn zero_size_rectangle_vanishes_after_split() {
        let mut set = SegmentSet::new();
        set.add_rectangle(&Rectangle::filled_outward(0.0, 0.0, 0.0, 0.0));
        set.split_at_intersections();
        assert!(set.is_empty());
    }
}
