use crate::geometry::LineSegment;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::point_2d::points_equal;
use crate::math::Point2;

/// Splits every segment at its intersections with every other segment.
///
/// `split_points` and `out` are caller-owned buffers; `out` receives the new
/// arrangement. Each original segment becomes the chain through its
/// endpoints and recorded intersections, ordered by distance from its start
/// with tolerance-equal neighbours collapsed, so zero-length segments drop
/// out entirely.
pub(super) fn split_into(
    segments: &[LineSegment],
    split_points: &mut Vec<Vec<Point2>>,
    out: &mut Vec<LineSegment>,
) {
    out.clear();
    let n = segments.len();
    if n == 0 {
        return;
    }

    if split_points.len() < n {
        split_points.resize_with(n, Vec::new);
    }
    for (points, seg) in split_points.iter_mut().zip(segments) {
        points.clear();
        points.push(seg.start);
        points.push(seg.end);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (&segments[i], &segments[j]);
            if let Some(hit) = segment_segment_intersect_2d(&a.start, &a.end, &b.start, &b.end) {
                split_points[i].push(hit);
                split_points[j].push(hit);
            }
        }
    }

    for (seg, points) in segments.iter().zip(split_points.iter_mut()) {
        let origin = seg.start;
        points.sort_by(|a, b| (a - origin).norm().total_cmp(&(b - origin).norm()));

        let mut prev = points[0];
        for p in &points[1..] {
            if !points_equal(p, &prev) {
                out.push(LineSegment::new(prev, *p));
                prev = *p;
            }
        }
    }
}
