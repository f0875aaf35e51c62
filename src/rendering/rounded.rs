use crate::geometry::Path;
use crate::math::point_2d::unit_or_zero;

use super::PathSink;

/// Traces `path` into `sink` with every vertex rounded by an arc.
///
/// The radius at each vertex is capped at half the distance to either
/// neighbour so adjacent arcs never overlap. The sub-path is left open; the
/// caller decides whether to close it. Paths with fewer than 3 distinct
/// vertices emit nothing.
pub fn trace_rounded<S: PathSink + ?Sized>(path: &Path, radius: f64, sink: &mut S) {
    let points = path.open_points();
    let count = points.len();
    if count < 3 {
        return;
    }

    for i in 0..=count {
        let prev = points[(i + count - 1) % count];
        let cur = points[i % count];
        let next = points[(i + 1) % count];

        let to_prev = prev - cur;
        let to_next = next - cur;
        let r = radius.min(to_prev.norm() / 2.0).min(to_next.norm() / 2.0);
        let prev_dir = unit_or_zero(&to_prev);
        let next_dir = unit_or_zero(&to_next);

        if i == 0 {
            sink.move_to(cur + prev_dir * r);
        }
        if i == count {
            sink.line_to(points[0] + prev_dir * r);
            continue;
        }

        sink.line_to(cur + prev_dir * r);
        sink.arc_to(cur, cur + next_dir * r, r);
    }
}
