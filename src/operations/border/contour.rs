use std::collections::HashSet;

use crate::geometry::{LineSegment, Rectangle};
use crate::math::point_2d::{unit_or_zero, PointKey};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Distance from a segment's midpoint at which each side is sampled.
pub const PROBE_OFFSET: f64 = TOLERANCE * 100.0;

/// Keeps the segments that lie on the border between solid and open space.
///
/// Endpoint-based pruning cannot see segments lying exactly on a cutout's
/// edge, since their endpoints are never strictly inside. This pass drops
/// repeated segments (same endpoints in either direction) and then samples
/// both sides of every remaining segment; a segment survives only when
/// exactly one side is open.
pub(super) fn retain_contour(segments: &mut Vec<LineSegment>, rectangles: &[Rectangle]) {
    let mut seen: HashSet<(PointKey, PointKey)> = HashSet::with_capacity(segments.len());
    segments.retain(|seg| {
        let a = PointKey::of(&seg.start);
        let b = PointKey::of(&seg.end);
        if a == b {
            return false;
        }
        let key = if a <= b { (a, b) } else { (b, a) };
        seen.insert(key) && separates_solid_from_open(seg, rectangles)
    });
}

fn separates_solid_from_open(seg: &LineSegment, rectangles: &[Rectangle]) -> bool {
    let dir = unit_or_zero(&seg.direction());
    let normal = Vector2::new(-dir.y, dir.x) * PROBE_OFFSET;
    let mid = seg.midpoint();
    is_solid(&(mid + normal), rectangles) != is_solid(&(mid - normal), rectangles)
}

/// A point is solid when any rectangle covers it from its solid side.
fn is_solid(p: &Point2, rectangles: &[Rectangle]) -> bool {
    rectangles.iter().any(|r| r.is_solid_at(p))
}
