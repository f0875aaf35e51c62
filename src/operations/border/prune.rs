use std::collections::HashMap;

use crate::geometry::{LineSegment, Polarity, Rectangle};
use crate::math::point_2d::PointKey;
use crate::math::{Point2, TOLERANCE};

/// Removes the segments `rect` hides.
///
/// FilledOutward drops segments with both endpoints strictly outside;
/// FilledInward drops segments with both endpoints strictly inside and then
/// removes interior stems left at T-junctions.
pub(super) fn prune(segments: &mut Vec<LineSegment>, rect: &Rectangle) {
    match rect.polarity {
        Polarity::FilledOutward => {
            segments.retain(|s| {
                !(rect.excludes_strictly(&s.start) && rect.excludes_strictly(&s.end))
            });
        }
        Polarity::FilledInward => {
            segments.retain(|s| {
                !(rect.contains_strictly(&s.start) && rect.contains_strictly(&s.end))
            });
            remove_interior_stems(segments, rect);
        }
    }
}

/// Deletes the perpendicular stem at each T-junction when the stem's
/// midpoint lies strictly inside `rect`.
fn remove_interior_stems(segments: &mut Vec<LineSegment>, rect: &Rectangle) {
    let mut junctions: HashMap<PointKey, (Point2, Vec<usize>)> = HashMap::new();
    for (idx, seg) in segments.iter().enumerate() {
        for p in [seg.start, seg.end] {
            junctions
                .entry(PointKey::of(&p))
                .or_insert_with(|| (p, Vec::new()))
                .1
                .push(idx);
        }
    }

    let mut removed = vec![false; segments.len()];
    let mut stems = 0usize;
    for (point, members) in junctions.values() {
        if members.len() < 3 {
            continue;
        }
        let Some(stem) = find_stem(point, members, segments) else {
            continue;
        };
        if !removed[stem] && rect.contains_strictly(&segments[stem].midpoint()) {
            removed[stem] = true;
            stems += 1;
        }
    }

    if stems == 0 {
        return;
    }
    tracing::trace!(stems, "removed interior stems");

    let mut idx = 0;
    segments.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}

/// Finds the single segment perpendicular to at least two collinear ones
/// meeting at `point`.
fn find_stem(point: &Point2, members: &[usize], segments: &[LineSegment]) -> Option<usize> {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    for &idx in members {
        let Some(far) = segments[idx].other_end(point) else {
            continue;
        };
        if (far.y - point.y).abs() < TOLERANCE {
            horizontal.push(idx);
        } else if (far.x - point.x).abs() < TOLERANCE {
            vertical.push(idx);
        }
    }

    match (horizontal.as_slice(), vertical.as_slice()) {
        ([stem], v) if v.len() >= 2 => Some(*stem),
        (h, [stem]) if h.len() >= 2 => Some(*stem),
        _ => None,
    }
}
