use crate::geometry::{LineSegment, Path};

/// Walks the unordered segments into one path by endpoint matching.
///
/// Seeds with the first segment, then repeatedly appends the far endpoint
/// of the lowest-index unused segment touching the current last point.
/// Stops when nothing matches, so a broken chain yields a partial path and
/// a complete loop ends on its starting point. `visited` is scratch space
/// reused between calls.
pub(super) fn generate_path(segments: &[LineSegment], visited: &mut Vec<bool>) -> Path {
    let Some(seed) = segments.first() else {
        return Path::new();
    };

    visited.clear();
    visited.resize(segments.len(), false);
    visited[0] = true;

    let mut path = Path::from_points(vec![seed.start, seed.end]);
    let mut remaining = segments.len() - 1;

    while remaining > 0 {
        let Some(last) = path.last().copied() else {
            break;
        };
        let next = segments.iter().enumerate().find_map(|(idx, seg)| {
            if visited[idx] {
                None
            } else {
                seg.other_end(&last).map(|p| (idx, p))
            }
        });
        let Some((idx, point)) = next else {
            tracing::trace!(remaining, "segment chain ended before the working set was used up");
            break;
        };
        visited[idx] = true;
        remaining -= 1;
        path.push(point);
    }

    path
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn empty_set_gives_empty_path() {
        let path = generate_path(&[], &mut Vec::new());
        assert!(path.is_empty());
    }

    #[test]
    fn shuffled_square_becomes_closed_loop() {
        // Mixed order and directions.
        let segments = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(0.0, 1.0, 1.0, 1.0),
            seg(0.0, 0.0, 0.0, 1.0),
            seg(1.0, 1.0, 1.0, 0.0),
        ];
        let path = generate_path(&segments, &mut Vec::new());
        assert_eq!(path.len(), 5);
        assert!(path.is_closed());
        assert_eq!(path.get(1).unwrap(), &Point2::new(1.0, 0.0));
        assert_eq!(path.get(2).unwrap(), &Point2::new(1.0, 1.0));
        assert_eq!(path.get(3).unwrap(), &Point2::new(0.0, 1.0));
    }

    #[test]
    fn broken_chain_returns_partial_path() {
        let segments = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(5.0, 5.0, 6.0, 5.0),
        ];
        let path = generate_path(&segments, &mut Vec::new());
        assert_eq!(path.len(), 3);
        assert!(!path.is_closed());
    }

    #[test]
    fn endpoints_match_within_tolerance() {
        let segments = [seg(0.0, 0.0, 1.0, 0.0), seg(1.0 + 1e-7, 0.0, 2.0, 0.0)];
        let path = generate_path(&segments, &mut Vec::new());
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn scratch_is_reset_between_calls() {
        let mut visited = vec![true; 8];
        let segments = [seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 2.0, 0.0)];
        let path = generate_path(&segments, &mut visited);
        assert_eq!(path.len(), 3);
    }
}
