use super::point_2d::cross_2d;
use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p + t * r` and `q + u * s`, returns `(t, u)` if not parallel.
/// Lines whose direction cross product is within [`TOLERANCE`] of zero are
/// treated as parallel, collinear overlaps included.
#[must_use]
pub fn line_line_params_2d(p: &Point2, r: &Vector2, q: &Point2, s: &Vector2) -> Option<(f64, f64)> {
    let rxs = cross_2d(r, s);
    if rxs.abs() < TOLERANCE {
        return None;
    }
    let qp = q - p;
    let t = cross_2d(&qp, s) / rxs;
    let u = cross_2d(&qp, r) / rxs;
    Some((t, u))
}

/// Bounded segment-segment intersection used to split the border arrangement.
///
/// Returns the intersection point when both parameters lie in `[0, 1]`
/// (tolerance-inclusive). Touching at an endpoint of *both* segments is not
/// reported, since those segments are already connected there.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let r = a1 - a0;
    let s = b1 - b0;
    let (t, u) = line_line_params_2d(a0, &r, b0, &s)?;

    let t_in = (-TOLERANCE..=1.0 + TOLERANCE).contains(&t);
    let u_in = (-TOLERANCE..=1.0 + TOLERANCE).contains(&u);
    if !(t_in && u_in) {
        return None;
    }

    if is_endpoint_param(t) && is_endpoint_param(u) {
        return None;
    }
    Some(a0 + r * t)
}

fn is_endpoint_param(v: f64) -> bool {
    v.abs() < TOLERANCE || (v - 1.0).abs() < TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let hit =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(10.0, 0.0), &p(5.0, -5.0), &p(5.0, 5.0))
                .unwrap();
        assert_abs_diff_eq!(hit.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn t_junction_is_reported() {
        // Stem ends on the middle of the bar: endpoint of one segment only.
        let hit =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(10.0, 0.0), &p(4.0, 0.0), &p(4.0, 3.0))
                .unwrap();
        assert_abs_diff_eq!(hit.x, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn shared_corner_is_not_reported() {
        let hit =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(10.0, 0.0), &p(10.0, 0.0), &p(10.0, 5.0));
        assert!(hit.is_none());
    }

    #[test]
    fn parallel_and_collinear_are_skipped() {
        assert!(segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(0.0, 1.0),
            &p(10.0, 1.0)
        )
        .is_none());
        assert!(segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.0),
            &p(15.0, 0.0)
        )
        .is_none());
    }

    #[test]
    fn disjoint_segments() {
        assert!(segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(5.0, -5.0),
            &p(5.0, 5.0)
        )
        .is_none());
    }

    #[test]
    fn line_params() {
        let (t, u) = line_line_params_2d(
            &p(0.0, 0.0),
            &Vector2::new(2.0, 0.0),
            &p(1.0, -1.0),
            &Vector2::new(0.0, 4.0),
        )
        .unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(u, 0.25, epsilon = 1e-12);
    }
}
