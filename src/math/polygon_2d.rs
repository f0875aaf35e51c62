use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A duplicated
/// closing point contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Counts how many times a horizontal ray from `p` towards +X crosses the
/// closed contour.
#[must_use]
pub fn ray_crossings(p: &Point2, contour: &[Point2]) -> usize {
    let n = contour.len();
    if n < 2 {
        return 0;
    }
    let mut crossings = 0;
    for i in 0..n {
        let a = &contour[i];
        let b = &contour[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Winding number of the closed contour around `p`.
///
/// Counter-clockwise loops count positive.
#[must_use]
pub fn winding_number(p: &Point2, contour: &[Point2]) -> i32 {
    let n = contour.len();
    if n < 2 {
        return 0;
    }
    let mut winding = 0;
    for i in 0..n {
        let a = &contour[i];
        let b = &contour[(i + 1) % n];
        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Even-odd inclusion test over several closed contours.
#[must_use]
pub fn contains_even_odd(p: &Point2, contours: &[Vec<Point2>]) -> bool {
    let total: usize = contours.iter().map(|c| ray_crossings(p, c)).sum();
    total % 2 == 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_abs_diff_eq!(signed_area_2d(&square(0.0, 0.0, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square(0.0, 0.0, 1.0, 1.0);
        pts.reverse();
        assert_abs_diff_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_abs_diff_eq!(signed_area_2d(&[Point2::new(0.0, 0.0)]), 0.0);
        assert_abs_diff_eq!(signed_area_2d(&[]), 0.0);
    }

    #[test]
    fn winding_follows_orientation() {
        let ccw = square(0.0, 0.0, 10.0, 10.0);
        let mut cw = ccw.clone();
        cw.reverse();
        let p = Point2::new(5.0, 5.0);
        assert_eq!(winding_number(&p, &ccw), 1);
        assert_eq!(winding_number(&p, &cw), -1);
        assert_eq!(winding_number(&Point2::new(15.0, 5.0), &ccw), 0);
    }

    #[test]
    fn even_odd_ring() {
        let contours = vec![square(0.0, 0.0, 10.0, 10.0), square(2.0, 2.0, 8.0, 8.0)];
        assert!(contains_even_odd(&Point2::new(1.0, 5.0), &contours));
        assert!(!contains_even_odd(&Point2::new(5.0, 5.0), &contours));
        assert!(!contains_even_odd(&Point2::new(12.0, 5.0), &contours));
    }
}
