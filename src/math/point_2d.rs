use super::{Point2, Vector2, TOLERANCE};

/// Quantized position used to bucket points that are equal within
/// [`TOLERANCE`].
///
/// Coordinates are divided by the tolerance and rounded, so two points
/// produce the same key when they fall in the same tolerance cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: i64,
    y: i64,
}

impl PointKey {
    /// Computes the key for a point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn of(p: &Point2) -> Self {
        Self {
            x: (p.x / TOLERANCE).round() as i64,
            y: (p.y / TOLERANCE).round() as i64,
        }
    }
}

/// Returns `true` if both coordinates differ by less than [`TOLERANCE`].
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Normalizes a vector, returning the zero vector when it is shorter than
/// [`TOLERANCE`].
#[must_use]
pub fn unit_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        return Vector2::zeros();
    }
    v / len
}

/// Angle of a vector in radians from the positive X axis.
#[must_use]
pub fn angle_2d(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equality_within_tolerance() {
        let a = Point2::new(1.0, 2.0);
        assert!(points_equal(&a, &Point2::new(1.0 + 1e-6, 2.0 - 1e-6)));
        assert!(!points_equal(&a, &Point2::new(1.0 + 1e-4, 2.0)));
    }

    #[test]
    fn keys_bucket_nearby_points() {
        let a = PointKey::of(&Point2::new(5.0, 0.0));
        let b = PointKey::of(&Point2::new(5.000_000_1, -0.000_000_1));
        let c = PointKey::of(&Point2::new(5.001, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn cross_product_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_abs_diff_eq!(cross_2d(&x, &y), 1.0);
        assert_abs_diff_eq!(cross_2d(&y, &x), -1.0);
        assert_abs_diff_eq!(cross_2d(&x, &x), 0.0);
    }

    #[test]
    fn unit_of_tiny_vector_is_zero() {
        assert_eq!(unit_or_zero(&Vector2::new(1e-7, 0.0)), Vector2::zeros());
        let u = unit_or_zero(&Vector2::new(3.0, 4.0));
        assert_abs_diff_eq!(u.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(u.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn angle_quadrants() {
        assert_abs_diff_eq!(angle_2d(&Vector2::new(0.0, 1.0)), std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(angle_2d(&Vector2::new(-1.0, 0.0)), std::f64::consts::PI);
    }
}
