/// 2D circular arc utilities for rounded corners.
///
/// Arcs are described by center, radius, start angle and signed sweep
/// (positive = counter-clockwise).
use std::f64::consts::PI;

use super::point_2d::{angle_2d, cross_2d, unit_or_zero};
use super::{Point2, Vector2, TOLERANCE};

/// An arc tangent to two lines meeting at a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentArc {
    /// Tangent point on the incoming line.
    pub start: Point2,
    /// Tangent point on the outgoing line.
    pub end: Point2,
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

/// Computes the arc of `radius` tangent to the lines `from → corner` and
/// `corner → to`, matching the HTML canvas `arcTo` construction.
///
/// Returns `None` when the arc degenerates (non-positive radius, coincident
/// points or collinear lines); callers then draw a straight line to `corner`.
#[must_use]
pub fn tangent_arc(from: &Point2, corner: &Point2, to: &Point2, radius: f64) -> Option<TangentArc> {
    if radius <= TOLERANCE {
        return None;
    }
    let u0 = unit_or_zero(&(from - corner));
    let u2 = unit_or_zero(&(to - corner));
    if u0 == Vector2::zeros() || u2 == Vector2::zeros() {
        return None;
    }
    if cross_2d(&u0, &u2).abs() < TOLERANCE {
        return None;
    }

    let theta = u0.dot(&u2).clamp(-1.0, 1.0).acos();
    let half = theta * 0.5;
    let tangent_dist = radius / half.tan();
    let start = corner + u0 * tangent_dist;
    let end = corner + u2 * tangent_dist;

    let bisector = unit_or_zero(&(u0 + u2));
    let center = corner + bisector * (radius / half.sin());

    let start_angle = angle_2d(&(start - center));
    let end_angle = angle_2d(&(end - center));
    let sweep = normalize_sweep(end_angle - start_angle);

    Some(TangentArc {
        start,
        end,
        center,
        radius,
        start_angle,
        sweep,
    })
}

/// Wraps a raw angle difference into `(-pi, pi]`.
fn normalize_sweep(mut sweep: f64) -> f64 {
    while sweep > PI {
        sweep -= 2.0 * PI;
    }
    while sweep <= -PI {
        sweep += 2.0 * PI;
    }
    sweep
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
