use crate::error::{Result, StyleError};
use crate::math::Point2;

use super::color::Color;

/// A colour at a normalized offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// A linear gradient between two points with evenly spaced stops.
///
/// Canvas backends interpolate between stops in sRGB, so perceptual
/// smoothness comes from generating many stops in OKLCH up front.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point2,
    pub end: Point2,
    pub stops: Vec<GradientStop>,
}

/// Samples `count` colours from `start` to `end` through OKLCH, taking the
/// shorter way around the hue circle.
///
/// # Errors
///
/// Returns `StyleError::InvalidParameters` if `count` is less than 2.
pub fn oklch_stops(start: Color, end: Color, count: usize) -> Result<Vec<Color>> {
    if count < 2 {
        return Err(StyleError::InvalidParameters(format!(
            "a gradient needs at least 2 stops, got {count}"
        ))
        .into());
    }
    let from = start.to_oklch();
    let to = end.to_oklch();
    let last = to_f64(count - 1);
    Ok((0..count)
        .map(|i| Color::from_oklch(&from.lerp(&to, to_f64(i) / last)))
        .collect())
}

impl LinearGradient {
    /// Spreads `colors` evenly from offset 0 to 1.
    #[must_use]
    pub fn new(start: Point2, end: Point2, colors: &[Color]) -> Self {
        let last = to_f64(colors.len().saturating_sub(1)).max(1.0);
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                offset: to_f64(i) / last,
                color,
            })
            .collect();
        Self { start, end, stops }
    }

    /// Colour painted at `p`, projecting it onto the gradient line and
    /// clamping past either end. `None` when there are no stops.
    #[must_use]
    pub fn color_at(&self, p: &Point2) -> Option<Color> {
        let first = self.stops.first()?;
        let axis = self.end - self.start;
        let len_sq = axis.norm_squared();
        let t = if len_sq > 0.0 {
            ((p - self.start).dot(&axis) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut color = first.color;
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (t - a.offset) / span } else { 0.0 };
                return Some(a.color.lerp_srgb(&b.color, local));
            }
            color = b.color;
        }
        Some(color)
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(v: usize) -> f64 {
    v as f64
}
