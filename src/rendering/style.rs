use crate::error::{Result, StyleError};
use crate::layout::BarInsets;

use super::color::Color;

/// Visual parameters of the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    corner_radius: f64,
    border_thickness: f64,
    gradient_start: Color,
    gradient_end: Color,
    gradient_stops: usize,
    background: Color,
    insets: BarInsets,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            border_thickness: 2.0,
            gradient_start: Color::new(0x89, 0xb4, 0xfa),
            gradient_end: Color::new(0xcb, 0xa6, 0xf7),
            gradient_stops: 20,
            background: Color::new(0x1e, 0x1e, 0x2e),
            insets: BarInsets::default(),
        }
    }
}

impl BorderStyle {
    /// Creates a style with the given geometry and default colours.
    ///
    /// # Errors
    ///
    /// Returns an error if `corner_radius` is negative or not finite, or if
    /// `border_thickness` is not positive.
    pub fn new(corner_radius: f64, border_thickness: f64) -> Result<Self> {
        if !corner_radius.is_finite() || corner_radius < 0.0 {
            return Err(StyleError::InvalidParameters(
                "corner radius must be a non-negative number".to_owned(),
            )
            .into());
        }
        if !border_thickness.is_finite() || border_thickness <= 0.0 {
            return Err(StyleError::InvalidParameters(
                "border thickness must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            corner_radius,
            border_thickness,
            ..Self::default()
        })
    }

    /// Replaces the gradient endpoints and stop count.
    ///
    /// # Errors
    ///
    /// Returns an error if `stops` is less than 2.
    pub fn with_gradient(self, start: Color, end: Color, stops: usize) -> Result<Self> {
        if stops < 2 {
            return Err(StyleError::InvalidParameters(
                "a gradient needs at least 2 stops".to_owned(),
            )
            .into());
        }
        Ok(Self {
            gradient_start: start,
            gradient_end: end,
            gradient_stops: stops,
            ..self
        })
    }

    #[must_use]
    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    #[must_use]
    pub fn with_insets(self, insets: BarInsets) -> Self {
        Self { insets, ..self }
    }

    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    #[must_use]
    pub fn border_thickness(&self) -> f64 {
        self.border_thickness
    }

    /// Stroke width. The stroke is centred on the path and the background
    /// fill paints over its outer half.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.border_thickness * 2.0
    }

    #[must_use]
    pub fn gradient_start(&self) -> Color {
        self.gradient_start
    }

    #[must_use]
    pub fn gradient_end(&self) -> Color {
        self.gradient_end
    }

    #[must_use]
    pub fn gradient_stops(&self) -> usize {
        self.gradient_stops
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn insets(&self) -> &BarInsets {
        &self.insets
    }
}
