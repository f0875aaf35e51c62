use crate::error::Result;
use crate::geometry::{Path, Rectangle};
use crate::layout::{border_rect, Viewport};
use crate::math::polygon_2d::{contains_even_odd, winding_number};
use crate::math::Point2;
use crate::operations::border::BorderState;

use super::color::Color;
use super::gradient::{oklch_stops, LinearGradient};
use super::recorder::PathRecorder;
use super::rounded::trace_rounded;
use super::style::BorderStyle;
use super::{FillRule, PathSink};

/// The gradient-stroked rounded outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePass {
    pub outline: PathRecorder,
    pub line_width: f64,
    pub gradient: LinearGradient,
}

/// The background fill: the whole viewport with the rounded outline
/// punched out.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPass {
    pub outline: PathRecorder,
    pub color: Color,
    pub rule: FillRule,
}

impl FillPass {
    /// Returns `true` if `p` is painted by this fill, with arcs flattened to
    /// within `tolerance`.
    #[must_use]
    pub fn covers(&self, p: &Point2, tolerance: f64) -> bool {
        let contours = self.outline.flatten(tolerance);
        match self.rule {
            FillRule::EvenOdd => contains_even_odd(p, &contours),
            FillRule::NonZero => contours.iter().map(|c| winding_number(p, c)).sum::<i32>() != 0,
        }
    }
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The sharp-cornered border path the passes were traced from.
    pub path: Path,
    pub stroke: StrokePass,
    pub fill: FillPass,
}

impl Frame {
    /// `true` when there is no border to stroke.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.stroke.outline.is_empty()
    }
}

/// Turns the current rectangles into paintable frames.
#[derive(Debug)]
pub struct BorderRenderer {
    state: BorderState,
    style: BorderStyle,
    gradient_colors: Vec<Color>,
    viewport: Viewport,
    gradient: LinearGradient,
}

impl BorderRenderer {
    /// Creates a renderer with an empty viewport; call [`Self::resize`]
    /// before drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the style's gradient cannot be sampled.
    pub fn new(style: BorderStyle) -> Result<Self> {
        let gradient_colors = oklch_stops(
            style.gradient_start(),
            style.gradient_end(),
            style.gradient_stops(),
        )?;
        let gradient = LinearGradient::new(Point2::origin(), Point2::origin(), &gradient_colors);
        Ok(Self {
            state: BorderState::new(),
            style,
            gradient_colors,
            viewport: Viewport::default(),
            gradient,
        })
    }

    /// Moves the boundary to follow the new viewport and re-aims the
    /// gradient from the bottom-left to the top-right corner.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.state.set_border_rect(border_rect(viewport, self.style.insets()));
        self.gradient = LinearGradient::new(
            Point2::new(0.0, viewport.height),
            Point2::new(viewport.width, 0.0),
            &self.gradient_colors,
        );
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "resized border viewport"
        );
    }

    pub fn set_widget_rectangles<I>(&mut self, rectangles: I)
    where
        I: IntoIterator<Item = Rectangle>,
    {
        self.state.set_widget_rectangles(rectangles);
    }

    #[must_use]
    pub fn state(&self) -> &BorderState {
        &self.state
    }

    #[must_use]
    pub fn style(&self) -> &BorderStyle {
        &self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn gradient_colors(&self) -> &[Color] {
        &self.gradient_colors
    }

    /// Computes the border path and builds both paint passes for it.
    pub fn draw(&mut self) -> Frame {
        let path = self.state.compute_border_path();

        let mut outline = PathRecorder::new();
        trace_rounded(&path, self.style.corner_radius(), &mut outline);
        if !outline.is_empty() {
            outline.close_path();
        }

        let mut fill_outline = PathRecorder::new();
        fill_outline.rect(
            Point2::origin(),
            Point2::new(self.viewport.width, self.viewport.height),
        );
        outline.replay(&mut fill_outline);

        Frame {
            path,
            stroke: StrokePass {
                outline,
                line_width: self.style.line_width(),
                gradient: self.gradient.clone(),
            },
            fill: FillPass {
                outline: fill_outline,
                color: self.style.background(),
                rule: FillRule::EvenOdd,
            },
        }
    }
}
