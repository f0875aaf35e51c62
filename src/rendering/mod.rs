mod color;
mod gradient;
mod recorder;
mod renderer;
mod rounded;
mod style;

pub use color::{interpolate_degrees_shorter, Color, Oklch};
pub use gradient::{oklch_stops, GradientStop, LinearGradient};
pub use recorder::{PathCommand, PathRecorder};
pub use renderer::{BorderRenderer, FillPass, Frame, StrokePass};
pub use rounded::trace_rounded;
pub use style::BorderStyle;

use crate::math::Point2;

/// Receiver of path drawing commands, modelled on a 2D canvas context.
pub trait PathSink {
    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Point2);

    /// Adds a straight line from the current point to `p`.
    fn line_to(&mut self, p: Point2);

    /// Adds an arc of `radius` tangent to the lines current point → `corner`
    /// and `corner` → `to`, preceded by a straight line to the first tangent
    /// point. Degenerate arcs become a line to `corner`.
    fn arc_to(&mut self, corner: Point2, to: Point2, radius: f64);

    /// Closes the current sub-path back to its starting point.
    fn close_path(&mut self);
}

/// Rule deciding which regions of a set of contours are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}
