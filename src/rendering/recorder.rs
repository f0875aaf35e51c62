use crate::math::arc_2d::{arc_point_at, arc_subdivision_count, tangent_arc};
use crate::math::point_2d::points_equal;
use crate::math::Point2;

use super::PathSink;

/// A single recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    ArcTo {
        corner: Point2,
        to: Point2,
        radius: f64,
    },
    Close,
}

/// A [`PathSink`] that records commands for replay on a real backend and
/// can flatten them into polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Adds a closed axis-aligned rectangle sub-path.
    pub fn rect(&mut self, min: Point2, max: Point2) {
        self.move_to(min);
        self.line_to(Point2::new(max.x, min.y));
        self.line_to(max);
        self.line_to(Point2::new(min.x, max.y));
        self.close_path();
    }

    /// Replays the commands into another sink.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => sink.move_to(p),
                PathCommand::LineTo(p) => sink.line_to(p),
                PathCommand::ArcTo { corner, to, radius } => sink.arc_to(corner, to, radius),
                PathCommand::Close => sink.close_path(),
            }
        }
    }

    /// Converts the commands into polygons, one per sub-path.
    ///
    /// Arcs are subdivided so no chord strays more than `tolerance` from the
    /// true arc. Each returned contour is implicitly closed; sub-paths with
    /// fewer than 2 points are dropped.
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec<Point2>> {
        let mut contours = Vec::new();
        let mut current: Vec<Point2> = Vec::new();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    finish(&mut contours, std::mem::take(&mut current));
                    current.push(p);
                }
                PathCommand::LineTo(p) => push_point(&mut current, p),
                PathCommand::ArcTo { corner, to, radius } => {
                    let Some(&from) = current.last() else {
                        current.push(corner);
                        continue;
                    };
                    let Some(arc) = tangent_arc(&from, &corner, &to, radius) else {
                        push_point(&mut current, corner);
                        continue;
                    };
                    push_point(&mut current, arc.start);
                    let n = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                    for j in 1..=n {
                        let t = f64::from(j) / f64::from(n);
                        let p = arc_point_at(&arc.center, arc.radius, arc.start_angle, arc.sweep, t);
                        push_point(&mut current, p);
                    }
                }
                PathCommand::Close => {
                    let Some(&start) = current.first() else {
                        continue;
                    };
                    finish(&mut contours, std::mem::take(&mut current));
                    current.push(start);
                }
            }
        }
        finish(&mut contours, current);
        contours
    }
}

fn push_point(contour: &mut Vec<Point2>, p: Point2) {
    if contour.last().is_some_and(|last| points_equal(last, &p)) {
        return;
    }
    contour.push(p);
}

fn finish(contours: &mut Vec<Vec<Point2>>, mut contour: Vec<Point2>) {
    if contour.len() > 1 && points_equal(&contour[0], &contour[contour.len() - 1]) {
        contour.pop();
    }
    if contour.len() >= 2 {
        contours.push(contour);
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn arc_to(&mut self, corner: Point2, to: Point2, radius: f64) {
        self.commands.push(PathCommand::ArcTo { corner, to, radius });
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
