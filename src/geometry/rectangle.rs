use crate::math::{Point2, TOLERANCE};

/// Which side of a rectangle is solid for pruning purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The interior is solid (a popup or widget covering the background).
    FilledInward,
    /// The exterior is solid and the interior is a hole (the canvas boundary).
    FilledOutward,
}

/// An axis-aligned rectangle with a fill polarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub center: Point2,
    pub width: f64,
    pub height: f64,
    pub polarity: Polarity,
}

/// Integer pixel rectangle (top-left origin) handed to the host compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    #[must_use]
    pub fn new(center: Point2, width: f64, height: f64, polarity: Polarity) -> Self {
        Self {
            center,
            width,
            height,
            polarity,
        }
    }

    /// Rectangle spanning `(x0, y0)`-`(x1, y1)` whose exterior is solid.
    #[must_use]
    pub fn filled_outward(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_extents(x0, y0, x1, y1, Polarity::FilledOutward)
    }

    /// Rectangle spanning `(x0, y0)`-`(x1, y1)` whose interior is solid.
    #[must_use]
    pub fn filled_inward(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_extents(x0, y0, x1, y1, Polarity::FilledInward)
    }

    #[must_use]
    pub fn filled_outward_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(Point2::new(cx, cy), width, height, Polarity::FilledOutward)
    }

    #[must_use]
    pub fn filled_inward_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(Point2::new(cx, cy), width, height, Polarity::FilledInward)
    }

    fn from_extents(x0: f64, y0: f64, x1: f64, y1: f64, polarity: Polarity) -> Self {
        Self::new(
            Point2::new((x0 + x1) * 0.5, (y0 + y1) * 0.5),
            x1 - x0,
            y1 - y0,
            polarity,
        )
    }

    /// Corner with the smallest coordinates.
    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(
            self.center.x - self.width * 0.5,
            self.center.y - self.height * 0.5,
        )
    }

    /// Corner with the largest coordinates.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(
            self.center.x + self.width * 0.5,
            self.center.y + self.height * 0.5,
        )
    }

    /// Returns the four corners: top-left, top-right, bottom-right,
    /// bottom-left, where "top" is the larger y.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let min = self.min();
        let max = self.max();
        [
            Point2::new(min.x, max.y),
            Point2::new(max.x, max.y),
            Point2::new(max.x, min.y),
            Point2::new(min.x, min.y),
        ]
    }

    /// Inside by more than [`TOLERANCE`] on every side.
    #[must_use]
    pub fn contains_strictly(&self, p: &Point2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x > min.x + TOLERANCE
            && p.x < max.x - TOLERANCE
            && p.y > min.y + TOLERANCE
            && p.y < max.y - TOLERANCE
    }

    /// Outside by more than [`TOLERANCE`] on at least one side.
    #[must_use]
    pub fn excludes_strictly(&self, p: &Point2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x < min.x - TOLERANCE
            || p.x > max.x + TOLERANCE
            || p.y < min.y - TOLERANCE
            || p.y > max.y + TOLERANCE
    }

    /// Plain closed-interval containment, without tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Whether a point is in this rectangle's solid region.
    #[must_use]
    pub fn is_solid_at(&self, p: &Point2) -> bool {
        match self.polarity {
            Polarity::FilledInward => self.contains(p),
            Polarity::FilledOutward => !self.contains(p),
        }
    }

    /// Grows the rectangle by `amount` on every side.
    #[must_use]
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
            ..*self
        }
    }

    /// Rounds to whole pixels, half-up like browser layout code.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int_rect(&self) -> IntRect {
        let round = |v: f64| (v + 0.5).floor() as i32;
        let min = self.min();
        IntRect {
            x: round(min.x),
            y: round(min.y),
            width: round(self.width),
            height: round(self.height),
        }
    }
}
