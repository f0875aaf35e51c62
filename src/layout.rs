//! Screen layout around the border: where the boundary sits, how popups
//! become cutouts, and which regions accept pointer input.

use slotmap::{new_key_type, SlotMap};

use crate::geometry::{IntRect, Rectangle};

/// Extra space added around a popup's bounding box so the border clears it.
pub const POPUP_PADDING: f64 = 1.0;

/// Thickness of the bar edge and of the three plain edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarInsets {
    pub bar_thickness: f64,
    pub non_bar_thickness: f64,
}

impl Default for BarInsets {
    fn default() -> Self {
        Self {
            bar_thickness: 34.0,
            non_bar_thickness: 8.0,
        }
    }
}

/// Size of the overlay surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The boundary rectangle: the bar inset on the top and left edges, the
/// thinner inset on the other two.
#[must_use]
pub fn border_rect(viewport: Viewport, insets: &BarInsets) -> Rectangle {
    Rectangle::filled_outward(
        insets.bar_thickness,
        insets.bar_thickness,
        viewport.width - insets.non_bar_thickness,
        viewport.height - insets.non_bar_thickness,
    )
}

/// Cutout for a popup with the given client bounding box.
#[must_use]
pub fn popup_cutout(left: f64, top: f64, width: f64, height: f64) -> Rectangle {
    Rectangle::filled_inward(
        left - POPUP_PADDING,
        top - POPUP_PADDING,
        left + width + POPUP_PADDING,
        top + height + POPUP_PADDING,
    )
}

/// Regions of the overlay that should receive input: the four frame strips
/// followed by `extra` (typically the open popups).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn input_shape(viewport: Viewport, insets: &BarInsets, extra: &[IntRect]) -> Vec<IntRect> {
    let px = |v: f64| v.round() as i32;
    let (w, h) = (px(viewport.width), px(viewport.height));
    let bar = px(insets.bar_thickness);
    let edge = px(insets.non_bar_thickness);
    let side_height = h - bar - edge;

    let mut shape = vec![
        IntRect {
            x: 0,
            y: 0,
            width: w,
            height: bar,
        },
        IntRect {
            x: 0,
            y: h - edge,
            width: w,
            height: edge,
        },
        IntRect {
            x: 0,
            y: bar,
            width: bar,
            height: side_height,
        },
        IntRect {
            x: w - edge,
            y: bar,
            width: edge,
            height: side_height,
        },
    ];
    shape.extend_from_slice(extra);
    shape
}

new_key_type! {
    /// Handle to a popup tracked by [`CutoutTracker`].
    pub struct CutoutKey;
}

#[derive(Debug, Clone, Copy, Default)]
struct TrackedCutout {
    rect: Option<Rectangle>,
}

/// Tracks open popups and reports whether their cutouts moved.
///
/// The animation loop keeps redrawing while [`CutoutTracker::update`]
/// returns `true` and may go idle once it returns `false`.
#[derive(Debug, Default)]
pub struct CutoutTracker {
    cutouts: SlotMap<CutoutKey, TrackedCutout>,
    removed: bool,
}

impl CutoutTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a popup. It has no cutout until its first update.
    pub fn open(&mut self) -> CutoutKey {
        self.cutouts.insert(TrackedCutout::default())
    }

    /// Stops tracking a popup. Returns `false` for unknown keys.
    pub fn close(&mut self, key: CutoutKey) -> bool {
        let removed = self.cutouts.remove(key).is_some();
        self.removed |= removed;
        removed
    }

    /// Records the latest cutouts and reports whether anything changed since
    /// the previous update: a rectangle moved or resized, a popup got its
    /// first rectangle, or a popup was closed. Unknown keys are ignored.
    pub fn update<I>(&mut self, measured: I) -> bool
    where
        I: IntoIterator<Item = (CutoutKey, Rectangle)>,
    {
        let mut changed = std::mem::take(&mut self.removed);
        for (key, rect) in measured {
            let Some(cutout) = self.cutouts.get_mut(key) else {
                continue;
            };
            if cutout.rect != Some(rect) {
                cutout.rect = Some(rect);
                changed = true;
            }
        }
        changed
    }

    /// The most recent cutout of every popup that has been measured.
    #[must_use]
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.cutouts.values().filter_map(|c| c.rect).collect()
    }

    /// The cutouts rounded to pixels for [`input_shape`].
    #[must_use]
    pub fn input_rects(&self) -> Vec<IntRect> {
        self.cutouts
            .values()
            .filter_map(|c| c.rect.as_ref().map(Rectangle::to_int_rect))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cutouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cutouts.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polarity;
    use approx::assert_abs_diff_eq;

    #[test]
    fn border_rect_uses_insets() {
        let rect = border_rect(Viewport::new(800.0, 600.0), &BarInsets::default());
        assert_eq!(rect.polarity, Polarity::FilledOutward);
        assert_abs_diff_eq!(rect.min().x, 34.0);
        assert_abs_diff_eq!(rect.min().y, 34.0);
        assert_abs_diff_eq!(rect.max().x, 792.0);
        assert_abs_diff_eq!(rect.max().y, 592.0);
    }

    #[test]
    fn popup_cutout_is_padded() {
        let rect = popup_cutout(100.0, 0.0, 200.0, 50.0);
        assert_eq!(rect.polarity, Polarity::FilledInward);
        assert_abs_diff_eq!(rect.min().x, 99.0);
        assert_abs_diff_eq!(rect.min().y, -1.0);
        assert_abs_diff_eq!(rect.width, 202.0);
        assert_abs_diff_eq!(rect.height, 52.0);
    }

    #[test]
    fn input_shape_strips_then_extras() {
        let extra = IntRect {
            x: 5,
            y: 6,
            width: 7,
            height: 8,
        };
        let shape = input_shape(Viewport::new(800.0, 600.0), &BarInsets::default(), &[extra]);
        assert_eq!(shape.len(), 5);
        assert_eq!(
            shape[0],
            IntRect {
                x: 0,
                y: 0,
                width: 800,
                height: 34
            }
        );
        assert_eq!(
            shape[1],
            IntRect {
                x: 0,
                y: 592,
                width: 800,
                height: 8
            }
        );
        assert_eq!(shape[2].height, 558);
        assert_eq!(shape[3].x, 792);
        assert_eq!(shape[4], extra);
    }

    #[test]
    fn tracker_reports_changes_until_settled() {
        let mut tracker = CutoutTracker::new();
        let key = tracker.open();
        assert!(tracker.rectangles().is_empty());

        let rect = popup_cutout(10.0, 10.0, 100.0, 40.0);
        assert!(tracker.update([(key, rect)]));
        assert!(!tracker.update([(key, rect)]));

        let moved = popup_cutout(10.0, 20.0, 100.0, 40.0);
        assert!(tracker.update([(key, moved)]));
        assert_eq!(tracker.rectangles(), vec![moved]);
        assert_eq!(
            tracker.input_rects(),
            vec![IntRect {
                x: 9,
                y: 19,
                width: 102,
                height: 42
            }]
        );
    }

    #[test]
    fn closing_counts_as_a_change_once() {
        let mut tracker = CutoutTracker::new();
        let a = tracker.open();
        let b = tracker.open();
        let rect = popup_cutout(0.0, 0.0, 10.0, 10.0);
        tracker.update([(a, rect), (b, rect)]);
        assert_eq!(tracker.len(), 2);

        assert!(tracker.close(a));
        assert!(!tracker.close(a));
        assert!(tracker.update([(b, rect)]));
        assert!(!tracker.update([(b, rect)]));
        assert_eq!(tracker.rectangles().len(), 1);
    }

    #[test]
    fn stale_keys_are_ignored() {
        let mut tracker = CutoutTracker::new();
        let key = tracker.open();
        tracker.close(key);
        tracker.update(std::iter::empty());
        let rect = popup_cutout(0.0, 0.0, 10.0, 10.0);
        assert!(!tracker.update([(key, rect)]));
        assert!(tracker.is_empty());
    }
}
