//! Computes one border frame and prints what a canvas backend would paint.
//!
//! Usage:
//! ```text
//! cargo run --example frame                       # 1280x720, one popup
//! cargo run --example frame -- 1920 1080          # custom viewport
//! RUST_LOG=shellborder=debug cargo run --example frame
//! ```

use shellborder::layout::{input_shape, popup_cutout, CutoutTracker, Viewport};
use shellborder::math::Point2;
use shellborder::rendering::{BorderRenderer, BorderStyle, PathCommand};
use shellborder::BorderError;

fn main() -> Result<(), BorderError> {
    // Default: WARN for everything, INFO for shellborder.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shellborder=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shellborder=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let width = args.next().and_then(Result::ok).unwrap_or(1280.0);
    let height = args.next().and_then(Result::ok).unwrap_or(720.0);
    let viewport = Viewport::new(width, height);

    let style = BorderStyle::default();
    let mut renderer = BorderRenderer::new(style)?;
    renderer.resize(viewport);

    // A launcher-style popup hanging off the bar.
    let mut tracker = CutoutTracker::new();
    let popup = tracker.open();
    let changed = tracker.update([(popup, popup_cutout(width / 2.0 - 150.0, 0.0, 300.0, 200.0))]);
    renderer.set_widget_rectangles(tracker.rectangles());

    let frame = renderer.draw();

    println!("viewport {width}x{height}, popups changed: {changed}");
    println!("border path ({} points):", frame.path.len());
    for p in frame.path.points() {
        println!("  ({:.1}, {:.1})", p.x, p.y);
    }

    let arcs = frame
        .stroke
        .outline
        .commands()
        .iter()
        .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
        .count();
    println!(
        "stroke: {} commands, {arcs} arcs, line width {}",
        frame.stroke.outline.commands().len(),
        frame.stroke.line_width
    );
    let stops: Vec<String> = frame.stroke.gradient.stops.iter().map(|s| s.color.to_hex()).collect();
    println!("gradient: {}", stops.join(" "));

    let probe = Point2::new(width / 2.0, 60.0);
    println!(
        "fill {} covers popup probe ({:.0}, {:.0}): {}",
        frame.fill.color,
        probe.x,
        probe.y,
        frame.fill.covers(&probe, 0.1)
    );

    println!("input shape:");
    for r in input_shape(viewport, style.insets(), &tracker.input_rects()) {
        println!("  {}x{} at ({}, {})", r.width, r.height, r.x, r.y);
    }
    Ok(())
}
