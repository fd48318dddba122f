//! Headless driver for the curve engine.
//!
//! ```text
//! cargo run --example animate
//! RUST_LOG=roulette=debug cargo run --example animate
//! ```
//!
//! Plays one run of the cycloid animation, changing parameters the way a
//! slider would, then renders each closed family once.

use roulette::animation::AnimationPhase;
use roulette::{AnimationController, Family, ParameterSet, RouletteError, StaticPlot};

fn main() -> Result<(), RouletteError> {
    // Default: WARN for everything, INFO for roulette.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roulette=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("animate=info".parse().unwrap_or_default())
        .add_directive("roulette=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut controller = AnimationController::default();
    let frame_count = controller.config().frame_count;
    let mut phase = controller.phase();

    for frame_index in 0..frame_count {
        match frame_index {
            150 => controller.on_parameter_changed("radius", 1.5)?,
            // Rejected and logged; the animation keeps going.
            200 => {
                let _ = controller.on_parameter_changed("radius", -1.0);
            }
            250 => controller.on_parameter_changed("point_color", "g")?,
            _ => {}
        }

        let frame = controller.advance_frame(frame_index)?;
        if frame.phase != phase || frame_index % 100 == 0 {
            tracing::info!(
                frame_index,
                drive_time = frame.drive_time,
                path_points = frame.path.len(),
                x = frame.rolling_point.position.x,
                y = frame.rolling_point.position.y,
                frozen = frame.phase == AnimationPhase::Frozen,
                "cycloid frame"
            );
            phase = frame.phase;
        }
    }

    for family in [Family::Epicycloid, Family::Hypocycloid, Family::Lemniscate] {
        let plot = StaticPlot::new(ParameterSet::defaults(family)).render()?;
        let (xs, ys) = plot.polyline.to_xy();
        let extent = |values: &[f64]| {
            values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
        };
        let (x_min, x_max) = extent(&xs);
        let (y_min, y_max) = extent(&ys);
        tracing::info!(
            label = %plot.label,
            color = %plot.style.line_color,
            points = plot.polyline.len(),
            x_min,
            x_max,
            y_min,
            y_max,
            "closed curve"
        );
    }

    Ok(())
}
