use tracing::{debug, info, trace, warn};

use crate::error::{DomainError, Result, RouletteError};
use crate::geometry::Curve;
use crate::params::{CycloidParams, Family, ParamValue, Style};
use crate::sampling::{Polyline, SampleCurve, SampleDomain};

use super::{AnimationConfig, AnimationPhase, Frame, RollingPoint, Viewport};

/// Drives the cycloid animation.
///
/// Holds the live parameters and a drive time derived from the frame index.
/// Every frame re-samples the whole path over `[0, drive_time]`, so a radius
/// or shift change made mid-run redraws the trace from the start. The rolling
/// point follows the path head until drive time reaches `stop_time`, then
/// stays at the stop parameter for the rest of the run.
///
/// Single-threaded; a shell that shares it across threads must hold one lock
/// around each change and the frame that reads it.
#[derive(Debug, Clone)]
pub struct AnimationController {
    params: CycloidParams,
    style: Style,
    config: AnimationConfig,
    drive_time: f64,
    last_frame: Option<u32>,
    phase: AnimationPhase,
    /// Curve parameter the point froze at, fixed until the next run.
    frozen_at: Option<f64>,
    last_point: Option<RollingPoint>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::from_parts(
            CycloidParams::default(),
            Style::for_family(Family::Cycloid),
            AnimationConfig::default(),
        )
    }
}

impl AnimationController {
    /// Creates a controller with the default timing configuration.
    #[must_use]
    pub fn new(params: CycloidParams) -> Self {
        Self::from_parts(
            params,
            Style::for_family(Family::Cycloid),
            AnimationConfig::default(),
        )
    }

    /// Creates a controller with a custom timing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(params: CycloidParams, config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            params,
            Style::for_family(Family::Cycloid),
            config,
        ))
    }

    fn from_parts(params: CycloidParams, style: Style, config: AnimationConfig) -> Self {
        Self {
            params,
            style,
            config,
            drive_time: 0.0,
            last_frame: None,
            phase: AnimationPhase::Running,
            frozen_at: None,
            last_point: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &CycloidParams {
        &self.params
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[must_use]
    pub fn drive_time(&self) -> f64 {
        self.drive_time
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Returns the rolling point emitted by the most recent frame.
    #[must_use]
    pub fn last_point(&self) -> Option<&RollingPoint> {
        self.last_point.as_ref()
    }

    /// Validates and stores a widget change.
    ///
    /// Display attributes (`line_color`, `point_color`, `point_size`) go to
    /// the style; everything else goes to the cycloid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::InvalidParameter`] if the value is rejected.
    /// The controller keeps its last-known-good state.
    pub fn on_parameter_changed(&mut self, field: &str, value: impl Into<ParamValue>) -> Result<()> {
        let value = value.into();
        let outcome = if Style::handles(field) {
            self.style.set(field, &value)
        } else {
            self.params.set(field, &value)
        };
        match outcome {
            Ok(()) => {
                debug!(field, ?value, "parameter updated");
                Ok(())
            }
            Err(err) => {
                warn!(field, ?value, %err, "parameter rejected");
                Err(err.into())
            }
        }
    }

    /// Restarts the run: drive time returns to 0 and the point moves again.
    pub fn reset(&mut self) {
        self.drive_time = 0.0;
        self.last_frame = None;
        self.phase = AnimationPhase::Running;
        self.frozen_at = None;
        self.last_point = None;
    }

    /// Computes the frame for `frame_index`.
    ///
    /// `drive_time = frame_index / tick_rate * speed`, and the path keeps
    /// extending past `frame_count`. With `repeat` set the index wraps around
    /// `frame_count` instead. Either way, an index lower than the previous
    /// one starts a new run.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stored parameters cannot form a curve,
    /// which validation rules out.
    pub fn advance_frame(&mut self, frame_index: u32) -> Result<Frame> {
        let frame = if self.config.repeat {
            frame_index % self.config.frame_count
        } else {
            frame_index
        };
        if self.last_frame.is_some_and(|last| frame < last) {
            info!(frame, "animation restarted");
            self.reset();
        }
        self.last_frame = Some(frame);
        self.drive_time = f64::from(frame) / self.config.tick_rate * self.params.speed();

        let curve = self.params.curve()?;
        let path = self.trace(&curve)?;
        let t = self.rolling_parameter();
        let rolling_point = RollingPoint {
            position: curve.evaluate(t),
            t,
        };
        self.last_point = Some(rolling_point);
        trace!(frame, drive_time = self.drive_time, t, "frame computed");

        Ok(Frame {
            path,
            rolling_point,
            phase: self.phase,
            drive_time: self.drive_time,
            viewport: Viewport {
                x_min: self.params.start_pos(),
                x_max: self.params.end_pos(),
            },
            style: self.style.clone(),
        })
    }

    /// Samples the path over `[0, drive_time]`. A drive time too short to
    /// sample collapses the path to the point at `drive_time`.
    fn trace(&self, curve: &impl Curve) -> Result<Polyline> {
        match SampleDomain::new(0.0, self.drive_time, self.config.path_samples) {
            Ok(domain) => Ok(SampleCurve::new(domain).execute(curve)),
            Err(RouletteError::DegenerateDomain(DomainError::ZeroLength { .. })) => Ok(Polyline {
                points: vec![curve.evaluate(self.drive_time)],
            }),
            Err(err) => Err(err),
        }
    }

    /// Returns `min(drive_time, stop_time)`, moving to the frozen phase the
    /// first time drive time reaches the stop time.
    fn rolling_parameter(&mut self) -> f64 {
        if let Some(t) = self.frozen_at {
            return t;
        }
        let stop_time = self.params.stop_time();
        if self.drive_time < stop_time {
            return self.drive_time;
        }
        info!(stop_time, drive_time = self.drive_time, "rolling point frozen");
        self.phase = AnimationPhase::Frozen;
        self.frozen_at = Some(stop_time);
        stop_time
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn controller(radius: f64, speed: f64, stop_time: f64) -> AnimationController {
        let params = CycloidParams::new(radius, speed, 0.0, 8.0 * PI, stop_time, 0.0).unwrap();
        AnimationController::new(params)
    }

    #[test]
    fn drive_time_follows_frame_and_speed() {
        let mut c = controller(2.0, 1.5, 100.0);
        let frame = c.advance_frame(40).unwrap();
        assert_abs_diff_eq!(frame.drive_time, 40.0 / 20.0 * 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.drive_time(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn path_spans_zero_to_drive_time() {
        let mut c = controller(2.0, 1.0, 100.0);
        let frame = c.advance_frame(60).unwrap();
        assert_eq!(frame.path.len(), 500);
        assert_abs_diff_eq!(*frame.path.first().unwrap(), Point2::origin(), epsilon = 1e-12);

        let head = *frame.path.last().unwrap();
        assert_abs_diff_eq!(head, frame.rolling_point.position, epsilon = 1e-12);
        assert_eq!(frame.phase, AnimationPhase::Running);
    }

    #[test]
    fn first_frame_is_a_single_point() {
        let mut c = controller(2.0, 1.0, 100.0);
        let frame = c.advance_frame(0).unwrap();
        assert_eq!(frame.path.len(), 1);
        assert_abs_diff_eq!(frame.rolling_point.position, Point2::origin(), epsilon = 1e-12);
    }

    #[test]
    fn apex_after_half_turn() {
        // At speed pi, frame 20 lands on drive time pi.
        let mut c = controller(2.0, PI, 100.0);
        let frame = c.advance_frame(20).unwrap();
        assert_abs_diff_eq!(
            frame.rolling_point.position,
            Point2::new(2.0 * PI, 4.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn point_freezes_at_stop_time() {
        let stop = 2.0;
        let mut c = controller(1.0, 1.0, stop);

        // drive_time = 40 / 20 = 2.0 = stop
        let at_stop = c.advance_frame(40).unwrap();
        assert_eq!(at_stop.phase, AnimationPhase::Frozen);

        for frame_index in [41, 60, 120, 499] {
            let frame = c.advance_frame(frame_index).unwrap();
            assert_eq!(frame.phase, AnimationPhase::Frozen);
            assert_eq!(frame.rolling_point, at_stop.rolling_point);
            assert!(frame.path.last().unwrap().x > at_stop.path.last().unwrap().x);
        }
    }

    #[test]
    fn frozen_point_ignores_later_stop_time_changes() {
        let mut c = controller(1.0, 1.0, 1.0);
        let frozen = c.advance_frame(40).unwrap().rolling_point;
        c.on_parameter_changed("stop_time", 50.0).unwrap();
        let frame = c.advance_frame(60).unwrap();
        assert_eq!(frame.rolling_point, frozen);
        assert_eq!(c.phase(), AnimationPhase::Frozen);
    }

    #[test]
    fn lowering_stop_time_while_running_freezes_immediately() {
        let mut c = controller(1.0, 1.0, 100.0);
        c.advance_frame(40).unwrap();
        c.on_parameter_changed("stop_time", 1.0).unwrap();
        let frame = c.advance_frame(41).unwrap();
        assert_eq!(frame.phase, AnimationPhase::Frozen);
        assert_abs_diff_eq!(frame.rolling_point.t, 1.0);
    }

    #[test]
    fn radius_change_redraws_whole_trace() {
        let mut c = controller(1.0, 1.0, 100.0);
        let before = c.advance_frame(80).unwrap();
        c.on_parameter_changed("radius", 3.0).unwrap();
        let after = c.advance_frame(80).unwrap();
        for (a, b) in before.path.points.iter().zip(&after.path.points) {
            assert_abs_diff_eq!(b.y, 3.0 * a.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejected_change_keeps_state() {
        let mut c = controller(2.0, 1.0, 100.0);
        let err = c.on_parameter_changed("radius", -1.0).unwrap_err();
        assert!(matches!(err, RouletteError::InvalidParameter(_)));
        assert_abs_diff_eq!(c.params().radius(), 2.0);

        assert!(c.on_parameter_changed("speed", "fast").is_err());
        assert_abs_diff_eq!(c.params().speed(), 1.0);
    }

    #[test]
    fn style_changes_bypass_numeric_validation() {
        let mut c = AnimationController::default();
        c.on_parameter_changed("line_color", "k").unwrap();
        c.on_parameter_changed("point_size", 14).unwrap();
        let frame = c.advance_frame(10).unwrap();
        assert_eq!(frame.style.line_color, "k");
        assert_abs_diff_eq!(frame.style.point_size, 14.0);
    }

    #[test]
    fn viewport_tracks_positions() {
        let mut c = AnimationController::default();
        c.on_parameter_changed("end_pos", 12.0).unwrap();
        c.on_parameter_changed("start_pos", 2.0).unwrap();
        let frame = c.advance_frame(1).unwrap();
        assert_abs_diff_eq!(frame.viewport.x_min, 2.0);
        assert_abs_diff_eq!(frame.viewport.x_max, 12.0);
    }

    #[test]
    fn frames_past_the_run_keep_extending() {
        let mut c = AnimationController::default();
        let before = c.advance_frame(499).unwrap();
        assert_abs_diff_eq!(before.drive_time, 24.95, epsilon = 1e-12);

        let frame = c.advance_frame(500).unwrap();
        assert_abs_diff_eq!(frame.drive_time, 25.0, epsilon = 1e-12);
        assert_eq!(frame.phase, AnimationPhase::Frozen);
        assert_eq!(frame.path.len(), 500);
        assert!(frame.path.last().unwrap().x > before.path.last().unwrap().x);
    }

    #[test]
    fn tiny_drive_time_keeps_path_on_the_point() {
        let params = CycloidParams::new(2.0, 1e-12, 0.0, 8.0 * PI, 100.0, 0.0).unwrap();
        let mut c = AnimationController::new(params);
        let frame = c.advance_frame(1).unwrap();
        assert!(frame.drive_time > 0.0);
        assert_eq!(frame.path.len(), 1);
        assert_eq!(*frame.path.first().unwrap(), frame.rolling_point.position);
    }

    #[test]
    fn wrapping_frame_index_restarts_the_run() {
        let config = AnimationConfig {
            repeat: true,
            ..AnimationConfig::default()
        };
        let params = CycloidParams::new(1.0, 1.0, 0.0, 8.0 * PI, 1.0, 0.0).unwrap();
        let mut c = AnimationController::with_config(params, config).unwrap();
        c.advance_frame(499).unwrap();
        assert_eq!(c.phase(), AnimationPhase::Frozen);

        // 500 wraps to frame 0.
        let frame = c.advance_frame(500).unwrap();
        assert_eq!(frame.phase, AnimationPhase::Running);
        assert_abs_diff_eq!(frame.drive_time, 0.0);
    }

    #[test]
    fn reset_reenters_running() {
        let mut c = controller(1.0, 1.0, 0.5);
        c.advance_frame(100).unwrap();
        assert_eq!(c.phase(), AnimationPhase::Frozen);
        c.reset();
        assert_eq!(c.phase(), AnimationPhase::Running);
        assert!(c.last_point().is_none());
        let frame = c.advance_frame(5).unwrap();
        assert_eq!(frame.phase, AnimationPhase::Running);
    }

    #[test]
    fn without_repeat_the_path_keeps_growing() {
        let config = AnimationConfig {
            repeat: false,
            ..AnimationConfig::default()
        };
        let params = CycloidParams::default();
        let mut c = AnimationController::with_config(params, config).unwrap();
        let frame = c.advance_frame(1000).unwrap();
        assert_abs_diff_eq!(frame.drive_time, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnimationConfig {
            tick_rate: -1.0,
            ..AnimationConfig::default()
        };
        assert!(AnimationController::with_config(CycloidParams::default(), config).is_err());
    }
}
