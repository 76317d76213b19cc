use std::time::Duration;

use tracing::debug;

use crate::core::viewport::limits::{AutoZoomLimits, ViewportLimits};

/// Fixed-rate zoom-in driver; excess backlog beyond `max_ticks_per_update` is dropped.
#[derive(Debug, Clone)]
pub struct AutoZoomDriver {
    limits: AutoZoomLimits,
    accumulator_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoZoomResult {
    pub state_changed: bool,
    pub ticks_run: u32,
    pub target_zoom: f64,
}

impl AutoZoomDriver {
    #[must_use]
    pub fn new(limits: AutoZoomLimits) -> Self {
        Self {
            limits,
            accumulator_secs: 0.0,
        }
    }

    #[must_use]
    pub fn step_factor(&self, animation_speed: u32) -> f64 {
        1.0 + f64::from(animation_speed) * self.limits.zoom_step_per_speed
    }

    pub fn advance(
        &mut self,
        elapsed: Duration,
        animation_speed: u32,
        target_zoom: f64,
        viewport_limits: &ViewportLimits,
    ) -> AutoZoomResult {
        let dt = self.limits.dt();
        if !dt.is_finite() || dt <= 0.0 {
            return AutoZoomResult {
                state_changed: false,
                ticks_run: 0,
                target_zoom,
            };
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt).floor();
        let max_ticks = f64::from(self.limits.max_ticks_per_update);
        let ticks_run = ticks_available.min(max_ticks) as u32;
        let dropped_excess = ticks_available > max_ticks;

        let factor = self.step_factor(animation_speed);
        let mut zoom = target_zoom;
        for _ in 0..ticks_run {
            zoom = viewport_limits.clamp_zoom(zoom * factor);
        }

        if dropped_excess {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs -= f64::from(ticks_run) * dt;
            if self.accumulator_secs < 0.0 {
                self.accumulator_secs = 0.0;
            }
        }

        if ticks_run > 0 {
            debug!(ticks_run, target_zoom = zoom, dropped_excess, "auto-zoom advanced");
        }

        AutoZoomResult {
            state_changed: zoom != target_zoom,
            ticks_run,
            target_zoom: zoom,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }
}
