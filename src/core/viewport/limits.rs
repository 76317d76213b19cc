use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fractals::escape_time::HARD_ITERATION_CAP;

/// A tunable outside the range the engine can run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct InvalidLimit {
    pub field: &'static str,
    pub reason: &'static str,
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), InvalidLimit> {
    if ok { Ok(()) } else { Err(InvalidLimit { field, reason }) }
}

/// Tunables for easing, inertia, gesture zoom and the depth policies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    /// Easing factor per millisecond of frame time.
    pub lerp_rate_per_ms: f64,
    pub inertia_decay: f64,
    pub inertia_threshold: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub extended_precision_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub base_iterations: u32,
    pub iterations_per_decade: f64,
    pub max_iterations: u32,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            lerp_rate_per_ms: 0.005,
            inertia_decay: 0.85,
            inertia_threshold: 0.01,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            extended_precision_zoom: 1e6,
            min_zoom: 1e-2,
            max_zoom: 1e15,
            base_iterations: 100,
            iterations_per_decade: 50.0,
            max_iterations: HARD_ITERATION_CAP,
        }
    }
}

impl ViewportLimits {
    pub fn validate(&self) -> Result<(), InvalidLimit> {
        check(
            self.lerp_rate_per_ms.is_finite() && self.lerp_rate_per_ms > 0.0,
            "lerp_rate_per_ms",
            "must be finite and positive",
        )?;
        check(
            self.inertia_decay > 0.0 && self.inertia_decay < 1.0,
            "inertia_decay",
            "must lie strictly between 0 and 1",
        )?;
        check(
            self.inertia_threshold.is_finite() && self.inertia_threshold > 0.0,
            "inertia_threshold",
            "must be finite and positive",
        )?;
        check(
            self.zoom_in_factor.is_finite() && self.zoom_in_factor > 1.0,
            "zoom_in_factor",
            "must be finite and greater than 1",
        )?;
        check(
            self.zoom_out_factor > 0.0 && self.zoom_out_factor < 1.0,
            "zoom_out_factor",
            "must lie strictly between 0 and 1",
        )?;
        check(
            !self.extended_precision_zoom.is_nan() && self.extended_precision_zoom > 0.0,
            "extended_precision_zoom",
            "must be positive",
        )?;
        check(
            self.min_zoom.is_finite() && self.min_zoom > 0.0,
            "min_zoom",
            "must be finite and positive",
        )?;
        check(
            self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom,
            "max_zoom",
            "must be finite and at least min_zoom",
        )?;
        check(
            self.iterations_per_decade.is_finite() && self.iterations_per_decade >= 0.0,
            "iterations_per_decade",
            "must be finite and non-negative",
        )?;
        check(self.base_iterations >= 1, "base_iterations", "must be at least 1")?;
        check(
            (self.base_iterations..=HARD_ITERATION_CAP).contains(&self.max_iterations),
            "max_iterations",
            "must lie between base_iterations and 2000",
        )
    }

    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoZoomLimits {
    pub tick_hz: u32,
    pub max_ticks_per_update: u32,
    /// Fractional zoom increase per tick for each unit of animation speed.
    pub zoom_step_per_speed: f64,
}

impl AutoZoomLimits {
    pub fn validate(&self) -> Result<(), InvalidLimit> {
        check(self.tick_hz >= 1, "tick_hz", "must be at least 1")?;
        check(
            self.max_ticks_per_update >= 1,
            "max_ticks_per_update",
            "must be at least 1",
        )?;
        check(
            self.zoom_step_per_speed.is_finite() && self.zoom_step_per_speed > 0.0,
            "zoom_step_per_speed",
            "must be finite and positive",
        )
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }
}

impl Default for AutoZoomLimits {
    fn default() -> Self {
        Self {
            tick_hz: 20,
            max_ticks_per_update: 10,
            zoom_step_per_speed: 0.01,
        }
    }
}
