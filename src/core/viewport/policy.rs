use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::viewport::limits::ViewportLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrecisionMode {
    #[default]
    Single,
    Extended,
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

#[must_use]
pub fn precision_for(zoom: f64, limits: &ViewportLimits) -> PrecisionMode {
    if zoom > limits.extended_precision_zoom {
        PrecisionMode::Extended
    } else {
        PrecisionMode::Single
    }
}

/// `clamp(floor(100 + log10(zoom) * 50), 100, 2000)` with the default limits.
#[must_use]
pub fn iteration_budget(zoom: f64, limits: &ViewportLimits) -> u32 {
    let floor = limits.base_iterations;
    let ceiling = limits.max_iterations.max(floor);

    if !zoom.is_finite() || zoom <= 0.0 {
        return floor;
    }

    let raw = (f64::from(limits.base_iterations) + zoom.log10() * limits.iterations_per_decade).floor();
    raw.clamp(f64::from(floor), f64::from(ceiling)) as u32
}

/// Human-readable magnification, e.g. `1.0e6×`.
#[must_use]
pub fn depth_label(zoom: f64) -> String {
    format!("{zoom:.1e}×")
}
