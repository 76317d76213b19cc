use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.7, 0.27015);
pub const MIN_ANIMATION_SPEED: u32 = 1;
pub const MAX_ANIMATION_SPEED: u32 = 10;

/// User-facing fractal settings; the controller sanitizes every write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalState {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub colour_palette: u32,
    pub is_julia: bool,
    pub julia_c: Complex,
    pub auto_zoom: bool,
    pub animation_speed: u32,
}

impl Default for FractalState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_palette: 0,
            is_julia: false,
            julia_c: DEFAULT_JULIA_C,
            auto_zoom: false,
            animation_speed: MIN_ANIMATION_SPEED,
        }
    }
}

/// Animated camera: `center`/`zoom` chase `target_center`/`target_zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub zoom: f64,
    pub target_center: Complex,
    pub target_zoom: f64,
}

impl ViewState {
    #[must_use]
    pub fn at(center: Complex, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            target_center: center,
            target_zoom: zoom,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.center == self.target_center && self.zoom == self.target_zoom
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::at(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}
