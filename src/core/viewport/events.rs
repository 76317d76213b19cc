use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPoint;
use crate::core::data::shareable_state::ShareableState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchPoints {
    One(ScreenPoint),
    Two(ScreenPoint, ScreenPoint),
}

/// Gesture input, in screen pixels with `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Negative `delta_y` zooms in.
    WheelZoom { position: ScreenPoint, delta_y: f64 },
    PointerDown { position: ScreenPoint },
    PointerMove { position: ScreenPoint },
    PointerUp,
    TouchStart { touches: TouchPoints },
    TouchMove { touches: TouchPoints },
    TouchEnd,
    Resize { width: u32, height: u32 },
}

/// Explicit state overrides from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalCommand {
    ResetView,
    ToggleJulia,
    SetJulia(bool),
    SetJuliaConstant(Complex),
    SetMaxIterations(u32),
    SetPalette(u32),
    SetAutoZoom(bool),
    SetAnimationSpeed(u32),
    ApplyShared(ShareableState),
}
