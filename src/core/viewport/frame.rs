use crate::core::colouring::kinds::PaletteKind;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::viewport::policy::PrecisionMode;

/// Everything a sampler needs to colour every pixel of one frame independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub pixel_rect: PixelRect,
    pub center: Complex,
    pub zoom: f64,
    pub precision: PrecisionMode,
    pub max_iterations: u32,
    pub palette: PaletteKind,
    pub kind: FractalKind,
    pub julia_c: Complex,
    /// Palette rotation phase in `[0, 1)`.
    pub time_phase: f32,
}
