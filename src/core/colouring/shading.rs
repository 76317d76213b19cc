use crate::core::colouring::kinds::PaletteKind;
use crate::core::colouring::palette::CosinePalette;
use crate::core::data::colour::Rgb;
use crate::core::fractals::escape_time::SampleResult;

/// Near-black rather than black so the set keeps a faint depth cue.
pub const IN_SET_COLOUR: Rgb = Rgb::new(0.02, 0.02, 0.04);

const GLOW_STRENGTH: f32 = 0.1;
const GLOW_FALLOFF: f32 = 0.1;
const CONTRAST_EXPONENT: f32 = 0.8;
const VIGNETTE_STRENGTH: f32 = 0.3;

/// Fractional part wrapped to `[0, 1)`, including for negative input.
#[must_use]
pub fn fract(value: f32) -> f32 {
    let wrapped = value - value.floor();
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[must_use]
pub fn normalize(smooth: f32, max_iterations: u32, time_offset: f32) -> f32 {
    let t = smooth / max_iterations.max(1) as f32;
    let wrapped = fract(t + time_offset);

    if wrapped.is_finite() { wrapped } else { 0.0 }
}

fn vignette(uv: [f32; 2]) -> f32 {
    let dx = uv[0] - 0.5;
    let dy = uv[1] - 0.5;
    1.0 - VIGNETTE_STRENGTH * (dx * dx + dy * dy)
}

/// Full per-pixel colouring: palette, glow and contrast for escaped samples,
/// then the vignette for every sample. `uv` is the pixel position in `[0, 1]^2`.
#[must_use]
pub fn shade(
    result: SampleResult,
    max_iterations: u32,
    palette: PaletteKind,
    time_offset: f32,
    uv: [f32; 2],
) -> Rgb {
    let base = match result {
        SampleResult::InSet => IN_SET_COLOUR,
        SampleResult::Escaped { smooth, .. } => {
            let t = normalize(smooth, max_iterations, time_offset);
            let glow = GLOW_STRENGTH / (1.0 + GLOW_FALLOFF * smooth.max(0.0));

            CosinePalette::for_kind(palette)
                .sample(t)
                .map(|channel| (channel + glow).clamp(0.0, 1.0).powf(CONTRAST_EXPONENT))
        }
    };

    let darken = vignette(uv);
    base.map(|channel| channel * darken)
}
