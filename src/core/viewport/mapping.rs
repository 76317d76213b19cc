use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::{Point, ScreenPoint};

/// World units covered by the viewport height at zoom 1.
pub const VIEW_SPAN: f64 = 3.0;

/// Aspect-corrected offset from the viewport centre, in world units at zoom 1.
#[must_use]
pub fn normalized_offset(position: ScreenPoint, viewport: PixelRect) -> Complex {
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    Complex::new(
        (position.x - width / 2.0) / height * VIEW_SPAN,
        (height / 2.0 - position.y) / height * VIEW_SPAN,
    )
}

#[must_use]
pub fn screen_to_world(
    position: ScreenPoint,
    viewport: PixelRect,
    center: Complex,
    zoom: f64,
) -> Complex {
    center + normalized_offset(position, viewport).scale(zoom.recip())
}

#[must_use]
pub fn pixel_centre(pixel: Point) -> ScreenPoint {
    ScreenPoint::new(f64::from(pixel.x) + 0.5, f64::from(pixel.y) + 0.5)
}

/// Pixel centre in `[0, 1]^2`, used by the vignette.
#[must_use]
pub fn pixel_uv(pixel: Point, viewport: PixelRect) -> [f32; 2] {
    let centre = pixel_centre(pixel);
    [
        (centre.x / f64::from(viewport.width())) as f32,
        (centre.y / f64::from(viewport.height())) as f32,
    ]
}
