use std::convert::Infallible;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::render_frame::frame_shader::FrameShader;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::escape_time::EvaluatorError;
use crate::core::viewport::frame::FrameParams;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn into_pixel_buffer(
    pixel_rect: PixelRect,
    colours: Vec<Colour>,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut data = Vec::with_capacity(colours.len() * BYTES_PER_PIXEL);
    for colour in colours {
        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    PixelBuffer::from_data(pixel_rect, data)
}

/// Colours every pixel of the frame in parallel, one rayon task per row.
pub fn render_frame(params: &FrameParams) -> Result<PixelBuffer, RenderFrameError> {
    let started = Instant::now();
    let shader = FrameShader::new(*params)?;

    let colours = infallible(generate_fractal_parallel_rayon(params.pixel_rect, &shader));
    let buffer = into_pixel_buffer(params.pixel_rect, colours)?;

    debug!(
        width = params.pixel_rect.width(),
        height = params.pixel_rect.height(),
        precision = %params.precision,
        max_iterations = params.max_iterations,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "rendered frame"
    );

    Ok(buffer)
}

/// Single-threaded reference path; produces the same buffer as [`render_frame`].
pub fn render_frame_serial(params: &FrameParams) -> Result<PixelBuffer, RenderFrameError> {
    let shader = FrameShader::new(*params)?;
    let colours = infallible(generate_fractal_serial(params.pixel_rect, &shader));

    Ok(into_pixel_buffer(params.pixel_rect, colours)?)
}

/// Renders straight into an RGBA surface such as a `pixels` frame.
pub fn render_frame_rgba(params: &FrameParams, target: &mut [u8]) -> Result<(), RenderFrameError> {
    let buffer = render_frame(params)?;
    buffer.copy_into_rgba(target)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colouring::kinds::PaletteKind;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::core::viewport::policy::PrecisionMode;

    fn home_params(width: u32, height: u32) -> FrameParams {
        FrameParams {
            pixel_rect: PixelRect::new(width, height).unwrap(),
            center: Complex::new(-0.5, 0.0),
            zoom: 1.0,
            precision: PrecisionMode::Single,
            max_iterations: 150,
            palette: PaletteKind::Nebula,
            kind: FractalKind::Mandelbrot,
            julia_c: Complex::new(-0.7, 0.27015),
            time_phase: 0.0,
        }
    }

    #[test]
    fn buffer_matches_requested_size() {
        let buffer = render_frame(&home_params(8, 6)).unwrap();

        assert_eq!(buffer.pixel_rect(), PixelRect::new(8, 6).unwrap());
        assert_eq!(buffer.buffer_size(), 8 * 6 * 3);
    }

    #[test]
    fn parallel_and_serial_renders_are_identical() {
        let mut params = home_params(33, 17);
        params.palette = PaletteKind::Inferno;
        params.time_phase = 0.4;

        assert_eq!(render_frame(&params).unwrap(), render_frame_serial(&params).unwrap());
    }

    #[test]
    fn set_interior_renders_near_black() {
        // pixel (4, 3) samples c = (-0.25, -0.25)
        let buffer = render_frame(&home_params(8, 6)).unwrap();

        assert_eq!(buffer.pixel(Point { x: 4, y: 3 }).unwrap(), Colour { r: 5, g: 5, b: 10 });
    }

    #[test]
    fn zero_iteration_budget_is_an_error() {
        let mut params = home_params(4, 4);
        params.max_iterations = 0;

        assert_eq!(
            render_frame(&params),
            Err(RenderFrameError::Evaluator(EvaluatorError::ZeroMaxIterations))
        );
    }

    #[test]
    fn rgba_render_fills_opaque_frame() {
        let params = home_params(5, 4);
        let mut frame = vec![0; 5 * 4 * 4];

        render_frame_rgba(&params, &mut frame).unwrap();

        assert!(frame.chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn rgba_render_rejects_mismatched_frame() {
        let mut frame = vec![0; 10];

        assert!(matches!(
            render_frame_rgba(&home_params(5, 4), &mut frame),
            Err(RenderFrameError::PixelBuffer(PixelBufferError::BoundsMismatch { .. }))
        ));
    }
}
