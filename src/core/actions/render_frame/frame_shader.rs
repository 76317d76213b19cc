use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colouring::shading::shade;
use crate::core::data::colour::Colour;
use crate::core::data::complex::{Complex, Complex32};
use crate::core::data::double_float::ComplexDoubleFloat;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::{EscapeTimeEvaluator, EvaluatorError, SampleResult};
use crate::core::viewport::frame::FrameParams;
use crate::core::viewport::mapping::{normalized_offset, pixel_centre, pixel_uv};
use crate::core::viewport::policy::PrecisionMode;

/// Colours one pixel of a frame from its [`FrameParams`] alone.
#[derive(Debug, Clone, Copy)]
pub struct FrameShader {
    params: FrameParams,
    evaluator: EscapeTimeEvaluator,
    inverse_zoom: f64,
    center: Complex32,
    center_extended: ComplexDoubleFloat<f32>,
    julia_c: Complex32,
    julia_c_extended: ComplexDoubleFloat<f32>,
}

impl FrameShader {
    pub fn new(params: FrameParams) -> Result<Self, EvaluatorError> {
        let evaluator = EscapeTimeEvaluator::new(params.max_iterations)?;

        Ok(Self {
            params,
            evaluator,
            inverse_zoom: params.zoom.recip(),
            center: Complex32::from_complex(params.center),
            center_extended: ComplexDoubleFloat::from_f64(params.center.real, params.center.imag),
            julia_c: Complex32::from_complex(params.julia_c),
            julia_c_extended: ComplexDoubleFloat::from_f64(params.julia_c.real, params.julia_c.imag),
        })
    }

    fn offset(&self, pixel: Point) -> Complex {
        normalized_offset(pixel_centre(pixel), self.params.pixel_rect).scale(self.inverse_zoom)
    }

    fn single_sample(&self, pixel: Point) -> Complex32 {
        self.center + Complex32::from_complex(self.offset(pixel))
    }

    fn extended_sample(&self, pixel: Point) -> ComplexDoubleFloat<f32> {
        let offset = self.offset(pixel);
        self.center_extended
            .add(ComplexDoubleFloat::from_f64(offset.real, offset.imag))
    }

    #[must_use]
    pub fn sample(&self, pixel: Point) -> SampleResult {
        let kind = self.params.kind;

        match self.params.precision {
            PrecisionMode::Single => {
                self.evaluator
                    .evaluate(kind, self.single_sample(pixel), self.julia_c)
            }
            PrecisionMode::Extended => {
                self.evaluator
                    .evaluate_extended(kind, self.extended_sample(pixel), self.julia_c_extended)
            }
        }
    }

    #[must_use]
    pub fn colour(&self, pixel: Point) -> Colour {
        shade(
            self.sample(pixel),
            self.evaluator.max_iterations(),
            self.params.palette,
            self.params.time_phase,
            pixel_uv(pixel, self.params.pixel_rect),
        )
        .to_colour()
    }
}

impl FractalAlgorithm for FrameShader {
    type Success = Colour;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.colour(pixel))
    }
}
