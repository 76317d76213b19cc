use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex32;
use crate::core::data::double_float::ComplexDoubleFloat;

/// Which operand the sample point binds to in `z <- z^2 + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    #[must_use]
    pub const fn from_julia_flag(is_julia: bool) -> Self {
        if is_julia { Self::Julia } else { Self::Mandelbrot }
    }

    /// Returns `(z0, c)` for a sample point.
    #[must_use]
    pub fn bind(self, sample: Complex32, julia_c: Complex32) -> (Complex32, Complex32) {
        match self {
            Self::Mandelbrot => (Complex32::ZERO, sample),
            Self::Julia => (sample, julia_c),
        }
    }

    #[must_use]
    pub fn bind_extended(
        self,
        sample: ComplexDoubleFloat<f32>,
        julia_c: ComplexDoubleFloat<f32>,
    ) -> (ComplexDoubleFloat<f32>, ComplexDoubleFloat<f32>) {
        match self {
            Self::Mandelbrot => (ComplexDoubleFloat::ZERO, sample),
            Self::Julia => (sample, julia_c),
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
