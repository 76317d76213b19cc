use std::f32::consts::LN_2;

use crate::core::data::complex::Complex32;
use crate::core::data::double_float::ComplexDoubleFloat;
use crate::core::fractals::escape_time::errors::EvaluatorError;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Upper bound on iterations regardless of the configured budget.
pub const HARD_ITERATION_CAP: u32 = 2000;

/// Bailout `|z|^2 > 256`, i.e. radius 16.
pub const ESCAPE_RADIUS_SQUARED: f32 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleResult {
    InSet,
    /// `iteration` is the zero-based loop index at which the bailout was first exceeded.
    Escaped { smooth: f32, iteration: u32 },
}

impl SampleResult {
    #[must_use]
    pub fn smooth(&self) -> Option<f32> {
        match self {
            Self::InSet => None,
            Self::Escaped { smooth, .. } => Some(*smooth),
        }
    }

    #[must_use]
    pub fn is_in_set(&self) -> bool {
        matches!(self, Self::InSet)
    }
}

/// Normalized iteration count: `i + 1 - log2(ln(|z|^2) / 2 / ln 2)`.
///
/// Returns `None` when the magnitude cannot produce a finite value.
#[must_use]
pub fn smooth_iteration(iteration: u32, magnitude_squared: f32) -> Option<f32> {
    let log_zn = magnitude_squared.ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;
    let smooth = iteration as f32 + 1.0 - nu;

    smooth.is_finite().then_some(smooth)
}

fn escaped(iteration: u32, magnitude_squared: f32) -> SampleResult {
    match smooth_iteration(iteration, magnitude_squared) {
        Some(smooth) => SampleResult::Escaped { smooth, iteration },
        None => SampleResult::InSet,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
}

impl EscapeTimeEvaluator {
    /// Budgets above [`HARD_ITERATION_CAP`] are capped rather than rejected.
    pub fn new(max_iterations: u32) -> Result<Self, EvaluatorError> {
        if max_iterations == 0 {
            return Err(EvaluatorError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations: max_iterations.min(HARD_ITERATION_CAP),
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn evaluate(&self, kind: FractalKind, sample: Complex32, julia_c: Complex32) -> SampleResult {
        let (z0, c) = kind.bind(sample, julia_c);
        self.escape(z0, c)
    }

    #[must_use]
    pub fn evaluate_extended(
        &self,
        kind: FractalKind,
        sample: ComplexDoubleFloat<f32>,
        julia_c: ComplexDoubleFloat<f32>,
    ) -> SampleResult {
        let (z0, c) = kind.bind_extended(sample, julia_c);
        self.escape_extended(z0, c)
    }

    #[must_use]
    pub fn escape(&self, z0: Complex32, c: Complex32) -> SampleResult {
        if !z0.is_finite() || !c.is_finite() {
            return SampleResult::InSet;
        }

        let mut z = z0;
        for iteration in 0..self.max_iterations {
            z = z.square() + c;

            let magnitude_squared = z.magnitude_squared();
            if magnitude_squared > ESCAPE_RADIUS_SQUARED {
                return escaped(iteration, magnitude_squared);
            }
        }

        SampleResult::InSet
    }

    /// Same control flow as [`Self::escape`]; only the final magnitude is demoted.
    #[must_use]
    pub fn escape_extended(
        &self,
        z0: ComplexDoubleFloat<f32>,
        c: ComplexDoubleFloat<f32>,
    ) -> SampleResult {
        if !z0.is_finite() || !c.is_finite() {
            return SampleResult::InSet;
        }

        let mut z = z0;
        for iteration in 0..self.max_iterations {
            z = z.square().add(c);

            let magnitude_squared = z.magnitude_squared();
            if magnitude_squared > ESCAPE_RADIUS_SQUARED {
                return escaped(iteration, magnitude_squared);
            }
        }

        SampleResult::InSet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator(max_iterations: u32) -> EscapeTimeEvaluator {
        EscapeTimeEvaluator::new(max_iterations).unwrap()
    }

    fn mandelbrot(max_iterations: u32, real: f32, imag: f32) -> SampleResult {
        evaluator(max_iterations).evaluate(
            FractalKind::Mandelbrot,
            Complex32::new(real, imag),
            Complex32::ZERO,
        )
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        assert_eq!(
            EscapeTimeEvaluator::new(0),
            Err(EvaluatorError::ZeroMaxIterations)
        );
    }

    #[test]
    fn budget_is_capped_at_hard_limit() {
        assert_eq!(evaluator(5000).max_iterations(), HARD_ITERATION_CAP);
        assert_eq!(evaluator(150).max_iterations(), 150);
    }

    #[test]
    fn origin_never_escapes() {
        for max_iterations in [1, 2, 150, 1999, 2000] {
            assert_eq!(mandelbrot(max_iterations, 0.0, 0.0), SampleResult::InSet);
        }
    }

    #[test]
    fn far_point_escapes_on_second_step() {
        // z1 = 10+10i (|z|^2 = 200), z2 = 10+210i
        let result = mandelbrot(150, 10.0, 10.0);
        let expected = 2.0 - (44_200_f64.sqrt().log2()).log2();

        match result {
            SampleResult::Escaped { smooth, iteration } => {
                assert_eq!(iteration, 1);
                assert!((f64::from(smooth) - expected).abs() < 1e-4, "smooth={smooth}");
            }
            SampleResult::InSet => panic!("expected (10, 10) to escape"),
        }
    }

    #[test]
    fn real_two_escapes_on_third_step() {
        // 2, 6, 38
        let result = mandelbrot(150, 2.0, 0.0);

        assert!(matches!(result, SampleResult::Escaped { iteration: 2, .. }));
    }

    #[test]
    fn budget_too_small_reports_in_set() {
        assert_eq!(mandelbrot(2, 2.0, 0.0), SampleResult::InSet);
    }

    #[test]
    fn non_finite_sample_is_in_set() {
        assert_eq!(mandelbrot(150, f32::NAN, 0.0), SampleResult::InSet);
        assert_eq!(mandelbrot(150, 0.0, f32::INFINITY), SampleResult::InSet);
    }

    #[test]
    fn non_finite_julia_constant_is_in_set() {
        let result = evaluator(150).evaluate(
            FractalKind::Julia,
            Complex32::new(0.1, 0.1),
            Complex32::new(f32::NAN, 0.0),
        );

        assert_eq!(result, SampleResult::InSet);
    }

    #[test]
    fn overflowing_orbit_is_in_set_rather_than_nan() {
        assert_eq!(mandelbrot(150, 1e30, 1e30), SampleResult::InSet);
    }

    #[test]
    fn julia_binds_sample_as_initial_value() {
        let julia_c = Complex32::new(-0.7, 0.27015);
        let evaluator = evaluator(300);

        let via_kind = evaluator.evaluate(FractalKind::Julia, Complex32::new(1.5, 0.0), julia_c);
        let direct = evaluator.escape(Complex32::new(1.5, 0.0), julia_c);

        assert_eq!(via_kind, direct);
        assert!(!via_kind.is_in_set());
    }

    #[test]
    fn smooth_value_is_continuous_across_iteration_boundary() {
        // Escaping exactly at the bailout, or one squaring later, gives the same value.
        let at_bailout = smooth_iteration(5, 256.0).unwrap();
        let one_step_later = smooth_iteration(6, 256.0 * 256.0).unwrap();

        assert!((at_bailout - one_step_later).abs() < 1e-4);
        assert!((at_bailout - 4.0).abs() < 1e-4);
    }

    #[test]
    fn smooth_value_decreases_as_escape_radius_grows() {
        let mut previous = smooth_iteration(3, 256.5).unwrap();

        for step in 1..200 {
            let magnitude_squared = 256.5 * (1.0 + step as f32 * 0.5);
            let current = smooth_iteration(3, magnitude_squared).unwrap();
            assert!(current < previous, "not decreasing at {magnitude_squared}");
            previous = current;
        }
    }

    #[test]
    fn adjacent_samples_have_no_integer_jumps() {
        let evaluator = evaluator(500);
        let mut previous = None;

        for step in 0..=1650 {
            let real = 0.35 + step as f32 * 0.001;
            let smooth = evaluator
                .evaluate(FractalKind::Mandelbrot, Complex32::new(real, 0.0), Complex32::ZERO)
                .smooth()
                .unwrap();

            if let Some(previous) = previous {
                let delta: f32 = smooth - previous;
                assert!(delta.abs() < 0.5, "jump of {delta} at c={real}");
                assert!(delta < 0.02, "smooth value rose by {delta} at c={real}");
            }
            previous = Some(smooth);
        }
    }

    #[test]
    fn extended_path_matches_single_path_for_shallow_samples() {
        let evaluator = evaluator(500);
        let samples = [
            (0.0, 0.0),
            (-1.0, 0.0),
            (-0.1, 0.1),
            (0.5, 0.5),
            (1.0, 1.0),
            (-2.5, 0.1),
            (10.0, 10.0),
        ];

        for (real, imag) in samples {
            let single = evaluator.evaluate(
                FractalKind::Mandelbrot,
                Complex32::new(real, imag),
                Complex32::ZERO,
            );
            let extended = evaluator.evaluate_extended(
                FractalKind::Mandelbrot,
                ComplexDoubleFloat::from_f64(f64::from(real), f64::from(imag)),
                ComplexDoubleFloat::ZERO,
            );

            match (single, extended) {
                (SampleResult::InSet, SampleResult::InSet) => {}
                (
                    SampleResult::Escaped { smooth: a, iteration: i },
                    SampleResult::Escaped { smooth: b, iteration: j },
                ) => {
                    assert_eq!(i, j, "iteration mismatch at ({real}, {imag})");
                    assert!((a - b).abs() < 1e-3, "smooth mismatch at ({real}, {imag})");
                }
                other => panic!("precision paths disagree at ({real}, {imag}): {other:?}"),
            }
        }
    }

    #[test]
    fn extended_path_rejects_non_finite_input() {
        let result = evaluator(50).escape_extended(
            ComplexDoubleFloat::ZERO,
            ComplexDoubleFloat::from_f64(f64::NAN, 0.0),
        );

        assert_eq!(result, SampleResult::InSet);
    }
}
