use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work; pixels share no mutable state, so the output is
/// identical to [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = pixel_rect.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
