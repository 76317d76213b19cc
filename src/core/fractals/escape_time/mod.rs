pub mod algorithm;
pub mod errors;

pub use algorithm::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeEvaluator, HARD_ITERATION_CAP, SampleResult,
    smooth_iteration,
};
pub use errors::EvaluatorError;
