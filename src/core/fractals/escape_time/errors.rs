use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}
