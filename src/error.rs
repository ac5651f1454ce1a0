use thiserror::Error;

/// Errors raised by configuration and by [`BreakEngine::search`](crate::engine::BreakEngine::search).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakError {
    #[error(
        "no feasible line breaks for target width {target_width} and tolerance {tolerance}; \
         increase the tolerance or the target width (expect looser spacing)"
    )]
    InfeasibleParameters { target_width: f64, tolerance: f64 },

    #[error("target width must be a finite number greater than zero, got {0}")]
    InvalidTargetWidth(f64),

    #[error("tolerance must be a finite number no less than zero, got {0}")]
    InvalidTolerance(f64),

    #[error("spacing parameter `{0}` must be a finite number greater than zero, got {1}")]
    InvalidSpacing(&'static str, f64),
}
