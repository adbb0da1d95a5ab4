use thiserror::Error;

/// Ways a breakpoint mapping can be malformed. All of them are raised when a
/// mapping is built, never while sampling it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("a mapping needs at least two breakpoints, got {0}")]
    TooFewPoints(usize),

    #[error("{thresholds} thresholds but {outputs} outputs")]
    LengthMismatch { thresholds: usize, outputs: usize },

    #[error("thresholds must be strictly increasing (index {index}: {previous} then {next})")]
    NonIncreasingThresholds {
        index: usize,
        previous: f64,
        next: f64,
    },

    #[error("threshold at index {0} is not finite")]
    NonFiniteThreshold(usize),

    #[error("output {index} (`{found}`) does not have the shape of `{expected}`")]
    TemplateMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("`{0}` is not a colour")]
    InvalidColor(String),

    #[error("a visibility window needs 2 or 3 control points, got {0}")]
    InvalidWindow(usize),
}
