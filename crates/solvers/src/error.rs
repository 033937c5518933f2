use thiserror::Error;

/// Errors that prevent a solver from starting.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("integer bracket is inverted: lower {lower} exceeds upper {upper}")]
    InvertedBracket { lower: u64, upper: u64 },

    #[error("initial guess must be finite, got {value}")]
    NonFiniteGuess { value: f64 },
}
