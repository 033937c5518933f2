use thiserror::Error;

use engset_core::ParamError;

use crate::{Algorithm, Quantity};

/// Usage errors raised before any numerical work starts.
///
/// Numerical outcomes such as non-convergence are reported through
/// [`Status`](crate::Status), never through this type.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("{algorithm} is not supported when solving for {quantity}")]
    UnsupportedAlgorithm {
        algorithm: Algorithm,
        quantity: Quantity,
    },

    #[error(transparent)]
    Solver(#[from] engset_solvers::Error),
}
