/// Describes how a solve ended.
///
/// Only [`Status::Converged`] means the value meets the requested tolerance.
/// The other variants still carry a value, so callers must branch on the
/// status rather than assume success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// No finite answer exists; the value is a sentinel.
    Unbounded,

    /// Reached the iteration limit; the value is the last iterate.
    MaxIters,

    /// The derivative estimate vanished or was not finite; the value is the
    /// pre-failure iterate.
    Unstable,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// Reported value of the unknown.
    pub value: T,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<T> Solution<T> {
    /// Creates a solution.
    pub fn new(status: Status, value: T, iters: usize) -> Self {
        Self {
            status,
            value,
            iters,
        }
    }

    /// Creates a converged solution.
    pub fn converged(value: T, iters: usize) -> Self {
        Self::new(Status::Converged, value, iters)
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
