/// Outcome of growing an upper bound until it brackets a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expansion<T> {
    /// The target lies within `bracket`.
    Bracketed {
        /// Lower and upper bounds, in that order.
        bracket: [T; 2],
        /// Iterations consumed while growing the bound.
        iters: usize,
    },

    /// Successive probes stopped changing before the target was reached.
    Stalled {
        /// Last probed upper bound.
        upper: T,
        /// Iterations consumed while growing the bound.
        iters: usize,
    },

    /// The iteration budget ran out before the target was reached.
    Exhausted {
        /// Upper bound when the budget ran out.
        upper: T,
        /// Iterations consumed while growing the bound.
        iters: usize,
    },
}

impl<T> Expansion<T> {
    /// Returns the number of iterations consumed.
    #[must_use]
    pub fn iters(&self) -> usize {
        match self {
            Self::Bracketed { iters, .. }
            | Self::Stalled { iters, .. }
            | Self::Exhausted { iters, .. } => *iters,
        }
    }
}
