use std::fmt;

/// Root-finding algorithm used to solve for the unknown quantity.
///
/// Not every algorithm applies to every quantity:
///
/// | quantity             | supported                         | default     |
/// |----------------------|-----------------------------------|-------------|
/// | blocking probability | bisection, fixed point, Newton    | Newton      |
/// | number of servers    | bisection                         | bisection   |
/// | number of sources    | bisection                         | bisection   |
/// | total traffic        | bisection, Newton                 | bisection   |
///
/// The iterative variants accept an optional initial guess; `None` uses the
/// quantity's default starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Bisection over a bracket known to contain the answer.
    Bisection,

    /// Fixed-point iteration. Can be unstable; use at your own risk.
    FixedPoint { initial_guess: Option<f64> },

    /// Newton's method with a finite-difference derivative.
    Newton { initial_guess: Option<f64> },
}

impl Algorithm {
    /// Fixed-point iteration from the default initial guess.
    #[must_use]
    pub const fn fixed_point() -> Self {
        Self::FixedPoint {
            initial_guess: None,
        }
    }

    /// Newton's method from the default initial guess.
    #[must_use]
    pub const fn newton() -> Self {
        Self::Newton {
            initial_guess: None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bisection => f.write_str("bisection"),
            Self::FixedPoint { .. } => f.write_str("fixed-point iteration"),
            Self::Newton { .. } => f.write_str("Newton's method"),
        }
    }
}

/// The unknown being solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    BlockingProb,
    Servers,
    Sources,
    TotalTraffic,
}

impl Quantity {
    /// Returns the algorithm used when the caller does not pick one.
    #[must_use]
    pub const fn default_algorithm(self) -> Algorithm {
        match self {
            Self::BlockingProb => Algorithm::newton(),
            Self::Servers | Self::Sources | Self::TotalTraffic => Algorithm::Bisection,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockingProb => f.write_str("blocking probability"),
            Self::Servers => f.write_str("number of servers"),
            Self::Sources => f.write_str("number of sources"),
            Self::TotalTraffic => f.write_str("total traffic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_quantity() {
        assert_eq!(Quantity::BlockingProb.default_algorithm(), Algorithm::newton());
        assert_eq!(Quantity::Servers.default_algorithm(), Algorithm::Bisection);
        assert_eq!(Quantity::Sources.default_algorithm(), Algorithm::Bisection);
        assert_eq!(Quantity::TotalTraffic.default_algorithm(), Algorithm::Bisection);
    }
}
