use thiserror::Error;

/// Default iteration budget shared by every solver.
pub const DEFAULT_MAX_ITERS: usize = 1024;

/// Default error tolerance, `2^-24`.
pub const DEFAULT_TOL: f64 = 1.0 / 16_777_216.0;

/// Iteration budget and tolerance for a single solve.
///
/// The same `tol` serves three purposes: the convergence threshold of each
/// root finder, the early-exit threshold of the series evaluation, and the
/// finite-difference step used by Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least one")]
    MaxIters,

    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: DEFAULT_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is not a finite,
    /// strictly positive number.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the error tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1024);
        assert_relative_eq!(config.tol(), 2.0_f64.powi(-24));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, -1e-6), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tol));
    }

    #[test]
    fn accepts_custom_values() {
        let config = Config::new(16, 1e-9).expect("valid config");
        assert_eq!(config.max_iters(), 16);
        assert_relative_eq!(config.tol(), 1e-9);
    }
}
