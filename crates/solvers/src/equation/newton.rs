//! Newton's method with a finite-difference derivative.
//!
//! # Algorithm
//!
//! At iterate `x` the derivative is estimated by a forward difference with
//! step `h`, and the next iterate is `x - r(x) / r'(x)`. The [`Scale`] picks
//! both the step and the convergence test:
//!
//! - [`Scale::Absolute`]: `h = tol`, converged when `|Δx| <= tol`
//! - [`Scale::Relative`]: `h = x * tol`, converged when `|Δx| / |x_new| <= tol`
//!
//! A derivative estimate that is zero (or not finite) cannot produce a step,
//! so the solver stops with [`Status::Unstable`] and reports the iterate it
//! was unable to move from.

use engset_core::{Config, Observer, Solution, Status};

use crate::Error;

/// How step sizes and convergence are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Step and convergence in absolute units of `x`.
    Absolute,
    /// Step and convergence relative to the magnitude of `x`.
    Relative,
}

impl Scale {
    fn step(self, x: f64, tol: f64) -> f64 {
        match self {
            Self::Absolute => tol,
            Self::Relative => x * tol,
        }
    }

    fn change(self, x: f64, next: f64) -> f64 {
        match self {
            Self::Absolute => (x - next).abs(),
            Self::Relative => (x - next).abs() / next.abs(),
        }
    }
}

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current iterate.
    pub x: f64,
    /// Residual at the current iterate.
    pub residual: f64,
    /// Finite-difference derivative estimate at the current iterate.
    pub derivative: f64,
}

/// Finds a root of `residual` starting from `initial_guess`.
///
/// # Errors
///
/// Returns an error if `initial_guess` is not finite.
///
/// # Examples
///
/// ```
/// use engset_core::{Config, Status};
/// use engset_solvers::equation::newton::{self, Scale};
///
/// let solution = newton::solve(
///     |x: f64| x * x - 2.0,
///     1.0,
///     Scale::Absolute,
///     &Config::default(),
///     (),
/// )
/// .unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.value - 2.0_f64.sqrt()).abs() < 1e-6);
/// ```
pub fn solve<F, Obs>(
    mut residual: F,
    initial_guess: f64,
    scale: Scale,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess {
            value: initial_guess,
        });
    }

    let tol = config.tol();
    let mut x = initial_guess;
    for iter in 1..=config.max_iters() {
        let h = scale.step(x, tol);
        let value = residual(x);
        let derivative = (residual(x + h) - value) / h;

        let event = Event {
            iter,
            x,
            residual: value,
            derivative,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, iter));
        }

        #[allow(clippy::float_cmp)]
        if derivative == 0.0 || !derivative.is_finite() {
            return Ok(Solution::new(Status::Unstable, x, iter));
        }

        let next = x - value / derivative;
        if scale.change(x, next) <= tol {
            return Ok(Solution::converged(next, iter));
        }
        x = next;
    }

    Ok(Solution::new(Status::MaxIters, x, config.max_iters()))
}
