//! Bisection on a decreasing residual.
//!
//! # Algorithm
//!
//! Each iteration takes the midpoint of the bracket. If half the bracket
//! width is within tolerance the midpoint is returned; otherwise the residual
//! is evaluated there. A negative residual moves the right bound to the
//! midpoint, anything else moves the left bound.
//!
//! The residual is assumed to be decreasing across the bracket, i.e.
//! non-negative at the left bound and negative at the right bound. Nothing
//! checks this: a bracket without a sign change simply collapses onto one of
//! its ends.
//!
//! # Bracket expansion
//!
//! When only a lower bound is known, [`expand_upper`] doubles a starting upper
//! bound until an increasing function reaches a target. Its probes count
//! against the same iteration budget, and [`solve_after`] resumes the count
//! where the expansion left off.

mod bounds;

use engset_core::{Config, Observer, Solution, Status};

use crate::{Error, Expansion};

use bounds::Bounds;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, including iterations spent before bisection began.
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds the root of a decreasing residual within `bracket`.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has zero width.
///
/// # Examples
///
/// ```
/// use engset_core::{Config, Status};
/// use engset_solvers::equation::bisection;
///
/// let solution = bisection::solve(|x: f64| 2.0 - x * x, [0.0, 2.0], &Config::default(), ())
///     .unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.value - 2.0_f64.sqrt()).abs() < 1e-6);
/// ```
pub fn solve<F, Obs>(
    residual: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    solve_after(0, residual, bracket, config, observer)
}

/// Continues a bisection whose first `spent` iterations were used elsewhere.
///
/// The iteration counter starts at `spent + 1`. If `spent` already meets the
/// budget, the bracket midpoint is returned with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has zero width.
pub fn solve_after<F, Obs>(
    spent: usize,
    mut residual: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut bounds = Bounds::new(bracket)?;
    let mut mid = bounds.midpoint();

    for iter in spent + 1..=config.max_iters() {
        mid = bounds.midpoint();
        if bounds.half_width() <= config.tol() {
            return Ok(Solution::converged(mid, iter));
        }

        let value = residual(mid);

        let event = Event {
            iter,
            bracket: bounds.as_array(),
            x: mid,
            residual: value,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, mid, iter));
        }

        if value < 0.0 {
            bounds.right = mid;
        } else {
            bounds.left = mid;
        }
    }

    Ok(Solution::new(Status::MaxIters, mid, config.max_iters()))
}

/// Doubles the upper bound until `value(upper) >= target`.
///
/// `value` must be increasing. The first probe is at `bracket[1]`; each probe
/// consumes one iteration of the budget.
pub fn expand_upper<F>(
    mut value: F,
    target: f64,
    bracket: [f64; 2],
    config: &Config,
) -> Expansion<f64>
where
    F: FnMut(f64) -> f64,
{
    let [lower, mut upper] = bracket;

    for iter in 1..=config.max_iters() {
        if value(upper) >= target {
            return Expansion::Bracketed {
                bracket: [lower, upper],
                iters: iter,
            };
        }
        upper *= 2.0;
    }

    Expansion::Exhausted {
        upper,
        iters: config.max_iters(),
    }
}
