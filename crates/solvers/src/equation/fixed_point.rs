//! Fixed-point iteration `x ← g(x)`.
//!
//! Converges when successive iterates differ by at most the tolerance. There
//! is no convergence guarantee: an iteration that diverges or oscillates runs
//! until the budget is exhausted and reports [`Status::MaxIters`], exactly as
//! a slowly converging one would.

use engset_core::{Config, Observer, Solution, Status};

use crate::Error;

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the latest iterate.
    StopEarly,
}

/// Iteration event emitted by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the map was applied to.
    pub x: f64,
    /// Result of applying the map.
    pub next: f64,
}

/// Iterates `map` from `initial_guess` until it reaches a fixed point.
///
/// # Errors
///
/// Returns an error if `initial_guess` is not finite.
///
/// # Examples
///
/// ```
/// use engset_core::{Config, Status};
/// use engset_solvers::equation::fixed_point;
///
/// let solution = fixed_point::solve(f64::cos, 1.0, &Config::default(), ()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.value - 0.739_085_133).abs() < 1e-6);
/// ```
pub fn solve<F, Obs>(
    mut map: F,
    initial_guess: f64,
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

    let mut x = initial_guess;
    for iter in 1..=config.max_iters() {
        let next = map(x);

        let event = Event { iter, x, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, next, iter));
        }

        if (x - next).abs() <= config.tol() {
            return Ok(Solution::converged(next, iter));
        }
        x = next;
    }

    Ok(Solution::new(Status::MaxIters, x, config.max_iters()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_fixed_point_of_contraction() {
        // x = x / 2 + 1 has its fixed point at 2.
        let solution =
            solve(|x| 0.5 * x + 1.0, 0.0, &Config::default(), ()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.value, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn divergence_reports_max_iters() {
        let config = Config::new(20, 1e-9).expect("valid config");
        let solution = solve(|x| 2.0 * x + 1.0, 0.0, &config, ()).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 20);
        // Iterates are 2^k - 1.
        assert_relative_eq!(solution.value, 1_048_575.0);
    }

    #[test]
    fn oscillation_reports_max_iters() {
        let config = Config::new(7, 1e-9).expect("valid config");
        let solution = solve(|x| 1.0 - x, 0.25, &config, ()).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.value, 0.75);
    }

    #[test]
    fn converged_value_is_latest_iterate() {
        let config = Config::new(10, 0.3).expect("valid config");
        // 0 -> 1 -> 1.5 -> 1.75: the last step is within tolerance.
        let solution = solve(|x| 0.5 * x + 1.0, 0.0, &config, ()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.value, 1.75);
    }

    #[test]
    fn observer_sees_each_step() {
        let mut steps = Vec::new();
        let observer = |event: &Event| {
            steps.push((event.x, event.next));
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution =
            solve(|x| 0.5 * x + 1.0, 0.0, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_relative_eq!(solution.value, 1.5);
        assert_eq!(steps, vec![(0.0, 1.0), (1.0, 1.5)]);
    }

    #[test]
    fn rejects_non_finite_guess() {
        let result = solve(|x| x, f64::NAN, &Config::default(), ());
        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }
}
