//! Bisection over integers.
//!
//! Both searches assume a monotone predicate and narrow `[lo, hi]` until the
//! bounds meet:
//!
//! - [`lower_bound`] finds the smallest `x` for which the predicate holds,
//!   assuming it is false below some point and true from there on. Midpoints
//!   round down; a true predicate moves `hi` to the midpoint, a false one
//!   moves `lo` past it.
//! - [`upper_bound`] finds the largest `x` for which the predicate holds,
//!   assuming it is true up to some point and false beyond. Midpoints round
//!   up; a true predicate moves `lo` to the midpoint, a false one moves `hi`
//!   below it.
//!
//! If the predicate never switches inside the bracket, the search ends on the
//! bracket edge it was pushed toward.
//!
//! [`expand_upper`] grows an unknown upper bound by doubling and detects
//! functions that level off below their target.

use engset_core::{Config, Observer, Solution, Status};

use crate::{Error, Expansion};

/// Control actions supported by the integer solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the integer solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Iteration counter, including iterations spent before bisection began.
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [u64; 2],
    /// The midpoint that was tested.
    pub x: u64,
    /// Whether the predicate held at the midpoint.
    pub holds: bool,
}

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

/// Finds the smallest `x` in `bracket` for which `predicate(x)` holds.
///
/// # Errors
///
/// Returns an error if `bracket[0] > bracket[1]`.
///
/// # Examples
///
/// ```
/// use engset_core::{Config, Status};
/// use engset_solvers::integer;
///
/// let solution = integer::lower_bound(|x| x * x >= 50, [0, 100], &Config::default(), ())
///     .unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert_eq!(solution.value, 8);
/// ```
pub fn lower_bound<F, Obs>(
    predicate: F,
    bracket: [u64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<u64>, Error>
where
    F: FnMut(u64) -> bool,
    Obs: Observer<Event, Action>,
{
    search(Bound::Lower, 0, predicate, bracket, config, observer)
}

/// Finds the largest `x` in `bracket` for which `predicate(x)` holds.
///
/// # Errors
///
/// Returns an error if `bracket[0] > bracket[1]`.
pub fn upper_bound<F, Obs>(
    predicate: F,
    bracket: [u64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<u64>, Error>
where
    F: FnMut(u64) -> bool,
    Obs: Observer<Event, Action>,
{
    upper_bound_after(0, predicate, bracket, config, observer)
}

/// Continues an [`upper_bound`] search whose first `spent` iterations were
/// used elsewhere, typically by [`expand_upper`].
///
/// # Errors
///
/// Returns an error if `bracket[0] > bracket[1]`.
pub fn upper_bound_after<F, Obs>(
    spent: usize,
    predicate: F,
    bracket: [u64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<u64>, Error>
where
    F: FnMut(u64) -> bool,
    Obs: Observer<Event, Action>,
{
    search(Bound::Upper, spent, predicate, bracket, config, observer)
}

fn search<F, Obs>(
    bound: Bound,
    spent: usize,
    mut predicate: F,
    bracket: [u64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<u64>, Error>
where
    F: FnMut(u64) -> bool,
    Obs: Observer<Event, Action>,
{
    let [mut lo, mut hi] = bracket;
    if lo > hi {
        return Err(Error::InvertedBracket {
            lower: lo,
            upper: hi,
        });
    }

    let mut mid = lo;
    for iter in spent + 1..=config.max_iters() {
        if lo == hi {
            return Ok(Solution::converged(lo, iter));
        }

        // Overflow-free forms of floor((lo + hi) / 2) and ceil((lo + hi) / 2).
        mid = match bound {
            Bound::Lower => lo + (hi - lo) / 2,
            Bound::Upper => lo + (hi - lo).div_ceil(2),
        };
        let holds = predicate(mid);

        let event = Event {
            iter,
            bracket: [lo, hi],
            x: mid,
            holds,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, mid, iter));
        }

        match (bound, holds) {
            (Bound::Lower, true) => hi = mid,
            (Bound::Lower, false) => lo = mid + 1,
            (Bound::Upper, true) => lo = mid,
            (Bound::Upper, false) => hi = mid - 1,
        }
    }

    Ok(Solution::new(Status::MaxIters, mid, config.max_iters()))
}

/// Doubles the upper bound until `value(upper) >= target`.
///
/// The first probe is at `bracket[1]`; each probe consumes one iteration of
/// the budget. Growth is judged to have stalled, and the search reports
/// [`Expansion::Stalled`], when two successive probes differ by no more than
/// `tol` relative to the latest one, or when the bound can no longer double
/// within `u64`.
pub fn expand_upper<F>(
    mut value: F,
    target: f64,
    bracket: [u64; 2],
    config: &Config,
) -> Expansion<u64>
where
    F: FnMut(u64) -> f64,
{
    let [lower, mut upper] = bracket;
    let mut prev = f64::NAN;

    for iter in 1..=config.max_iters() {
        let current = value(upper);
        if current >= target {
            return Expansion::Bracketed {
                bracket: [lower, upper],
                iters: iter,
            };
        }
        if (current - prev).abs() <= current.abs() * config.tol() {
            return Expansion::Stalled { upper, iters: iter };
        }
        prev = current;

        match upper.checked_mul(2) {
            Some(next) => upper = next,
            None => return Expansion::Stalled { upper, iters: iter },
        }
    }

    Expansion::Exhausted {
        upper,
        iters: config.max_iters(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_finds_first_true() {
        for threshold in 0..=20 {
            let solution = lower_bound(|x| x >= threshold, [0, 20], &Config::default(), ())
                .expect("should solve");
            assert_eq!(solution.status, Status::Converged);
            assert_eq!(solution.value, threshold);
        }
    }

    #[test]
    fn upper_bound_finds_last_true() {
        for threshold in 0..=20 {
            let solution = upper_bound(|x| x <= threshold, [0, 20], &Config::default(), ())
                .expect("should solve");
            assert_eq!(solution.status, Status::Converged);
            assert_eq!(solution.value, threshold);
        }
    }

    #[test]
    fn never_true_ends_on_upper_edge() {
        let solution =
            lower_bound(|_| false, [1, 9], &Config::default(), ()).expect("should solve");
        assert_eq!(solution.value, 9);

        let solution =
            upper_bound(|_| false, [1, 9], &Config::default(), ()).expect("should solve");
        assert_eq!(solution.value, 1);
    }

    #[test]
    fn single_point_bracket_converges_immediately() {
        let solution =
            lower_bound(|_| true, [4, 4], &Config::default(), ()).expect("should solve");
        assert_eq!(solution, Solution::converged(4, 1));
    }

    #[test]
    fn counts_iterations_after_spent() {
        // Bracket [0, 4] with threshold 2: midpoints 2, 3, then lo == hi.
        let solution = upper_bound_after(5, |x| x <= 2, [0, 4], &Config::default(), ())
            .expect("should solve");
        assert_eq!(solution, Solution::converged(2, 8));
    }

    #[test]
    fn reports_max_iters_with_last_midpoint() {
        let config = Config::new(2, 1e-9).expect("valid config");
        let solution = lower_bound(|x| x >= 70, [0, 100], &config, ()).expect("should run");

        // Midpoints: 50 (false), 75 (true).
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.value, 75);
    }

    #[test]
    fn handles_extreme_bounds() {
        let solution = upper_bound(|x| x <= u64::MAX - 1, [0, u64::MAX], &Config::default(), ())
            .expect("should solve");
        assert_eq!(solution.value, u64::MAX - 1);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut seen = Vec::new();
        let observer = |event: &Event| {
            seen.push((event.x, event.holds));
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution =
            lower_bound(|x| x >= 70, [0, 100], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.value, 75);
        assert_eq!(seen, vec![(50, false), (75, true)]);
    }

    #[test]
    fn errors_on_inverted_bracket() {
        let result = lower_bound(|_| true, [5, 2], &Config::default(), ());
        assert_eq!(
            result,
            Err(Error::InvertedBracket {
                lower: 5,
                upper: 2
            })
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn expand_brackets_growing_function() {
        let expansion = expand_upper(|n| n as f64, 20.0, [3, 6], &Config::default());

        // Probes at 6, 12, 24.
        assert_eq!(
            expansion,
            Expansion::Bracketed {
                bracket: [3, 24],
                iters: 3
            }
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn expand_detects_levelling_off() {
        // 1 - 1/n approaches 1 but never reaches the target of 1.
        let config = Config::new(1024, 1e-3).expect("valid config");
        let expansion = expand_upper(|n| 1.0 - 1.0 / n as f64, 1.0, [1, 2], &config);

        assert!(matches!(expansion, Expansion::Stalled { .. }));
        assert!(expansion.iters() < 20);
    }

    #[test]
    fn expand_stalls_on_overflow() {
        let expansion = expand_upper(
            |n| if n % 2 == 0 { 0.0 } else { 1.0 },
            2.0,
            [1, u64::MAX / 2 + 1],
            &Config::default(),
        );

        assert_eq!(
            expansion,
            Expansion::Stalled {
                upper: u64::MAX / 2 + 1,
                iters: 1
            }
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn expand_counts_against_budget() {
        let config = Config::new(4, 1e-12).expect("valid config");
        let expansion = expand_upper(|n| n as f64, 1e9, [1, 1], &config);

        assert_eq!(
            expansion,
            Expansion::Exhausted {
                upper: 16,
                iters: 4
            }
        );
    }
}
