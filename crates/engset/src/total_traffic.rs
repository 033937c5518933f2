use engset_core::{BlockingProb, Config, Series, Servers, Solution, Sources, Status};
use engset_observers::TraceObserver;
use engset_solvers::{
    Expansion,
    equation::{
        bisection,
        newton::{self, Scale},
    },
};

use crate::{Algorithm, Error, Quantity, advisory};

const DEFAULT_INITIAL_GUESS: f64 = 1.0;

/// Total offered traffic, in Erlangs, that produces a target blocking
/// probability.
///
/// Inverts the relation `blocking_prob = 1 / f(blocking_prob - 1 + n_sources
/// / total_traffic)` for `total_traffic`. Bisection, the default, starts
/// from the bracket `[0, n_sources]` and doubles its upper end until the
/// blocking probability there reaches the target. Newton's method works on
/// relative steps from an initial guess of one Erlang and is logged as a
/// warning because it can be unstable.
///
/// A converged answer above `n_sources` is returned with a warning.
///
/// # Errors
///
/// Returns [`Error::Param`] if `blocking_prob` is outside `(0, 1)`,
/// `n_servers` is zero, or `n_sources <= n_servers`,
/// [`Error::UnsupportedAlgorithm`] for fixed-point iteration, and
/// [`Error::Solver`] if a Newton initial guess is not finite.
///
/// # Examples
///
/// ```
/// use engset::{Config, Status, total_traffic};
///
/// let solution = total_traffic(0.05, 3, 10, None, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.value - 1.0512).abs() < 1e-4);
/// ```
pub fn total_traffic(
    blocking_prob: f64,
    n_servers: u64,
    n_sources: u64,
    algorithm: Option<Algorithm>,
    config: &Config,
) -> Result<Solution<f64>, Error> {
    let target = BlockingProb::new(blocking_prob)?.get();
    let servers = Servers::new(n_servers)?;
    let n_sources = Sources::new(n_sources, servers)?.get();

    let quantity = Quantity::TotalTraffic;
    let algorithm = algorithm.unwrap_or(quantity.default_algorithm());

    let series = Series::new(n_servers, n_sources);
    #[allow(clippy::cast_precision_loss)]
    let sources = n_sources as f64;
    let y = target - 1.0;
    let tol = config.tol();
    let blocking = |e: f64| 1.0 / series.eval(y + sources / e, tol);
    let observer = TraceObserver::new("total_traffic");

    let solution = match algorithm {
        Algorithm::Bisection => {
            match bisection::expand_upper(blocking, target, [0.0, sources], config) {
                Expansion::Bracketed { bracket, iters } => bisection::solve_after(
                    iters,
                    |e| target - blocking(e),
                    bracket,
                    config,
                    observer,
                )?,
                Expansion::Stalled { upper, iters } | Expansion::Exhausted { upper, iters } => {
                    Solution::new(Status::MaxIters, upper, iters)
                }
            }
        }
        Algorithm::Newton { initial_guess } => {
            let solution = newton::solve(
                |e| blocking(e) - target,
                initial_guess.unwrap_or(DEFAULT_INITIAL_GUESS),
                Scale::Relative,
                config,
                observer,
            )?;
            advisory::unstable_algorithm(quantity, algorithm);
            solution
        }
        Algorithm::FixedPoint { .. } => {
            return Err(Error::UnsupportedAlgorithm {
                algorithm,
                quantity,
            });
        }
    };

    if solution.is_converged() && solution.value > sources {
        advisory::traffic_exceeds_sources(solution.value, n_sources);
    }

    tracing::debug!(
        blocking_prob,
        n_servers,
        n_sources,
        %algorithm,
        status = ?solution.status,
        iters = solution.iters,
        value = solution.value,
        "solved for total traffic"
    );
    Ok(solution)
}
