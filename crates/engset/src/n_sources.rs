use engset_core::{BlockingProb, Config, Servers, Solution, Status, Traffic, hyp2f1};
use engset_observers::TraceObserver;
use engset_solvers::{Expansion, integer};

use crate::{Algorithm, Error, Quantity};

/// Value reported with [`Status::Unbounded`] when any number of sources
/// meets the target.
#[allow(clippy::cast_sign_loss)]
pub const UNBOUNDED_SOURCES: u64 = i64::MAX as u64;

/// Largest number of sources whose blocking probability is below a target.
///
/// Blocking grows with the number of sources when the total traffic is held
/// fixed, but it levels off at a finite limit. The search first doubles an
/// upper bound starting from `2 * n_servers` until the blocking probability
/// at that bound reaches the target, then bisects between `n_servers` and
/// that bound. The blocking probability for `n` sources is approximated as
/// `1 / f_n(blocking_prob - 1 + n / total_traffic)`. Only
/// [`Algorithm::Bisection`] is supported.
///
/// If the blocking probability stops growing before it reaches the target,
/// every source count qualifies and the solution has
/// [`Status::Unbounded`] with value [`UNBOUNDED_SOURCES`]. The same holds
/// when the bound can no longer double within `u64`. A converged value
/// equal to `n_servers` means no source count above `n_servers` meets the
/// target.
///
/// # Errors
///
/// Returns [`Error::Param`] if `blocking_prob` is outside `(0, 1)`,
/// `n_servers` is zero, or `total_traffic` is not a positive finite number,
/// and [`Error::UnsupportedAlgorithm`] for any algorithm other than
/// bisection.
///
/// # Examples
///
/// ```
/// use engset::{Config, Status, UNBOUNDED_SOURCES, n_sources};
///
/// let solution = n_sources(0.05, 3, 1.0, None, &Config::default()).unwrap();
/// assert_eq!(solution.status, Status::Converged);
/// assert_eq!(solution.value, 14);
///
/// // One server with one Erlang never blocks half the time.
/// let solution = n_sources(0.51, 1, 1.0, None, &Config::default()).unwrap();
/// assert_eq!(solution.status, Status::Unbounded);
/// assert_eq!(solution.value, UNBOUNDED_SOURCES);
/// ```
pub fn n_sources(
    blocking_prob: f64,
    n_servers: u64,
    total_traffic: f64,
    algorithm: Option<Algorithm>,
    config: &Config,
) -> Result<Solution<u64>, Error> {
    let target = BlockingProb::new(blocking_prob)?.get();
    let n_servers = Servers::new(n_servers)?.get();
    let total_traffic = Traffic::new(total_traffic)?.get();

    let quantity = Quantity::Sources;
    let algorithm = algorithm.unwrap_or(quantity.default_algorithm());
    if algorithm != Algorithm::Bisection {
        return Err(Error::UnsupportedAlgorithm {
            algorithm,
            quantity,
        });
    }

    let y = target - 1.0;
    let tol = config.tol();
    #[allow(clippy::cast_precision_loss)]
    let blocking = |n: u64| 1.0 / hyp2f1(n_servers, n, y + n as f64 / total_traffic, tol);

    let solution = match n_servers.checked_mul(2) {
        Some(start) => match integer::expand_upper(blocking, target, [n_servers, start], config) {
            Expansion::Bracketed { bracket, iters } => integer::upper_bound_after(
                iters,
                |n| blocking(n) < target,
                bracket,
                config,
                TraceObserver::new("n_sources"),
            )?,
            Expansion::Stalled { iters, .. } => {
                Solution::new(Status::Unbounded, UNBOUNDED_SOURCES, iters)
            }
            Expansion::Exhausted { upper, iters } => Solution::new(Status::MaxIters, upper, iters),
        },
        None => Solution::new(Status::Unbounded, UNBOUNDED_SOURCES, 1),
    };

    tracing::debug!(
        blocking_prob,
        n_servers,
        total_traffic,
        status = ?solution.status,
        iters = solution.iters,
        value = solution.value,
        "solved for number of sources"
    );
    Ok(solution)
}
