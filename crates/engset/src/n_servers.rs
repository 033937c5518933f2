use engset_core::{BlockingProb, Config, Servers, Solution, Sources, Traffic, hyp2f1};
use engset_observers::TraceObserver;
use engset_solvers::integer;

use crate::{Algorithm, Error, Quantity, advisory};

/// Smallest number of servers whose blocking probability is below a target.
///
/// Searches `[1, n_sources]` by integer bisection. The blocking probability
/// for `m` servers is approximated as `1 / f_m(blocking_prob + n_sources /
/// total_traffic - 1)`, using the target in place of the unknown. Only
/// [`Algorithm::Bisection`] is supported.
///
/// # Errors
///
/// Returns [`Error::Param`] if `blocking_prob` is outside `(0, 1)`,
/// `n_sources < 2`, or `total_traffic` is not a positive finite number, and
/// [`Error::UnsupportedAlgorithm`] for any algorithm other than bisection.
///
/// # Examples
///
/// ```
/// use engset::{Config, Status, n_servers};
///
/// let solution = n_servers(0.05, 10, 2.0, None, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert_eq!(solution.value, 5);
/// ```
pub fn n_servers(
    blocking_prob: f64,
    n_sources: u64,
    total_traffic: f64,
    algorithm: Option<Algorithm>,
    config: &Config,
) -> Result<Solution<u64>, Error> {
    let target = BlockingProb::new(blocking_prob)?.get();
    let n_sources = Sources::new(n_sources, Servers::ONE)?.get();
    let total_traffic = Traffic::new(total_traffic)?.get();
    #[allow(clippy::cast_precision_loss)]
    let sources = n_sources as f64;

    let quantity = Quantity::Servers;
    let algorithm = algorithm.unwrap_or(quantity.default_algorithm());
    if algorithm != Algorithm::Bisection {
        return Err(Error::UnsupportedAlgorithm {
            algorithm,
            quantity,
        });
    }

    let y = target + sources / total_traffic - 1.0;
    let tol = config.tol();
    let solution = integer::lower_bound(
        |m| 1.0 / hyp2f1(m, n_sources, y, tol) < target,
        [1, n_sources],
        config,
        TraceObserver::new("n_servers"),
    )?;

    if total_traffic > sources {
        advisory::traffic_exceeds_sources(total_traffic, n_sources);
    }

    tracing::debug!(
        blocking_prob,
        n_sources,
        total_traffic,
        status = ?solution.status,
        iters = solution.iters,
        value = solution.value,
        "solved for number of servers"
    );
    Ok(solution)
}
