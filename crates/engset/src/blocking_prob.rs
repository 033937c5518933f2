use engset_core::{Config, ModelParams, Series, Solution};
use engset_observers::TraceObserver;
use engset_solvers::equation::{
    bisection, fixed_point,
    newton::{self, Scale},
};

use crate::{Algorithm, Error, Quantity, advisory};

const DEFAULT_INITIAL_GUESS: f64 = 0.5;

/// Blocking probability in the Engset model.
///
/// Solves `P = 1 / f(P + n_sources / total_traffic - 1)` for `P`, where `f`
/// is the defining [`Series`]. Defaults to Newton's method; bisection and
/// fixed-point iteration are also supported.
///
/// `total_traffic` is the offered traffic from all sources in Erlangs, so the
/// per-source traffic is `total_traffic / n_sources`. A per-source traffic
/// above one Erlang is accepted with a warning.
///
/// # Errors
///
/// Returns [`Error::Param`] if `n_servers` is zero, `n_sources <= n_servers`,
/// or `total_traffic` is not a positive finite number, and [`Error::Solver`]
/// if an initial guess is not finite.
///
/// # Examples
///
/// ```
/// use engset::{Config, Status, blocking_prob};
///
/// let solution = blocking_prob(5, 10, 2.0, None, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.value - 0.016).abs() < 1e-3);
/// ```
pub fn blocking_prob(
    n_servers: u64,
    n_sources: u64,
    total_traffic: f64,
    algorithm: Option<Algorithm>,
    config: &Config,
) -> Result<Solution<f64>, Error> {
    let params = ModelParams::new(n_servers, n_sources, total_traffic)?;

    let quantity = Quantity::BlockingProb;
    let algorithm = algorithm.unwrap_or(quantity.default_algorithm());

    let series = Series::new(n_servers, n_sources);
    #[allow(clippy::cast_precision_loss)]
    let y = n_sources as f64 / total_traffic - 1.0;
    let tol = config.tol();
    let implied = |p: f64| 1.0 / series.eval(p + y, tol);
    let observer = TraceObserver::new("blocking_prob");

    let solution = match algorithm {
        Algorithm::Bisection => bisection::solve(|p| implied(p) - p, [0.0, 1.0], config, observer)?,
        Algorithm::FixedPoint { initial_guess } => {
            let solution = fixed_point::solve(
                implied,
                initial_guess.unwrap_or(DEFAULT_INITIAL_GUESS),
                config,
                observer,
            )?;
            advisory::unstable_algorithm(quantity, algorithm);
            solution
        }
        Algorithm::Newton { initial_guess } => newton::solve(
            |p| implied(p) - p,
            initial_guess.unwrap_or(DEFAULT_INITIAL_GUESS),
            Scale::Absolute,
            config,
            observer,
        )?,
    };

    if params.traffic_per_source() > 1.0 {
        advisory::traffic_exceeds_sources(total_traffic, n_sources);
    }

    tracing::debug!(
        n_servers,
        n_sources,
        total_traffic,
        %algorithm,
        status = ?solution.status,
        iters = solution.iters,
        value = solution.value,
        "solved for blocking probability"
    );
    Ok(solution)
}
