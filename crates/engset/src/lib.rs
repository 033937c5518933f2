//! Solvers for the Engset model of a finite-source loss system.
//!
//! A pool of `n_servers` identical servers is offered traffic by `n_sources`
//! independent sources. A request that arrives while every server is busy is
//! blocked. Given any three of blocking probability, number of servers,
//! number of sources, and total offered traffic, the entry points in this
//! crate solve for the fourth:
//!
//! - [`blocking_prob`]: probability that a request is blocked
//! - [`n_servers`]: smallest server count meeting a blocking target
//! - [`n_sources`]: largest source count meeting a blocking target
//! - [`total_traffic`]: offered traffic, in Erlangs, at a blocking target
//!
//! Every entry point takes an optional [`Algorithm`] and a [`Config`] holding
//! the iteration budget and tolerance. It returns a [`Solution`] whose
//! [`Status`] says whether the search converged. Running out of iterations is
//! a status, not an error; [`Error`] is reserved for invalid inputs and
//! algorithm choices that do not apply.
//!
//! Diagnostics go through [`tracing`]. Each solve emits a `debug` event with
//! its result, each solver iteration a `trace` event, and questionable but
//! valid requests a `warn` event.
//!
//! # Example
//!
//! ```
//! use engset::{Config, Status, blocking_prob, total_traffic};
//!
//! let config = Config::default();
//! let p = blocking_prob(5, 20, 4.0, None, &config).unwrap();
//! assert_eq!(p.status, Status::Converged);
//!
//! let traffic = total_traffic(p.value, 5, 20, None, &config).unwrap();
//! assert!((traffic.value - 4.0).abs() < 1e-6);
//! ```

mod advisory;
mod algorithm;
mod blocking_prob;
mod error;
mod n_servers;
mod n_sources;
mod total_traffic;

pub use algorithm::{Algorithm, Quantity};
pub use blocking_prob::blocking_prob;
pub use error::Error;
pub use n_servers::n_servers;
pub use n_sources::{UNBOUNDED_SOURCES, n_sources};
pub use total_traffic::total_traffic;

pub use engset_core::{
    Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL, ModelParams, ParamError, Series,
    Solution, Status, count_from_f64, hyp2f1,
};
