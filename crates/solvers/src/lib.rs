//! Root finders for the Engset solvers.
//!
//! Every solver drives a caller-supplied scalar function, reports each
//! iteration to an [`Observer`], and returns a [`Solution`] whose status
//! records how the search ended. Numerical outcomes such as hitting the
//! iteration limit are statuses, not errors; [`Error`] is reserved for
//! inputs a solver cannot start from.
//!
//! # Modules
//!
//! - [`equation`]: continuous unknowns: [`bisection`](equation::bisection),
//!   [`fixed_point`](equation::fixed_point), [`newton`](equation::newton)
//! - [`integer`]: discrete unknowns: lower- and upper-bound bisection
//!
//! [`Observer`]: engset_core::Observer
//! [`Solution`]: engset_core::Solution

mod error;
mod expansion;

pub mod equation;
pub mod integer;

pub use error::Error;
pub use expansion::Expansion;
