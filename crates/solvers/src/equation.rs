//! Solvers for a single continuous unknown.
//!
//! Each solver takes the equation as a closure over `f64`:
//!
//! - [`bisection`]: guaranteed convergence on a bracketed, decreasing residual
//! - [`fixed_point`]: iterates `x ← g(x)`; cheap but may not converge
//! - [`newton`]: finite-difference Newton steps on a residual

pub mod bisection;
pub mod fixed_point;
pub mod newton;
