//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIterate`]: events that carry an iteration counter and a trial point
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use engset_core::Observer;
//! use engset_observers::traits::{CanStopEarly, HasIterate, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIterate + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use engset_solvers::{
    equation::{bisection, fixed_point, newton},
    integer,
};

/// An event that carries an iteration counter and the point being tried.
pub trait HasIterate {
    /// Returns the iteration counter for this event.
    fn iter(&self) -> usize;

    /// Returns the trial point as an `f64`.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIterate impls ---

impl HasIterate for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIterate for fixed_point::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIterate for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIterate for integer::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> f64 {
        self.x as f64
    }
}

// --- HasResidual impls ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for fixed_point::Event {
    /// The residual of a fixed-point step is how far the map moved the point.
    fn residual(&self) -> f64 {
        self.next - self.x
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for integer::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
