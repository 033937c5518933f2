//! Reusable observers for the Engset solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the different root finders.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: reports every iteration as a `tracing` event at
//!   `TRACE` level
//!
//! [`Observer`]: engset_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;
