//! Core traits and types for the Engset solvers.
//!
//! This crate defines the shared abstractions that the root finders, the
//! observers, and the public API build on:
//!
//! - [`Series`]: the truncated power series whose reciprocal defines the
//!   Engset blocking probability
//! - [`Solution`] and [`Status`]: the structured result of every solve
//! - [`Config`]: call-scoped iteration budget and tolerance
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`ModelParams`], [`BlockingProb`], [`Traffic`], [`Servers`], [`Sources`]:
//!   validated model quantities

mod config;
mod observer;
mod params;
mod series;
mod solution;

pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};
pub use observer::Observer;
pub use params::{
    BlockingProb, ModelParams, ParamError, Servers, Sources, Traffic, count_from_f64,
};
pub use series::{Series, hyp2f1};
pub use solution::{Solution, Status};
