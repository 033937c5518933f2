//! Non-fatal warnings about questionable but valid requests.

use crate::{Algorithm, Quantity};

const TRAFFIC_EXCEEDS_SOURCES: &str = "total traffic exceeds the number of sources; the Engset \
     formula is still well-defined, but the physical meaning may be lost since each source is \
     generally assumed to offer at most one Erlang of traffic";

pub(crate) fn traffic_exceeds_sources(total_traffic: f64, n_sources: u64) {
    tracing::warn!(total_traffic, n_sources, "{TRAFFIC_EXCEEDS_SOURCES}");
}

pub(crate) fn unstable_algorithm(quantity: Quantity, algorithm: Algorithm) {
    tracing::warn!(
        %quantity,
        %algorithm,
        "{algorithm} for the {quantity} can be unstable; use at your own risk"
    );
}
