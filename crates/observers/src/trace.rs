use std::fmt::Debug;

use engset_core::Observer;

use crate::traits::HasIterate;

/// Reports each solver iteration as a `tracing` event.
///
/// Events are emitted at `TRACE` level with the solver label, iteration
/// counter, and trial point as fields, plus the full event in debug form.
/// The observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    label: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its events with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Returns the label attached to every event.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIterate + Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::trace!(
            solver = self.label,
            iter = event.iter(),
            x = event.x(),
            ?event,
            "iteration"
        );
        None
    }
}
