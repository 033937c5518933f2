/// Hook called by a root finder once per iteration.
///
/// Each solver defines its own event type `E`, carrying the iterate and
/// whatever else that solver knows at that point, and its own action type
/// `A`. Returning `Some(action)` asks the solver to act on it, typically to
/// stop early with [`Status::StoppedByObserver`]. Returning `None` leaves the
/// iteration alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
///
/// [`Status::StoppedByObserver`]: crate::Status::StoppedByObserver
pub trait Observer<E, A> {
    /// Inspects one iteration and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
