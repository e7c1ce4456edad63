/// Watches a sweep over an odometer, one combination at a time.
///
/// A sweep hands every combination it visits to `observe`. Returning
/// `Some(action)` asks the sweep to act on it, for example to stop once a
/// wanted combination turns up. Returning `None` moves on to the next
/// combination.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is an
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one event and optionally returns an action.
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
