/// Observes events and optionally returns an action.
///
/// Emitters decide what the action means; an emitter that has nothing to
/// control uses `()` and ignores the return value.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| -> Option<()> {
            seen.push(*event);
            None
        };

        observer.observe(&1);
        observer.observe(&2);

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn unit_observer_returns_none() {
        let mut observer = ();
        let action: Option<()> = observer.observe(&"event");
        assert!(action.is_none());
    }
}
