use bmi_core::Observer;

use crate::{FormAction, FormState, update};

/// Emitted after every dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChanged {
    pub action: FormAction,
    pub previous: FormState,
    pub current: FormState,
}

/// Holds the current form state and notifies subscribers of changes.
///
/// Observers are called in subscription order. Their return value is ignored.
///
/// # Example
///
/// ```
/// use bmi_form::{FormAction, StateChanged, Store};
///
/// let mut store = Store::default();
/// store.subscribe(|event: &StateChanged| -> Option<()> {
///     if let Some(alert) = &event.current.alert {
///         eprintln!("{}: {}", alert.title, alert.message);
///     }
///     None
/// });
///
/// store.dispatch(FormAction::Calculate);
/// assert!(store.state().alert.is_some());
/// ```
#[derive(Default)]
pub struct Store {
    state: FormState,
    observers: Vec<Box<dyn Observer<StateChanged, ()>>>,
}

impl Store {
    /// Creates a store starting from the given state.
    #[must_use]
    pub fn new(state: FormState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Registers an observer for future state changes.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: Observer<StateChanged, ()> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Applies an action and notifies observers.
    ///
    /// Returns the new state.
    pub fn dispatch(&mut self, action: FormAction) -> &FormState {
        let current = update(&self.state, action.clone());
        tracing::trace!(?action, "dispatched form action");

        let event = StateChanged {
            action,
            previous: std::mem::replace(&mut self.state, current.clone()),
            current,
        };
        for observer in &mut self.observers {
            observer.observe(&event);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn observers_receive_previous_and_current() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();

        let sink = Rc::clone(&events);
        store.subscribe(move |event: &StateChanged| -> Option<()> {
            sink.borrow_mut().push(event.clone());
            None
        });

        store.dispatch(FormAction::SetWeight("70".into()));
        store.dispatch(FormAction::SetHeight("175".into()));
        store.dispatch(FormAction::Calculate);

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].previous, FormState::default());
        assert_eq!(events[0].current.weight, "70");
        assert_eq!(events[2].action, FormAction::Calculate);
        assert!(events[2].previous.result.is_none());
        assert_eq!(&events[2].current, store.state());
    }

    #[test]
    fn observers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();

        for id in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_: &StateChanged| -> Option<()> {
                order.borrow_mut().push(id);
                None
            });
        }
        store.dispatch(FormAction::DismissAlert);

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }
}
