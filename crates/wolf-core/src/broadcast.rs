//! Broadcast/Subscription Channel
//!
//! A registration-ordered set of listener callbacks. Every published
//! snapshot is delivered synchronously to each listener in registration
//! order; each listener receives its own copy, never a live reference.
//! A panicking listener is isolated so the rest still receive the update.

use std::panic::{catch_unwind, AssertUnwindSafe};

use wolf_events::GameSnapshot;

use crate::error::ObserverError;

/// Identifier returned by [`Broadcast::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

type Listener = Box<dyn FnMut(GameSnapshot) + Send>;

/// Listener registry for state snapshots.
#[derive(Default)]
pub struct Broadcast {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its id.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(GameSnapshot) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Idempotent: unknown or already-removed ids are
    /// no-ops.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers `snapshot` to every listener in registration order.
    ///
    /// Each listener gets its own clone. Panics are caught per listener and
    /// returned as [`ObserverError`]s; delivery continues regardless.
    pub fn publish(&mut self, snapshot: &GameSnapshot) -> Vec<ObserverError> {
        let mut failures = Vec::new();
        for (id, listener) in &mut self.listeners {
            let delivery = snapshot.clone();
            let result = catch_unwind(AssertUnwindSafe(|| listener(delivery)));
            if result.is_err() {
                let error = ObserverError { listener_id: id.0 };
                tracing::warn!("{error}");
                failures.push(error);
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wolf_events::fixtures::sample_snapshot;

    #[test]
    fn test_subscribe_and_publish() {
        let mut channel = Broadcast::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        channel.subscribe(move |snap| sink.lock().unwrap().push(snap.day));

        let failures = channel.publish(&sample_snapshot());
        assert!(failures.is_empty());
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let mut channel = Broadcast::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Arc::clone(&order);
            channel.subscribe(move |_| sink.lock().unwrap().push(tag));
        }

        channel.publish(&sample_snapshot());
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut channel = Broadcast::new();
        let id = channel.subscribe(|_| {});
        assert_eq!(channel.len(), 1);

        channel.unsubscribe(id);
        assert_eq!(channel.len(), 0);

        // Double unsubscribe and unknown ids are no-ops
        channel.unsubscribe(id);
        channel.unsubscribe(ListenerId(999));
        assert_eq!(channel.len(), 0);
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        let mut channel = Broadcast::new();
        let seen = Arc::new(Mutex::new(0u32));

        channel.subscribe(|_| panic!("observer bug"));
        let sink = Arc::clone(&seen);
        channel.subscribe(move |_| *sink.lock().unwrap() += 1);

        let failures = channel.publish(&sample_snapshot());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].listener_id, 0);
        // The listener registered after the panicking one still ran
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_listeners_receive_independent_copies() {
        let mut channel = Broadcast::new();
        let days = Arc::new(Mutex::new(Vec::new()));

        // First listener mutates its copy; second must be unaffected
        channel.subscribe(|mut snap| {
            snap.day = 99;
            snap.seats.clear();
        });
        let sink = Arc::clone(&days);
        channel.subscribe(move |snap| {
            sink.lock().unwrap().push((snap.day, snap.seats.len()));
        });

        channel.publish(&sample_snapshot());
        assert_eq!(*days.lock().unwrap(), vec![(1, 9)]);
    }
}
