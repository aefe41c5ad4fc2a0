//! Cart Observers

use tracing::info;

use crate::{actions::Action, cart::CartState};

/// Receives a notification after every successful dispatch on a cart store.
///
/// Observers are called in subscription order, once per reduced action, with the state
/// that replaced the previous one. Failed dispatches produce no notification.
pub trait CartObserver {
    /// Called after `action` has been applied and `state` is the new cart.
    fn on_change(&mut self, action: &Action, state: &CartState<'_>);
}

impl<F> CartObserver for F
where
    F: FnMut(&Action, &CartState<'_>),
{
    fn on_change(&mut self, action: &Action, state: &CartState<'_>) {
        self(action, state);
    }
}

/// Observer that logs every cart change.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl CartObserver for TracingObserver {
    fn on_change(&mut self, action: &Action, state: &CartState<'_>) {
        info!(
            action = %action,
            items = state.len(),
            quantity = state.total_quantity(),
            "cart updated"
        );
    }
}
