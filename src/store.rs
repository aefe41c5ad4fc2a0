//! Cart Store
//!
//! The store owns the current [`CartState`] and is the only thing that replaces it. Every
//! mutation goes through [`CartStore::dispatch`], which needs `&mut self`, so there is a
//! single writer and reductions never overlap.

use std::fmt;

use rusty_money::iso::Currency;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    actions::Action,
    cart::CartState,
    catalog::Catalog,
    observer::CartObserver,
    products::ProductId,
    reducer::{ReduceError, reduce},
};

new_key_type! {
    /// Observer subscription key
    pub struct SubscriptionKey;
}

/// A replay stopped at the first action that failed to reduce.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Replay stopped after {applied} actions")]
pub struct ReplayError {
    /// Number of actions applied before the failure
    pub applied: usize,

    /// The reduction failure
    #[source]
    pub source: ReduceError,
}

/// Shopping cart store
pub struct CartStore<'a, C> {
    state: CartState<'a>,
    catalog: C,
    observers: SlotMap<SubscriptionKey, Box<dyn CartObserver + 'a>>,
}

impl<'a, C: Catalog<'a>> CartStore<'a, C> {
    /// Create a store with an empty cart priced in `currency`.
    pub fn new(catalog: C, currency: &'static Currency) -> Self {
        Self {
            state: CartState::new(currency),
            catalog,
            observers: SlotMap::with_key(),
        }
    }

    /// Current cart state
    pub fn state(&self) -> &CartState<'a> {
        &self.state
    }

    /// Catalog consulted when new items are added
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Register an observer; it is notified after every successful dispatch.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'a) -> SubscriptionKey {
        self.observers.insert(Box::new(observer))
    }

    /// Remove an observer. Returns `false` if the key was not subscribed.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.observers.remove(key).is_some()
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Reduce `action` against the current state, replace the state with the result and
    /// notify observers.
    ///
    /// # Errors
    ///
    /// Returns the [`ReduceError`] from the reducer. The state is left as it was and no
    /// observer is notified.
    pub fn dispatch(&mut self, action: &Action) -> Result<&CartState<'a>, ReduceError> {
        let next = match reduce(&self.state, action, &self.catalog) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    action = %action,
                    product = %action.product_id(),
                    error = %err,
                    "cart action rejected"
                );

                return Err(err);
            }
        };

        self.state = next;

        debug!(
            action = %action,
            product = %action.product_id(),
            items = self.state.len(),
            observers = self.observers.len(),
            "cart action applied"
        );

        for observer in self.observers.values_mut() {
            observer.on_change(action, &self.state);
        }

        Ok(&self.state)
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn add_item_to_cart(
        &mut self,
        product_id: impl Into<ProductId>,
    ) -> Result<&CartState<'a>, ReduceError> {
        self.dispatch(&Action::add(product_id))
    }

    /// Change the quantity of item `id` by `delta`, removing it when the quantity drops to
    /// zero or below.
    ///
    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn update_cart_item_quantity(
        &mut self,
        id: impl Into<ProductId>,
        delta: i64,
    ) -> Result<&CartState<'a>, ReduceError> {
        self.dispatch(&Action::update_quantity(id, delta))
    }

    /// Dispatch each action in turn, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] carrying the number of actions that were applied.
    pub fn replay(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<usize, ReplayError> {
        let mut applied = 0;

        for action in actions {
            self.dispatch(&action)
                .map_err(|source| ReplayError { applied, source })?;

            applied += 1;
        }

        Ok(applied)
    }
}

impl<C: fmt::Debug> fmt::Debug for CartStore<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .field("observers", &self.observers.len())
            .finish()
    }
}
