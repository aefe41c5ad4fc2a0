//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    actions::{Action, ActionError, ActionRecord},
    cart::CartState,
    catalog::{Catalog, CatalogError, ProductCatalog},
    fixtures::{Fixture, FixtureError},
    items::CartItem,
    observer::{CartObserver, TracingObserver},
    pricing::TotalPriceError,
    products::{Product, ProductId, ProductKey},
    receipt::{Receipt, ReceiptError},
    reducer::{ReduceError, reduce},
    store::{CartStore, ReplayError, SubscriptionKey},
};
