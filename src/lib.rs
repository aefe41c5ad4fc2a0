//! Trolley
//!
//! Trolley is a reducer-driven shopping cart: a pure `reduce` function over tagged actions,
//! a read-only product catalog, and a store that owns the cart state and notifies
//! subscribers after every change.

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod observer;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod reducer;
pub mod store;
