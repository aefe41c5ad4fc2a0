//! Cart

use rusty_money::{Money, iso::Currency};

use crate::{
    items::CartItem,
    pricing::{TotalPriceError, total_price},
    products::ProductId,
};

/// Cart state: ordered line items with at most one item per product id.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState<'a> {
    items: Vec<CartItem<'a>>,
    currency: &'static Currency,
}

impl<'a> CartState<'a> {
    /// Create a new empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        CartState {
            items: Vec::new(),
            currency,
        }
    }

    pub(crate) fn from_items(items: Vec<CartItem<'a>>, currency: &'static Currency) -> Self {
        CartState { items, currency }
    }

    pub(crate) fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line total overflows or there was a money
    /// arithmetic or currency mismatch error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.items)
    }

    /// Sum of the quantities of every item in the cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Get the item with the given product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem<'a>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Get the position of the item with the given product id.
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem<'a>> {
        self.items.iter()
    }

    /// Get the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
