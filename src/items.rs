//! Items

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{TotalPriceError, line_total},
    products::ProductId,
};

/// A line in the cart.
///
/// Name and unit price are copied from the catalog when the line is created and are not
/// re-read afterwards. While the item is in a cart its quantity is at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem<'a> {
    id: ProductId,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartItem<'a> {
    pub(crate) fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns a copy of this item with a different quantity
    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Returns the product id of the item
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the product name captured when the item was added
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured when the item was added
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price multiplied by the quantity
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(&self.unit_price, self.quantity)
    }
}
