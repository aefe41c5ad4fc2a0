//! Prices

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::items::CartItem;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// Multiplying a unit price by a quantity overflowed the minor-unit range.
    #[error("line total overflowed for {0} x {1} minor units")]
    Overflow(u32, i64),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the price of `quantity` units at `unit_price`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the result does not fit in minor units.
pub fn line_total<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let unit_minor = unit_price.to_minor_units();

    let total_minor = unit_minor
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow(quantity, unit_minor))?;

    Ok(Money::from_minor(total_minor, unit_price.currency()))
}

/// Calculates the total price of a list of cart items
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No items were provided, so currency could not be determined.
/// - [`TotalPriceError::Overflow`]: A line total overflowed.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(items: &[CartItem<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = items.first().ok_or(TotalPriceError::NoItems)?;

    items.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, item| -> Result<Money<'a, Currency>, TotalPriceError> {
            Ok(acc.add(item.line_total()?)?)
        },
    )
}
