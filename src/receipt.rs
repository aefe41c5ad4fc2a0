//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::CartState, pricing::TotalPriceError, products::ProductId};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating line totals or the cart subtotal.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One priced line of a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub unit_price: Money<'a, Currency>,

    /// Quantity
    pub quantity: u32,

    /// Unit price multiplied by quantity
    pub total: Money<'a, Currency>,
}

/// Priced snapshot of a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 10]>,
    subtotal: Money<'a, Currency>,
    total_quantity: u64,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Price every line in the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::TotalPrice`] if a line total or the subtotal cannot be
    /// calculated.
    pub fn from_cart(cart: &CartState<'a>) -> Result<Self, ReceiptError> {
        let lines = cart
            .iter()
            .map(|item| -> Result<ReceiptLine<'a>, TotalPriceError> {
                Ok(ReceiptLine {
                    id: item.id().clone(),
                    name: item.name().to_string(),
                    unit_price: *item.unit_price(),
                    quantity: item.quantity(),
                    total: item.line_total()?,
                })
            })
            .collect::<Result<SmallVec<[ReceiptLine<'a>; 10]>, _>>()?;

        Ok(Self {
            lines,
            subtotal: cart.subtotal()?,
            total_quantity: cart.total_quantity(),
            currency: cart.currency(),
        })
    }

    /// Receipt lines, in cart order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                format!("{}", line.unit_price),
                line.quantity.to_string(),
                format!("{}", line.total),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Items:    {}", self.total_quantity).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Subtotal: {}", self.subtotal).map_err(|_err| ReceiptError::IO)?;

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}
