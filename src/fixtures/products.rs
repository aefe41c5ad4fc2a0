//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::ProductCatalog,
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<ProductId, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "9.99 USD")
    pub price: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
        })
    }
}

/// Parse a products YAML document into a catalog
///
/// # Errors
///
/// Returns an error if the YAML is invalid, a price cannot be parsed, or the catalog
/// rejects a product (mixed currencies).
pub fn parse_catalog(contents: &str) -> Result<ProductCatalog<'static>, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(contents)?;
    let mut catalog = ProductCatalog::new();

    for (id, product_fixture) in fixture.products {
        catalog.insert(id, product_fixture.try_into()?)?;
    }

    Ok(catalog)
}

/// Parse price string (e.g., "9.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, has more decimal places than
/// the currency's minor unit, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    // (currency, digits after the decimal point)
    let (currency, exponent) = match *currency_code {
        "GBP" => (GBP, 2),
        "USD" => (USD, 2),
        "EUR" => (EUR, 2),
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    if amount.normalize().scale() > exponent {
        return Err(FixtureError::InvalidPrice(format!(
            "{s} has more than {exponent} decimal places"
        )));
    }

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(exponent)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
