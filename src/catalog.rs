//! Product Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductId, ProductKey};

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with the same id is already in the catalog.
    #[error("Product {0} is already in the catalog")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency (product id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Read-only product lookup consulted by the reducer when an item is new to the cart.
pub trait Catalog<'a> {
    /// Returns the product with the given id, if the catalog has one.
    fn product(&self, id: &ProductId) -> Option<&Product<'a>>;
}

impl<'a, C: Catalog<'a> + ?Sized> Catalog<'a> for &C {
    fn product(&self, id: &ProductId) -> Option<&Product<'a>> {
        (**self).product(id)
    }
}

/// In-memory product catalog
#[derive(Debug, Default)]
pub struct ProductCatalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    keys: FxHashMap<ProductId, ProductKey>,
    currency: Option<&'a Currency>,
}

impl<'a> ProductCatalog<'a> {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
            keys: FxHashMap::default(),
            currency: None,
        }
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: the id is already present.
    /// - [`CatalogError::CurrencyMismatch`]: the product is priced in a different currency
    ///   from the products already in the catalog.
    pub fn insert(
        &mut self,
        id: impl Into<ProductId>,
        product: Product<'a>,
    ) -> Result<ProductKey, CatalogError> {
        let id = id.into();

        if self.keys.contains_key(&id) {
            return Err(CatalogError::DuplicateProduct(id));
        }

        let product_currency = product.price.currency();

        match self.currency {
            Some(currency) if currency != product_currency => {
                return Err(CatalogError::CurrencyMismatch(
                    id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
            Some(_) => {}
            None => self.currency = Some(product_currency),
        }

        let key = self.products.insert(product);
        self.keys.insert(id, key);

        Ok(key)
    }

    /// Get a product by id
    pub fn get(&self, id: &ProductId) -> Option<&Product<'a>> {
        let key = self.keys.get(id)?;

        self.products.get(*key)
    }

    /// Check whether the catalog has a product with the given id
    pub fn contains(&self, id: &ProductId) -> bool {
        self.keys.contains_key(id)
    }

    /// Iterate over the products in the catalog, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Product<'a>)> {
        self.keys
            .iter()
            .filter_map(|(id, key)| self.products.get(*key).map(|product| (id, product)))
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency shared by all products, or `None` while the catalog is empty.
    #[must_use]
    pub fn currency(&self) -> Option<&'a Currency> {
        self.currency
    }
}

impl<'a> Catalog<'a> for ProductCatalog<'a> {
    fn product(&self, id: &ProductId) -> Option<&Product<'a>> {
        self.get(id)
    }
}
