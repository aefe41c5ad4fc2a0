//! Fixtures
//!
//! Catalogs and action scripts stored as YAML under a base directory:
//!
//! - `<base>/products/<name>.yml`: `products: { <id>: { name, price: "9.99 USD" } }`
//! - `<base>/actions/<name>.yml`: `actions: [ { type, id, delta } ]`

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    actions::{Action, ActionError},
    catalog::{CatalogError, ProductCatalog},
};

pub mod actions;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalog rejected a product
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// An action record could not be converted
    #[error("Invalid action at index {index}: {source}")]
    Action {
        /// Position of the record in the script
        index: usize,
        /// Conversion failure
        source: ActionError,
    },
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a product catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the catalog rejects a
    /// product.
    pub fn load_catalog(&self, name: &str) -> Result<ProductCatalog<'static>, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        products::parse_catalog(&contents)
    }

    /// Load an action script from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any record has an
    /// unknown type or the wrong fields.
    pub fn load_actions(&self, name: &str) -> Result<Vec<Action>, FixtureError> {
        let file_path = self.base_path.join("actions").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        actions::parse_actions(&contents)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
