//! Cart Reducer

use thiserror::Error;

use crate::{
    actions::Action,
    cart::CartState,
    catalog::Catalog,
    items::CartItem,
    products::ProductId,
};

/// Errors raised while reducing an action. The input state is never modified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// An added product is not in the catalog.
    #[error("Product {0} not found in catalog")]
    ProductNotFound(ProductId),

    /// A quantity update referenced an item that is not in the cart.
    #[error("Item {0} not found in cart")]
    ItemNotFound(ProductId),

    /// A catalog product is priced in a different currency from the cart (product id, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The item quantity would not fit in a `u32`.
    #[error("Quantity overflow for item {0}")]
    QuantityOverflow(ProductId),
}

/// Compute the cart that results from applying `action` to `state`.
///
/// # Errors
///
/// - [`ReduceError::ProductNotFound`]: `Add` for a product the catalog does not have.
/// - [`ReduceError::CurrencyMismatch`]: `Add` for a product priced in another currency.
/// - [`ReduceError::ItemNotFound`]: `UpdateQuantity` for an id not in the cart.
/// - [`ReduceError::QuantityOverflow`]: the new quantity exceeds `u32::MAX`.
pub fn reduce<'a, C>(
    state: &CartState<'a>,
    action: &Action,
    catalog: &C,
) -> Result<CartState<'a>, ReduceError>
where
    C: Catalog<'a> + ?Sized,
{
    match action {
        Action::Add { product_id } => add_item(state, product_id, catalog),
        Action::UpdateQuantity { id, delta } => update_quantity(state, id, *delta),
    }
}

fn add_item<'a, C>(
    state: &CartState<'a>,
    product_id: &ProductId,
    catalog: &C,
) -> Result<CartState<'a>, ReduceError>
where
    C: Catalog<'a> + ?Sized,
{
    let mut items = state.items().to_vec();

    if let Some(existing) = items.iter_mut().find(|item| item.id() == product_id) {
        let quantity = existing
            .quantity()
            .checked_add(1)
            .ok_or_else(|| ReduceError::QuantityOverflow(product_id.clone()))?;

        *existing = existing.with_quantity(quantity);

        return Ok(CartState::from_items(items, state.currency()));
    }

    let product = catalog
        .product(product_id)
        .ok_or_else(|| ReduceError::ProductNotFound(product_id.clone()))?;

    let product_currency = product.price.currency();

    if product_currency != state.currency() {
        return Err(ReduceError::CurrencyMismatch(
            product_id.clone(),
            product_currency.iso_alpha_code,
            state.currency().iso_alpha_code,
        ));
    }

    items.push(CartItem::new(
        product_id.clone(),
        product.name.clone(),
        product.price,
        1,
    ));

    Ok(CartState::from_items(items, state.currency()))
}

fn update_quantity<'a>(
    state: &CartState<'a>,
    id: &ProductId,
    delta: i64,
) -> Result<CartState<'a>, ReduceError> {
    let index = state
        .position(id)
        .ok_or_else(|| ReduceError::ItemNotFound(id.clone()))?;

    let mut items = state.items().to_vec();

    let Some(item) = items.get_mut(index) else {
        return Err(ReduceError::ItemNotFound(id.clone()));
    };

    let quantity = i64::from(item.quantity())
        .checked_add(delta)
        .ok_or_else(|| ReduceError::QuantityOverflow(id.clone()))?;

    if quantity <= 0 {
        items.remove(index);
    } else {
        let quantity =
            u32::try_from(quantity).map_err(|_err| ReduceError::QuantityOverflow(id.clone()))?;

        *item = item.with_quantity(quantity);
    }

    Ok(CartState::from_items(items, state.currency()))
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::{catalog::ProductCatalog, products::Product};

    use super::*;

    fn catalog<'a>() -> Result<ProductCatalog<'a>, crate::catalog::CatalogError> {
        let mut catalog = ProductCatalog::new();

        catalog.insert(
            "p1",
            Product {
                name: "Widget".to_string(),
                price: Money::from_minor(999, USD),
            },
        )?;

        catalog.insert(
            "p2",
            Product {
                name: "Gadget".to_string(),
                price: Money::from_minor(2500, USD),
            },
        )?;

        Ok(catalog)
    }

    fn ids(state: &CartState<'_>) -> Vec<String> {
        state.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn add_new_item_snapshots_catalog_entry() -> TestResult {
        let catalog = catalog()?;
        let state = CartState::new(USD);

        let next = reduce(&state, &Action::add("p1"), &catalog)?;

        let item = next.get(&ProductId::from("p1")).ok_or("missing item")?;

        assert_eq!(next.len(), 1);
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.unit_price(), &Money::from_minor(999, USD));
        assert_eq!(item.quantity(), 1);

        Ok(())
    }

    #[test]
    fn add_existing_item_increments_quantity() -> TestResult {
        let catalog = catalog()?;
        let state = CartState::new(USD);

        let state = reduce(&state, &Action::add("p1"), &catalog)?;
        let state = reduce(&state, &Action::add("p2"), &catalog)?;
        let next = reduce(&state, &Action::add("p1"), &catalog)?;

        assert_eq!(next.len(), 2);
        assert_eq!(ids(&next), vec!["p1", "p2"]);
        assert_eq!(next.get(&ProductId::from("p1")).map(CartItem::quantity), Some(2));
        assert_eq!(next.get(&ProductId::from("p2")), state.get(&ProductId::from("p2")));

        Ok(())
    }

    #[test]
    fn add_unknown_product_fails_fast() {
        let state = CartState::new(USD);
        let catalog = ProductCatalog::new();

        let result = reduce(&state, &Action::add("ghost"), &catalog);

        assert_eq!(
            result,
            Err(ReduceError::ProductNotFound(ProductId::from("ghost")))
        );
    }

    #[test]
    fn add_in_other_currency_errors() -> TestResult {
        let catalog = catalog()?;
        let state = CartState::new(GBP);

        let result = reduce(&state, &Action::add("p1"), &catalog);

        assert_eq!(
            result,
            Err(ReduceError::CurrencyMismatch(
                ProductId::from("p1"),
                USD.iso_alpha_code,
                GBP.iso_alpha_code,
            ))
        );

        Ok(())
    }

    #[test]
    fn existing_item_keeps_price_after_catalog_changes() -> TestResult {
        let catalog = catalog()?;
        let state = reduce(&CartState::new(USD), &Action::add("p1"), &catalog)?;

        let mut repriced = ProductCatalog::new();
        repriced.insert(
            "p1",
            Product {
                name: "Widget Pro".to_string(),
                price: Money::from_minor(1999, USD),
            },
        )?;

        let next = reduce(&state, &Action::add("p1"), &repriced)?;
        let item = next.get(&ProductId::from("p1")).ok_or("missing item")?;

        assert_eq!(item.name(), "Widget");
        assert_eq!(item.unit_price(), &Money::from_minor(999, USD));
        assert_eq!(item.quantity(), 2);

        Ok(())
    }

    #[test]
    fn update_quantity_adjusts_item() -> TestResult {
        let catalog = catalog()?;
        let state = reduce(&CartState::new(USD), &Action::add("p1"), &catalog)?;

        let next = reduce(&state, &Action::update_quantity("p1", 4), &catalog)?;

        assert_eq!(next.len(), 1);
        assert_eq!(next.get(&ProductId::from("p1")).map(CartItem::quantity), Some(5));

        Ok(())
    }

    #[test]
    fn update_quantity_to_zero_removes_and_keeps_order() -> TestResult {
        let catalog = catalog()?;
        let mut state = CartState::new(USD);

        for id in ["p1", "p2"] {
            state = reduce(&state, &Action::add(id), &catalog)?;
        }

        let next = reduce(&state, &Action::update_quantity("p1", -1), &catalog)?;

        assert_eq!(ids(&next), vec!["p2"]);

        Ok(())
    }

    #[test]
    fn update_quantity_below_zero_removes() -> TestResult {
        let catalog = catalog()?;
        let state = reduce(&CartState::new(USD), &Action::add("p1"), &catalog)?;

        let next = reduce(&state, &Action::update_quantity("p1", -10), &catalog)?;

        assert!(next.is_empty());

        Ok(())
    }

    #[test]
    fn update_missing_item_errors_without_touching_state() -> TestResult {
        let catalog = catalog()?;
        let state = reduce(&CartState::new(USD), &Action::add("p1"), &catalog)?;

        let result = reduce(&state, &Action::update_quantity("p2", 1), &catalog);

        assert_eq!(result, Err(ReduceError::ItemNotFound(ProductId::from("p2"))));
        assert_eq!(state.get(&ProductId::from("p1")).map(CartItem::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn update_quantity_overflow_errors() -> TestResult {
        let catalog = catalog()?;
        let state = reduce(&CartState::new(USD), &Action::add("p1"), &catalog)?;

        let result = reduce(&state, &Action::update_quantity("p1", i64::MAX), &catalog);

        assert_eq!(
            result,
            Err(ReduceError::QuantityOverflow(ProductId::from("p1")))
        );

        Ok(())
    }

    #[test]
    fn reducing_leaves_input_state_untouched() -> TestResult {
        let catalog = catalog()?;
        let state = CartState::new(USD);

        let _next = reduce(&state, &Action::add("p1"), &catalog)?;

        assert!(state.is_empty());

        Ok(())
    }
}
