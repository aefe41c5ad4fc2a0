//! Integration tests for the cart store driven from fixtures

use std::{cell::RefCell, rc::Rc};

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use trolley::prelude::*;

#[test]
fn demo_fixtures_replay_to_expected_cart() -> TestResult {
    let fixture = Fixture::new();
    let catalog = fixture.load_catalog("demo")?;
    let actions = fixture.load_actions("demo")?;
    let action_count = actions.len();

    let mut store = CartStore::new(catalog, USD);
    let notifications = Rc::new(RefCell::new(0_usize));

    let sink = Rc::clone(&notifications);
    store.subscribe(move |_: &Action, _: &CartState<'_>| {
        *sink.borrow_mut() += 1;
    });

    let applied = store.replay(actions)?;

    let lines: Vec<(String, u32)> = store
        .state()
        .iter()
        .map(|item| (item.id().to_string(), item.quantity()))
        .collect();

    assert_eq!(applied, action_count);
    assert_eq!(*notifications.borrow(), action_count);
    assert_eq!(
        lines,
        vec![
            ("p1".to_string(), 2),
            ("p3".to_string(), 5),
            ("p4".to_string(), 1),
        ]
    );

    // 2 x 9.99 + 5 x 3.25 + 1 x 129.00
    assert_eq!(store.state().subtotal()?, Money::from_minor(16_523, USD));

    Ok(())
}

#[test]
fn receipt_renders_replayed_cart() -> TestResult {
    let fixture = Fixture::new();
    let mut store = CartStore::new(fixture.load_catalog("demo")?, USD);

    store.replay(fixture.load_actions("demo")?)?;

    let receipt = Receipt::from_cart(store.state())?;
    let mut out = Vec::new();
    receipt.write_to(&mut out)?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Widget"));
    assert!(output.contains("Flux Capacitor"));
    assert!(!output.contains("Gadget"));
    assert_eq!(receipt.total_quantity(), 8);

    Ok(())
}

#[test]
fn multiple_observers_see_the_same_state() -> TestResult {
    let fixture = Fixture::new();
    let mut store = CartStore::new(fixture.load_catalog("demo")?, USD);

    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    store.subscribe(move |_: &Action, state: &CartState<'_>| {
        sink.borrow_mut().push(state.total_quantity());
    });

    let sink = Rc::clone(&second);
    store.subscribe(move |_: &Action, state: &CartState<'_>| {
        sink.borrow_mut().push(state.total_quantity());
    });

    store.add_item_to_cart("p2")?;
    store.update_cart_item_quantity("p2", 3)?;
    store.update_cart_item_quantity("p2", -4)?;

    assert_eq!(*first.borrow(), vec![1, 4, 0]);
    assert_eq!(*first.borrow(), *second.borrow());

    Ok(())
}
