//! Cart-to-order behaviour, end to end through the public API.

use gearlock::prelude::*;
use rust_decimal::Decimal;
use testresult::TestResult;

fn product(name: &str, price: Decimal, available_quantity: u32) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        price,
        available_quantity,
    }
}

fn buyer() -> TestResult<Buyer> {
    let details = BuyerDetails {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Navy Way".to_string(),
        city: "Arlington".to_string(),
        postal_code: "22202".to_string(),
        payment_method: "card".to_string(),
        notes: Some("leave at the door".to_string()),
    };

    Ok(details.validate()?)
}

#[test]
fn any_quantity_within_stock_fits_an_empty_cart() -> TestResult {
    for available in [1, 2, 10, 11, 250] {
        let gear = product("Gear", Decimal::new(3_50, 2), available);

        for quantity in 1..=available {
            let mut cart = Cart::new();

            cart.add(&gear, quantity, QuantityMode::Increment, None)?;

            assert_eq!(cart.total_quantity(), u64::from(quantity));
        }
    }

    Ok(())
}

#[test]
fn any_quantity_above_stock_leaves_the_cart_empty() {
    for available in [0, 1, 7] {
        let gear = product("Gear", Decimal::new(3_50, 2), available);

        for quantity in available + 1..available + 5 {
            let mut cart = Cart::new();

            let result = cart.add(&gear, quantity, QuantityMode::Increment, None);

            assert!(result.is_err(), "{quantity} of {available} should be refused");
            assert!(cart.is_empty(), "refused add must not create a line");
        }
    }
}

#[test]
fn consecutive_adds_apply_fully_or_not_at_all() -> TestResult {
    let available = 6;
    let gear = product("Gear", Decimal::new(3_50, 2), available);

    for first in 1..=available {
        for second in 1..=available {
            let mut cart = Cart::new();

            cart.add(&gear, first, QuantityMode::Increment, None)?;

            let result = cart.add(&gear, second, QuantityMode::Increment, None);

            if first + second <= available {
                assert!(result.is_ok(), "{first} + {second} fits in {available}");
                assert_eq!(cart.get_item_quantity(gear.id), first + second);
            } else {
                assert!(result.is_err(), "{first} + {second} exceeds {available}");
                assert_eq!(cart.get_item_quantity(gear.id), first);
            }
        }
    }

    Ok(())
}

#[test]
fn remove_after_add_empties_the_cart() -> TestResult {
    let gear = product("Gear", Decimal::new(3_50, 2), 20);

    for quantity in [1, 5, 20] {
        let mut cart = Cart::new();

        cart.add(&gear, quantity, QuantityMode::Increment, None)?;
        cart.remove(gear.id);

        assert!(cart.is_empty(), "cart should be empty after removing {quantity}");
    }

    Ok(())
}

#[test]
fn total_price_tracks_every_mutation_exactly() -> TestResult {
    let gear = product("Gear", Decimal::new(1_10, 2), 50);
    let chain = product("Chain", Decimal::new(33_33, 2), 50);
    let bolt = product("Bolt", Decimal::new(1, 2), 500);

    let mut cart = Cart::new();

    let expected = |cart: &Cart| -> Decimal {
        cart.lines()
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum()
    };

    cart.add(&gear, 3, QuantityMode::Increment, None)?;
    assert_eq!(cart.total_price(), expected(&cart));

    cart.add(&chain, 7, QuantityMode::Increment, None)?;
    cart.add(&bolt, 333, QuantityMode::Increment, None)?;
    assert_eq!(cart.total_price(), expected(&cart));

    cart.add(&chain, 2, QuantityMode::Replace, None)?;
    assert_eq!(cart.total_price(), expected(&cart));

    cart.remove(gear.id);
    assert_eq!(cart.total_price(), expected(&cart));
    assert_eq!(cart.total_price(), Decimal::new(69_99, 2));

    Ok(())
}

#[test]
fn checkout_snapshots_lines_and_total() -> TestResult {
    let gearbox = product("Gearbox", Decimal::from(100), 10);
    let crank = product("Crank", Decimal::from(50), 10);

    let mut cart = Cart::new();

    cart.add(&gearbox, 2, QuantityMode::Increment, None)?;
    cart.add(&crank, 1, QuantityMode::Increment, None)?;

    let order = materialize(&cart, buyer()?)?;

    cart.clear();

    assert_eq!(order.total_price, Decimal::from(250));
    assert_eq!(order.lines_total(), order.total_price);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(
        order
            .lines
            .iter()
            .map(|line| (line.product_id, line.price, line.quantity))
            .collect::<Vec<_>>(),
        [
            (gearbox.id, Decimal::from(100), 2),
            (crank.id, Decimal::from(50), 1),
        ]
    );
    assert!(cart.is_empty(), "cart should be cleared after checkout");

    Ok(())
}

#[test]
fn checkout_keeps_prices_captured_at_add_time() -> TestResult {
    let mut gearbox = product("Gearbox", Decimal::from(100), 10);
    let mut cart = Cart::new();

    cart.add(&gearbox, 1, QuantityMode::Increment, None)?;

    gearbox.price = Decimal::from(120);

    let order = materialize(&cart, buyer()?)?;

    assert_eq!(order.total_price, Decimal::from(100));

    Ok(())
}

#[test]
fn empty_cart_cannot_be_materialized() -> TestResult {
    assert_eq!(
        materialize(&Cart::new(), buyer()?),
        Err(MaterializeError::EmptyCart)
    );

    Ok(())
}

#[test]
fn reconciliation_then_checkout() -> TestResult {
    let mut gearbox = product("Gearbox", Decimal::from(100), 10);
    let mut crank = product("Crank", Decimal::from(50), 10);

    let mut cart = Cart::new();

    cart.add(&gearbox, 4, QuantityMode::Increment, None)?;
    cart.add(&crank, 2, QuantityMode::Increment, None)?;

    gearbox.available_quantity = 3;
    crank.available_quantity = 0;

    let mut notices = Notices::new();
    let adjustments = cart.reconcile(&[gearbox.clone(), crank.clone()], Some(&mut notices));

    assert_eq!(adjustments.len(), 2);
    assert_eq!(notices.len(), 2);
    assert_eq!(cart.get_item_quantity(gearbox.id), 3);
    assert_eq!(cart.get_item_quantity(crank.id), 0);

    let order = materialize(&cart, buyer()?)?;

    assert_eq!(order.total_price, Decimal::from(300));

    Ok(())
}

#[test]
fn out_of_range_status_leaves_order_unchanged() {
    for policy in [TransitionPolicy::Unrestricted, TransitionPolicy::ForwardOnly] {
        let change = request_status_change(OrderStatus::Processing, "lost_in_transit", policy);

        assert_eq!(change, StatusChange::Ignored);
        assert_eq!(change.resulting(OrderStatus::Processing), OrderStatus::Processing);
    }
}

#[test]
fn session_value_survives_storage() -> TestResult {
    let gear = product("Gear", Decimal::new(3_50, 2), 5);
    let mut cart = Cart::new();

    cart.add(&gear, 2, QuantityMode::Increment, None)?;

    let stored = serde_json::to_string(&cart.to_session_value()?)?;
    let restored = Cart::from_session_value(serde_json::from_str(&stored)?)?;

    assert_eq!(restored, cart);

    Ok(())
}
