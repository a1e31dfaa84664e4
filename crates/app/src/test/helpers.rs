//! Test Helpers

use gearlock::{cart::QuantityMode, orders::BuyerDetails};
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::{CartsService, data::CartMutation},
        products::{
            ProductsService,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        sessions::SessionUuid,
    },
    test::TestContext,
};

/// An active, uncategorised product.
pub(crate) fn new_product(name: &str, price: Decimal, quantity: u32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        sku: None,
        description: String::new(),
        price,
        old_price: None,
        quantity,
        category: None,
        brand: None,
        is_active: true,
    }
}

pub(crate) fn buyer_details() -> BuyerDetails {
    BuyerDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        address: "12 Analytical Row".to_string(),
        city: "London".to_string(),
        postal_code: "NW1 6XE".to_string(),
        payment_method: "card".to_string(),
        notes: None,
    }
}

pub(crate) async fn stocked_product(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
    quantity: u32,
) -> ProductRecord {
    ctx.products
        .create_product(new_product(name, price, quantity))
        .await
        .expect("product should be created")
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    session: SessionUuid,
    product: ProductUuid,
    quantity: u32,
) -> CartMutation {
    let mutation = ctx
        .carts
        .add_item(session, product, quantity, QuantityMode::Increment)
        .await
        .expect("cart change should be stored");

    assert!(mutation.accepted, "cart refused the item: {}", mutation.message);

    mutation
}
