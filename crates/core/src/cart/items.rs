//! Cart items joined with live catalog data.

use std::slice::Iter;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    cart::{Cart, CartLine},
    products::{Product, ProductId},
};

/// A cart line alongside the live product it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartItem<'a> {
    /// The stored line
    pub line: &'a CartLine,

    /// The product as currently listed in the catalog
    pub product: &'a Product,

    /// `line.unit_price * line.quantity`
    pub total_price: Decimal,
}

/// Lazy join of cart lines with products, in line order.
///
/// Lines whose product is not among the supplied products are skipped.
#[derive(Debug, Clone)]
pub struct CartItems<'a> {
    lines: Iter<'a, CartLine>,
    products: FxHashMap<ProductId, &'a Product>,
}

impl<'a> Iterator for CartItems<'a> {
    type Item = CartItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(|line| {
            self.products
                .get(&line.product_id)
                .map(|product| CartItem {
                    line,
                    product,
                    total_price: line.total_price(),
                })
        })
    }
}

impl Cart {
    /// Join every line with its live product from `products`.
    ///
    /// Each call starts a fresh pass over the cart.
    pub fn iter_with<'a>(&'a self, products: &'a [Product]) -> CartItems<'a> {
        CartItems {
            lines: self.lines.iter(),
            products: index_products(products),
        }
    }
}

pub(super) fn index_products(products: &[Product]) -> FxHashMap<ProductId, &Product> {
    products
        .iter()
        .map(|product| (product.id, product))
        .collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::QuantityMode;

    use super::*;

    fn product(name: &str, price: i64, available_quantity: u32) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            price: Decimal::new(price, 2),
            available_quantity,
        }
    }

    #[test]
    fn join_attaches_live_product_and_line_total() -> TestResult {
        let lamp = product("Lamp", 12_50, 5);
        let mut cart = Cart::new();

        cart.add(&lamp, 2, QuantityMode::Increment, None)?;

        let mut live = lamp.clone();
        live.available_quantity = 1;

        let products = [live];
        let items: Vec<CartItem<'_>> = cart.iter_with(&products).collect();

        let [item] = items.as_slice() else {
            return Err("expected exactly one item".into());
        };

        assert_eq!(item.product.available_quantity, 1);
        assert_eq!(item.total_price, Decimal::new(25_00, 2));

        Ok(())
    }

    #[test]
    fn join_skips_lines_without_live_product() -> TestResult {
        let lamp = product("Lamp", 12_50, 5);
        let shade = product("Shade", 5_00, 5);
        let mut cart = Cart::new();

        cart.add(&lamp, 1, QuantityMode::Increment, None)?;
        cart.add(&shade, 1, QuantityMode::Increment, None)?;

        let products = [shade.clone()];

        let ids: Vec<ProductId> = cart
            .iter_with(&products)
            .map(|item| item.product.id)
            .collect();

        assert_eq!(ids, [shade.id]);

        Ok(())
    }

    #[test]
    fn join_is_restartable() -> TestResult {
        let lamp = product("Lamp", 12_50, 5);
        let mut cart = Cart::new();

        cart.add(&lamp, 1, QuantityMode::Increment, None)?;

        let products = [lamp];

        assert_eq!(cart.iter_with(&products).count(), 1);
        assert_eq!(cart.iter_with(&products).count(), 1);

        Ok(())
    }
}
