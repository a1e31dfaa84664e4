//! Read-time reconciliation of held quantities against live stock.

use crate::{
    cart::{Cart, QuantityMode},
    notices::Notices,
    products::{Product, ProductId},
};

use super::items::index_products;

/// A correction applied to one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adjustment {
    /// The product sold out and its line was dropped.
    Removed {
        product_id: ProductId,
        product_name: String,
    },

    /// The held quantity was lowered to the available stock.
    Clamped {
        product_id: ProductId,
        product_name: String,
        from: u32,
        to: u32,
    },

    /// The product is gone from the catalog and its line was dropped.
    Missing {
        product_id: ProductId,
        product_name: String,
    },
}

impl Adjustment {
    /// Product the correction applies to.
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::Removed { product_id, .. }
            | Self::Clamped { product_id, .. }
            | Self::Missing { product_id, .. } => *product_id,
        }
    }

    /// Warning shown to the shopper.
    pub fn message(&self) -> String {
        match self {
            Self::Removed { product_name, .. } => {
                format!("\"{product_name}\" is out of stock and was removed from your cart")
            }
            Self::Clamped {
                product_name, to, ..
            } => format!(
                "only {to} of \"{product_name}\" available, the quantity in your cart was reduced"
            ),
            Self::Missing { product_name, .. } => {
                format!("\"{product_name}\" is no longer sold and was removed from your cart")
            }
        }
    }
}

enum Correction {
    Drop(Adjustment),
    Clamp(Product, Adjustment),
}

impl Cart {
    /// Compare every line with the live catalog and correct it in place.
    ///
    /// Lines for sold-out or vanished products are removed; lines holding more than the
    /// available stock are lowered to it. Each correction is returned and, when `notices`
    /// is given, reported as a warning.
    pub fn reconcile(
        &mut self,
        products: &[Product],
        mut notices: Option<&mut Notices>,
    ) -> Vec<Adjustment> {
        let index = index_products(products);

        let corrections: Vec<Correction> = self
            .lines
            .iter()
            .filter_map(|line| {
                let Some(product) = index.get(&line.product_id) else {
                    return Some(Correction::Drop(Adjustment::Missing {
                        product_id: line.product_id,
                        product_name: line.product_name.clone(),
                    }));
                };

                match product.available_quantity {
                    0 => Some(Correction::Drop(Adjustment::Removed {
                        product_id: line.product_id,
                        product_name: line.product_name.clone(),
                    })),
                    available if available < line.quantity => Some(Correction::Clamp(
                        (*product).clone(),
                        Adjustment::Clamped {
                            product_id: line.product_id,
                            product_name: line.product_name.clone(),
                            from: line.quantity,
                            to: available,
                        },
                    )),
                    _ => None,
                }
            })
            .collect();

        let mut adjustments = Vec::with_capacity(corrections.len());

        for correction in corrections {
            let adjustment = match correction {
                Correction::Drop(adjustment) => {
                    self.remove(adjustment.product_id());

                    adjustment
                }
                Correction::Clamp(product, adjustment) => {
                    if self
                        .add(&product, product.available_quantity, QuantityMode::Replace, None)
                        .is_err()
                    {
                        self.remove(product.id);
                    }

                    adjustment
                }
            };

            if let Some(notices) = notices.as_deref_mut() {
                notices.warning(adjustment.message());
            }

            adjustments.push(adjustment);
        }

        adjustments
    }
}
