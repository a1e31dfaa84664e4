//! Product Records

use gearlock::{
    catalog::discount_percent,
    products::{Availability, Product, ProductId},
};
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{brands::records::BrandUuid, categories::records::CategoryUuid};

/// Product UUID
pub type ProductUuid = ProductId;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub sku: Option<String>,
    pub description: String,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub quantity: u32,
    pub category_uuid: Option<CategoryUuid>,
    pub brand_uuid: Option<BrandUuid>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Catalog view consulted by carts.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product {
            id: self.uuid,
            name: self.name.clone(),
            price: self.price,
            available_quantity: self.quantity,
        }
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        Availability::from_quantity(self.quantity)
    }

    /// Whole percentage off the old price, or zero.
    #[must_use]
    pub fn discount_percent(&self) -> u8 {
        discount_percent(self.price, self.old_price)
    }
}
