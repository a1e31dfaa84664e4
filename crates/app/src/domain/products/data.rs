//! Products Data

use gearlock::catalog::{PageRequest, ProductSort};
use rust_decimal::Decimal;

use crate::domain::{brands::records::BrandUuid, categories::records::CategoryUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: Option<String>,
    pub description: String,
    pub price: Decimal,

    /// Price before a markdown, shown struck through
    pub old_price: Option<Decimal>,

    pub quantity: u32,
    pub category: Option<CategoryUuid>,
    pub brand: Option<BrandUuid>,

    /// Whether shoppers can find the product in listings
    pub is_active: bool,
}

/// Replacement for a product's editable details.
///
/// The slug is kept and stock is changed separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub sku: Option<String>,
    pub description: String,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub category: Option<CategoryUuid>,
    pub brand: Option<BrandUuid>,
    pub is_active: bool,
}

/// Catalog listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the name, description or SKU
    pub search: Option<String>,

    /// Only products with stock left
    pub available_only: bool,

    /// Category slug; products of its subcategories are included
    pub category: Option<String>,

    /// Brand slug
    pub brand: Option<String>,

    /// Inclusive price bounds
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,

    /// Also list deactivated products
    pub include_inactive: bool,

    pub sort: ProductSort,
    pub page: PageRequest,
}
