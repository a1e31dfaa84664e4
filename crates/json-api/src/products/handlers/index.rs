//! Product Index Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToParameters, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use gearlock::catalog::{PageRequest, ProductSort};
use gearlock_app::domain::products::data::ProductFilter;

use crate::{
    extensions::*,
    products::{create::parse_amount, errors::into_status_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The products on this page
    pub products: Vec<ProductResponse>,

    /// Page number, starting at 1
    pub page: u32,

    pub total_pages: u64,

    /// Products matching the filter across every page
    pub total: u64,
}

/// Product listing query
#[derive(Debug, Default, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct ProductsQuery {
    /// Case-insensitive substring of the name, description or SKU
    search: Option<String>,

    /// Only products with stock left
    available: Option<bool>,

    /// Category slug; subcategories are included
    category: Option<String>,

    /// Brand slug
    brand: Option<String>,

    /// Lowest price, inclusive
    min_price: Option<String>,

    /// Highest price, inclusive
    max_price: Option<String>,

    /// One of "newest", "price_asc", "price_desc", "name", "quantity_desc"
    sort: Option<String>,

    /// Page number, starting at 1
    page: Option<u32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn price_bound(value: Option<String>, field: &str) -> Result<Option<Decimal>, StatusError> {
    non_blank(value)
        .map(|value| parse_amount(&value, field))
        .transpose()
}

impl ProductsQuery {
    fn into_filter(self) -> Result<ProductFilter, StatusError> {
        let page = match self.page {
            Some(number) => PageRequest::new(number)
                .ok_or_else(|| StatusError::bad_request().brief("page starts at 1"))?,
            None => PageRequest::FIRST,
        };

        Ok(ProductFilter {
            search: non_blank(self.search),
            available_only: self.available.unwrap_or(false),
            category: non_blank(self.category),
            brand: non_blank(self.brand),
            min_price: price_bound(self.min_price, "min_price")?,
            max_price: price_bound(self.max_price, "max_price")?,
            include_inactive: false,
            sort: self
                .sort
                .and_then(|sort| sort.parse::<ProductSort>().ok())
                .unwrap_or_default(),
            page,
        })
    }
}

/// Product Index Handler
///
/// Returns one page of active catalog products. Unknown sort keys fall back to newest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid price bound or page"),
        (status_code = StatusCode::NOT_FOUND, description = "Category, brand or page not found"),
    ),
)]
pub(crate) async fn handler(
    query: ProductsQuery,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = query.into_filter()?;

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        page: products.number,
        total_pages: products.total_pages(),
        total: products.total_items,
        products: products.items.into_iter().map(Into::into).collect(),
    }))
}
