//! Brand Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    brands::{errors::into_status_error, get::BrandResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandsResponse {
    /// Every brand, ordered by name
    pub brands: Vec<BrandResponse>,
}

/// Brand Index Handler
#[endpoint(tags("brands"), summary = "List Brands")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BrandsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brands = state
        .app
        .brands
        .list_brands()
        .await
        .map_err(into_status_error)?;

    Ok(Json(BrandsResponse {
        brands: brands.into_iter().map(Into::into).collect(),
    }))
}
