//! Get Brand Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock_app::domain::brands::records::BrandRecord;

use crate::{brands::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandResponse {
    pub uuid: Uuid,

    pub name: String,

    pub slug: String,

    pub description: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<BrandRecord> for BrandResponse {
    fn from(brand: BrandRecord) -> Self {
        BrandResponse {
            uuid: brand.uuid.into_uuid(),
            name: brand.name,
            slug: brand.slug,
            description: brand.description,
            created_at: brand.created_at.to_string(),
            updated_at: brand.updated_at.to_string(),
        }
    }
}

/// Get Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Get Brand",
    responses(
        (status_code = StatusCode::OK, description = "Brand found"),
        (status_code = StatusCode::NOT_FOUND, description = "Brand not found"),
    ),
)]
#[tracing::instrument(name = "brands.get", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BrandResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brand = state
        .app
        .brands
        .get_brand(slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(brand.into()))
}
