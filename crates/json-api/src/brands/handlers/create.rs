//! Create Brand Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use gearlock_app::domain::brands::data::NewBrand;

use crate::{
    brands::{errors::into_status_error, get::BrandResponse},
    extensions::*,
    state::State,
};

/// Create Brand Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBrandRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Create Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Create Brand",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Brand created"),
        (status_code = StatusCode::CONFLICT, description = "Brand already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not edit the catalog"),
    ),
)]
#[tracing::instrument(
    name = "brands.create",
    skip(json, depot, res),
    fields(brand_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBrandRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BrandResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let brand = state
        .app
        .brands
        .create_brand(NewBrand {
            name: request.name,
            description: request.description,
        })
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("brand_uuid", tracing::field::display(brand.uuid));

    res.add_header(LOCATION, format!("/brands/{}", brand.slug), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(brand.into()))
}
