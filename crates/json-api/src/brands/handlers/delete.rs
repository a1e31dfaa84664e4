//! Delete Brand Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{brands::errors::into_status_error, extensions::*, state::State};

/// Delete Brand Handler
///
/// The brand's products stay in the catalog without one.
#[endpoint(
    tags("brands"),
    summary = "Delete Brand",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Brand deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Brand not found"),
    ),
)]
#[tracing::instrument(name = "brands.delete", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let slug = slug.into_inner();

    state
        .app
        .brands
        .delete_brand(slug.clone())
        .await
        .map_err(into_status_error)?;

    tracing::info!(%slug, "deleted brand");

    Ok(StatusCode::NO_CONTENT)
}
