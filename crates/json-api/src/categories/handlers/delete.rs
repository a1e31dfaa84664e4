//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Delete Category Handler
///
/// Subcategories go with it; their products stay in the catalog without a category.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
#[tracing::instrument(name = "categories.delete", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let slug = slug.into_inner();

    state
        .app
        .categories
        .delete_category(slug.clone())
        .await
        .map_err(into_status_error)?;

    tracing::info!(%slug, "deleted category");

    Ok(StatusCode::NO_CONTENT)
}
