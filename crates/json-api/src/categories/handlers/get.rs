//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock_app::domain::categories::records::{CategoryDetail, CategoryRecord};

use crate::{categories::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,

    pub name: String,

    /// URL-safe identifier derived from the name
    pub slug: String,

    /// Enclosing category, if any
    pub parent_uuid: Option<Uuid>,

    pub description: String,

    /// Sort key among siblings
    pub position: i32,

    pub created_at: String,

    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: category.uuid.into_uuid(),
            name: category.name,
            slug: category.slug,
            parent_uuid: category.parent_uuid.map(Into::into),
            description: category.description,
            position: category.position,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,

    /// Direct subcategories
    pub children: Vec<CategoryResponse>,
}

impl From<CategoryDetail> for CategoryDetailResponse {
    fn from(detail: CategoryDetail) -> Self {
        CategoryDetailResponse {
            category: detail.category.into(),
            children: detail.children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Category Handler
///
/// Returns a category with its direct subcategories. Its products are listed through
/// `/products?category={slug}`.
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
#[tracing::instrument(name = "categories.get", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let detail = state
        .app
        .categories
        .get_category(slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(detail.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use gearlock_app::domain::categories::{CategoriesServiceError, records::CategoryUuid};

    use crate::test_helpers::{TestServices, customer_service, make_category};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        customer_service(services, Router::with_path("categories/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_category_includes_children() -> TestResult {
        let parts = CategoryUuid::new();
        let gears = CategoryUuid::new();

        let mut services = TestServices::default();

        services
            .categories
            .expect_get_category()
            .once()
            .withf(|slug| slug == "parts")
            .return_once(move |_| {
                Ok(CategoryDetail {
                    category: make_category(parts, "Parts", None),
                    children: vec![make_category(gears, "Gears", Some(parts))],
                })
            });

        let mut res = TestClient::get("http://example.com/categories/parts")
            .send(&make_service(services))
            .await;

        let body: CategoryDetailResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.category.uuid, parts.into_uuid());
        assert_eq!(
            body.children.iter().map(|child| child.uuid).collect::<Vec<_>>(),
            vec![gears.into_uuid()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_category_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .categories
            .expect_get_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::get("http://example.com/categories/nowhere")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
