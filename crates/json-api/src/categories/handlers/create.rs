//! Create Category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock_app::domain::categories::{data::NewCategory, records::CategoryUuid};

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,

    /// Enclosing category; omitted for a top-level category
    #[serde(default)]
    pub parent_uuid: Option<Uuid>,

    #[serde(default)]
    pub description: String,

    /// Sort key among siblings, lowest first
    #[serde(default)]
    pub position: i32,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            name: request.name,
            parent: request.parent_uuid.map(CategoryUuid::from_uuid),
            description: request.description,
            position: request.position,
        }
    }
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::NOT_FOUND, description = "Parent category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not edit the catalog"),
    ),
)]
#[tracing::instrument(
    name = "categories.create",
    skip(json, depot, res),
    fields(category_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .create_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("category_uuid", tracing::field::display(category.uuid));

    res.add_header(LOCATION, format!("/categories/{}", category.slug), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use gearlock_app::domain::categories::CategoriesServiceError;

    use crate::test_helpers::{TestServices, make_category, staff_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        staff_service(services, Router::with_path("categories").post(handler))
    }

    #[tokio::test]
    async fn test_create_subcategory_success() -> TestResult {
        let parent = CategoryUuid::new();
        let uuid = CategoryUuid::new();

        let mut services = TestServices::default();

        services
            .categories
            .expect_create_category()
            .once()
            .withf(move |new| {
                *new == NewCategory {
                    name: "Gears".to_string(),
                    parent: Some(parent),
                    description: String::new(),
                    position: 2,
                }
            })
            .return_once(move |_| Ok(make_category(uuid, "Gears", Some(parent))));

        let mut res = TestClient::post("http://example.com/categories")
            .json(&json!({ "name": "Gears", "parent_uuid": parent, "position": 2 }))
            .send(&make_service(services))
            .await;

        let body: CategoryResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/categories/gears"));
        assert_eq!(body.parent_uuid, Some(parent.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_under_unknown_parent_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .categories
            .expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::ParentNotFound));

        let res = TestClient::post("http://example.com/categories")
            .json(&json!({ "name": "Gears", "parent_uuid": Uuid::now_v7() }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_blank_category_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services
            .categories
            .expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/categories")
            .json(&json!({ "name": "  " }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
