//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock::reviews::{Rating, ReviewDraft};
use gearlock_app::domain::{products::records::ProductUuid, reviews::data::NewReview};

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, index::ReviewResponse},
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub author_name: String,

    /// 1 to 5 stars
    pub rating: u8,

    pub text: String,

    #[serde(default)]
    pub advantages: String,

    #[serde(default)]
    pub disadvantages: String,
}

impl CreateReviewRequest {
    fn into_new_review(self) -> Result<NewReview, StatusError> {
        let rating = Rating::new(self.rating).or_400("rating must be between 1 and 5")?;

        Ok(NewReview {
            author_name: self.author_name,
            draft: ReviewDraft {
                rating,
                text: self.text,
                advantages: self.advantages,
                disadvantages: self.disadvantages,
            },
        })
    }
}

/// Create Review Handler
///
/// Publishes a review for the product on behalf of the current session.
#[endpoint(
    tags("reviews"),
    summary = "Create Product Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid review"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Session already reviewed the product"),
    ),
)]
#[tracing::instrument(
    name = "reviews.create",
    skip(product, json, depot, res),
    fields(
        product_uuid = tracing::field::Empty,
        session_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("session_uuid", tracing::field::display(session));

    let review = json.into_inner().into_new_review()?;

    let created = state
        .app
        .reviews
        .create_review(product, session, review)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use gearlock::reviews::ReviewError;
    use gearlock_app::domain::reviews::{
        ReviewsServiceError,
        records::{ReviewRecord, ReviewUuid},
    };
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_SESSION_UUID, TestServices, customer_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        customer_service(
            services,
            Router::with_path("products/{product}/reviews").post(handler),
        )
    }

    fn review_body() -> serde_json::Value {
        json!({
            "author_name": "Grace",
            "rating": 5,
            "text": "Shifts cleanly",
            "advantages": "Light",
        })
    }

    #[tokio::test]
    async fn test_create_review_success() -> TestResult {
        let product = ProductUuid::new();

        let mut services = TestServices::default();

        services
            .reviews
            .expect_create_review()
            .once()
            .withf(move |requested, session, review| {
                *requested == product
                    && *session == TEST_SESSION_UUID
                    && review.author_name == "Grace"
                    && review.draft.rating.get() == 5
                    && review.draft.disadvantages.is_empty()
            })
            .return_once(move |product_uuid, session_uuid, review| {
                Ok(ReviewRecord {
                    uuid: ReviewUuid::new(),
                    product_uuid,
                    session_uuid,
                    author_name: review.author_name,
                    rating: review.draft.rating,
                    text: review.draft.text,
                    advantages: review.draft.advantages,
                    disadvantages: review.draft.disadvantages,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post(&format!("http://example.com/products/{product}/reviews"))
            .json(&review_body())
            .send(&make_service(services))
            .await;

        let body: ReviewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.rating, 5);
        assert_eq!(body.text, "Shifts cleanly");

        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_rejected() -> TestResult {
        let mut services = TestServices::default();

        services.reviews.expect_create_review().never();

        let res = TestClient::post(&format!(
            "http://example.com/products/{}/reviews",
            Uuid::now_v7()
        ))
        .json(&json!({ "author_name": "Grace", "rating": 6, "text": "Too good" }))
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_text_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services
            .reviews
            .expect_create_review()
            .once()
            .return_once(|_, _, _| Err(ReviewsServiceError::Invalid(ReviewError::MissingText)));

        let res = TestClient::post(&format!(
            "http://example.com/products/{}/reviews",
            Uuid::now_v7()
        ))
        .json(&json!({ "author_name": "Grace", "rating": 3, "text": "  " }))
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_second_review_returns_409() -> TestResult {
        let mut services = TestServices::default();

        services
            .reviews
            .expect_create_review()
            .once()
            .return_once(|_, _, _| Err(ReviewsServiceError::AlreadyExists));

        let res = TestClient::post(&format!(
            "http://example.com/products/{}/reviews",
            Uuid::now_v7()
        ))
        .json(&review_body())
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
