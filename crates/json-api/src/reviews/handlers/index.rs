//! List Reviews Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock_app::domain::{
    products::records::ProductUuid,
    reviews::records::{ProductReviews, ReviewRecord},
};

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub author_name: String,

    /// 1 to 5 stars
    pub rating: u8,

    pub text: String,
    pub advantages: String,
    pub disadvantages: String,
    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        ReviewResponse {
            uuid: review.uuid.into_uuid(),
            author_name: review.author_name,
            rating: review.rating.get(),
            text: review.text,
            advantages: review.advantages,
            disadvantages: review.disadvantages,
            created_at: review.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// Newest first
    pub reviews: Vec<ReviewResponse>,

    /// Mean rating to one decimal place, absent without reviews
    pub average_rating: Option<String>,
}

impl From<ProductReviews> for ReviewsResponse {
    fn from(reviews: ProductReviews) -> Self {
        ReviewsResponse {
            reviews: reviews.reviews.into_iter().map(Into::into).collect(),
            average_rating: reviews.average_rating.map(|rating| rating.to_string()),
        }
    }
}

/// List Reviews Handler
#[endpoint(
    tags("reviews"),
    summary = "List Product Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews of the product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "reviews.index",
    skip(product, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let reviews = state
        .app
        .reviews
        .list_reviews(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into()))
}
