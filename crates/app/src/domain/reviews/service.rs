//! Reviews service.

use async_trait::async_trait;
use gearlock::reviews::average_rating;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::{records::ProductUuid, repository::PgProductsRepository},
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            records::{ProductReviews, ReviewRecord, ReviewUuid},
            repository::PgReviewsRepository,
        },
        sessions::SessionUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    reviews_repository: PgReviewsRepository,
    products_repository: PgProductsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            reviews_repository: PgReviewsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn create_review(
        &self,
        product: ProductUuid,
        session: SessionUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        if review.author_name.trim().is_empty() {
            return Err(ReviewsServiceError::MissingAuthor);
        }

        let review = NewReview {
            author_name: review.author_name,
            draft: review.draft.validate()?,
        };

        let mut tx = self.db.begin().await?;

        let record = self
            .reviews_repository
            .create_review(&mut tx, ReviewUuid::new(), product, session, &review)
            .await?;

        tx.commit().await?;

        info!(review = %record.uuid, %product, rating = record.rating.get(), "review created");

        Ok(record)
    }

    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<ProductReviews, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        self.products_repository.get_product(&mut tx, product).await?;

        let reviews = self.reviews_repository.list_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(ProductReviews {
            average_rating: average_rating(reviews.iter().map(|review| review.rating)),
            reviews,
        })
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Publish a review. Each session may review a product once.
    async fn create_review(
        &self,
        product: ProductUuid,
        session: SessionUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError>;

    /// A product's reviews, newest first, with their mean rating.
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<ProductReviews, ReviewsServiceError>;
}
