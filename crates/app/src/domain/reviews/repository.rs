//! Reviews Repository

use gearlock::reviews::Rating;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::records::ProductUuid,
    reviews::{
        data::NewReview,
        records::{ReviewRecord, ReviewUuid},
    },
    sessions::SessionUuid,
};

const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ReviewUuid,
        product: ProductUuid,
        session: SessionUuid,
        review: &NewReview,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(session.into_uuid())
            .bind(review.author_name.trim())
            .bind(i16::from(review.draft.rating.get()))
            .bind(review.draft.text.trim())
            .bind(review.draft.advantages.trim())
            .bind(review.draft.disadvantages.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

fn try_get_rating(row: &PgRow, column: &str) -> sqlx::Result<Rating> {
    let raw: i16 = row.try_get(column)?;

    u8::try_from(raw)
        .ok()
        .and_then(|value| Rating::new(value).ok())
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("rating {raw} out of range").into(),
        })
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            session_uuid: SessionUuid::from_uuid(row.try_get("session_uuid")?),
            author_name: row.try_get("author_name")?,
            rating: try_get_rating(row, "rating")?,
            text: row.try_get("text")?,
            advantages: row.try_get("advantages")?,
            disadvantages: row.try_get("disadvantages")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
