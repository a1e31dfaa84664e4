//! Review Records

use gearlock::{products::ProductId, reviews::Rating};
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::sessions::SessionUuid, uuids::TypedUuid};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductId,
    pub session_uuid: SessionUuid,
    pub author_name: String,
    pub rating: Rating,
    pub text: String,
    pub advantages: String,
    pub disadvantages: String,
    pub created_at: Timestamp,
}

/// A product's reviews with their mean rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductReviews {
    /// Newest first
    pub reviews: Vec<ReviewRecord>,

    /// `None` until the first review
    pub average_rating: Option<Decimal>,
}
