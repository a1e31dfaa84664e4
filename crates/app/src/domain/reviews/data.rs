//! Review Data

use gearlock::reviews::ReviewDraft;

/// New Review Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Name shown next to the review
    pub author_name: String,

    pub draft: ReviewDraft,
}
