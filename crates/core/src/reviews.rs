//! Reviews

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Star rating between [`MIN_RATING`] and [`MAX_RATING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Returned for ratings outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
pub struct InvalidRating(pub u8);

impl Rating {
    /// Validate a raw rating.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRating`] outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, InvalidRating> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating(value))
        }
    }

    /// The raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Filled stars, e.g. `★★★` for three.
    pub fn stars(self) -> String {
        "★".repeat(usize::from(self.0))
    }

    /// Unfilled stars making up the remainder to five.
    pub fn empty_stars(self) -> String {
        "☆".repeat(usize::from(MAX_RATING - self.0))
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Mean of `ratings` rounded half away from zero to one decimal place; `None` when empty.
pub fn average_rating(ratings: impl IntoIterator<Item = Rating>) -> Option<Decimal> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), rating| {
            (sum + u64::from(rating.get()), count + 1)
        });

    if count == 0 {
        return None;
    }

    let mean = Decimal::from(sum).checked_div(Decimal::from(count))?;

    Some(mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// A review as submitted by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Star rating
    pub rating: Rating,

    /// Review body
    pub text: String,

    /// What the author liked
    #[serde(default)]
    pub advantages: String,

    /// What the author disliked
    #[serde(default)]
    pub disadvantages: String,
}

/// Reasons a review draft is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The body is blank.
    #[error("review text is required")]
    MissingText,
}

impl ReviewDraft {
    /// Trim the free-text fields and require a body.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingText`] when the body is blank.
    pub fn validate(self) -> Result<Self, ReviewError> {
        let text = self.text.trim().to_string();

        if text.is_empty() {
            return Err(ReviewError::MissingText);
        }

        Ok(Self {
            rating: self.rating,
            text,
            advantages: self.advantages.trim().to_string(),
            disadvantages: self.disadvantages.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rating_range_is_enforced() {
        assert_eq!(Rating::new(0), Err(InvalidRating(0)));
        assert_eq!(Rating::new(6), Err(InvalidRating(6)));
        assert!(Rating::new(5).is_ok(), "5 is a valid rating");
    }

    #[test]
    fn rating_deserialization_validates() {
        assert!(
            serde_json::from_value::<Rating>(json!(9)).is_err(),
            "9 should not deserialize"
        );
    }

    #[test]
    fn stars_fill_to_five() -> TestResult {
        let rating = Rating::new(3)?;

        assert_eq!(rating.stars(), "★★★");
        assert_eq!(rating.empty_stars(), "☆☆");

        Ok(())
    }

    #[test]
    fn average_rounds_to_one_place() -> TestResult {
        let ratings = [Rating::new(5)?, Rating::new(4)?, Rating::new(4)?];

        assert_eq!(average_rating(ratings), Some(Decimal::new(43, 1)));
        assert_eq!(average_rating(Vec::<Rating>::new()), None);

        Ok(())
    }

    #[test]
    fn blank_review_text_is_refused() -> TestResult {
        let draft = ReviewDraft {
            rating: Rating::new(4)?,
            text: "   ".to_string(),
            advantages: String::new(),
            disadvantages: String::new(),
        };

        assert_eq!(draft.validate(), Err(ReviewError::MissingText));

        Ok(())
    }
}
