//! Catalog Listing
//!
//! Ordering, paging and price presentation for product listings.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Products shown per listing page.
pub const PAGE_SIZE: u32 = 12;

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Most recently created first.
    #[default]
    Newest,

    /// Cheapest first.
    PriceAsc,

    /// Most expensive first.
    PriceDesc,

    /// Alphabetical by name.
    Name,

    /// Best stocked first.
    QuantityDesc,
}

impl ProductSort {
    /// Every sort, in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Name,
        Self::QuantityDesc,
    ];

    /// Stable identifier used in query strings and SQL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Name => "name",
            Self::QuantityDesc => "quantity_desc",
        }
    }
}

impl Display for ProductSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unrecognised sort identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort \"{0}\"")]
pub struct UnknownSort(pub String);

impl FromStr for ProductSort {
    type Err = UnknownSort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .ok_or_else(|| UnknownSort(value.to_string()))
    }
}

/// A one-based listing page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(u32);

impl PageRequest {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Returns `None` for page zero.
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// One-based page number.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Rows to skip before this page.
    pub fn offset(self) -> u64 {
        u64::from(self.0.saturating_sub(1)) * u64::from(PAGE_SIZE)
    }

    /// Rows on a full page.
    pub fn limit(self) -> u32 {
        PAGE_SIZE
    }

    /// Whether this page exists for `total_items` rows. The first page always exists.
    pub fn is_within(self, total_items: u64) -> bool {
        u64::from(self.0) <= page_count(total_items)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Number of pages needed for `total_items`; never less than one.
pub fn page_count(total_items: u64) -> u64 {
    total_items.div_ceil(u64::from(PAGE_SIZE)).max(1)
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Rows on this page
    pub items: Vec<T>,

    /// One-based page number
    pub number: u32,

    /// Rows across all pages
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Number of pages in the listing.
    pub fn total_pages(&self) -> u64 {
        page_count(self.total_items)
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        u64::from(self.number) < self.total_pages()
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Convert every row, keeping the paging totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            total_items: self.total_items,
        }
    }
}

impl<T> Default for Page<T> {
    /// An empty first page.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            number: PageRequest::FIRST.number(),
            total_items: 0,
        }
    }
}

/// Whole percentage knocked off `old_price`, rounded down. Zero without a higher old price.
pub fn discount_percent(price: Decimal, old_price: Option<Decimal>) -> u8 {
    let Some(old_price) = old_price.filter(|old| *old > price && old.is_sign_positive()) else {
        return 0;
    };

    price
        .checked_div(old_price)
        .map(|ratio| ((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED).trunc())
        .and_then(|percent| percent.to_u8())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sorts_parse_from_their_identifiers() -> TestResult {
        for sort in ProductSort::ALL {
            assert_eq!(sort.as_str().parse::<ProductSort>()?, sort);
        }

        assert_eq!(
            "cheapest".parse::<ProductSort>(),
            Err(UnknownSort("cheapest".to_string()))
        );

        Ok(())
    }

    #[test]
    fn page_zero_is_rejected() {
        assert_eq!(PageRequest::new(0), None);
        assert_eq!(PageRequest::new(1), Some(PageRequest::FIRST));
    }

    #[test]
    fn offsets_step_by_page_size() -> TestResult {
        let third = PageRequest::new(3).ok_or("page three")?;

        assert_eq!(PageRequest::FIRST.offset(), 0);
        assert_eq!(third.offset(), 24);
        assert_eq!(third.limit(), PAGE_SIZE);

        Ok(())
    }

    #[test]
    fn empty_listing_still_has_a_first_page() -> TestResult {
        let second = PageRequest::new(2).ok_or("page two")?;

        assert_eq!(page_count(0), 1);
        assert!(PageRequest::FIRST.is_within(0), "first page always exists");
        assert!(!second.is_within(12), "twelve rows fit on one page");
        assert!(second.is_within(13), "the thirteenth row spills over");

        Ok(())
    }

    #[test]
    fn page_navigation_flags() {
        let page = Page {
            items: vec![1, 2],
            number: 2,
            total_items: 26,
        };

        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next(), "page 2 of 3 has a next page");
        assert!(page.has_previous(), "page 2 has a previous page");
        assert_eq!(page.map(|n| n * 10).items, vec![10, 20]);
    }

    #[test]
    fn discount_is_rounded_down() {
        assert_eq!(
            discount_percent(Decimal::new(75, 0), Some(Decimal::new(100, 0))),
            25
        );
        assert_eq!(
            discount_percent(Decimal::new(66_67, 2), Some(Decimal::new(100, 0))),
            33
        );
    }

    #[test]
    fn no_discount_without_a_higher_old_price() {
        let price = Decimal::new(50, 0);

        assert_eq!(discount_percent(price, None), 0);
        assert_eq!(discount_percent(price, Some(price)), 0);
        assert_eq!(discount_percent(price, Some(Decimal::new(40, 0))), 0);
    }
}
