//! Brand Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Brand UUID
pub type BrandUuid = TypedUuid<BrandRecord>;

/// Brand Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRecord {
    pub uuid: BrandUuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
