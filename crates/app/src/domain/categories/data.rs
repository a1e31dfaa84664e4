//! Category Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,

    /// Enclosing category; `None` for a top-level category
    pub parent: Option<CategoryUuid>,

    pub description: String,

    /// Sort key among siblings, lowest first
    pub position: i32,
}
