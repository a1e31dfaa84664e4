//! Brand Data

/// New Brand Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBrand {
    pub name: String,
    pub description: String,
}
