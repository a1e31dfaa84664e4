//! Notices
//!
//! Messages addressed to the shopper, collected while the cart is mutated or reconciled.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The requested change was applied.
    Success,

    /// Something changed without the shopper asking for it.
    Warning,

    /// The requested change was refused.
    Error,
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,

    /// Human-readable text
    pub message: String,
}

/// Ordered collection of notices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notices(Vec<Notice>);

impl Notices {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.0.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Append a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    /// Append a warning notice.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    /// Append an error notice.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Iterate over the collected notices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.0.iter()
    }

    /// Number of notices collected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the collection.
    pub fn into_vec(self) -> Vec<Notice> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_keep_insertion_order() {
        let mut notices = Notices::new();

        notices.success("added");
        notices.warning("clamped");
        notices.error("refused");

        let levels: Vec<NoticeLevel> = notices.iter().map(|notice| notice.level).collect();

        assert_eq!(
            levels,
            [NoticeLevel::Success, NoticeLevel::Warning, NoticeLevel::Error]
        );
        assert_eq!(notices.len(), 3);
    }
}
