//! Visitor sessions

use crate::uuids::TypedUuid;

/// Anonymous visitor session, identified by a cookie.
#[derive(Debug, Clone, Copy)]
pub struct Session;

/// Session UUID
pub type SessionUuid = TypedUuid<Session>;
