//! Staff Records

use gearlock::roles::Role;
use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Staff Member UUID
pub type StaffUuid = TypedUuid<StaffMember>;

/// An authenticated back-office user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub uuid: StaffUuid,
    pub name: String,
    pub role: Role,
    pub created_at: Timestamp,
    pub last_seen_at: Option<Timestamp>,
}

/// A newly issued token. The raw token is never stored and cannot be shown again.
#[derive(Debug, Clone)]
pub struct IssuedStaffToken {
    pub token: String,
    pub member: StaffMember,
}
