//! Depot helper extensions.

use std::any::Any;

use gearlock_app::domain::{sessions::SessionUuid, staff::records::StaffMember};
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_uuid(&mut self, session: SessionUuid);

    /// The customer session; always present behind the session middleware.
    fn session_uuid_or_500(&self) -> Result<SessionUuid, StatusError>;

    fn insert_staff_member(&mut self, member: StaffMember);

    fn staff_member_or_401(&self) -> Result<&StaffMember, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_uuid(&mut self, session: SessionUuid) {
        self.inject(session);
    }

    fn session_uuid_or_500(&self) -> Result<SessionUuid, StatusError> {
        self.obtain_or_500::<SessionUuid>().copied()
    }

    fn insert_staff_member(&mut self, member: StaffMember) {
        self.inject(member);
    }

    fn staff_member_or_401(&self) -> Result<&StaffMember, StatusError> {
        self.obtain::<StaffMember>()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
