//! Staff service.

use async_trait::async_trait;
use gearlock::roles::Role;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::staff::{
        errors::StaffServiceError,
        records::{IssuedStaffToken, StaffMember, StaffUuid},
        repository::PgStaffRepository,
        token::StaffToken,
    },
};

#[derive(Debug, Clone)]
pub struct PgStaffService {
    db: Db,
    repository: PgStaffRepository,
}

impl PgStaffService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStaffRepository::new(),
        }
    }
}

#[async_trait]
impl StaffService for PgStaffService {
    async fn authenticate(&self, bearer_token: &str) -> Result<StaffMember, StaffServiceError> {
        let token: StaffToken = bearer_token.parse()?;

        let mut tx = self.db.begin().await?;

        let member = self
            .repository
            .find_staff_member_by_token(&mut tx, &token)
            .await?
            .ok_or(StaffServiceError::NotFound)?;

        tx.commit().await?;

        Ok(member)
    }

    async fn issue_token(
        &self,
        name: String,
        role: Role,
    ) -> Result<IssuedStaffToken, StaffServiceError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(StaffServiceError::MissingName);
        }

        let token = StaffToken::generate(StaffUuid::new());

        let mut tx = self.db.begin().await?;

        let member = self
            .repository
            .create_staff_member(&mut tx, name, role, &token)
            .await?;

        tx.commit().await?;

        info!(staff = %member.uuid, %role, "staff member created");

        Ok(IssuedStaffToken {
            token: token.encode(),
            member,
        })
    }

    async fn rotate_token(&self, staff: StaffUuid) -> Result<IssuedStaffToken, StaffServiceError> {
        let token = StaffToken::generate(staff);

        let mut tx = self.db.begin().await?;

        let member = self.repository.rotate_staff_token(&mut tx, &token).await?;

        tx.commit().await?;

        info!(%staff, "staff token rotated");

        Ok(IssuedStaffToken {
            token: token.encode(),
            member,
        })
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let members = self.repository.list_staff_members(&mut tx).await?;

        tx.commit().await?;

        Ok(members)
    }
}

#[automock]
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Resolve a bearer token to its staff member.
    async fn authenticate(&self, bearer_token: &str) -> Result<StaffMember, StaffServiceError>;

    /// Create a staff member and hand out their first token.
    async fn issue_token(
        &self,
        name: String,
        role: Role,
    ) -> Result<IssuedStaffToken, StaffServiceError>;

    /// Replace a staff member's token, invalidating the old one.
    async fn rotate_token(&self, staff: StaffUuid) -> Result<IssuedStaffToken, StaffServiceError>;

    async fn list_staff(&self) -> Result<Vec<StaffMember>, StaffServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_its_holder() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx
            .staff
            .issue_token("  Grace  ".to_string(), Role::Manager)
            .await?;

        let member = ctx.staff.authenticate(&issued.token).await?;

        assert_eq!(member.uuid, issued.member.uuid);
        assert_eq!(member.name, "Grace");
        assert_eq!(member.role, Role::Manager);

        Ok(())
    }

    #[tokio::test]
    async fn rotated_token_replaces_the_old_one() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.staff.issue_token("Grace".to_string(), Role::Admin).await?;
        let rotated = ctx.staff.rotate_token(issued.member.uuid).await?;

        let stale = ctx.staff.authenticate(&issued.token).await;

        assert!(
            matches!(stale, Err(StaffServiceError::NotFound)),
            "expected NotFound, got {stale:?}"
        );
        assert_eq!(
            ctx.staff.authenticate(&rotated.token).await?.uuid,
            issued.member.uuid
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_names_and_unknown_members_are_refused() {
        let ctx = TestContext::new().await;

        let blank = ctx.staff.issue_token(" ".to_string(), Role::Admin).await;

        assert!(
            matches!(blank, Err(StaffServiceError::MissingName)),
            "expected MissingName, got {blank:?}"
        );

        let unknown = ctx.staff.rotate_token(StaffUuid::new()).await;

        assert!(
            matches!(unknown, Err(StaffServiceError::NotFound)),
            "expected NotFound, got {unknown:?}"
        );
    }
}
