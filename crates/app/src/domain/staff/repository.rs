//! Staff Repository

use std::str::FromStr;

use gearlock::roles::Role;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::staff::{
    records::{StaffMember, StaffUuid},
    token::StaffToken,
};

const CREATE_STAFF_MEMBER_SQL: &str = include_str!("sql/create_staff_member.sql");
const FIND_STAFF_MEMBER_BY_TOKEN_SQL: &str = include_str!("sql/find_staff_member_by_token.sql");
const LIST_STAFF_MEMBERS_SQL: &str = include_str!("sql/list_staff_members.sql");
const ROTATE_STAFF_TOKEN_SQL: &str = include_str!("sql/rotate_staff_token.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStaffRepository;

impl PgStaffRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_staff_member(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        role: Role,
        token: &StaffToken,
    ) -> Result<StaffMember, sqlx::Error> {
        query_as::<Postgres, StaffMember>(CREATE_STAFF_MEMBER_SQL)
            .bind(token.staff_uuid.into_uuid())
            .bind(name)
            .bind(role.as_str())
            .bind(token.version.as_i16())
            .bind(token.digest())
            .fetch_one(&mut **tx)
            .await
    }

    /// Find the holder of `token` and record the visit.
    pub(crate) async fn find_staff_member_by_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token: &StaffToken,
    ) -> Result<Option<StaffMember>, sqlx::Error> {
        query_as::<Postgres, StaffMember>(FIND_STAFF_MEMBER_BY_TOKEN_SQL)
            .bind(token.staff_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(token.digest())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_staff_members(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<StaffMember>, sqlx::Error> {
        query_as::<Postgres, StaffMember>(LIST_STAFF_MEMBERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn rotate_staff_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token: &StaffToken,
    ) -> Result<StaffMember, sqlx::Error> {
        query_as::<Postgres, StaffMember>(ROTATE_STAFF_TOKEN_SQL)
            .bind(token.staff_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(token.digest())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StaffMember {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        Ok(Self {
            uuid: StaffUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            role: Role::from_str(&role).map_err(|error| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: Box::new(error),
            })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_seen_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_seen_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
