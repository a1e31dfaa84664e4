//! Cart Sessions Repository

use gearlock::cart::Cart;
use serde_json::Value;
use sqlx::{Postgres, Transaction, query, query_scalar};
use tracing::warn;

use crate::domain::sessions::SessionUuid;

const LOAD_CART_SQL: &str = include_str!("sql/load_cart.sql");
const SAVE_CART_SQL: &str = include_str!("sql/save_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartSessionsRepository;

impl PgCartSessionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load and lock the session's cart. Missing or undecodable carts load as empty.
    pub(crate) async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: SessionUuid,
    ) -> Result<Cart, sqlx::Error> {
        let stored = query_scalar::<Postgres, Value>(LOAD_CART_SQL)
            .bind(session.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        let Some(value) = stored else {
            return Ok(Cart::new());
        };

        match Cart::from_session_value(value) {
            Ok(cart) => Ok(cart),
            Err(error) => {
                warn!(%session, %error, "discarding unreadable session cart");

                Ok(Cart::new())
            }
        }
    }

    pub(crate) async fn save_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: SessionUuid,
        cart: &Cart,
    ) -> Result<(), sqlx::Error> {
        let value = cart
            .to_session_value()
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(SAVE_CART_SQL)
            .bind(session.into_uuid())
            .bind(value)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
