//! Order Lines Repository

use gearlock::{orders::NewOrderLine, products::ProductId};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{quantity_param, try_get_quantity},
    domain::orders::records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
};

const CREATE_ORDER_LINE_SQL: &str = include_str!("../sql/create_order_line.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("../sql/get_order_lines.sql");

/// A line alongside the order that owns it.
struct OwnedLine {
    order_uuid: OrderUuid,
    line: OrderLineRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert `lines` for `order`, keeping their order.
    pub(crate) async fn create_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        lines: &[NewOrderLine],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        let mut created = Vec::with_capacity(lines.len());

        for (position, line) in (0_i32..).zip(lines) {
            let owned = query_as::<Postgres, OwnedLine>(CREATE_ORDER_LINE_SQL)
                .bind(OrderLineUuid::new().into_uuid())
                .bind(order.into_uuid())
                .bind(line.product_id.into_uuid())
                .bind(position)
                .bind(&line.product_name)
                .bind(line.price)
                .bind(quantity_param(line.quantity)?)
                .fetch_one(&mut **tx)
                .await?;

            created.push(owned.line);
        }

        Ok(created)
    }

    /// Attach stored lines to each of `orders`.
    pub(crate) async fn load_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let lines = query_as::<Postgres, OwnedLine>(GET_ORDER_LINES_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        for owned in lines {
            if let Some(order) = orders
                .iter_mut()
                .find(|order| order.uuid == owned.order_uuid)
            {
                order.lines.push(owned.line);
            }
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for OwnedLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            line: OrderLineRecord {
                uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
                product_uuid: ProductId::from_uuid(row.try_get("product_uuid")?),
                product_name: row.try_get("product_name")?,
                price: row.try_get("price")?,
                quantity: try_get_quantity(row, "quantity")?,
            },
        })
    }
}
