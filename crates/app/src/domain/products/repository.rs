//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{quantity_param, try_get_quantity},
    domain::{
        brands::records::BrandUuid,
        categories::records::CategoryUuid,
        products::{
            data::{NewProduct, ProductFilter, ProductUpdate},
            records::{ProductRecord, ProductUuid},
        },
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_BY_SLUG_SQL: &str = include_str!("sql/get_product_by_slug.sql");
const FIND_PRODUCTS_SQL: &str = include_str!("sql/find_products.sql");
const LIST_SLUGS_SQL: &str = include_str!("sql/list_slugs.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SET_QUANTITY_SQL: &str = include_str!("sql/set_quantity.sql");
const RESERVE_QUANTITY_SQL: &str = include_str!("sql/reserve_quantity.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// A listed product with the number of rows matching the whole filter.
#[derive(Debug, Clone)]
pub(crate) struct ProductListRow {
    pub(crate) record: ProductRecord,
    pub(crate) total_count: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// One page of products matching `filter`, with the category and brand slugs already
    /// resolved to keys.
    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
        category: Option<CategoryUuid>,
        brand: Option<BrandUuid>,
    ) -> Result<Vec<ProductListRow>, sqlx::Error> {
        let limit = i64::from(filter.page.limit());
        let offset =
            i64::try_from(filter.page.offset()).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, ProductListRow>(LIST_PRODUCTS_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.available_only)
            .bind(category.map(CategoryUuid::into_uuid))
            .bind(brand.map(BrandUuid::into_uuid))
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.include_inactive)
            .bind(filter.sort.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = products.iter().map(|product| product.into_uuid()).collect();

        query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    /// Slugs equal to `base` or derived from it with a numeric suffix.
    pub(crate) async fn list_slugs(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        base: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_SLUGS_SQL)
            .bind(base)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
        slug: &str,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(&product.name)
            .bind(slug)
            .bind(product.sku.as_deref())
            .bind(&product.description)
            .bind(product.price)
            .bind(product.old_price)
            .bind(quantity_param(product.quantity)?)
            .bind(product.category.map(CategoryUuid::into_uuid))
            .bind(product.brand.map(BrandUuid::into_uuid))
            .bind(product.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name.trim())
            .bind(update.sku.as_deref())
            .bind(&update.description)
            .bind(update.price)
            .bind(update.old_price)
            .bind(update.category.map(CategoryUuid::into_uuid))
            .bind(update.brand.map(BrandUuid::into_uuid))
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_QUANTITY_SQL)
            .bind(product.into_uuid())
            .bind(quantity_param(quantity)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Take `quantity` units from stock when at least that many are left.
    ///
    /// Returns `false` when the product is gone or short of stock.
    pub(crate) async fn reserve_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(RESERVE_QUANTITY_SQL)
            .bind(product.into_uuid())
            .bind(quantity_param(quantity)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected == 1)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            sku: row.try_get("sku")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            old_price: row.try_get("old_price")?,
            quantity: try_get_quantity(row, "quantity")?,
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            brand_uuid: row
                .try_get::<Option<Uuid>, _>("brand_uuid")?
                .map(BrandUuid::from_uuid),
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductListRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_count: i64 = row.try_get("total_count")?;

        Ok(Self {
            record: ProductRecord::from_row(row)?,
            total_count: u64::try_from(total_count).map_err(|e| sqlx::Error::ColumnDecode {
                index: "total_count".to_string(),
                source: Box::new(e),
            })?,
        })
    }
}
