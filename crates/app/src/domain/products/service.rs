//! Products service.

use async_trait::async_trait;
use gearlock::{
    catalog::{Page, PageRequest},
    slugs::{base_slug, unique_slug},
};
use mockall::automock;
use tracing::info;

use crate::{
    database::{Db, MAX_QUANTITY},
    domain::{
        brands::{records::BrandUuid, repository::PgBrandsRepository},
        categories::{records::CategoryUuid, repository::PgCategoriesRepository},
        products::{
            data::{NewProduct, ProductFilter, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    categories_repository: PgCategoriesRepository,
    brands_repository: PgBrandsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            categories_repository: PgCategoriesRepository::new(),
            brands_repository: PgBrandsRepository::new(),
        }
    }
}

/// Refuse stock levels the `INTEGER` column cannot store.
fn checked_quantity(quantity: u32) -> Result<u32, ProductsServiceError> {
    if quantity > MAX_QUANTITY {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(quantity)
}

/// Map a missing row to `missing`, keeping every other failure.
fn missing_as(error: sqlx::Error, missing: ProductsServiceError) -> ProductsServiceError {
    if matches!(error, sqlx::Error::RowNotFound) {
        return missing;
    }

    error.into()
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let category: Option<CategoryUuid> = match filter.category.as_deref() {
            Some(slug) => Some(
                self.categories_repository
                    .get_category_by_slug(&mut tx, slug)
                    .await
                    .map_err(|e| missing_as(e, ProductsServiceError::CategoryNotFound))?
                    .uuid,
            ),
            None => None,
        };

        let brand: Option<BrandUuid> = match filter.brand.as_deref() {
            Some(slug) => Some(
                self.brands_repository
                    .get_brand_by_slug(&mut tx, slug)
                    .await
                    .map_err(|e| missing_as(e, ProductsServiceError::BrandNotFound))?
                    .uuid,
            ),
            None => None,
        };

        let rows = self
            .repository
            .list_products(&mut tx, &filter, category, brand)
            .await?;

        tx.commit().await?;

        if rows.is_empty() && filter.page != PageRequest::FIRST {
            return Err(ProductsServiceError::PageNotFound);
        }

        let total_items = rows.first().map_or(0, |row| row.total_count);

        Ok(Page {
            items: rows.into_iter().map(|row| row.record).collect(),
            number: filter.page.number(),
            total_items,
        })
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn get_product_by_slug(
        &self,
        slug: String,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product_by_slug(&mut tx, &slug).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn find_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.find_products(&mut tx, &products).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        checked_quantity(product.quantity)?;

        let mut tx = self.db.begin().await?;

        let base = base_slug(&product.name, product.sku.as_deref());
        let taken = self.repository.list_slugs(&mut tx, &base).await?;
        let slug = unique_slug(&base, |candidate| taken.iter().any(|slug| slug == candidate));

        let created = self
            .repository
            .create_product(&mut tx, ProductUuid::new(), &slug, &product)
            .await?;

        tx.commit().await?;

        info!(product = %created.uuid, slug = %created.slug, "product created");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if update.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        info!(product = %updated.uuid, is_active = updated.is_active, "product updated");

        Ok(updated)
    }

    async fn set_quantity(
        &self,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let quantity = checked_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .set_quantity(&mut tx, product, quantity)
            .await?;

        tx.commit().await?;

        info!(product = %updated.uuid, quantity, "product stock set");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one page of products matching the filter, in the filter's order.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve a single product by its slug.
    async fn get_product_by_slug(
        &self,
        slug: String,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve every listed product among `products`. Unknown keys are skipped.
    async fn find_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a new product with a slug derived from its name.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's editable details, keeping its slug and stock.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the available quantity of a product.
    async fn set_quantity(
        &self,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product. Refused while orders reference it.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
