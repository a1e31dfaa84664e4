//! Brands service.

use async_trait::async_trait;
use gearlock::slugs::{BRAND_FALLBACK_SLUG, slug_or};
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::brands::{
        data::NewBrand,
        errors::BrandsServiceError,
        records::{BrandRecord, BrandUuid},
        repository::PgBrandsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBrandsService {
    db: Db,
    repository: PgBrandsRepository,
}

impl PgBrandsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBrandsRepository::new(),
        }
    }
}

#[async_trait]
impl BrandsService for PgBrandsService {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let brands = self.repository.list_brands(&mut tx).await?;

        tx.commit().await?;

        Ok(brands)
    }

    async fn get_brand(&self, slug: String) -> Result<BrandRecord, BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let brand = self.repository.get_brand_by_slug(&mut tx, &slug).await?;

        tx.commit().await?;

        Ok(brand)
    }

    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError> {
        if brand.name.trim().is_empty() {
            return Err(BrandsServiceError::MissingRequiredData);
        }

        let slug = slug_or(&brand.name, BRAND_FALLBACK_SLUG);

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_brand(&mut tx, BrandUuid::new(), &slug, &brand)
            .await?;

        tx.commit().await?;

        info!(brand = %created.uuid, slug = %created.slug, "brand created");

        Ok(created)
    }

    async fn delete_brand(&self, slug: String) -> Result<(), BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_brand(&mut tx, &slug).await?;

        if rows_affected == 0 {
            return Err(BrandsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%slug, "brand deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BrandsService: Send + Sync {
    /// Every brand, ordered by name.
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError>;

    /// Retrieve a brand by slug.
    async fn get_brand(&self, slug: String) -> Result<BrandRecord, BrandsServiceError>;

    /// Creates a brand. Its slug is derived from the name and must be free.
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError>;

    /// Deletes a brand. Its products keep their place in the catalog without one.
    async fn delete_brand(&self, slug: String) -> Result<(), BrandsServiceError>;
}
