//! Categories service.

use async_trait::async_trait;
use gearlock::slugs::{CATEGORY_FALLBACK_SLUG, slug_or, unique_slug};
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::categories::{
        data::NewCategory,
        errors::CategoriesServiceError,
        records::{CategoryDetail, CategoryRecord, CategoryUuid},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(&self, slug: String) -> Result<CategoryDetail, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category_by_slug(&mut tx, &slug).await?;
        let children = self.repository.list_children(&mut tx, category.uuid).await?;

        tx.commit().await?;

        Ok(CategoryDetail { category, children })
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if category.name.trim().is_empty() {
            return Err(CategoriesServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let base = slug_or(&category.name, CATEGORY_FALLBACK_SLUG);
        let taken = self.repository.list_slugs(&mut tx, &base).await?;
        let slug = unique_slug(&base, |candidate| taken.iter().any(|slug| slug == candidate));

        let created = self
            .repository
            .create_category(&mut tx, CategoryUuid::new(), &slug, &category)
            .await?;

        tx.commit().await?;

        info!(category = %created.uuid, slug = %created.slug, "category created");

        Ok(created)
    }

    async fn delete_category(&self, slug: String) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, &slug).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%slug, "category deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Every category, ordered by position then name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// A category and its direct subcategories.
    async fn get_category(&self, slug: String) -> Result<CategoryDetail, CategoriesServiceError>;

    /// Creates a category with a unique slug derived from its name.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category with its subcategories. Their products become uncategorised.
    async fn delete_category(&self, slug: String) -> Result<(), CategoriesServiceError>;
}
