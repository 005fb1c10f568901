use crate::category_repo::{Category, CategoryRepo, CategoryRepoError, NewCategory};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct CategoryEntry {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<CategoryEntry> for Category {
    fn from(value: CategoryEntry) -> Self {
        Category::new(value.id, value.name, value.description)
    }
}

pub struct SQLxCategoryRepo {
    pool: Pool<Postgres>,
}

impl SQLxCategoryRepo {
    pub(crate) fn new(pool: Pool<Postgres>) -> SQLxCategoryRepo {
        SQLxCategoryRepo { pool }
    }
}

#[async_trait]
impl CategoryRepo for SQLxCategoryRepo {
    #[instrument(skip(self, new_category))]
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<i64, CategoryRepoError> {
        if new_category.name.is_empty() {
            return Err(CategoryRepoError::EmptyName);
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO category (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new_category.name)
        .bind(&new_category.description)
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert category")?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError> {
        if category_id < 1 {
            return Err(CategoryRepoError::InvalidId(category_id));
        }

        let entry: Option<CategoryEntry> =
            sqlx::query_as("SELECT id, name, description FROM category WHERE id = $1")
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get category {}", category_id))?;
        entry
            .map(|entry| entry.into())
            .ok_or(CategoryRepoError::CategoryNotFound(category_id))
    }
}
