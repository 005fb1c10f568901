use crate::tag_repo::{NewTag, Tag, TagRepo, TagRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TagEntry {
    id: i64,
    name: String,
}

impl From<TagEntry> for Tag {
    fn from(value: TagEntry) -> Self {
        Tag::new(value.id, value.name)
    }
}

pub struct SQLxTagRepo {
    pool: Pool<Postgres>,
}

impl SQLxTagRepo {
    pub(crate) fn new(pool: Pool<Postgres>) -> SQLxTagRepo {
        SQLxTagRepo { pool }
    }
}

#[async_trait]
impl TagRepo for SQLxTagRepo {
    #[instrument(skip(self, new_tag))]
    async fn create_tag(&self, new_tag: NewTag) -> Result<i64, TagRepoError> {
        if new_tag.name.is_empty() {
            return Err(TagRepoError::EmptyName);
        }

        let id: i64 = sqlx::query_scalar("INSERT INTO tag (name) VALUES ($1) RETURNING id")
            .bind(&new_tag.name)
            .fetch_one(&self.pool)
            .await
            .context("Unable to insert tag")?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_tag(&self, tag_id: i64) -> Result<Tag, TagRepoError> {
        if tag_id < 1 {
            return Err(TagRepoError::InvalidId(tag_id));
        }

        let entry: Option<TagEntry> = sqlx::query_as("SELECT id, name FROM tag WHERE id = $1")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get tag {}", tag_id))?;
        entry
            .map(|entry| entry.into())
            .ok_or(TagRepoError::TagNotFound(tag_id))
    }
}
