use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait TagRepo: Sync + Send {
    async fn create_tag(&self, new_tag: NewTag) -> Result<i64, TagRepoError>;

    async fn get_tag(&self, tag_id: i64) -> Result<Tag, TagRepoError>;
}

#[derive(Error, Debug)]
pub enum TagRepoError {
    #[error("Tag with id {0} not found")]
    TagNotFound(i64),
    #[error("Tag id {0} must be positive")]
    InvalidId(i64),
    #[error("Tag name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub const fn new(id: i64, name: String) -> Tag {
        Tag { id, name }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewTag {
    pub name: String,
}

impl NewTag {
    pub const fn new(name: String) -> NewTag {
        NewTag { name }
    }

    pub fn to_tag(self, id: i64) -> Tag {
        Tag::new(id, self.name)
    }
}
