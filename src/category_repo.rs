use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn create_category(&self, new_category: NewCategory)
        -> Result<i64, CategoryRepoError>;

    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError>;
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error("Category with id {0} not found")]
    CategoryNotFound(i64),
    #[error("Category id {0} must be positive")]
    InvalidId(i64),
    #[error("Category name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub const fn new(id: i64, name: String, description: Option<String>) -> Category {
        Category {
            id,
            name,
            description,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub const fn new(name: String, description: Option<String>) -> NewCategory {
        NewCategory { name, description }
    }

    pub fn to_category(self, id: i64) -> Category {
        Category::new(id, self.name, self.description)
    }
}
