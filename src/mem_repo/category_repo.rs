use crate::category_repo::{Category, CategoryRepo, CategoryRepoError, NewCategory};
use crate::mem_repo::SharedState;
use async_trait::async_trait;

pub struct MemCategoryRepo {
    state: SharedState,
}

impl MemCategoryRepo {
    pub(crate) fn new(state: SharedState) -> MemCategoryRepo {
        MemCategoryRepo { state }
    }
}

#[async_trait]
impl CategoryRepo for MemCategoryRepo {
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<i64, CategoryRepoError> {
        if new_category.name.is_empty() {
            return Err(CategoryRepoError::EmptyName);
        }

        let mut write_guard = self.state.write_lock()?;

        let id = write_guard.next_category_id;
        write_guard.next_category_id += 1;
        write_guard.categories.insert(id, new_category.to_category(id));

        Ok(id)
    }

    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError> {
        if category_id < 1 {
            return Err(CategoryRepoError::InvalidId(category_id));
        }

        let read_guard = self.state.read_lock()?;
        read_guard
            .categories
            .get(&category_id)
            .cloned()
            .ok_or(CategoryRepoError::CategoryNotFound(category_id))
    }
}
