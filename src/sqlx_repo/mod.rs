mod category_repo;
mod expense_repo;
mod tag_repo;

use crate::category_repo::CategoryRepo;
use crate::expense_repo::ExpenseRepo;
use crate::sqlx_repo::category_repo::SQLxCategoryRepo;
use crate::sqlx_repo::expense_repo::SQLxExpenseRepo;
use crate::sqlx_repo::tag_repo::SQLxTagRepo;
use crate::tag_repo::TagRepo;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub async fn create_repos(
    database_url: String,
    max_pool_size: u32,
) -> (Arc<dyn CategoryRepo>, Arc<dyn TagRepo>, Arc<dyn ExpenseRepo>) {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(&database_url)
        .await
        .unwrap();

    let category_repo = SQLxCategoryRepo::new(pool.clone());
    let tag_repo = SQLxTagRepo::new(pool.clone());
    let expense_repo = SQLxExpenseRepo::new(pool);
    (
        Arc::new(category_repo),
        Arc::new(tag_repo),
        Arc::new(expense_repo),
    )
}
