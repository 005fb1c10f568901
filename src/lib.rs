pub mod category_repo;
pub mod expense_repo;
pub mod tag_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;
