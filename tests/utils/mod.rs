use expense_repo::category_repo::CategoryRepo;
use expense_repo::expense_repo::ExpenseRepo;
use expense_repo::tag_repo::TagRepo;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(
    repo_type: RepoType,
) -> (Arc<dyn CategoryRepo>, Arc<dyn TagRepo>, Arc<dyn ExpenseRepo>) {
    match repo_type {
        RepoType::SQLx => {
            let config = fs::read_to_string("config_test.toml").unwrap();
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            expense_repo::sqlx_repo::create_repos(config.database_url, 1).await
        }
        RepoType::Mem => expense_repo::mem_repo::create_repos(),
    }
}
