mod expense_utils;
mod utils;

// These tests need a running PostgreSQL instance with the expense schema
// applied; point database_url in config_test.toml at it and run with
// `cargo test -- --ignored`.

use chrono::NaiveDate;
use expense_repo::category_repo::NewCategory;
use expense_repo::expense_repo::ExpenseRepoError;
use expense_repo::tag_repo::NewTag;
use expense_utils::NewExpenseGenerator;
use rust_decimal::Decimal;
use utils::RepoType;

#[tokio::test]
#[ignore = "requires a postgres database configured in config_test.toml"]
async fn test_sqlx_create_and_get_expense() {
    let (category_repo, tag_repo, expense_repo) = utils::build_repos(RepoType::SQLx).await;

    let category_id = category_repo
        .create_category(NewCategory::new("Groceries".to_string(), None))
        .await
        .unwrap();
    let food_tag = tag_repo
        .create_tag(NewTag::new("food".to_string()))
        .await
        .unwrap();
    let urgent_tag = tag_repo
        .create_tag(NewTag::new("urgent".to_string()))
        .await
        .unwrap();

    let new_expense = NewExpenseGenerator::new()
        .with_category(category_id)
        .with_amount(Decimal::new(1250, 2))
        .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .with_tag_ids(vec![food_tag, urgent_tag])
        .generate();
    let expense_id = expense_repo
        .create_expense(new_expense.clone())
        .await
        .unwrap();

    let expense = expense_repo.get_expense(expense_id).await.unwrap();
    assert_eq!(expense.category_name, "Groceries");
    assert_eq!(expense.amount, Decimal::new(1250, 2));
    assert_eq!(expense.location, new_expense.location);
    assert_eq!(expense.tag_names, vec!["food", "urgent"]);
}

#[tokio::test]
#[ignore = "requires a postgres database configured in config_test.toml"]
async fn test_sqlx_create_expense_rejects_unknown_tag() {
    let (_category_repo, _tag_repo, expense_repo) = utils::build_repos(RepoType::SQLx).await;

    let result = expense_repo
        .create_expense(
            NewExpenseGenerator::new()
                .with_tag_ids(vec![i64::MAX])
                .generate(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ExpenseRepoError::UnknownTag(id)) if id == i64::MAX
    ));
}

#[tokio::test]
#[ignore = "requires a postgres database configured in config_test.toml"]
async fn test_sqlx_get_expense_invalid_id() {
    let (_category_repo, _tag_repo, expense_repo) = utils::build_repos(RepoType::SQLx).await;

    let result = expense_repo.get_expense(0).await;
    assert!(matches!(result, Err(ExpenseRepoError::InvalidId(0))));
}
