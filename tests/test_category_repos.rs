mod utils;

use expense_repo::category_repo::{CategoryRepoError, NewCategory};
use rstest::rstest;
use utils::RepoType;

#[rstest]
#[case::mem(RepoType::Mem)]
#[tokio::test]
async fn test_create_and_get_category(#[case] repo_type: RepoType) {
    let (category_repo, _tag_repo, _expense_repo) = utils::build_repos(repo_type).await;

    let new_category = NewCategory::new(
        "Groceries".to_string(),
        Some("Food and household supplies".to_string()),
    );
    let category_id = category_repo
        .create_category(new_category.clone())
        .await
        .unwrap();
    assert!(category_id > 0);

    let category = category_repo.get_category(category_id).await.unwrap();
    assert_eq!(category.id, category_id);
    assert_eq!(category.name, new_category.name);
    assert_eq!(category.description, new_category.description);
}

#[rstest]
#[case::mem(RepoType::Mem)]
#[tokio::test]
async fn test_create_category_without_description(#[case] repo_type: RepoType) {
    let (category_repo, _tag_repo, _expense_repo) = utils::build_repos(repo_type).await;

    let category_id = category_repo
        .create_category(NewCategory::new("Transportation".to_string(), None))
        .await
        .unwrap();

    let category = category_repo.get_category(category_id).await.unwrap();
    assert_eq!(category.name, "Transportation");
    assert_eq!(category.description, None);
}

#[rstest]
#[case::mem(RepoType::Mem)]
#[tokio::test]
async fn test_create_category_rejects_empty_name(#[case] repo_type: RepoType) {
    let (category_repo, _tag_repo, _expense_repo) = utils::build_repos(repo_type).await;

    let result = category_repo
        .create_category(NewCategory::new(String::new(), None))
        .await;
    assert!(matches!(result, Err(CategoryRepoError::EmptyName)));
}

#[rstest]
#[case::zero(0)]
#[case::negative(-3)]
#[tokio::test]
async fn test_get_category_invalid_id(#[case] category_id: i64) {
    let (category_repo, _tag_repo, _expense_repo) = utils::build_repos(RepoType::Mem).await;

    let result = category_repo.get_category(category_id).await;
    assert!(matches!(result, Err(CategoryRepoError::InvalidId(id)) if id == category_id));
}

#[rstest]
#[case::mem(RepoType::Mem)]
#[tokio::test]
async fn test_get_category_not_found(#[case] repo_type: RepoType) {
    let (category_repo, _tag_repo, _expense_repo) = utils::build_repos(repo_type).await;

    let result = category_repo.get_category(1234).await;
    assert!(matches!(
        result,
        Err(CategoryRepoError::CategoryNotFound(1234))
    ));
}
