//! Unit tests for the in-memory account repository

use crate::domain::entities::admin_account::AdminAccount;
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

#[tokio::test]
async fn test_find_seeded_account() {
    let repo = InMemoryAccountRepository::with_accounts([AdminAccount::new(
        "authorized@example.com",
        "hash-1",
    )]);

    let found = repo.find_by_email("authorized@example.com").await.unwrap();
    assert_eq!(found.unwrap().password_hash, "hash-1");
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_password_reports_affected_rows() {
    let repo = InMemoryAccountRepository::new();
    repo.upsert(AdminAccount::new("authorized@example.com", "hash-1"))
        .await;

    assert_eq!(
        repo.update_password("authorized@example.com", "hash-2")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        repo.update_password("nobody@example.com", "hash-3")
            .await
            .unwrap(),
        0
    );

    let account = repo
        .find_by_email("authorized@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.password_hash, "hash-2");
}
