//! Tests for LocalRepository.
//!
//! These cover CRUD semantics, id allocation, partial-update merging, and
//! concurrent access patterns for the in-memory repository implementation.

use std::sync::Arc;

use serde_json::{Map, Value};

use roster_rust::api::{NewUser, User, UserId, UserUpdate};
use roster_rust::db::repositories::LocalRepository;
use roster_rust::db::{RepositoryError, UserRepository};

fn plain_user(id: i64, team: &str) -> User {
    User {
        id: UserId::new(id),
        team: team.to_string(),
        extra: Map::new(),
    }
}

fn new_user(team: &str, fields: &[(&str, Value)]) -> NewUser {
    let mut extra = Map::new();
    for (key, value) in fields {
        extra.insert(key.to_string(), value.clone());
    }
    NewUser {
        team: team.to_string(),
        extra,
    }
}

// =========================================================
// Basic CRUD
// =========================================================

#[tokio::test]
async fn test_list_users_preserves_insertion_order() {
    let repo = LocalRepository::new();
    for team in ["A", "B", "C"] {
        repo.create_user(new_user(team, &[])).await.unwrap();
    }

    let users = repo.list_users().await.unwrap();
    let teams: Vec<&str> = users.iter().map(|u| u.team.as_str()).collect();
    assert_eq!(teams, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_get_user_hit_and_miss() {
    let repo = LocalRepository::with_seed(vec![plain_user(1, "A"), plain_user(2, "B")]);

    let found = repo.get_user(UserId::new(2)).await.unwrap();
    assert_eq!(found.team, "B");

    let missing = repo.get_user(UserId::new(99)).await;
    assert!(matches!(missing, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let repo = LocalRepository::new();
    let created = repo
        .create_user(new_user("NNB", &[("name", Value::from("Varun")), ("age", Value::from(23))]))
        .await
        .unwrap();

    let fetched = repo.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.extra["name"], "Varun");
    assert_eq!(fetched.extra["age"], 23);
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let repo = LocalRepository::new();
    let created = repo
        .create_user(new_user("LWB", &[("name", Value::from("Aria")), ("age", Value::from(19))]))
        .await
        .unwrap();

    let mut extra = Map::new();
    extra.insert("age".to_string(), Value::from(20));
    let updated = repo
        .update_user(
            created.id,
            UserUpdate {
                team: None,
                extra,
            },
        )
        .await
        .unwrap();

    // Unspecified fields retain prior values
    assert_eq!(updated.team, "LWB");
    assert_eq!(updated.extra["name"], "Aria");
    assert_eq!(updated.extra["age"], 20);
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn test_update_miss_is_not_upsert() {
    let repo = LocalRepository::new();
    let result = repo
        .update_user(UserId::new(5), UserUpdate::default())
        .await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    assert!(repo.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_cannot_change_id() {
    let repo = LocalRepository::with_seed(vec![plain_user(1, "A")]);

    let mut extra = Map::new();
    extra.insert("id".to_string(), Value::from(42));
    let updated = repo
        .update_user(UserId::new(1), UserUpdate { team: None, extra })
        .await
        .unwrap();

    assert_eq!(updated.id, UserId::new(1));
    assert!(!updated.extra.contains_key("id"));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = LocalRepository::with_seed(vec![plain_user(1, "A")]);

    assert!(repo.delete_user(UserId::new(1)).await.unwrap());
    assert!(!repo.delete_user(UserId::new(1)).await.unwrap());
    assert!(repo.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_only_removes_matching_record() {
    let repo = LocalRepository::with_seed(vec![plain_user(1, "A"), plain_user(2, "B")]);

    assert!(repo.delete_user(UserId::new(1)).await.unwrap());
    let remaining = repo.list_users().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, UserId::new(2));
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(repo.health_check().await.unwrap());
}

// =========================================================
// Concurrent Access Tests
// =========================================================

#[tokio::test]
async fn test_concurrent_creates_assign_unique_ids() {
    let repo = Arc::new(LocalRepository::new());

    let mut handles = vec![];
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create_user(new_user(&format!("team_{}", i), &[]))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn test_concurrent_reads_and_writes() {
    let repo = Arc::new(LocalRepository::seeded());

    let mut handles = vec![];
    for _ in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let _ = repo.create_user(new_user("X", &[])).await;
            let users = repo.list_users().await.unwrap();
            // A read never observes a partially-applied write
            for user in users {
                assert!(user.id.value() > 0);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // 3 seeded + 8 created
    assert_eq!(repo.list_users().await.unwrap().len(), 11);
}
