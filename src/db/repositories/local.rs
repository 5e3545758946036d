//! In-memory repository implementation.
//!
//! `LocalRepository` owns the authoritative user collection for local
//! development and testing. State lives entirely in memory and is reset on
//! process restart.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::api::{NewUser, User, UserId, UserUpdate};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, UserRepository};

/// Collection state guarded by a single lock.
///
/// `users` preserves insertion order, which is also the listing order.
/// `next_id` is monotonic so ids are never reused even after deletes.
struct Inner {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory user repository.
///
/// All operations take the internal `RwLock`, so mutations are serialized
/// with respect to each other and reads see consistent snapshots.
pub struct LocalRepository {
    inner: RwLock<Inner>,
}

impl LocalRepository {
    /// Create an empty repository. The first allocated id is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a repository pre-populated with `seed`.
    ///
    /// The id counter starts one past the highest seeded id.
    pub fn with_seed(seed: Vec<User>) -> Self {
        let next_id = seed.iter().map(|u| u.id.value()).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner {
                users: seed,
                next_id,
            }),
        }
    }

    /// Create a repository with the default development fixture.
    pub fn seeded() -> Self {
        Self::with_seed(default_seed())
    }

    fn not_found(id: UserId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            "User not found",
            ErrorContext::new(operation).with_entity_id(id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixture the mock database ships with.
pub fn default_seed() -> Vec<User> {
    fn user(id: i64, name: &str, age: i64, team: &str) -> User {
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String(name.to_string()));
        extra.insert("age".to_string(), Value::from(age));
        User {
            id: UserId::new(id),
            team: team.to_string(),
            extra,
        }
    }

    vec![
        user(1, "Aria", 19, "LWB"),
        user(2, "Tim", 20, "LWB"),
        user(3, "Varun", 23, "NNB"),
    ]
}

/// Ids are store-assigned and immutable; drop any client-supplied `id`.
fn strip_reserved_fields(extra: &mut Map<String, Value>) {
    extra.remove("id");
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.inner.read().users.clone())
    }

    async fn get_user(&self, id: UserId) -> RepositoryResult<User> {
        self.inner
            .read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id, "get_user"))
    }

    async fn create_user(&self, fields: NewUser) -> RepositoryResult<User> {
        let NewUser { team, mut extra } = fields;
        strip_reserved_fields(&mut extra);

        let mut inner = self.inner.write();
        let id = UserId::new(inner.next_id);
        inner.next_id += 1;

        let user = User { id, team, extra };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: UserId, changes: UserUpdate) -> RepositoryResult<User> {
        let UserUpdate { team, mut extra } = changes;
        strip_reserved_fields(&mut extra);

        let mut inner = self.inner.write();
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id, "update_user"))?;

        if let Some(team) = team {
            user.team = team;
        }
        for (key, value) in extra {
            user.extra.insert(key, value);
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: UserId) -> RepositoryResult<bool> {
        let mut inner = self.inner.write();
        match inner.users.iter().position(|u| u.id == id) {
            Some(index) => {
                inner.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = LocalRepository::new();
        let first = repo.create_user(NewUser::default()).await.unwrap();
        let second = repo.create_user(NewUser::default()).await.unwrap();
        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_seed_sets_id_counter_past_max() {
        let repo = LocalRepository::seeded();
        let created = repo
            .create_user(NewUser {
                team: "C".to_string(),
                extra: Map::new(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, UserId::new(4));
    }

    #[tokio::test]
    async fn test_delete_then_create_does_not_reuse_id() {
        let repo = LocalRepository::new();
        let first = repo.create_user(NewUser::default()).await.unwrap();
        assert!(repo.delete_user(first.id).await.unwrap());
        let second = repo.create_user(NewUser::default()).await.unwrap();
        assert_eq!(second.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_client_supplied_id_is_discarded() {
        let repo = LocalRepository::new();
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::from(999));
        let created = repo
            .create_user(NewUser {
                team: "A".to_string(),
                extra,
            })
            .await
            .unwrap();
        assert_eq!(created.id, UserId::new(1));
        assert!(!created.extra.contains_key("id"));
    }
}
