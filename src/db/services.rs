//! High-level service functions over any repository implementation.
//!
//! These are the functions the HTTP layer (and tests) call. Each one works
//! against `&dyn UserRepository`, so the backing store can be swapped without
//! touching callers.

use crate::api::{NewUser, User, UserId, UserUpdate};
use crate::db::repository::{RepositoryResult, UserRepository};

/// List all users in insertion order.
pub async fn list_users(repo: &dyn UserRepository) -> RepositoryResult<Vec<User>> {
    repo.list_users().await
}

/// List users whose `team` matches `team` exactly (case-sensitive).
///
/// An empty result is not an error.
pub async fn users_by_team(repo: &dyn UserRepository, team: &str) -> RepositoryResult<Vec<User>> {
    let users = repo.list_users().await?;
    Ok(users.into_iter().filter(|u| u.team == team).collect())
}

/// Fetch one user by id.
pub async fn get_user(repo: &dyn UserRepository, id: UserId) -> RepositoryResult<User> {
    repo.get_user(id).await
}

/// Create a user, returning the stored record with its assigned id.
pub async fn create_user(repo: &dyn UserRepository, fields: NewUser) -> RepositoryResult<User> {
    repo.create_user(fields).await
}

/// Apply a partial update to an existing user.
pub async fn update_user(
    repo: &dyn UserRepository,
    id: UserId,
    changes: UserUpdate,
) -> RepositoryResult<User> {
    repo.update_user(id, changes).await
}

/// Delete a user; returns whether a record was actually removed.
pub async fn delete_user(repo: &dyn UserRepository, id: UserId) -> RepositoryResult<bool> {
    repo.delete_user(id).await
}

/// Check that the store is reachable.
pub async fn health_check(repo: &dyn UserRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
