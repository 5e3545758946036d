//! Repository trait for user storage backends.
//!
//! The trait defines the narrow interface the rest of the application uses to
//! read and mutate the user collection, so the in-memory backend can later be
//! swapped for a persistent one without touching handler logic.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{NewUser, User, UserId, UserUpdate};

/// Repository trait for user collection operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust. Mutating
/// operations must be serialized internally: concurrent creates never assign
/// duplicate ids and a read never observes a partially-applied write.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;

    /// Fetch a single user by id.
    ///
    /// # Returns
    /// * `Ok(User)` - The matching record
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn get_user(&self, id: UserId) -> RepositoryResult<User>;

    /// Store a new user, assigning a fresh unique id.
    ///
    /// Any client-supplied `id` in the extra fields is discarded; ids are
    /// allocated only by the store.
    async fn create_user(&self, fields: NewUser) -> RepositoryResult<User>;

    /// Merge `changes` into the record with the given id.
    ///
    /// Partial update semantics: fields absent from `changes` retain their
    /// prior values. Never creates a record on miss (no upsert).
    ///
    /// # Returns
    /// * `Ok(User)` - The updated record
    /// * `Err(RepositoryError::NotFound)` - If no record has that id
    async fn update_user(&self, id: UserId, changes: UserUpdate) -> RepositoryResult<User>;

    /// Remove the record with the given id.
    ///
    /// Idempotent: deleting twice is safe, the second call returns
    /// `Ok(false)`.
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - Nothing matched
    async fn delete_user(&self, id: UserId) -> RepositoryResult<bool>;

    /// Check that the backend is reachable and serving.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
