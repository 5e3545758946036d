//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances based on
//! runtime configuration. The in-memory backend is the only built-in
//! implementation; persistent backends plug in here without touching the
//! handler layer.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{RepositoryResult, UserRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Defaults to `Local` when unset.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var("REPOSITORY_TYPE") {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::Local),
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the requested type, seeded with the default
    /// development fixture.
    pub fn create(kind: RepositoryType) -> RepositoryResult<Arc<dyn UserRepository>> {
        match kind {
            RepositoryType::Local => Ok(Self::create_local_seeded()),
        }
    }

    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn UserRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository with the default fixture.
    pub fn create_local_seeded() -> Arc<dyn UserRepository> {
        Arc::new(LocalRepository::seeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert_eq!(
            "MEMORY".parse::<RepositoryType>(),
            Ok(RepositoryType::Local)
        );
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_create_seeded_repository() {
        let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
        let users = repo.list_users().await.unwrap();
        assert_eq!(users.len(), 3);
    }
}
