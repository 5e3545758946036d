//! Public API surface for the user service.
//!
//! This file consolidates the domain types shared by the repository layer and
//! the HTTP API. All types derive Serialize/Deserialize for JSON
//! serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User identifier (store-assigned primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId(value)
    }
}

/// A user record as stored and served.
///
/// `id` is assigned by the store at creation time and never changes. `team`
/// is the only required named field; anything else supplied at creation
/// (name, age, ...) is carried in `extra` and flattened into the JSON
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub team: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields for a user about to be created. The store allocates the id.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub team: String,
    pub extra: Map<String, Value>,
}

/// Partial update for an existing user.
///
/// `None`/absent fields retain their prior values (no field is ever cleared
/// by omission). The record id is immutable and cannot appear here.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub team: Option<String>,
    pub extra: Map<String, Value>,
}
