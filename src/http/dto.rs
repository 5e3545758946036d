//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request deserialization in the REST API. Response
//! payloads are the domain types from [`crate::api`], wrapped in the
//! envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{NewUser, UserUpdate};

/// Request body for creating a new user.
///
/// `team` is required; any additional fields (name, age, ...) are captured
/// and stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Team the user belongs to
    pub team: String,
    /// Arbitrary additional user fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            team: request.team,
            extra: request.extra,
        }
    }
}

/// Request body for a partial user update.
///
/// Every field is optional; omitted fields retain their prior values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    /// New team, if changing
    #[serde(default)]
    pub team: Option<String>,
    /// Additional fields to merge into the record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            team: request.team,
            extra: request.extra,
        }
    }
}

/// Query parameters for the user listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsersQuery {
    /// Exact-match team filter (optional)
    #[serde(default)]
    pub team: Option<String>,
}
