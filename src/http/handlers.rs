//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for store access. Handlers are stateless per call; all persistent
//! state lives behind the repository in `AppState`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use super::dto::{CreateUserRequest, UpdateUserRequest, UsersQuery};
use super::envelope::Envelope;
use super::error::AppError;
use super::state::AppState;
use crate::api::UserId;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult = Result<Envelope, AppError>;

/// Parse a path segment as a user id.
///
/// The route matches any string, so unparseable ids are a client error, not
/// a framework rejection.
fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<i64>().map(UserId::new).map_err(|_| {
        AppError::BadRequest(format!("Invalid user id '{}': expected an integer", raw))
    })
}

/// Translate a body rejection (malformed or missing JSON) into a 400.
fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
}

// =============================================================================
// Scaffolding endpoints
// =============================================================================

/// GET /
pub async fn hello_world() -> Envelope {
    Envelope::ok(json!({ "content": "hello world!" }))
}

/// GET /mirror/{name}
pub async fn mirror(Path(name): Path<String>) -> Envelope {
    Envelope::ok(json!({ "name": name }))
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult {
    let store = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Envelope::ok(json!({
        "health": { "status": "ok", "store": store }
    })))
}

// =============================================================================
// User CRUD
// =============================================================================

/// GET /users
///
/// List all users, or only those on a team when `?team=` is supplied. An
/// empty filtered list is a 200, not an error.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> HandlerResult {
    let users = match query.team {
        Some(ref team) => db_services::users_by_team(state.repository.as_ref(), team).await?,
        None => db_services::list_users(state.repository.as_ref()).await?,
    };

    Ok(Envelope::ok(json!({ "users": users })))
}

/// GET /users/{id}
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let id = parse_user_id(&id)?;
    let user = db_services::get_user(state.repository.as_ref(), id).await?;

    Ok(Envelope::ok(json!({ "user": user })))
}

/// POST /createuser
///
/// Returns 201 for the newly created resource.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> HandlerResult {
    let Json(request) = body.map_err(invalid_body)?;
    let user = db_services::create_user(state.repository.as_ref(), request.into()).await?;

    Ok(Envelope::build(
        Some(json!({ "user": user })),
        StatusCode::CREATED,
        "",
    ))
}

/// PUT /users/{id}
///
/// Partial update: omitted fields retain their prior values. A miss is a
/// 404, never an implicit create.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> HandlerResult {
    let id = parse_user_id(&id)?;
    let Json(request) = body.map_err(invalid_body)?;
    let user = db_services::update_user(state.repository.as_ref(), id, request.into()).await?;

    Ok(Envelope::ok(json!({ "user": user })))
}

/// DELETE /users/{id}
///
/// Idempotent at the store level; a second delete of the same id reports
/// 404.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let id = parse_user_id(&id)?;
    let removed = db_services::delete_user(state.repository.as_ref(), id).await?;

    if removed {
        Ok(Envelope::build(
            None,
            StatusCode::OK,
            "User deleted successfully",
        ))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// Envelope-shaped 404 for unmatched method+path combinations.
pub async fn fallback() -> Envelope {
    Envelope::error(StatusCode::NOT_FOUND, "Resource not found")
}
