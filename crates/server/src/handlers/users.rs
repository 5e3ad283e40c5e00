//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shareit_core::error::CoreError;
use shareit_core::types::DbId;
use shareit_db::models::user::{CreateUser, UpdateUser, User};
use shareit_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users
///
/// Register a new user. Emails are unique; a duplicate is refused.
pub async fn add_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<User>> {
    if UserRepo::exists_by_email(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "a user with email '{}' is already registered",
            input.email
        ))));
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "user registered");

    Ok(Json(user))
}

/// PATCH /users/{id}
///
/// Patch a user's name and/or email. Patching to an email that is already
/// registered is refused.
pub async fn patch_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    if let Some(email) = &input.email {
        if UserRepo::exists_by_email(&state.pool, email).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "a user with email '{email}' is already registered"
            ))));
        }
    }

    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    Ok(Json(user))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    Ok(Json(user))
}

/// DELETE /users/{id}
///
/// Delete a user. Deleting an already absent user is a no-op.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    UserRepo::delete(&state.pool, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
