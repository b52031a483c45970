use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::{AppError, ErrorResponse, Result};
use crate::models::{ActionResponse, NewUser, UserResponse, UserUpdate};
use crate::services::{association, users as user_service};
use crate::AppState;

/// Query parameters for attaching a book to a user
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttachBookParams {
    /// Book to attach
    #[serde(rename = "bookId")]
    pub book_id: i64,
}

/// List all users with the books they own
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let mut conn = state.db.acquire().await?;
    let users = user_service::find_all(&mut conn).await?;
    Ok(Json(users))
}

/// Fetch one user with the books it owns
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>> {
    let mut conn = state.db.acquire().await?;
    user_service::find_by_id(&mut conn, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::user_not_found(id))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid name or email", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let mut conn = state.db.acquire().await?;
    let user = user_service::create(&mut conn, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated", body = ActionResponse),
        (status = 400, description = "Invalid name or email", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    if !user_service::update(&mut conn, id, payload).await? {
        tracing::warn!("Update attempt for non-existent user {}", id);
        return Err(AppError::user_not_found(id));
    }

    Ok(Json(ActionResponse::ok(format!(
        "User with ID {id} updated successfully."
    ))))
}

/// Delete a user; books it owned are kept without an owner
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = ActionResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    if !user_service::delete(&mut conn, id).await? {
        tracing::warn!("Delete attempt for non-existent user {}", id);
        return Err(AppError::user_not_found(id));
    }

    Ok(Json(ActionResponse::ok(format!(
        "User with ID {id} deleted successfully."
    ))))
}

/// Make the user the owner of a book
#[utoipa::path(
    patch,
    path = "/users/{id}/books",
    tag = "Users",
    params(("id" = i64, Path, description = "User id"), AttachBookParams),
    responses(
        (status = 200, description = "Book attached", body = ActionResponse),
        (status = 404, description = "User or book not found", body = ErrorResponse)
    )
)]
pub async fn attach_book(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<AttachBookParams>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    association::attach(&mut conn, user_id, params.book_id).await?;

    Ok(Json(ActionResponse::ok(format!(
        "Book with ID {} added successfully.",
        params.book_id
    ))))
}

/// Release a book the user currently owns
#[utoipa::path(
    patch,
    path = "/users/{id}/books/{book_id}/remove",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id"),
        ("book_id" = i64, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book detached", body = ActionResponse),
        (status = 404, description = "User or book not found", body = ErrorResponse),
        (status = 409, description = "Book is not owned by this user", body = ErrorResponse)
    )
)]
pub async fn detach_book(
    State(state): State<AppState>,
    ApiPath((user_id, book_id)): ApiPath<(i64, i64)>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    association::detach(&mut conn, user_id, book_id).await?;

    Ok(Json(ActionResponse::ok(format!(
        "Book with ID {book_id} removed successfully."
    ))))
}
