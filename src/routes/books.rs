use axum::{extract::State, http::StatusCode, Json};

use super::extract::{ApiJson, ApiPath};
use crate::error::{AppError, ErrorResponse, Result};
use crate::models::{ActionResponse, BookResponse, BookUpdate, NewBook};
use crate::services::books as book_service;
use crate::AppState;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    responses(
        (status = 200, description = "All books", body = [BookResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookResponse>>> {
    let mut conn = state.db.acquire().await?;
    let books = book_service::find_all(&mut conn).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Fetch one book
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookResponse>> {
    let mut conn = state.db.acquire().await?;
    book_service::find_by_id(&mut conn, id)
        .await?
        .map(|book| Json(BookResponse::from(book)))
        .ok_or_else(|| AppError::book_not_found(id))
}

/// Create a book, optionally owned by an existing user
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid title or author", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewBook>,
) -> Result<(StatusCode, Json<BookResponse>)> {
    let mut conn = state.db.acquire().await?;
    let book = book_service::create(&mut conn, payload).await?;
    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// Replace a book's title and author
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookUpdate,
    responses(
        (status = 200, description = "Book updated", body = ActionResponse),
        (status = 400, description = "Invalid title or author", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<BookUpdate>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    if !book_service::update(&mut conn, id, payload).await? {
        tracing::warn!("Update attempt for non-existent book {}", id);
        return Err(AppError::book_not_found(id));
    }

    Ok(Json(ActionResponse::ok(format!(
        "Book with ID {id} updated successfully."
    ))))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = ActionResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ActionResponse>> {
    let mut conn = state.db.acquire().await?;
    if !book_service::delete(&mut conn, id).await? {
        tracing::warn!("Delete attempt for non-existent book {}", id);
        return Err(AppError::book_not_found(id));
    }

    Ok(Json(ActionResponse::ok(format!(
        "Book with ID {id} deleted successfully."
    ))))
}
