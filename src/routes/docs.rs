use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    ActionResponse, BookResponse, BookSummary, BookUpdate, NewBook, NewUser, UserResponse,
    UserUpdate,
};
use crate::routes::{books, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Users, books, and which user owns which book"
    ),
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::attach_book,
        users::detach_book,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(schemas(
        UserResponse,
        BookSummary,
        BookResponse,
        NewUser,
        UserUpdate,
        NewBook,
        BookUpdate,
        ActionResponse,
        ErrorResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "Users", description = "User records and book ownership"),
        (name = "Books", description = "Book records"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
