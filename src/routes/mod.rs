pub mod books;
pub mod docs;
pub mod extract;
pub mod health;
pub mod users;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use docs::openapi_json;
pub use health::health_check;
pub use users::{
    attach_book, create_user, delete_user, detach_book, get_user, list_users, update_user,
};

use axum::{
    routing::{get, patch},
    Router,
};

use crate::AppState;

/// All application routes, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:id/books", patch(attach_book))
        .route("/users/:id/books/:book_id/remove", patch(detach_book))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(state)
}
