//! Transfer shapes returned across the HTTP boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Book, User};

/// Reduced book view nested inside a user; the owner is implied by the parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// User with the projection of the books it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub books: Vec<BookSummary>,
}

/// Standalone book view, including the owner reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Outcome of an update, delete, attach or detach
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            user_id: book.user_id,
        }
    }
}

impl UserResponse {
    /// Combine a user with the books it owns, sorted by book id
    pub fn from_parts(user: User, books: Vec<Book>) -> Self {
        let mut books: Vec<BookSummary> = books.into_iter().map(BookSummary::from).collect();
        books.sort_by_key(|b| b.id);

        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Herbert".to_string(),
            user_id: Some(1),
        }
    }

    #[test]
    fn test_user_response_orders_books_and_omits_owner() {
        let user = User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        let response = UserResponse::from_parts(user, vec![book(5, "Children"), book(2, "Dune")]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "id": 1,
                "name": "Ana",
                "email": "ana@example.com",
                "books": [
                    {"id": 2, "title": "Dune", "author": "Herbert"},
                    {"id": 5, "title": "Children", "author": "Herbert"}
                ]
            })
        );
    }

    #[test]
    fn test_book_response_serializes_null_owner() {
        let response = BookResponse::from(Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            user_id: None,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"id": 3, "title": "Dune", "author": "Herbert", "userId": null})
        );
    }
}
