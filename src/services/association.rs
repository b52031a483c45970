//! Ownership between users and books.
//!
//! The owner reference lives only on the book row. A user's books are always
//! derived with a query, so attaching and detaching touch a single row.

use sqlx::SqliteConnection;

use crate::db::{books, users};
use crate::error::{AppError, Result};
use crate::models::{Book, User, UserResponse};

async fn load_pair(conn: &mut SqliteConnection, user_id: i64, book_id: i64) -> Result<(User, Book)> {
    let user = users::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(user_id))?;
    let book = books::find_by_id(conn, book_id)
        .await?
        .ok_or_else(|| AppError::book_not_found(book_id))?;
    Ok((user, book))
}

/// Make `user_id` the owner of `book_id`, replacing any previous owner
pub async fn attach(conn: &mut SqliteConnection, user_id: i64, book_id: i64) -> Result<()> {
    let (user, book) = load_pair(conn, user_id, book_id).await?;

    if let Some(previous) = book.user_id.filter(|&owner| owner != user.id) {
        tracing::info!(
            "Book {} reassigned from user {} to user {}",
            book.id,
            previous,
            user.id
        );
    }

    books::set_owner(conn, book.id, Some(user.id)).await?;
    tracing::info!("Book {} attached to user {}", book.id, user.id);

    Ok(())
}

/// Clear the owner of `book_id`, which must currently be `user_id`
pub async fn detach(conn: &mut SqliteConnection, user_id: i64, book_id: i64) -> Result<()> {
    let (user, book) = load_pair(conn, user_id, book_id).await?;

    if !book.is_owned_by(user.id) {
        tracing::warn!(
            "Detach rejected: book {} is owned by {:?}, not user {}",
            book.id,
            book.user_id,
            user.id
        );
        return Err(AppError::OwnershipMismatch {
            user_id: user.id,
            book_id: book.id,
        });
    }

    books::set_owner(conn, book.id, None).await?;
    tracing::info!("Book {} detached from user {}", book.id, user.id);

    Ok(())
}

/// Build the transfer shape of a user, or `None` when there is no user
pub async fn to_transfer_shape(
    conn: &mut SqliteConnection,
    user: Option<User>,
) -> Result<Option<UserResponse>> {
    let Some(user) = user else {
        return Ok(None);
    };

    let owned = books::find_by_owner(conn, user.id).await?;
    Ok(Some(UserResponse::from_parts(user, owned)))
}
