use sqlx::SqliteConnection;

use crate::db::{books, users};
use crate::error::{AppError, Result};
use crate::models::{Book, BookUpdate, NewBook};

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Book>> {
    Ok(books::find_by_id(conn, id).await?)
}

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Book>> {
    Ok(books::find_all(conn).await?)
}

/// Create a book; a named owner must already exist
pub async fn create(conn: &mut SqliteConnection, fields: NewBook) -> Result<Book> {
    fields.validate()?;

    if let Some(owner_id) = fields.user_id {
        if users::find_by_id(conn, owner_id).await?.is_none() {
            tracing::warn!("Book creation rejected: owner {} does not exist", owner_id);
            return Err(AppError::user_not_found(owner_id));
        }
    }

    let book = books::insert(conn, &fields).await?;
    tracing::info!("Created book {} (owner: {:?})", book.id, book.user_id);

    Ok(book)
}

/// Overwrite title and author; `false` when the book does not exist
pub async fn update(conn: &mut SqliteConnection, id: i64, fields: BookUpdate) -> Result<bool> {
    fields.validate()?;

    let updated = books::update(conn, id, &fields).await?;
    if updated {
        tracing::info!("Updated book {}", id);
    }
    Ok(updated)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let deleted = books::delete(conn, id).await?;
    if deleted {
        tracing::info!("Deleted book {}", id);
    }
    Ok(deleted)
}
