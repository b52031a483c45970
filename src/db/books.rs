//! Queries against the `books` table.

use sqlx::SqliteConnection;

use crate::models::{Book, BookUpdate, NewBook};

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>("SELECT id, title, author, user_id FROM books WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>("SELECT id, title, author, user_id FROM books ORDER BY id")
        .fetch_all(conn)
        .await
}

/// Books whose owner reference equals `user_id`
pub async fn find_by_owner(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        "SELECT id, title, author, user_id FROM books WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
}

/// Every book that has an owner
pub async fn find_owned(conn: &mut SqliteConnection) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        "SELECT id, title, author, user_id FROM books WHERE user_id IS NOT NULL ORDER BY id",
    )
    .fetch_all(conn)
    .await
}

/// Insert a book and return the stored row with its generated id
pub async fn insert(conn: &mut SqliteConnection, book: &NewBook) -> Result<Book, sqlx::Error> {
    let id = sqlx::query("INSERT INTO books (title, author, user_id) VALUES (?, ?, ?)")
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.user_id)
        .execute(conn)
        .await?
        .last_insert_rowid();

    Ok(Book {
        id,
        title: book.title.clone(),
        author: book.author.clone(),
        user_id: book.user_id,
    })
}

/// Overwrite title and author; returns whether a row matched
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    book: &BookUpdate,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE books SET title = ?, author = ? WHERE id = ?")
        .bind(&book.title)
        .bind(&book.author)
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Set or clear the owner reference of one book
pub async fn set_owner(
    conn: &mut SqliteConnection,
    id: i64,
    user_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE books SET user_id = ? WHERE id = ?")
        .bind(user_id)
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Clear the owner reference of every book owned by `user_id`
pub async fn clear_owner(conn: &mut SqliteConnection, user_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE books SET user_id = NULL WHERE user_id = ?")
        .bind(user_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

/// Remove a book row; returns whether a row matched
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
