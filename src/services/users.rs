use std::collections::HashMap;

use sqlx::{Connection, SqliteConnection};

use crate::db::{books, users};
use crate::error::Result;
use crate::models::{Book, NewUser, UserResponse, UserUpdate};
use crate::services::association;

/// Look up a user; absence is not an error here
pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<UserResponse>> {
    let user = users::find_by_id(conn, id).await?;
    association::to_transfer_shape(conn, user).await
}

/// All users with their owned books
pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<UserResponse>> {
    let all_users = users::find_all(conn).await?;

    let mut owned: HashMap<i64, Vec<Book>> = HashMap::new();
    for book in books::find_owned(conn).await? {
        if let Some(owner) = book.user_id {
            owned.entry(owner).or_default().push(book);
        }
    }

    Ok(all_users
        .into_iter()
        .map(|user| {
            let books = owned.remove(&user.id).unwrap_or_default();
            UserResponse::from_parts(user, books)
        })
        .collect())
}

pub async fn create(conn: &mut SqliteConnection, fields: NewUser) -> Result<UserResponse> {
    fields.validate()?;

    let user = users::insert(conn, &fields).await?;
    tracing::info!("Created user {}", user.id);

    Ok(UserResponse::from_parts(user, Vec::new()))
}

/// Overwrite name and email; `false` when the user does not exist
pub async fn update(conn: &mut SqliteConnection, id: i64, fields: UserUpdate) -> Result<bool> {
    fields.validate()?;

    let updated = users::update(conn, id, &fields).await?;
    if updated {
        tracing::info!("Updated user {}", id);
    }
    Ok(updated)
}

/// Delete a user, leaving any books it owned without an owner
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let mut tx = conn.begin().await?;

    let released = books::clear_owner(&mut tx, id).await?;
    if !users::delete(&mut tx, id).await? {
        // Dropping the transaction rolls back the owner release
        return Ok(false);
    }
    tx.commit().await?;

    tracing::info!("Deleted user {} ({} books released)", id, released);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use crate::error::AppError;
    use crate::models::NewBook;

    #[tokio::test]
    async fn test_create_then_find_has_no_books() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let created = create(&mut conn, NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let found = find_by_id(&mut conn, created.id).await.unwrap().unwrap();

        assert_eq!(found.name, "Ana");
        assert_eq!(found.email, "ana@example.com");
        assert!(found.books.is_empty());
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        assert_eq!(find_by_id(&mut conn, 5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let err = create(&mut conn, NewUser::new("Ana", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(find_all(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_groups_books_by_owner() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let ana = create(&mut conn, NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let bo = create(&mut conn, NewUser::new("Bo", "bo@example.com"))
            .await
            .unwrap();
        books::insert(&mut conn, &NewBook::new("Dune", "Herbert", Some(ana.id)))
            .await
            .unwrap();
        books::insert(&mut conn, &NewBook::new("Emma", "Austen", Some(ana.id)))
            .await
            .unwrap();
        books::insert(&mut conn, &NewBook::new("Ulysses", "Joyce", None))
            .await
            .unwrap();

        let all = find_all(&mut conn).await.unwrap();
        assert_eq!(all.len(), 2);

        let ana_view = all.iter().find(|u| u.id == ana.id).unwrap();
        let titles: Vec<&str> = ana_view.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma"]);

        let bo_view = all.iter().find(|u| u.id == bo.id).unwrap();
        assert!(bo_view.books.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_false() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        assert!(!update(&mut conn, 3, UserUpdate::new("Ana", "ana@example.com"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let err = update(&mut conn, 3, UserUpdate::new("", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_releases_owned_books() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let ana = create(&mut conn, NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let dune = books::insert(&mut conn, &NewBook::new("Dune", "Herbert", Some(ana.id)))
            .await
            .unwrap();

        assert!(delete(&mut conn, ana.id).await.unwrap());
        assert_eq!(find_by_id(&mut conn, ana.id).await.unwrap(), None);

        let stored = books::find_by_id(&mut conn, dune.id).await.unwrap().unwrap();
        assert_eq!(stored.user_id, None);

        assert!(!delete(&mut conn, ana.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_user_leaves_books_alone() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let ana = create(&mut conn, NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let dune = books::insert(&mut conn, &NewBook::new("Dune", "Herbert", Some(ana.id)))
            .await
            .unwrap();

        assert!(!delete(&mut conn, ana.id + 1).await.unwrap());

        let stored = books::find_by_id(&mut conn, dune.id).await.unwrap().unwrap();
        assert_eq!(stored.user_id, Some(ana.id));
    }
}
