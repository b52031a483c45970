//! Queries against the `users` table.

use sqlx::SqliteConnection;

use crate::models::{NewUser, User, UserUpdate};

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(conn)
        .await
}

/// Insert a user and return the stored row with its generated id
pub async fn insert(conn: &mut SqliteConnection, user: &NewUser) -> Result<User, sqlx::Error> {
    let id = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .execute(conn)
        .await?
        .last_insert_rowid();

    Ok(User {
        id,
        name: user.name.clone(),
        email: user.email.clone(),
    })
}

/// Overwrite name and email; returns whether a row matched
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    user: &UserUpdate,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove a user row; returns whether a row matched
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let ana = insert(&mut conn, &NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        let bo = insert(&mut conn, &NewUser::new("Bo", "bo@example.com"))
            .await
            .unwrap();
        assert_ne!(ana.id, bo.id);

        let found = find_by_id(&mut conn, ana.id).await.unwrap();
        assert_eq!(found, Some(ana.clone()));

        let all = find_all(&mut conn).await.unwrap();
        assert_eq!(all, vec![ana, bo]);

        assert_eq!(find_by_id(&mut conn, 999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_rows() {
        let db = open_in_memory().await.unwrap();
        let mut conn = db.acquire().await.unwrap();

        let fields = UserUpdate::new("Anna", "anna@example.com");
        assert!(!update(&mut conn, 42, &fields).await.unwrap());
        assert!(!delete(&mut conn, 42).await.unwrap());

        let user = insert(&mut conn, &NewUser::new("Ana", "ana@example.com"))
            .await
            .unwrap();
        assert!(update(&mut conn, user.id, &fields)
            .await
            .unwrap());

        let found = find_by_id(&mut conn, user.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Anna");
        assert_eq!(found.email, "anna@example.com");

        assert!(delete(&mut conn, user.id).await.unwrap());
        assert_eq!(find_by_id(&mut conn, user.id).await.unwrap(), None);
    }
}
