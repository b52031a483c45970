pub mod books;
pub mod pool;
pub mod users;

pub use pool::create_pool;

use sqlx::SqlitePool;
use std::path::Path;

use crate::error::Result;

/// Database handle type (a pool is already cheap to clone across handlers)
pub type Db = SqlitePool;

/// Open or create the database at the given URL and apply pending migrations
pub async fn open_database(database_url: &str, max_connections: u32) -> Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    // Create parent directory if it doesn't exist
    if let Some(path) = pool::database_file_path(database_url) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
    }

    let db = create_pool(database_url, max_connections).await?;
    migrate(&db).await?;

    tracing::info!("Database initialized successfully");

    Ok(db)
}

/// Open a fresh, fully migrated in-memory database
pub async fn open_in_memory() -> Result<Db> {
    open_database("sqlite::memory:", 1).await
}

/// Apply the embedded schema migrations
pub async fn migrate(db: &Db) -> Result<()> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(db).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| {
            tracing::error!("Failed to create database directory: {}", e);
            sqlx::Error::Io(e)
        })?;
    }
    Ok(())
}
