use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{ERR_INVALID_AUTHOR, ERR_INVALID_TITLE, MAX_AUTHOR_LEN, MAX_TITLE_LEN};
use crate::error::{AppError, Result};

/// Book row as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Owning user, if any
    pub user_id: Option<i64>,
}

/// Fields accepted when creating a book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    /// Book title (1-128 characters)
    pub title: String,
    /// Book author (1-128 characters)
    pub author: String,
    /// Optional owner, resolved by lookup
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
}

/// Fields accepted when updating a book; ownership is never changed here
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
}

impl Book {
    /// Validate that a title is between 1 and 128 characters
    pub fn validate_title(title: &str) -> bool {
        (1..=MAX_TITLE_LEN).contains(&title.chars().count())
    }

    /// Validate that an author is between 1 and 128 characters
    pub fn validate_author(author: &str) -> bool {
        (1..=MAX_AUTHOR_LEN).contains(&author.chars().count())
    }

    /// Whether this book is currently owned by `user_id`
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}

fn validate_fields(title: &str, author: &str) -> Result<()> {
    if !Book::validate_title(title) {
        return Err(AppError::Validation(ERR_INVALID_TITLE.to_string()));
    }
    if !Book::validate_author(author) {
        return Err(AppError::Validation(ERR_INVALID_AUTHOR.to_string()));
    }
    Ok(())
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, user_id: Option<i64>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            user_id,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.author)
    }
}

impl BookUpdate {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.author)
    }
}
