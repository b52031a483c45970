use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{ERR_INVALID_EMAIL, ERR_INVALID_NAME, MAX_EMAIL_LEN, MAX_NAME_LEN};
use crate::error::{AppError, Result};

/// User row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Fields accepted when creating a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    /// Display name (1-64 characters)
    pub name: String,
    /// Contact email address
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check field constraints before any write
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.email)
    }
}

/// Replacement fields for an existing user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserUpdate {
    /// Display name (1-64 characters)
    pub name: String,
    /// Contact email address
    pub email: String,
}

impl UserUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.email)
    }
}

fn validate_fields(name: &str, email: &str) -> Result<()> {
    if !User::validate_name(name) {
        return Err(AppError::Validation(ERR_INVALID_NAME.to_string()));
    }
    if !User::validate_email(email) {
        return Err(AppError::Validation(ERR_INVALID_EMAIL.to_string()));
    }
    Ok(())
}

impl User {
    /// Validate that a name is between 1 and 64 characters
    pub fn validate_name(name: &str) -> bool {
        let len = name.chars().count();
        (1..=MAX_NAME_LEN).contains(&len)
    }

    /// Validate email syntax: `local@domain.tld`, no whitespace
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty()
            || email.chars().count() > MAX_EMAIL_LEN
            || email.chars().any(char::is_whitespace)
        {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }
}
