/// Maximum user name length in characters
pub const MAX_NAME_LEN: usize = 64;

/// Maximum book title length in characters
pub const MAX_TITLE_LEN: usize = 128;

/// Maximum book author length in characters
pub const MAX_AUTHOR_LEN: usize = 128;

/// Maximum email length in characters (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a user name outside the allowed length
pub const ERR_INVALID_NAME: &str = "Name must be between 1 and 64 characters";

/// Error message for a malformed email address
pub const ERR_INVALID_EMAIL: &str = "Email must be a valid email address";

/// Error message for a book title outside the allowed length
pub const ERR_INVALID_TITLE: &str = "Title must be between 1 and 128 characters";

/// Error message for a book author outside the allowed length
pub const ERR_INVALID_AUTHOR: &str = "Author must be between 1 and 128 characters";
