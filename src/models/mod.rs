pub mod book;
pub mod dto;
pub mod user;

pub use book::{Book, BookUpdate, NewBook};
pub use dto::{ActionResponse, BookResponse, BookSummary, UserResponse};
pub use user::{NewUser, User, UserUpdate};
