//! Entity operations. Every function takes the request's connection
//! explicitly; nothing here holds on to the pool.

pub mod association;
pub mod books;
pub mod users;
