//! Data models for the catalog.
//!
//! - [`Author`]: a writer, identified by a sequential integer id
//! - [`Book`]: a title with a foreign key to its author

mod author;
mod book;

pub use author::Author;
pub use book::Book;
