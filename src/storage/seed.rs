//! Fixed records loaded into every new catalog.

use crate::model::{Author, Book};

pub const SEED_AUTHORS: &[(i32, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

pub const SEED_BOOKS: &[(i32, &str, i32)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];

pub fn authors() -> Vec<Author> {
    SEED_AUTHORS
        .iter()
        .map(|&(id, name)| Author::new(id, name))
        .collect()
}

pub fn books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, name, author_id)| Book::new(id, name, author_id))
        .collect()
}
