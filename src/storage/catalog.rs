use super::seed;
use crate::model::{Author, Book};
use parking_lot::RwLock;
use std::sync::Arc;

/// Records plus the next id to hand out for each collection.
struct CatalogState {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

impl CatalogState {
    fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            authors,
            books,
            next_author_id,
            next_book_id,
        }
    }
}

/// Shared handle to the author and book collections.
///
/// Cloning is cheap and every clone sees the same records. Reads copy
/// records out under a shared guard; appends allocate the id and push under
/// one exclusive guard, so concurrent writers never receive the same id.
#[derive(Clone)]
pub struct Catalog {
    state: Arc<RwLock<CatalogState>>,
}

impl Catalog {
    /// A catalog holding the fixed startup records.
    pub fn seeded() -> Self {
        Self::from_records(seed::authors(), seed::books())
    }

    /// A catalog with no records; ids start at 1.
    pub fn empty() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    pub fn from_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState::new(authors, books))),
        }
    }

    pub fn list_authors(&self) -> Vec<Author> {
        self.state.read().authors.clone()
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.state.read().books.clone()
    }

    pub fn find_author(&self, id: i32) -> Option<Author> {
        self.state.read().authors.iter().find(|a| a.id == id).cloned()
    }

    pub fn find_book(&self, id: i32) -> Option<Book> {
        self.state.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// All books whose foreign key points at `author_id`, in insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.state
            .read()
            .books
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect()
    }

    pub fn author_count(&self) -> usize {
        self.state.read().authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.state.read().books.len()
    }

    pub fn append_author(&self, name: impl Into<String>) -> Author {
        let mut state = self.state.write();
        let author = Author::new(state.next_author_id, name);
        state.next_author_id += 1;
        state.authors.push(author.clone());
        drop(state);

        tracing::info!(id = author.id, name = %author.name, "Added author");
        author
    }

    /// Appends a book without checking that `author_id` exists.
    pub fn append_book(&self, name: impl Into<String>, author_id: i32) -> Book {
        let mut state = self.state.write();
        let book = Book::new(state.next_book_id, name, author_id);
        state.next_book_id += 1;
        state.books.push(book.clone());
        drop(state);

        tracing::info!(id = book.id, name = %book.name, author_id, "Added book");
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_catalog_has_fixed_records() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.author_count(), 3);
        assert_eq!(catalog.book_count(), 8);

        let names: Vec<_> = catalog.list_books().into_iter().map(|b| b.name).collect();
        assert_eq!(names[0], "Harry Potter and the Chamber of Secrets");
        assert_eq!(names[7], "Beyond the Shadows");
    }

    #[test]
    fn test_find_returns_matching_record_or_none() {
        let catalog = Catalog::seeded();

        for id in 1..=8 {
            assert_eq!(catalog.find_book(id).map(|b| b.id), Some(id));
        }
        assert_eq!(
            catalog.find_author(2).map(|a| a.name).as_deref(),
            Some("J. R. R. Tolkien")
        );
        assert!(catalog.find_author(0).is_none());
        assert!(catalog.find_book(999).is_none());
    }

    #[test]
    fn test_books_by_author_filters_in_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<_> = catalog.books_by_author(2).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert!(catalog.books_by_author(42).is_empty());
    }

    #[test]
    fn test_append_assigns_next_id() {
        let catalog = Catalog::seeded();

        let author = catalog.append_author("Robert Jordan");
        assert_eq!(author.id, 4);
        assert_eq!(catalog.find_author(4), Some(author));

        let book = catalog.append_book("New Spring", 99);
        assert_eq!(book.id, 9);
        assert_eq!(book.author_id, 99);
        assert_eq!(catalog.list_books().last(), Some(&book));
    }

    #[test]
    fn test_appends_are_monotonic() {
        let catalog = Catalog::seeded();
        for i in 0..5 {
            catalog.append_author(format!("Author {}", i));
            catalog.append_book(format!("Book {}", i), 1);
        }

        assert_eq!(catalog.author_count(), 3 + 5);
        assert_eq!(catalog.book_count(), 8 + 5);

        let ids: HashSet<_> = catalog.list_books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), catalog.book_count());
    }

    #[test]
    fn test_duplicate_author_names_are_allowed() {
        let catalog = Catalog::empty();
        let first = catalog.append_author("Anonymous");
        let second = catalog.append_author("Anonymous");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_concurrent_appends_get_distinct_ids() {
        let catalog = Catalog::seeded();

        std::thread::scope(|s| {
            for t in 0..8 {
                let catalog = catalog.clone();
                s.spawn(move || {
                    for i in 0..50 {
                        catalog.append_book(format!("Book {}-{}", t, i), 1);
                        catalog.append_author(format!("Author {}-{}", t, i));
                    }
                });
            }
        });

        let book_ids: HashSet<_> = catalog.list_books().iter().map(|b| b.id).collect();
        let author_ids: HashSet<_> = catalog.list_authors().iter().map(|a| a.id).collect();
        assert_eq!(book_ids.len(), 8 + 400);
        assert_eq!(author_ids.len(), 3 + 400);
        assert_eq!(catalog.book_count(), 8 + 400);
    }

    #[test]
    fn test_clones_share_state() {
        let catalog = Catalog::seeded();
        let other = catalog.clone();
        other.append_author("Brandon Sanderson");
        assert_eq!(catalog.author_count(), 4);
    }
}
