//! Repository layer for book storage

pub mod books;

/// Main repository struct holding the stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository around the given book store
    pub fn new(books: books::BooksRepository) -> Self {
        Self { books }
    }
}
