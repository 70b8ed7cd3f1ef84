//! In-memory book store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, NewBook},
};

/// Ordered collection of books, shared by clones of the repository
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the three starter books
    pub fn seeded() -> Self {
        let books = [
            ("To Kill a Mockingbird", "Harper Lee"),
            ("1984", "George Orwell"),
            ("Pride and Prejudice", "Jane Austen"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((title, author), id)| NewBook::new(title, author).with_id(id))
        .collect();

        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// All books in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        self.read()?
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    /// Append a book under the next id (highest id + 1, or 1 when empty)
    pub fn create(&self, data: NewBook) -> AppResult<Book> {
        let mut books = self.write()?;
        let id = books.iter().map(|book| book.id).max().map_or(1, |max| max + 1);
        let book = data.with_id(id);
        books.push(book.clone());
        Ok(book)
    }

    /// Replace title and author in place, keeping id and position
    pub fn update(&self, id: BookId, data: NewBook) -> AppResult<Book> {
        let mut books = self.write()?;
        let slot = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;
        *slot = data.with_id(id);
        Ok(slot.clone())
    }

    /// Remove a book, returning what was removed
    pub fn delete(&self, id: BookId) -> AppResult<Book> {
        let mut books = self.write()?;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;
        Ok(books.remove(index))
    }
}
