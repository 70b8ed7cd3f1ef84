//! Books service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{parse_book_id, Book, BookPayload, NewBook},
    repository::Repository,
};

pub const MISSING_FIELDS: &str = "Please provide both title and author";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list()
    }

    pub fn count(&self) -> AppResult<usize> {
        self.repository.books.count()
    }

    /// Get a book from its raw path segment; unparsable ids are simply not found
    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let id = parse_book_id(id).ok_or_else(AppError::book_not_found)?;
        self.repository.books.get_by_id(id)
    }

    pub fn create(&self, data: BookPayload) -> AppResult<Book> {
        let data = validated(data)?;
        let book = self.repository.books.create(data)?;
        tracing::info!(id = book.id, "book created");
        Ok(book)
    }

    /// Replace a book's title and author. An unknown id wins over a bad payload.
    pub fn update(&self, id: &str, data: BookPayload) -> AppResult<Book> {
        let id = parse_book_id(id).ok_or_else(AppError::book_not_found)?;
        self.repository.books.get_by_id(id)?;
        let data = validated(data)?;
        let book = self.repository.books.update(id, data)?;
        tracing::info!(id = book.id, "book updated");
        Ok(book)
    }

    pub fn delete(&self, id: &str) -> AppResult<Book> {
        let id = parse_book_id(id).ok_or_else(AppError::book_not_found)?;
        let book = self.repository.books.delete(id)?;
        tracing::info!(id = book.id, "book deleted");
        Ok(book)
    }
}

fn validated(data: BookPayload) -> AppResult<NewBook> {
    if let Err(e) = data.validate() {
        tracing::debug!("rejected book payload: {}", e);
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    match (data.title, data.author) {
        (Some(title), Some(author)) => Ok(NewBook { title, author }),
        _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
    }
}
