//! Data models for the Books API

pub mod book;

pub use book::{parse_book_id, Book, BookId, BookPayload, NewBook};
