//! Books API
//!
//! A small REST JSON API managing an in-memory catalog of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{books::BooksRepository, Repository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the store and services described by the configuration
    pub fn new(config: AppConfig) -> Self {
        let books = if config.store.seed {
            BooksRepository::seeded()
        } else {
            BooksRepository::new()
        };
        let services = services::Services::new(Repository::new(books));

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
