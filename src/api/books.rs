//! Books API endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    AppState,
};

/// Book list response
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    /// Always equal to the length of `data`
    pub count: usize,
    pub data: Vec<Book>,
}

/// Single book response
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Book,
}

impl BookResponse {
    fn new(data: Book) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    fn with_message(data: Book, message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
        }
    }
}

/// Path segment that could not be decoded names no book
fn book_id(id: Result<Path<String>, PathRejection>) -> AppResult<String> {
    id.map(|Path(id)| id).map_err(|_| AppError::book_not_found())
}

/// A request without a JSON content type carries an empty payload; any other
/// unreadable body is an internal fault.
fn book_body(payload: Result<Json<BookPayload>, JsonRejection>) -> AppResult<BookPayload> {
    match payload {
        Ok(Json(data)) => Ok(data),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookPayload::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let data = state.services.books.list()?;
    Ok(Json(BookListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<BookResponse>> {
    let id = book_id(id)?;
    let book = state.services.books.get_by_id(&id)?;
    Ok(Json(BookResponse::new(book)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 500, description = "Request body is not readable JSON", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let data = book_body(payload)?;
    let book = state.services.books.create(data)?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse::with_message(book, "Book created successfully")),
    ))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Request body is not readable JSON", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<Json<BookResponse>> {
    // The body is read before the id is looked at
    let data = book_body(payload)?;
    let id = book_id(id)?;
    let book = state.services.books.update(&id, data)?;
    Ok(Json(BookResponse::with_message(book, "Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted, removed record returned", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<BookResponse>> {
    let id = book_id(id)?;
    let book = state.services.books.delete(&id)?;
    Ok(Json(BookResponse::with_message(book, "Book deleted successfully")))
}
