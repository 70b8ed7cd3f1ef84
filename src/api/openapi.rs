//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::books;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            books::BookListResponse,
            books::BookResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
