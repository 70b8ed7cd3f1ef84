//! API handlers for the Books REST endpoints

pub mod books;
pub mod openapi;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::Uri,
    routing::get,
    Router,
};
use tower::{util::MapRequest, Layer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{
    error::{handle_panic, AppError},
    AppState,
};

/// Largest accepted request body
pub const BODY_LIMIT: usize = 100 * 1024;

/// Method, path and summary of every book endpoint, logged at startup
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/books", "Get all books"),
    ("GET", "/books/:id", "Get book by ID"),
    ("POST", "/books", "Add new book"),
    ("PUT", "/books/:id", "Update book by ID"),
    ("DELETE", "/books/:id", "Delete book by ID"),
];

/// Router wrapped with path normalization, ready to serve
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// Fallback for unknown paths and unsupported methods
pub async fn route_not_found() -> AppError {
    AppError::route_not_found()
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(route_not_found),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(route_not_found),
        )
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(route_not_found)
        .with_state(state);

    with_layers(routes)
}

/// Body limit, tracing, CORS and panic recovery shared by every route
fn with_layers(routes: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes.layer(DefaultBodyLimit::max(BODY_LIMIT)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Full application: paths match without regard to case or a trailing slash.
/// Serve with `ServiceExt::<Request>::into_make_service`.
pub fn app(state: AppState) -> App {
    let lowercased = MapRequest::new(router(state), lowercase_path as fn(Request) -> Request);
    NormalizePathLayer::trim_trailing_slash().layer(lowercased)
}

fn lowercase_path(mut req: Request) -> Request {
    let uri = req.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let path = uri.path().to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    let lowered = path_and_query
        .parse()
        .ok()
        .and_then(|pq| {
            parts.path_and_query = Some(pq);
            Uri::from_parts(parts).ok()
        });

    if let Some(lowered) = lowered {
        *req.uri_mut() = lowered;
    }
    req
}
