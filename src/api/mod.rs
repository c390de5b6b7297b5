//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod health;
pub mod meta;
pub mod openapi;

use std::any::Any;

use axum::{
    async_trait,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Book identifier taken from the `:id` path segment.
///
/// Anything that does not parse as an integer is rejected with
/// [`AppError::InvalidId`] before a handler runs.
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(e.body_text()))?;

        raw.parse::<i64>()
            .map(BookId)
            .map_err(|_| AppError::InvalidId(format!("'{}' is not a valid book id", raw)))
    }
}

/// JSON body extractor whose rejection is [`AppError::InvalidBody`].
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonBody(value))
    }
}

/// Application service: the router behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// Router wrapped so that `/books/` and `/books/1/` match their routes
pub fn app(state: AppState) -> App {
    NormalizePath::trim_trailing_slash(router(state))
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let max_body_bytes = state.config.server.max_body_bytes;

    let api = Router::new()
        // API information
        .route("/", get(meta::api_info).fallback(method_not_allowed))
        .route("/routes", get(meta::list_routes).fallback(method_not_allowed))
        .route("/health", get(health::health_check).fallback(method_not_allowed))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/books/:id/read",
            patch(books::set_read_status).fallback(method_not_allowed),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}
