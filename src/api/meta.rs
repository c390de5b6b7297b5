//! API information endpoints

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// (method, path, description) for every public route
const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "API information"),
    ("GET", "/routes", "List all available routes"),
    ("GET", "/health", "Health check"),
    ("GET", "/books", "List all books"),
    ("GET", "/books/{id}", "Get book by ID"),
    ("POST", "/books", "Add new book"),
    ("PUT", "/books/{id}", "Replace book"),
    ("PATCH", "/books/{id}/read", "Set reading status"),
    ("DELETE", "/books/{id}", "Remove book"),
];

#[derive(Serialize, ToSchema)]
pub struct ServerInfo {
    /// Port the server was configured to listen on
    pub port: u16,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub server_info: ServerInfo,
    /// "METHOD /path" to description
    pub endpoints: BTreeMap<String, String>,
}

#[derive(Serialize, ToSchema)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

#[derive(Serialize, ToSchema)]
pub struct RoutesResponse {
    pub total_routes: usize,
    pub routes: Vec<RouteInfo>,
}

/// API information
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "API information", body = ApiInfo)
    )
)]
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    let endpoints = ROUTES
        .iter()
        .map(|(method, path, description)| (format!("{} {}", method, path), description.to_string()))
        .collect();

    Json(ApiInfo {
        message: "Book Catalog API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server_info: ServerInfo {
            port: state.config.server.port,
            status: "running".to_string(),
        },
        endpoints,
    })
}

/// List all available routes
#[utoipa::path(
    get,
    path = "/routes",
    tag = "meta",
    responses(
        (status = 200, description = "Available routes", body = RoutesResponse)
    )
)]
pub async fn list_routes() -> Json<RoutesResponse> {
    let routes: Vec<RouteInfo> = ROUTES
        .iter()
        .map(|(method, path, description)| RouteInfo {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(RoutesResponse {
        total_routes: routes.len(),
        routes,
    })
}
