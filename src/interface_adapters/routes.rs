use crate::interface_adapters::handlers::{add, divide, health, multiply, subtract};
use axum::{
    Router,
    routing::{get, post},
};

// Build the HTTP router for the calculator endpoints.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/add", post(add))
        .route("/api/subtract", post(subtract))
        .route("/api/multiply", post(multiply))
        .route("/api/divide", post(divide))
}
