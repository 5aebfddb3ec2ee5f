//! HTTP API module: router, handlers, and request middleware.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, create_router_with};
