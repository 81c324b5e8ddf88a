use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

pub mod cupcakes;
pub mod error;
pub mod state;

pub use state::AppState;

/// Router for the local stand-in of the hosted order endpoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/cupcakes", post(cupcakes::create_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
