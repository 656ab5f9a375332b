use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::proximity;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let proximity_routes = Router::new()
        .route("/nearby", post(proximity::nearby))
        .route("/clusters", post(proximity::clusters));

    Router::new()
        .route("/health", get(proximity::health))
        .nest("/api/proximity", proximity_routes)
        .with_state(state)
}
