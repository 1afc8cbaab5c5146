//! Route definitions for the Pokedex HTTP API.
//!
//! All routes are mounted under `/api/v2`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(pokemon_routes())
        .merge(seed_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v2", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Catalog CRUD
fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pokemon",
            post(handlers::pokemon::create).get(handlers::pokemon::find_all),
        )
        .route("/pokemon/bulk", post(handlers::pokemon::create_many))
        .route(
            "/pokemon/{term}",
            get(handlers::pokemon::find_one)
                .patch(handlers::pokemon::update)
                .delete(handlers::pokemon::remove),
        )
}

/// Catalog reseed
fn seed_routes() -> Router<AppState> {
    Router::new().route("/seed", get(handlers::seed::execute_seed))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
