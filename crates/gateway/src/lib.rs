//! Papercat API Gateway
//!
//! HTTP surface of the paper catalog:
//! - Paper listing with title/author search
//! - Paper detail
//! - Importance toggle
//! - Health and readiness probes

pub mod handlers;
pub mod middleware;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use papercat_common::db::PaperRepository;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub papers: Arc<dyn PaperRepository>,
}

impl AppState {
    pub fn new(papers: Arc<dyn PaperRepository>) -> Self {
        Self { papers }
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // Paper routes, reachable with and without the trailing slash
    let paper_routes = Router::new()
        .route("/papers/", get(handlers::papers::list_papers))
        .route("/papers", get(handlers::papers::list_papers))
        .route("/papers/{id}/", get(handlers::papers::get_paper))
        .route("/papers/{id}", get(handlers::papers::get_paper))
        .route("/papers/{id}/important/", post(handlers::papers::toggle_important))
        .route("/papers/{id}/important", post(handlers::papers::toggle_important));

    // Health endpoints
    let health_routes = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready));

    // Compose the app
    Router::new()
        .merge(paper_routes)
        .merge(health_routes)
        .route_layer(from_fn(middleware::metrics::track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(propagate_id)
        .layer(request_id)
        .with_state(state)
}
