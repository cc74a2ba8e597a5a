// src/lib.rs

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod chart;
pub mod dataset;
pub mod models;
pub mod routes;
pub mod stats;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<dataset::Dataset>,
}

pub fn app(state: AppState) -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root::read_root))
        .route("/health", get(routes::health::health))
        .route("/recommend_employee", get(routes::recommend::recommend_employee))
        .route("/emp_perf_taskwise", get(routes::performance::emp_perf_taskwise))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
