mod results;
mod vote;

pub use results::results_handler;
pub use vote::{VoteRequest, VoteResponse, vote_handler};

use crate::store::PollStore;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn create_router(store: Arc<PollStore>) -> Router {
    // The TV client is served from elsewhere, so the API answers any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(info_handler))
        .route("/resultados", get(results_handler))
        .route("/votar", post(vote_handler))
        .layer(cors)
        .with_state(store)
}

async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "API Enquete TV 3.0",
        "endpoints": {
            "resultados": "GET /resultados",
            "votar": "POST /votar { \"opcao\": \"<id>\" }",
        },
    }))
}
