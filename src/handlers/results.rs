use crate::store::PollStore;
use crate::tally::PollResults;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

pub async fn results_handler(State(store): State<Arc<PollStore>>) -> Json<PollResults> {
    Json(store.get_results().await)
}
