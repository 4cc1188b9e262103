use crate::error::AppError;
use crate::models::PollOption;
use crate::store::PollStore;
use crate::tally::PollResults;
use axum::Json;
use axum::extract::State;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub opcao: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub sucesso: bool,
    #[serde(rename = "opcao")]
    pub option: PollOption,
    #[serde(rename = "totalVotos")]
    pub total_votes: u64,
    #[serde(rename = "resultados")]
    pub results: PollResults,
}

pub async fn vote_handler(
    State(store): State<Arc<PollStore>>,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, AppError> {
    let option_id = payload
        .opcao
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingOption)?;

    debug!("Vote request for option '{}'", option_id);

    let receipt = store.cast_vote(option_id).await?;
    let results = store.get_results().await;

    Ok(Json(VoteResponse {
        sucesso: true,
        option: receipt.option,
        total_votes: receipt.total_votes,
        results,
    }))
}
