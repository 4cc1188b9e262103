use crate::models::Poll;
use serde::{Deserialize, Serialize};

// Read-only projection of the poll, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResults {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "opcoes")]
    pub options: Vec<OptionResult>,
    #[serde(rename = "totalVotos")]
    pub total_votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionResult {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "votos")]
    pub votes: u64,
    #[serde(rename = "porcentagem")]
    pub percentage: u8,
}

pub fn project_results(poll: &Poll) -> PollResults {
    PollResults {
        question: poll.question.clone(),
        options: poll
            .options
            .iter()
            .map(|option| OptionResult {
                id: option.id.clone(),
                text: option.text.clone(),
                votes: option.votes,
                percentage: percentage(option.votes, poll.total_votes),
            })
            .collect(),
        total_votes: poll.total_votes,
    }
}

// Share of the total, rounded to the nearest whole percent. A poll with no
// votes reports 0 for every option.
fn percentage(votes: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    (votes as f64 * 100.0 / total as f64).round() as u8
}
