use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "opcoes")]
    pub options: Vec<PollOption>,
    #[serde(rename = "totalVotos")]
    pub total_votes: u64,
    #[serde(rename = "ultimaAtualizacao", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "votos")]
    pub votes: u64,
}

impl Poll {
    // The default poll written on first startup, all counters at zero.
    pub fn seed() -> Self {
        let options = [
            ("jogos", "Jogos interativos"),
            ("enquetes", "Enquetes em tempo real"),
            ("compras", "Compras durante o programa"),
            ("cameras", "Escolha de ângulos de câmera"),
        ];

        Self {
            question: "Qual é sua opção favorita para programação de TV interativa?".to_string(),
            options: options
                .into_iter()
                .map(|(id, text)| PollOption {
                    id: id.to_string(),
                    text: text.to_string(),
                    votes: 0,
                })
                .collect(),
            total_votes: 0,
            last_updated: None,
        }
    }

    pub fn vote_sum(&self) -> u64 {
        self.options.iter().map(|option| option.votes).sum()
    }
}
