mod json_file;

pub use json_file::JsonFileStorage;

use crate::models::Poll;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("nenhum estado de votação persistido encontrado")]
    NotFound,
    #[error("estado de votação persistido inválido: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("falha de E/S no armazenamento: {0}")]
    Io(#[from] std::io::Error),
}

// Durable copy of the poll. The store treats it as a write-through mirror:
// every successful vote is saved here before it is acknowledged.
#[async_trait]
pub trait VoteStorage: Send + Sync {
    async fn load(&self) -> Result<Poll, StorageError>;
    async fn save(&self, poll: &Poll) -> Result<(), StorageError>;
}
