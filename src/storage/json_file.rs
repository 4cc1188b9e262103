use super::{StorageError, VoteStorage};
use crate::models::Poll;
use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

// Single JSON document on disk, fully rewritten on every save.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VoteStorage for JsonFileStorage {
    async fn load(&self) -> Result<Poll, StorageError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound),
            Err(e) => return Err(StorageError::Io(e)),
        };

        let poll = serde_json::from_slice(&data)?;
        Ok(poll)
    }

    async fn save(&self, poll: &Poll) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(poll)?;

        // Write to a temp file and rename over the target, so an interrupted
        // save never leaves a half-written document behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!("Persisted poll state to {}", self.path.display());
        Ok(())
    }
}
