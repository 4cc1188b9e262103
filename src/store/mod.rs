use crate::error::AppError;
use crate::models::{Poll, PollOption};
use crate::storage::{StorageError, VoteStorage};
use crate::tally::{self, PollResults};
use chrono::Utc;
use log::{info, warn};
use tokio::sync::RwLock;

// Owns the live poll. All mutation goes through cast_vote, which serializes
// the read-increment-persist sequence behind the write lock; reads share the
// lock and never observe a partially applied vote.
pub struct PollStore {
    storage: Box<dyn VoteStorage>,
    poll: RwLock<Poll>,
}

// What a successful vote hands back: the updated option and the new total.
#[derive(Debug, Clone)]
pub struct VoteReceipt {
    pub option: PollOption,
    pub total_votes: u64,
}

impl PollStore {
    // Loads prior state, or seeds the default poll when none exists. A
    // corrupt document gets exactly one re-seed attempt; a failing re-seed
    // is a hard startup error.
    pub async fn open(storage: Box<dyn VoteStorage>) -> Result<Self, StorageError> {
        let poll = match storage.load().await {
            Ok(mut poll) => {
                let sum = poll.vote_sum();
                if poll.total_votes != sum {
                    warn!(
                        "Persisted total ({}) disagrees with option counts ({}), using the sum",
                        poll.total_votes, sum
                    );
                    poll.total_votes = sum;
                }
                info!(
                    "Loaded poll state: {} votes across {} options",
                    poll.total_votes,
                    poll.options.len()
                );
                poll
            }
            Err(StorageError::NotFound) => {
                info!("No persisted poll state found, seeding default poll");
                let poll = Poll::seed();
                storage.save(&poll).await?;
                poll
            }
            Err(StorageError::Corrupt(e)) => {
                warn!("Persisted poll state is corrupt ({}), re-seeding", e);
                let poll = Poll::seed();
                storage.save(&poll).await?;
                poll
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            storage,
            poll: RwLock::new(poll),
        })
    }

    pub async fn get_results(&self) -> PollResults {
        let poll = self.poll.read().await;
        tally::project_results(&poll)
    }

    pub async fn cast_vote(&self, option_id: &str) -> Result<VoteReceipt, AppError> {
        let mut poll = self.poll.write().await;

        // Unknown ids are a hard reject before anything is touched. Options
        // are never created from client input.
        let Some(idx) = poll.options.iter().position(|o| o.id == option_id) else {
            return Err(AppError::UnknownOption(option_id.to_string()));
        };

        // Apply the vote to a scratch copy and persist that. The shared poll
        // is only replaced once the new state is durable, so a failed save
        // leaves memory and disk agreeing on the pre-vote counts.
        let mut updated = poll.clone();
        updated.options[idx].votes += 1;
        updated.total_votes += 1;
        updated.last_updated = Some(Utc::now());

        self.storage.save(&updated).await?;

        let receipt = VoteReceipt {
            option: updated.options[idx].clone(),
            total_votes: updated.total_votes,
        };
        *poll = updated;

        info!(
            "Vote recorded for '{}' ({} votes, {} total)",
            receipt.option.id, receipt.option.votes, receipt.total_votes
        );
        Ok(receipt)
    }
}
