use super::{
    client::{AnchoringContractClient, CommitmentRecord},
    submission_error::SubmissionError,
    tools::{REASON_HEIGHT_ALREADY_COMMITTED, REASON_HEIGHT_OUT_OF_ORDER},
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory stand-in for the deployed `RollUp` contract. Enforces the same
/// append rules (strict `height == committed + 1`, first commitment at
/// height 1) and reports the same rejection reasons, so the submitter logic
/// can be exercised without a chain.
#[derive(Default)]
pub struct MemoryClient {
    records: Mutex<Vec<CommitmentRecord>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnchoringContractClient for MemoryClient {
    async fn append(&self, record: &CommitmentRecord) -> Result<(), SubmissionError> {
        let mut records = self.records.lock().await;
        let committed = u64::try_from(records.len()).unwrap_or(u64::MAX);
        if record.height <= committed {
            return Err(SubmissionError::Rejected {
                height: record.height,
                reason: REASON_HEIGHT_ALREADY_COMMITTED.to_string(),
            });
        }
        if record.height != committed.saturating_add(1) {
            return Err(SubmissionError::Rejected {
                height: record.height,
                reason: REASON_HEIGHT_OUT_OF_ORDER.to_string(),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn committed_height(&self) -> Result<u64, SubmissionError> {
        let records = self.records.lock().await;
        Ok(u64::try_from(records.len()).unwrap_or(u64::MAX))
    }

    async fn record_at(&self, height: u64) -> Result<Option<CommitmentRecord>, SubmissionError> {
        let records = self.records.lock().await;
        let index = match height.checked_sub(1) {
            Some(index) => index,
            None => return Ok(None),
        };
        Ok(usize::try_from(index)
            .ok()
            .and_then(|i| records.get(i))
            .cloned())
    }
}
