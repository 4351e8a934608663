use super::submission_error::SubmissionError;
use alloy::primitives::B256;
use async_trait::async_trait;

/// One entry of the contract's append-only commitment log. Immutable and
/// permanent once the append transaction is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitmentRecord {
    pub height: u64,
    pub hash: B256,
    pub prev_hash: B256,
    pub merkle_root: B256,
    pub timestamp: u64,
    pub cid: String,
}

/// Narrow seam over the anchoring contract. The on-chain adapter talks to
/// the deployed `RollUp` instance; tests run against the in-memory ledger.
#[async_trait]
pub trait AnchoringContractClient: Send + Sync {
    /// Append a commitment and await inclusion. The contract enforces
    /// manager authorization and strict height ordering; violations come
    /// back as `SubmissionError::Rejected`.
    async fn append(&self, record: &CommitmentRecord) -> Result<(), SubmissionError>;

    /// Height of the latest committed record, 0 before the first commitment.
    async fn committed_height(&self) -> Result<u64, SubmissionError>;

    /// Read back the commitment at `height`, if one exists.
    async fn record_at(&self, height: u64) -> Result<Option<CommitmentRecord>, SubmissionError>;
}
