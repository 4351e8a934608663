pub mod client;
pub mod contract_bindings;
pub mod memory_client;
pub mod on_chain_client;
pub mod submission_error;
pub mod tools;

use crate::shared::block_header::BlockHeader;
use client::{AnchoringContractClient, CommitmentRecord};
use std::sync::Arc;
use submission_error::SubmissionError;
use tokio::sync::Mutex;
use tracing::info;

/// Turns block headers into on-chain commitments. One submitter per rollup
/// instance: an internal lock keeps at most one append in flight, because
/// each commitment's `prev_hash` depends on the previously committed header
/// and two heights must never race on-chain.
pub struct AnchorSubmitter<C: AnchoringContractClient> {
    client: Arc<C>,
    submission_lock: Mutex<()>,
}

impl<C: AnchoringContractClient> AnchorSubmitter<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            submission_lock: Mutex::new(()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Compute the canonical hash of `header` and append the commitment
    /// record to the anchoring contract, awaiting on-chain inclusion.
    ///
    /// Returns the record as committed. Duplicate or out-of-order heights
    /// are rejected by the contract and surfaced as
    /// `SubmissionError::Rejected`; nothing is retried here.
    pub async fn submit(
        &self,
        header: &BlockHeader,
        cid: &str,
    ) -> Result<CommitmentRecord, SubmissionError> {
        if cid.is_empty() {
            return Err(SubmissionError::InvalidInput(format!(
                "empty CID for block header at height {}",
                header.height
            )));
        }

        let record = CommitmentRecord {
            height: header.height,
            hash: header.canonical_hash(),
            prev_hash: header.prev_block,
            merkle_root: header.merkle_root,
            timestamp: header.timestamp,
            cid: cid.to_string(),
        };

        let _guard = self.submission_lock.lock().await;
        self.client.append(&record).await?;

        info!(
            "Anchored block {} with canonical hash {}",
            record.height, record.hash
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchoring::memory_client::MemoryClient;
    use crate::anchoring::tools::{
        REASON_HEIGHT_ALREADY_COMMITTED, REASON_HEIGHT_OUT_OF_ORDER,
    };
    use alloy::primitives::B256;

    fn genesis_header() -> BlockHeader {
        BlockHeader {
            height: 1,
            prev_block: B256::ZERO,
            merkle_root: B256::from([0xAA; 32]),
            timestamp: 1_700_000_000,
        }
    }

    fn next_header(parent: &BlockHeader) -> BlockHeader {
        BlockHeader {
            height: parent.height + 1,
            prev_block: parent.canonical_hash(),
            merkle_root: B256::from([0xBB; 32]),
            timestamp: parent.timestamp + 2,
        }
    }

    fn submitter() -> AnchorSubmitter<MemoryClient> {
        AnchorSubmitter::new(Arc::new(MemoryClient::new()))
    }

    #[tokio::test]
    async fn commitment_chain_is_continuous() {
        let submitter = submitter();
        let h1 = genesis_header();
        let h2 = next_header(&h1);

        let r1 = submitter.submit(&h1, "bafy123").await.unwrap();
        let r2 = submitter.submit(&h2, "bafy456").await.unwrap();

        assert_eq!(r1.height, 1);
        assert_eq!(r2.height, 2);
        assert_eq!(r2.prev_hash, r1.hash);
        assert_eq!(submitter.client().committed_height().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn committed_record_matches_submitted_header() {
        let submitter = submitter();
        let header = genesis_header();

        submitter.submit(&header, "bafy123").await.unwrap();

        let record = submitter.client().record_at(1).await.unwrap().unwrap();
        assert_eq!(record.height, 1);
        assert_eq!(record.hash, header.canonical_hash());
        assert_eq!(record.prev_hash, B256::ZERO);
        assert_eq!(record.merkle_root, header.merkle_root);
        assert_eq!(record.timestamp, header.timestamp);
        assert_eq!(record.cid, "bafy123");
    }

    #[tokio::test]
    async fn duplicate_height_is_rejected_and_record_unchanged() {
        let submitter = submitter();
        let header = genesis_header();
        submitter.submit(&header, "bafy123").await.unwrap();

        // Same height, different contents: the contract must keep the
        // original record.
        let mutated = BlockHeader {
            merkle_root: B256::from([0xCC; 32]),
            ..header.clone()
        };
        let err = submitter.submit(&mutated, "bafy999").await.unwrap_err();
        match err {
            SubmissionError::Rejected { height, reason } => {
                assert_eq!(height, 1);
                assert_eq!(reason, REASON_HEIGHT_ALREADY_COMMITTED);
            }
            other => panic!("expected rejection, got {other}"),
        }

        let record = submitter.client().record_at(1).await.unwrap().unwrap();
        assert_eq!(record.merkle_root, header.merkle_root);
        assert_eq!(record.cid, "bafy123");
    }

    #[tokio::test]
    async fn height_gap_is_rejected() {
        let submitter = submitter();
        let h1 = genesis_header();
        submitter.submit(&h1, "bafy123").await.unwrap();

        let skipped = BlockHeader {
            height: 3,
            prev_block: h1.canonical_hash(),
            merkle_root: B256::from([0xBB; 32]),
            timestamp: h1.timestamp + 4,
        };
        let err = submitter.submit(&skipped, "bafy456").await.unwrap_err();
        match err {
            SubmissionError::Rejected { height, reason } => {
                assert_eq!(height, 3);
                assert_eq!(reason, REASON_HEIGHT_OUT_OF_ORDER);
            }
            other => panic!("expected rejection, got {other}"),
        }
        assert_eq!(submitter.client().committed_height().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_cid_is_rejected_before_reaching_the_contract() {
        let submitter = submitter();
        let err = submitter.submit(&genesis_header(), "").await.unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidInput(_)));
        assert_eq!(submitter.client().committed_height().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_duplicate_submissions_yield_one_commitment() {
        let submitter = Arc::new(submitter());
        let header = genesis_header();

        let first = {
            let submitter = submitter.clone();
            let header = header.clone();
            tokio::spawn(async move { submitter.submit(&header, "bafy123").await })
        };
        let second = {
            let submitter = submitter.clone();
            let header = header.clone();
            tokio::spawn(async move { submitter.submit(&header, "bafy123").await })
        };

        let (first, second) = (first.await.unwrap(), second.await.unwrap());
        assert!(
            first.is_ok() != second.is_ok(),
            "exactly one of the two submissions must win"
        );
        let err = first.err().or(second.err()).unwrap();
        assert!(matches!(err, SubmissionError::Rejected { height: 1, .. }));
        assert_eq!(submitter.client().committed_height().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn record_at_unknown_height_is_none() {
        let submitter = submitter();
        assert!(submitter.client().record_at(0).await.unwrap().is_none());
        assert!(submitter.client().record_at(1).await.unwrap().is_none());
    }
}
