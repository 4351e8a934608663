use alloy::primitives::{B256, keccak256};
use serde::{Deserialize, Serialize};

/// Domain tag for the canonical header preimage. Changing the header layout
/// requires bumping the version suffix.
const HEADER_HASH_DOMAIN: &[u8] = b"rollup-anchor:block-header:v1";

/// Header of a locally produced rollup block, as handed over by the block
/// production pipeline. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub prev_block: B256,
    pub merkle_root: B256,
    pub timestamp: u64,
}

impl BlockHeader {
    /// Canonical keccak-256 digest identifying this header on-chain.
    ///
    /// Hashes the domain tag followed by all structured fields in a fixed
    /// binary layout (big-endian integers, raw 32-byte digests), so two
    /// headers differing in any field produce different digests.
    pub fn canonical_hash(&self) -> B256 {
        let mut preimage = Vec::new();
        preimage.extend_from_slice(HEADER_HASH_DOMAIN);
        preimage.extend_from_slice(&self.height.to_be_bytes());
        preimage.extend_from_slice(self.prev_block.as_slice());
        preimage.extend_from_slice(self.merkle_root.as_slice());
        preimage.extend_from_slice(&self.timestamp.to_be_bytes());
        keccak256(&preimage)
    }
}
