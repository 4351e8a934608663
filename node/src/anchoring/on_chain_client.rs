use super::{
    client::{AnchoringContractClient, CommitmentRecord},
    contract_bindings::RollUp,
    submission_error::{DeploymentError, SubmissionError},
    tools::classify_contract_error,
};
use crate::utils::config::Config;
use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use std::str::FromStr;
use tracing::{debug, info};

/// Client adapter for a deployed `RollUp` contract instance. Holds the
/// provider with the manager's wallet attached; every append is one
/// state-changing transaction signed by the manager.
pub struct OnChainClient {
    contract: RollUp::RollUpInstance<DynProvider>,
    contract_address: Address,
}

impl OnChainClient {
    /// Connect to the configured contract. Fails with a configuration error
    /// before any network activity when the contract address or manager key
    /// is missing or malformed.
    pub async fn new(config: &Config) -> Result<Self, SubmissionError> {
        let contract_address = config.contract_address.as_deref().ok_or_else(|| {
            SubmissionError::Configuration("anchoring contract address is not configured".to_string())
        })?;
        let contract_address = Address::from_str(contract_address).map_err(|e| {
            SubmissionError::Configuration(format!(
                "invalid anchoring contract address {contract_address}: {e}"
            ))
        })?;
        let signer = Self::manager_signer(config).map_err(SubmissionError::Configuration)?;
        let manager_address = signer.address();

        let provider = Self::connect(signer, &config.l1_ws_rpc_url)
            .await
            .map_err(SubmissionError::Transient)?;

        info!(
            "Anchoring to RollUp contract {} as manager {}",
            contract_address, manager_address
        );

        Ok(Self {
            contract: RollUp::new(contract_address, provider),
            contract_address,
        })
    }

    /// Deploy a fresh `RollUp` instance owned by the configured manager and
    /// return its address. Never retried: redeploying mints a new address.
    pub async fn deploy(config: &Config) -> Result<Address, DeploymentError> {
        let signer = Self::manager_signer(config).map_err(DeploymentError::Configuration)?;
        let manager_address = signer.address();

        let provider = Self::connect(signer, &config.l1_ws_rpc_url)
            .await
            .map_err(DeploymentError::Failed)?;

        let contract = RollUp::deploy(provider)
            .await
            .map_err(|e| DeploymentError::Failed(format!("deployment transaction failed: {e}")))?;
        let address = *contract.address();

        info!(
            "RollUp contract deployed at {} by manager {}",
            address, manager_address
        );
        Ok(address)
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    fn manager_signer(config: &Config) -> Result<PrivateKeySigner, String> {
        let key = config
            .manager_ecdsa_private_key
            .as_deref()
            .ok_or_else(|| "manager ECDSA private key is not configured".to_string())?;
        PrivateKeySigner::from_str(key)
            .map_err(|e| format!("invalid manager ECDSA private key: {e}"))
    }

    async fn connect(signer: PrivateKeySigner, ws_rpc_url: &str) -> Result<DynProvider, String> {
        debug!("Creating alloy provider with WS URL: {}", ws_rpc_url);
        let ws = WsConnect::new(ws_rpc_url);
        ProviderBuilder::new()
            .wallet(signer)
            .connect_ws(ws)
            .await
            .map(|provider| provider.erased())
            .map_err(|e| format!("failed to connect to {ws_rpc_url}: {e}"))
    }
}

#[async_trait]
impl AnchoringContractClient for OnChainClient {
    async fn append(&self, record: &CommitmentRecord) -> Result<(), SubmissionError> {
        let pending = self
            .contract
            .add(
                record.height,
                record.hash,
                record.prev_hash,
                record.merkle_root,
                record.timestamp,
                record.cid.clone(),
            )
            .send()
            .await
            .map_err(|e| classify_contract_error(&e, record.height, self.contract_address))?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            SubmissionError::Transient(format!(
                "awaiting inclusion of height {} on {}: {e}",
                record.height, self.contract_address
            ))
        })?;

        if !receipt.status() {
            return Err(SubmissionError::Rejected {
                height: record.height,
                reason: format!(
                    "transaction {} reverted on-chain",
                    receipt.transaction_hash
                ),
            });
        }

        debug!(
            "Commitment for height {} included in block {:?}",
            record.height, receipt.block_number
        );
        Ok(())
    }

    async fn committed_height(&self) -> Result<u64, SubmissionError> {
        self.contract.committedHeight().call().await.map_err(|e| {
            SubmissionError::Transient(format!(
                "reading committedHeight from {}: {e}",
                self.contract_address
            ))
        })
    }

    async fn record_at(&self, height: u64) -> Result<Option<CommitmentRecord>, SubmissionError> {
        if height == 0 || height > self.committed_height().await? {
            return Ok(None);
        }
        let commitment = self.contract.commitmentAt(height).call().await.map_err(|e| {
            SubmissionError::Transient(format!(
                "reading commitment at height {height} from {}: {e}",
                self.contract_address
            ))
        })?;
        Ok(Some(CommitmentRecord {
            height: commitment.height,
            hash: commitment.blockHash,
            prev_hash: commitment.prevHash,
            merkle_root: commitment.merkleRoot,
            timestamp: commitment.timestamp,
            cid: commitment.cid,
        }))
    }
}
