use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use rollup_anchor_node::{
    anchoring::{AnchorSubmitter, on_chain_client::OnChainClient},
    shared::block_header::BlockHeader,
    utils::{config::Config, logging::init_logging},
};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser)]
#[command(about = "Anchors rollup block-header checkpoints to an on-chain RollUp contract")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy a fresh RollUp contract owned by the configured manager and
    /// print its address
    Deploy,
    /// Anchor a single block header read from a JSON file
    Submit {
        /// Path to the block header JSON produced by the block pipeline
        #[arg(long)]
        header: PathBuf,
        /// Content identifier of the full block body in off-chain storage
        #[arg(long)]
        cid: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("🚀 Starting Rollup Anchor Node v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = Config::read_env_variables();

    match args.command {
        Command::Deploy => {
            let address = OnChainClient::deploy(&config)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to deploy RollUp contract: {e}"))?;
            // Printed on stdout so the operator can export it as
            // ROLLUP_CONTRACT_ADDRESS for subsequent submissions.
            println!("{address}");
        }
        Command::Submit { header, cid } => {
            let raw = std::fs::read_to_string(&header)
                .with_context(|| format!("Failed to read header file {}", header.display()))?;
            let header: BlockHeader = serde_json::from_str(&raw)
                .with_context(|| "Failed to parse block header JSON".to_string())?;

            let client = OnChainClient::new(&config)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create anchoring client: {e}"))?;
            info!("RollUpContract address: {}", client.contract_address());

            let submitter = AnchorSubmitter::new(Arc::new(client));
            let record = submitter
                .submit(&header, &cid)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to anchor block {}: {e}", header.height))?;

            info!(
                "Committed height {} with canonical hash {}",
                record.height, record.hash
            );
        }
    }

    Ok(())
}
