use tracing::{info, warn};

/// Configuration for the anchoring node, read once at startup and passed by
/// reference into the on-chain client. Missing values are surfaced here as
/// `None` and turned into configuration errors at the point of use, so no
/// component reads ambient environment state on its own.
pub struct Config {
    pub l1_ws_rpc_url: String,
    pub contract_address: Option<String>,
    pub manager_ecdsa_private_key: Option<String>,
}

impl Config {
    pub fn read_env_variables() -> Self {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();

        const MANAGER_ECDSA_PRIVATE_KEY: &str = "MANAGER_ECDSA_PRIVATE_KEY";
        let manager_ecdsa_private_key = std::env::var(MANAGER_ECDSA_PRIVATE_KEY)
            .ok()
            .filter(|key| !key.is_empty());
        if manager_ecdsa_private_key.is_none() {
            warn!(
                "No manager ECDSA private key found in {} env var",
                MANAGER_ECDSA_PRIVATE_KEY
            );
        }

        const ROLLUP_CONTRACT_ADDRESS: &str = "ROLLUP_CONTRACT_ADDRESS";
        let contract_address = std::env::var(ROLLUP_CONTRACT_ADDRESS)
            .ok()
            .filter(|address| !address.is_empty());
        if contract_address.is_none() {
            warn!(
                "No RollUp contract address found in {} env var, submissions will fail until one is configured",
                ROLLUP_CONTRACT_ADDRESS
            );
        }

        let config = Self {
            l1_ws_rpc_url: std::env::var("L1_WS_RPC_URL")
                .unwrap_or("ws://127.0.0.1:8545".to_string()),
            contract_address,
            manager_ecdsa_private_key,
        };

        info!(
            r#"
Configuration:
L1 WS URL: {}
RollUp contract address: {}
"#,
            config.l1_ws_rpc_url,
            config.contract_address.as_deref().unwrap_or("<unset>"),
        );

        config
    }
}
