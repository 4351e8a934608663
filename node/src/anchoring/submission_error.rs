/// Errors surfaced by a submission attempt. No variant is retried
/// automatically; the caller decides remediation.
#[derive(Debug)]
pub enum SubmissionError {
    /// Missing or malformed configuration (contract address, signing key).
    /// Fatal, raised before any network activity.
    Configuration(String),
    /// The input was rejected locally before any network call.
    InvalidInput(String),
    /// Network or provider failure; no on-chain state changed, safe to
    /// retry with identical arguments.
    Transient(String),
    /// Contract-level revert. Carries the decoded revert reason so the
    /// caller can distinguish duplicate-height from other rejections.
    Rejected { height: u64, reason: String },
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            SubmissionError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SubmissionError::Transient(msg) => write!(f, "transient provider error: {msg}"),
            SubmissionError::Rejected { height, reason } => {
                write!(f, "submission of height {height} rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Errors from deploying a fresh anchoring contract. A failed deployment is
/// reported, never retried: redeploying mints a new address, which is an
/// operator decision.
#[derive(Debug)]
pub enum DeploymentError {
    Configuration(String),
    Failed(String),
}

impl std::fmt::Display for DeploymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            DeploymentError::Failed(msg) => write!(f, "deployment failed: {msg}"),
        }
    }
}

impl std::error::Error for DeploymentError {}
