use super::submission_error::SubmissionError;
use alloy::{contract::Error as ContractError, primitives::Address};

pub const REASON_HEIGHT_OUT_OF_ORDER: &str =
    "HeightOutOfOrder(): the submitted height does not extend the committed chain";
pub const REASON_HEIGHT_ALREADY_COMMITTED: &str =
    "HeightAlreadyCommitted(): a commitment already exists at this height";
pub const REASON_NOT_MANAGER: &str =
    "NotManager(): the transaction signer is not the contract manager";

/// 0x6b0f6462 -> HeightOutOfOrder()
/// 0x5152c52c -> HeightAlreadyCommitted()
/// 0xc0fc8a8a -> NotManager()
pub fn decode_revert_reason(err_str: &str) -> Option<&'static str> {
    if err_str.contains("0x6b0f6462") {
        Some(REASON_HEIGHT_OUT_OF_ORDER)
    } else if err_str.contains("0x5152c52c") {
        Some(REASON_HEIGHT_ALREADY_COMMITTED)
    } else if err_str.contains("0xc0fc8a8a") {
        Some(REASON_NOT_MANAGER)
    } else {
        None
    }
}

/// Sort a failed contract call into the submission taxonomy: a recognized
/// revert selector is a rejection, any other transport failure left no
/// on-chain state behind and is transient.
pub fn classify_contract_error(
    err: &ContractError,
    height: u64,
    contract_address: Address,
) -> SubmissionError {
    let err_str = err.to_string();
    if let Some(reason) = decode_revert_reason(&err_str) {
        return SubmissionError::Rejected {
            height,
            reason: reason.to_string(),
        };
    }
    match err {
        ContractError::TransportError(e) => SubmissionError::Transient(format!(
            "submitting height {height} to {contract_address}: {e}"
        )),
        e => SubmissionError::Rejected {
            height,
            reason: format!("unrecognized contract failure on {contract_address}: {e}"),
        },
    }
}
