use syscoin_consensus_core::errors::{amount::AmountError, payload::PayloadError};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RpcError {
    #[error("Payload decoding error: {0}")]
    Payload(#[from] PayloadError),

    #[error("Amount formatting error: {0}")]
    Amount(#[from] AmountError),
}

pub type RpcResult<T> = std::result::Result<T, crate::RpcError>;
