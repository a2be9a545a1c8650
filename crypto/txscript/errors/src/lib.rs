use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum TxScriptError {
    #[error("invalid opcode length: {0:02x?}")]
    MalformedPushSize(Vec<u8>),
    #[error("opcode requires {0} bytes, but script only has {1} remaining")]
    MalformedPush(usize, usize),
    #[error("number too big: {0}")]
    NumberTooBig(String),
    #[error("invalid signature length {0}")]
    SigLength(usize),
    #[error("signature is not strictly DER encoded: {0}")]
    SigDerEncoding(&'static str),
    #[error("invalid hash type {0:#04x}")]
    InvalidSigHashType(u8),
}
