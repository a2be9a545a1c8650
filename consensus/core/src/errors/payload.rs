use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload ended at offset {0} while {1} more bytes were required")]
    UnexpectedEnd(usize, usize),

    #[error("compact size {0} is not canonically encoded")]
    NonCanonicalCompactSize(u64),

    #[error("output index {0} does not fit in 32 bits")]
    OutputIndexOverflow(u64),

    #[error("field {0} has length {1} while the expected length is {2}")]
    InvalidFieldLength(&'static str, usize, usize),

    #[error("field {0} is not valid base64: {1}")]
    InvalidBase64(&'static str, base64::DecodeError),

    #[error("proof value offset {0} lies beyond the {1} bytes of parent nodes")]
    ProofOffsetOutOfRange(usize, usize),

    #[error("asset precision {0} exceeds the maximum of 8")]
    InvalidPrecision(u8),

    #[error("transaction carries no data output")]
    MissingDataCarrier,
}

pub type PayloadResult<T> = std::result::Result<T, PayloadError>;
