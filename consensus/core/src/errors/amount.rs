use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount {0} has no decimal point")]
    MissingPoint(String),

    #[error("amount has {0} fractional digits while exactly 8 are required")]
    FractionLength(usize),

    #[error("amount {0} contains invalid digits")]
    InvalidDigits(String),

    #[error("amount {0} does not fit in a signed 64-bit unit count")]
    OutOfRange(String),

    #[error("asset precision {0} exceeds the maximum of 8")]
    InvalidPrecision(u8),
}
