use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: '{0}' is not a whole number of satoshis")]
    Fractional(String),
    #[error("Amount error: '{0}' does not fit in 64 bits")]
    Overflow(String)
}

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: value is an empty string")]
    Empty,
    #[error("Date error: '{0}' is not a recognised date")]
    Unrecognised(String),
    #[error("Date error: '{0}' is out of range")]
    OutOfRange(String)
}
