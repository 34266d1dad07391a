use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid decimal amount `{0}`")]
    Malformed(String),
    #[error("amount `{0}` must not be negative")]
    Negative(String),
    #[error("amount `{0}` does not fit into native units")]
    Overflow(String),
    #[error("unsupported token decimals: {0} (max {max})", max = super::units::MAX_DECIMALS)]
    UnsupportedDecimals(u32),
}
