use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("Cannot parse amount '{0}'")]
    Parse(String),

    #[error("Amount cannot be negative: {0}")]
    Negative(i64),

    #[error("Amount '{0}' has a fractional part")]
    Fractional(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    #[error("Minimum amount {min} is greater than maximum amount {max}")]
    MinAboveMax { min: i64, max: i64 },

    #[error(transparent)]
    Money(#[from] MoneyError),
}
