use thiserror::Error;

/// Failures talking to the core banking system.
///
/// `Transport` covers everything below the business layer (connect, timeout,
/// TLS). `Rejected` is a well-formed answer whose response code is not `"00"`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Core banking transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Core banking rejected the request [{code}]: {message}")]
    Rejected { code: String, message: String },

    #[error("Unreadable core banking response: {0}")]
    Decode(String),
}
