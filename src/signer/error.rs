use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("browser extension signer is not configured (set signer.snap_bridge_url)")]
    ExtensionUnavailable,
    #[error("snap bridge request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("snap bridge returned status {status}")]
    BridgeStatus { status: u16 },
    #[error("snap rejected `{method}` ({code}): {message}")]
    Rejected {
        method: String,
        code: i64,
        message: String,
    },
    #[error("invalid snap response: {0}")]
    InvalidResponse(String),
}
