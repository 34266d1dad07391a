use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaucetError {
    #[error("invalid faucet host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    #[error("faucet host `{0}` cannot carry a path")]
    UnsupportedHost(String),
    #[error("failed to call faucet: {0}")]
    Http(#[from] reqwest::Error),
    #[error("faucet request to {url} failed: HTTP error! status: {status}")]
    Status { url: String, status: u16 },
}

impl FaucetError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
