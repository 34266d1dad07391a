//! Signing capabilities and the provider seam used by the connection flow.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod address;
pub mod ephemeral;
pub mod error;
pub mod provider;
pub mod snap;

pub use address::Address;
pub use ephemeral::EphemeralSigner;
pub use error::SignerError;
pub use provider::WalletSignerProvider;
pub use snap::{SnapBridge, SnapSigner};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SignerKind {
    /// Key generated in memory for this session only.
    Ephemeral,
    /// Key held by the MetaMask Snap browser extension.
    MetamaskSnap,
}

impl SignerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ephemeral => "ephemeral",
            Self::MetamaskSnap => "metamask-snap",
        }
    }
}

impl fmt::Display for SignerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{ type, lastDerivationSection? }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerOptions {
    #[serde(rename = "type")]
    pub kind: SignerKind,
    /// Only meaningful for extension backed signers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_derivation_section: Option<u32>,
}

impl SignerOptions {
    pub fn new(kind: SignerKind) -> Self {
        Self {
            kind,
            last_derivation_section: None,
        }
    }

    pub fn with_derivation_section(mut self, section: u32) -> Self {
        self.last_derivation_section = Some(section);
        self
    }
}

#[async_trait]
pub trait SignerIface: fmt::Debug + Send + Sync {
    fn kind(&self) -> SignerKind;

    /// Raw ed25519 public key.
    fn public_key(&self) -> [u8; 32];

    fn address(&self) -> Address {
        Address::from_ed25519(&self.public_key())
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError>;
}

#[async_trait]
pub trait SignerProvider: Send + Sync {
    async fn get_signer(&self, options: SignerOptions)
    -> Result<Arc<dyn SignerIface>, SignerError>;
}
