use std::fmt;

use async_trait::async_trait;
use solana_sdk::signature::{Keypair, Signer};

use super::{SignerError, SignerIface, SignerKind};

/// In-memory ed25519 key that lives as long as the session.
pub struct EphemeralSigner {
    keypair: Keypair,
}

impl EphemeralSigner {
    pub fn generate() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }
}

impl fmt::Debug for EphemeralSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralSigner")
            .field("address", &self.address())
            .finish()
    }
}

#[async_trait]
impl SignerIface for EphemeralSigner {
    fn kind(&self) -> SignerKind {
        SignerKind::Ephemeral
    }

    fn public_key(&self) -> [u8; 32] {
        self.keypair.pubkey().to_bytes()
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let signature = self.keypair.sign_message(message);
        Ok(signature.as_ref().to_vec())
    }
}
