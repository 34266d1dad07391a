use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{
    EphemeralSigner, SignerError, SignerIface, SignerKind, SignerOptions, SignerProvider,
    SnapBridge, SnapSigner,
};
use crate::config::SignerConfig;

/// Hands out ephemeral signers directly and snap signers through the
/// configured bridge.
#[derive(Debug, Clone)]
pub struct WalletSignerProvider {
    bridge: Option<Arc<SnapBridge>>,
}

impl WalletSignerProvider {
    pub fn new(client: reqwest::Client, config: &SignerConfig) -> Self {
        let bridge = config
            .bridge_url()
            .map(|url| Arc::new(SnapBridge::new(client, url, config)));
        Self { bridge }
    }

    pub fn extension_available(&self) -> bool {
        self.bridge.is_some()
    }
}

#[async_trait]
impl SignerProvider for WalletSignerProvider {
    async fn get_signer(
        &self,
        options: SignerOptions,
    ) -> Result<Arc<dyn SignerIface>, SignerError> {
        match options.kind {
            SignerKind::Ephemeral => {
                if let Some(section) = options.last_derivation_section {
                    debug!(
                        target: "signer",
                        section,
                        "derivation section ignored for ephemeral signer"
                    );
                }
                Ok(Arc::new(EphemeralSigner::generate()))
            }
            SignerKind::MetamaskSnap => {
                let bridge = self
                    .bridge
                    .as_ref()
                    .ok_or(SignerError::ExtensionUnavailable)?;
                let section = options.last_derivation_section.unwrap_or(0);
                let signer = SnapSigner::connect(Arc::clone(bridge), section).await?;
                Ok(Arc::new(signer))
            }
        }
    }
}
