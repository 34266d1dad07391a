//! Extension backed signer reached through a JSON-RPC bridge.
//!
//! The bridge forwards `wallet_requestSnaps` / `wallet_invokeSnap` to the
//! browser extension. Keys and signatures travel base58 encoded; the key
//! derivation itself stays inside the extension.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use super::{SignerError, SignerIface, SignerKind};
use crate::config::SignerConfig;
use crate::monitoring::{LatencyMetadata, guard_with_metadata};

const DERIVATION_PREFIX: [&str; 4] = ["44'", "9000'", "0'", "0'"];

pub fn derivation_path(last_section: u32) -> Vec<String> {
    DERIVATION_PREFIX
        .iter()
        .map(|segment| segment.to_string())
        .chain(std::iter::once(format!("{last_section}'")))
        .collect()
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug)]
pub struct SnapBridge {
    client: reqwest::Client,
    url: String,
    snap_id: String,
    request_timeout: Duration,
    next_id: AtomicU64,
}

impl SnapBridge {
    pub fn new(client: reqwest::Client, url: &str, config: &SignerConfig) -> Self {
        Self {
            client,
            url: url.trim().to_string(),
            snap_id: config.snap_id.trim().to_string(),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn snap_id(&self) -> &str {
        &self.snap_id
    }

    /// Asks the extension to install / enable the snap.
    pub async fn request_snap(&self) -> Result<(), SignerError> {
        let mut snaps = serde_json::Map::new();
        snaps.insert(self.snap_id.clone(), json!({}));
        let _: Value = self
            .call("wallet_requestSnaps", "wallet_requestSnaps", Value::Object(snaps))
            .await?;
        Ok(())
    }

    pub async fn invoke<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, SignerError> {
        let params = json!({
            "snapId": self.snap_id,
            "request": { "method": method, "params": params },
        });
        self.call("wallet_invokeSnap", method, params).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        rpc_method: &str,
        label: &str,
        params: Value,
    ) -> Result<T, SignerError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let metadata = LatencyMetadata::new(
            [
                ("stage".to_string(), "snap".to_string()),
                ("method".to_string(), label.to_string()),
            ]
            .into_iter()
            .collect(),
        );
        let guard = guard_with_metadata("snap.rpc", metadata);

        let response = self
            .client
            .post(&self.url)
            .timeout(self.request_timeout)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": rpc_method,
                "params": params,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SignerError::BridgeStatus {
                status: response.status().as_u16(),
            });
        }

        let envelope: RpcEnvelope = response.json().await?;
        guard.finish();

        if let Some(error) = envelope.error {
            return Err(SignerError::Rejected {
                method: label.to_string(),
                code: error.code,
                message: error.message,
            });
        }

        let result = envelope.result.unwrap_or(Value::Null);
        debug!(target: "signer::snap", method = label, id, "snap call completed");
        serde_json::from_value(result)
            .map_err(|err| SignerError::InvalidResponse(format!("{label}: {err}")))
    }
}

pub struct SnapSigner {
    bridge: Arc<SnapBridge>,
    derivation_path: Vec<String>,
    public_key: [u8; 32],
}

impl SnapSigner {
    /// Enables the snap and fetches the public key for the given section.
    pub async fn connect(bridge: Arc<SnapBridge>, last_section: u32) -> Result<Self, SignerError> {
        bridge.request_snap().await?;

        let derivation_path = derivation_path(last_section);
        let encoded: String = bridge
            .invoke(
                "getPublicKey",
                json!({ "derivationPath": derivation_path }),
            )
            .await?;
        let public_key: [u8; 32] = decode_base58(&encoded)?
            .try_into()
            .map_err(|bytes: Vec<u8>| {
                SignerError::InvalidResponse(format!(
                    "public key must be 32 bytes, got {}",
                    bytes.len()
                ))
            })?;

        Ok(Self {
            bridge,
            derivation_path,
            public_key,
        })
    }
}

impl fmt::Debug for SnapSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapSigner")
            .field("snap_id", &self.bridge.snap_id())
            .field("derivation_path", &self.derivation_path)
            .field("address", &self.address())
            .finish()
    }
}

#[async_trait]
impl SignerIface for SnapSigner {
    fn kind(&self) -> SignerKind {
        SignerKind::MetamaskSnap
    }

    fn public_key(&self) -> [u8; 32] {
        self.public_key
    }

    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let encoded: String = self
            .bridge
            .invoke(
                "signTransaction",
                json!({
                    "derivationPath": self.derivation_path,
                    "tx": bs58::encode(message).into_string(),
                }),
            )
            .await?;
        let signature = decode_base58(&encoded)?;
        if signature.len() != 64 {
            return Err(SignerError::InvalidResponse(format!(
                "signature must be 64 bytes, got {}",
                signature.len()
            )));
        }
        Ok(signature)
    }
}

fn decode_base58(encoded: &str) -> Result<Vec<u8>, SignerError> {
    bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|err| SignerError::InvalidResponse(format!("base58 decode failed: {err}")))
}
