use std::time::Duration;

use serde_json::json;
use tracing::debug;
use url::Url;

use crate::config::FaucetConfig;
use crate::monitoring::{LatencyMetadata, events, guard_with_metadata};

pub mod error;

pub use error::FaucetError;

#[derive(Clone, Debug)]
pub struct FaucetClient {
    host: String,
    client: reqwest::Client,
    request_timeout: Duration,
}

impl FaucetClient {
    pub fn new(client: reqwest::Client, config: &FaucetConfig) -> Self {
        Self {
            host: config.host.trim().to_string(),
            client,
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    /// `POST {host}/faucet/{address}` with an empty JSON object body.
    ///
    /// Any 2xx response counts as success; everything else is returned as
    /// [`FaucetError::Status`] carrying the numeric status code.
    pub async fn request_transfer(&self, address: &str) -> Result<(), FaucetError> {
        let url = self.endpoint(address)?;
        let metadata = LatencyMetadata::new(
            [
                ("stage".to_string(), "faucet".to_string()),
                ("url".to_string(), url.to_string()),
            ]
            .into_iter()
            .collect(),
        );
        let guard = guard_with_metadata("faucet.transfer", metadata);

        let response = match self
            .client
            .post(url.clone())
            .timeout(self.request_timeout)
            .json(&json!({}))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                events::faucet_request(address, None, false);
                return Err(err.into());
            }
        };
        guard.finish();

        let status = response.status();
        if !status.is_success() {
            events::faucet_request(address, Some(status.as_u16()), false);
            return Err(FaucetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        debug!(target: "faucet", %url, status = status.as_u16(), "faucet responded");
        events::faucet_request(address, Some(status.as_u16()), true);
        Ok(())
    }

    fn endpoint(&self, address: &str) -> Result<Url, FaucetError> {
        let mut url = Url::parse(&self.host).map_err(|source| FaucetError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        url.path_segments_mut()
            .map_err(|_| FaucetError::UnsupportedHost(self.host.clone()))?
            .pop_if_empty()
            .push("faucet")
            .push(address);
        Ok(url)
    }
}
