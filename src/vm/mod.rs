pub mod error;
pub mod units;

pub use error::UnitError;
pub use units::{convert_to_native_tokens, format_native_tokens};

use crate::config::VmConfig;

/// Settings for the remote VM plus the native unit conversions bound to its
/// token decimals.
#[derive(Clone, Debug)]
pub struct VmClient {
    api_host: String,
    vm_name: String,
    vm_rpc_prefix: String,
    decimals: u32,
}

impl VmClient {
    pub fn new(config: &VmConfig) -> Result<Self, UnitError> {
        units::native_scale(config.decimals)?;
        Ok(Self {
            api_host: config.api_host.trim().to_string(),
            vm_name: config.vm_name.trim().to_string(),
            vm_rpc_prefix: config.vm_rpc_prefix.trim().to_string(),
            decimals: config.decimals,
        })
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// `{api_host}/ext/bc/{vm_name}/{vm_rpc_prefix}`
    pub fn rpc_endpoint(&self) -> String {
        format!(
            "{}/ext/bc/{}/{}",
            self.api_host.trim_end_matches('/'),
            self.vm_name.trim_matches('/'),
            self.vm_rpc_prefix.trim_matches('/')
        )
    }

    pub fn convert_to_native_tokens(&self, amount: &str) -> Result<u64, UnitError> {
        convert_to_native_tokens(amount, self.decimals)
    }

    pub fn format_native_tokens(&self, value: u64) -> String {
        // decimals were validated in `new`
        format_native_tokens(value, self.decimals).unwrap_or_else(|_| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> VmConfig {
        VmConfig {
            api_host: "http://localhost:9650/".to_string(),
            vm_name: "morpheusvm".to_string(),
            vm_rpc_prefix: "/morpheusapi".to_string(),
            decimals: 9,
        }
    }

    #[test]
    fn builds_rpc_endpoint() {
        let client = VmClient::new(&sample_config()).expect("vm client");
        assert_eq!(
            client.rpc_endpoint(),
            "http://localhost:9650/ext/bc/morpheusvm/morpheusapi"
        );
    }

    #[test]
    fn rejects_unsupported_decimals() {
        let mut config = sample_config();
        config.decimals = 24;
        assert_eq!(
            VmClient::new(&config).unwrap_err(),
            UnitError::UnsupportedDecimals(24)
        );
    }

    #[test]
    fn conversions_use_configured_decimals() {
        let client = VmClient::new(&sample_config()).expect("vm client");
        assert_eq!(client.convert_to_native_tokens("2"), Ok(2_000_000_000));
        assert_eq!(client.format_native_tokens(2_500_000_000), "2.5");
    }
}
