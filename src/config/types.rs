use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub vm: VmConfig,
    #[serde(default)]
    pub faucet: FaucetConfig,
    #[serde(default)]
    pub signer: SignerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub prometheus: PrometheusConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default = "super::default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VmConfig {
    #[serde(default = "super::default_api_host")]
    pub api_host: String,
    #[serde(default = "super::default_vm_name")]
    pub vm_name: String,
    #[serde(default = "super::default_vm_rpc_prefix")]
    pub vm_rpc_prefix: String,
    #[serde(default = "super::default_decimals")]
    pub decimals: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaucetConfig {
    #[serde(default = "super::default_faucet_host")]
    pub host: String,
    #[serde(default = "super::default_faucet_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignerConfig {
    /// JSON-RPC bridge forwarding `wallet_*` calls to the browser extension.
    #[serde(default)]
    pub snap_bridge_url: Option<String>,
    #[serde(default = "super::default_snap_id")]
    pub snap_id: String,
    #[serde(default = "super::default_snap_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl SignerConfig {
    pub fn bridge_url(&self) -> Option<&str> {
        self.snap_bridge_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingProfile {
    Lean,
    Verbose,
}

impl Default for LoggingProfile {
    fn default() -> Self {
        Self::Lean
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "super::default_logging_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub profile: LoggingProfile,
    #[serde(default)]
    pub timezone_offset_hours: i8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrometheusConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default = "super::default_prometheus_listen")]
    pub listen: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty toml");
        assert_eq!(config.vm.decimals, 9);
        assert_eq!(config.vm.vm_name, "morpheusvm");
        assert_eq!(config.faucet.host, "http://localhost:8765");
        assert!(config.signer.bridge_url().is_none());
        assert_eq!(config.logging.profile, LoggingProfile::Lean);
        assert!(!config.prometheus.enable);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let raw = r#"
[vm]
decimals = 6

[signer]
snap_bridge_url = "  "

[logging]
profile = "verbose"
json = true
"#;
        let config: AppConfig = toml::from_str(raw).expect("parse toml");
        assert_eq!(config.vm.decimals, 6);
        assert_eq!(config.vm.api_host, "http://localhost:9650");
        assert!(config.signer.bridge_url().is_none());
        assert_eq!(config.logging.profile, LoggingProfile::Verbose);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
    }
}
