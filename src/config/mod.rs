pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

use self::types as cfg;

pub(crate) fn default_user_agent() -> String {
    concat!("vmwallet/", env!("CARGO_PKG_VERSION")).to_string()
}

pub(crate) fn default_api_host() -> String {
    "http://localhost:9650".to_string()
}

pub(crate) fn default_vm_name() -> String {
    "morpheusvm".to_string()
}

pub(crate) fn default_vm_rpc_prefix() -> String {
    "morpheusapi".to_string()
}

pub(crate) fn default_decimals() -> u32 {
    9
}

pub(crate) fn default_faucet_host() -> String {
    "http://localhost:8765".to_string()
}

pub(crate) fn default_faucet_timeout_ms() -> u64 {
    10_000
}

pub(crate) fn default_snap_id() -> String {
    "local:http://localhost:8989".to_string()
}

pub(crate) fn default_snap_timeout_ms() -> u64 {
    // the user confirms the connection inside the extension
    120_000
}

pub(crate) fn default_logging_level() -> String {
    "info".to_string()
}

pub(crate) fn default_prometheus_listen() -> String {
    "0.0.0.0:9898".to_string()
}

impl Default for cfg::AppConfig {
    fn default() -> Self {
        Self {
            global: cfg::GlobalConfig::default(),
            vm: cfg::VmConfig::default(),
            faucet: cfg::FaucetConfig::default(),
            signer: cfg::SignerConfig::default(),
            logging: cfg::LoggingConfig::default(),
            prometheus: cfg::PrometheusConfig::default(),
        }
    }
}

impl Default for cfg::GlobalConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for cfg::VmConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            vm_name: default_vm_name(),
            vm_rpc_prefix: default_vm_rpc_prefix(),
            decimals: default_decimals(),
        }
    }
}

impl Default for cfg::FaucetConfig {
    fn default() -> Self {
        Self {
            host: default_faucet_host(),
            request_timeout_ms: default_faucet_timeout_ms(),
        }
    }
}

impl Default for cfg::SignerConfig {
    fn default() -> Self {
        Self {
            snap_bridge_url: None,
            snap_id: default_snap_id(),
            request_timeout_ms: default_snap_timeout_ms(),
        }
    }
}

impl Default for cfg::LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_logging_level(),
            json: false,
            profile: cfg::LoggingProfile::default(),
            timezone_offset_hours: 0,
        }
    }
}

impl Default for cfg::PrometheusConfig {
    fn default() -> Self {
        Self {
            enable: false,
            listen: default_prometheus_listen(),
        }
    }
}
