use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::AppConfig;

pub const DEFAULT_CONFIG_PATHS: &[&str] = &["vmwallet.toml", "config/vmwallet.toml"];

pub const ENV_API_HOST: &str = "VMWALLET_API_HOST";
pub const ENV_FAUCET_HOST: &str = "VMWALLET_FAUCET_HOST";
pub const ENV_SNAP_BRIDGE_URL: &str = "VMWALLET_SNAP_BRIDGE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("config file not found: {0}")]
    Missing(PathBuf),
}

/// Loads the config from an explicit path or the first default path that
/// exists, falling back to defaults. Environment overrides are applied last.
pub fn load_config(path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(explicit) => {
            try_load_file(&explicit)?.ok_or_else(|| ConfigError::Missing(explicit.clone()))?
        }
        None => load_from_defaults()?,
    };
    config.apply_overrides(|key| env::var(key).ok());
    Ok(config)
}

fn load_from_defaults() -> Result<AppConfig, ConfigError> {
    for candidate in DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from) {
        if let Some(config) = try_load_file(&candidate)? {
            return Ok(config);
        }
    }
    debug!(target: "config", "no config file found, using defaults");
    Ok(AppConfig::default())
}

fn try_load_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(target: "config", path = %path.display(), "loaded config");
    Ok(Some(config))
}

impl AppConfig {
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(host) = read(ENV_API_HOST) {
            self.vm.api_host = host;
        }
        if let Some(host) = read(ENV_FAUCET_HOST) {
            self.faucet.host = host;
        }
        if let Some(url) = read(ENV_SNAP_BRIDGE_URL) {
            self.signer.snap_bridge_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn explicit_path_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[faucet]\nhost = \"http://faucet.test:8765\"").expect("write config");

        let config = load_config(Some(file.path().to_path_buf())).expect("load config");
        assert_eq!(config.faucet.host, "http://faucet.test:8765");
        assert_eq!(config.vm.decimals, 9);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let err = load_config(Some(missing.clone())).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(path) if path == missing));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[vm\ndecimals = ").expect("write config");

        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn overrides_replace_non_empty_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_HOST, " http://api.test:9650 "),
            (ENV_FAUCET_HOST, ""),
            (ENV_SNAP_BRIDGE_URL, "http://127.0.0.1:8990"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.vm.api_host, "http://api.test:9650");
        assert_eq!(config.faucet.host, "http://localhost:8765");
        assert_eq!(config.signer.bridge_url(), Some("http://127.0.0.1:8990"));
    }
}
