use std::net::SocketAddr;

use anyhow::{Context, Result, bail};
use metrics_exporter_prometheus::PrometheusBuilder;
use once_cell::sync::OnceCell;
use tracing::info;

static EXPORTER: OnceCell<SocketAddr> = OnceCell::new();

/// Installs the global recorder plus its scrape endpoint. Later calls return
/// the address bound by the first one.
pub fn try_init_prometheus(listen: &str) -> Result<SocketAddr> {
    EXPORTER
        .get_or_try_init(|| {
            let addr = parse_listen(listen)?;
            PrometheusBuilder::new()
                .with_http_listener(addr)
                .install()
                .context("failed to install prometheus exporter")?;
            info!(target: "monitoring", %addr, "prometheus exporter listening");
            Ok(addr)
        })
        .copied()
}

/// Counters and histograms are only emitted once the exporter is installed.
pub fn prometheus_enabled() -> bool {
    EXPORTER.get().is_some()
}

fn parse_listen(listen: &str) -> Result<SocketAddr> {
    let trimmed = listen.trim();
    if trimmed.is_empty() {
        bail!("prometheus.listen must not be empty");
    }
    trimmed
        .parse()
        .with_context(|| format!("invalid prometheus listen address: {trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_address_is_trimmed() {
        let addr = parse_listen(" 127.0.0.1:9898 ").expect("valid address");
        assert_eq!(addr.port(), 9898);
    }

    #[test]
    fn malformed_listen_address_is_rejected() {
        assert!(parse_listen("").is_err());
        assert!(parse_listen("localhost").is_err());
    }
}
