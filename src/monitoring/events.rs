use tracing::{info, warn};

use crate::signer::SignerKind;

use super::metrics::prometheus_enabled;
use metrics::counter;

pub fn faucet_request(address: &str, status: Option<u16>, success: bool) {
    if success {
        info!(
            target: "monitoring::faucet",
            event = "faucet_request",
            address,
            status,
            "faucet transfer requested"
        );
    } else {
        warn!(
            target: "monitoring::faucet",
            event = "faucet_request",
            address,
            status,
            "faucet transfer rejected"
        );
    }

    if prometheus_enabled() {
        let result = if success { "ok" } else { "error" };
        counter!("vmwallet_faucet_requests_total", "result" => result).increment(1);
    }
}

pub fn signer_acquired(kind: SignerKind, slot: usize, address: &str) {
    info!(
        target: "monitoring::signer",
        event = "signer_acquired",
        kind = kind.as_str(),
        slot,
        address,
        "signer ready"
    );

    if prometheus_enabled() {
        counter!(
            "vmwallet_signer_acquisitions_total",
            "kind" => kind.as_str(),
            "result" => "ok"
        )
        .increment(1);
    }
}

pub fn signer_failed(kind: SignerKind, reason: &str) {
    warn!(
        target: "monitoring::signer",
        event = "signer_failed",
        kind = kind.as_str(),
        reason,
        "signer acquisition failed"
    );

    if prometheus_enabled() {
        counter!(
            "vmwallet_signer_acquisitions_total",
            "kind" => kind.as_str(),
            "result" => "error"
        )
        .increment(1);
    }
}

pub fn signer_cancelled(kind: SignerKind) {
    info!(
        target: "monitoring::signer",
        event = "signer_cancelled",
        kind = kind.as_str(),
        "signer acquisition cancelled"
    );

    if prometheus_enabled() {
        counter!(
            "vmwallet_signer_acquisitions_total",
            "kind" => kind.as_str(),
            "result" => "cancelled"
        )
        .increment(1);
    }
}
