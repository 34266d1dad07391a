use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use metrics::histogram;

use super::metrics::prometheus_enabled;

#[derive(Debug, Clone, Default)]
pub struct LatencyMetadata {
    fields: BTreeMap<String, String>,
}

impl LatencyMetadata {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// Logs the elapsed time of an operation once, either on `finish` or on drop.
#[derive(Debug)]
pub struct LatencyGuard {
    operation: Cow<'static, str>,
    start: Instant,
    metadata: LatencyMetadata,
    ended: AtomicBool,
}

impl LatencyGuard {
    pub fn new(operation: impl Into<Cow<'static, str>>, metadata: LatencyMetadata) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
            metadata,
            ended: AtomicBool::new(false),
        }
    }

    pub fn finish(&self) -> Duration {
        let elapsed = self.start.elapsed();
        if !self.ended.swap(true, Ordering::SeqCst) {
            record_latency(&self.operation, elapsed, &self.metadata);
        }
        elapsed
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        if !self.ended.swap(true, Ordering::SeqCst) {
            record_latency(&self.operation, self.start.elapsed(), &self.metadata);
        }
    }
}

pub fn guard_with_metadata(
    operation: impl Into<Cow<'static, str>>,
    metadata: LatencyMetadata,
) -> LatencyGuard {
    LatencyGuard::new(operation, metadata)
}

fn record_latency(operation: &str, elapsed: Duration, metadata: &LatencyMetadata) {
    let elapsed_ms = format!("{:.3}", elapsed.as_secs_f64() * 1_000.0);
    let summary = metadata
        .fields()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(
        target: "latency",
        %operation,
        elapsed_us = elapsed.as_micros() as u64,
        elapsed_ms = %elapsed_ms,
        metadata = %summary,
        "耗时统计"
    );

    if prometheus_enabled() {
        histogram!("vmwallet_request_latency_ms", "operation" => operation.to_string())
            .record(elapsed.as_secs_f64() * 1_000.0);
    }
}
