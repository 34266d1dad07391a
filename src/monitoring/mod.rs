pub mod events;
pub mod latency;
pub mod metrics;

pub use latency::{LatencyMetadata, guard_with_metadata};
pub use metrics::try_init_prometheus;
