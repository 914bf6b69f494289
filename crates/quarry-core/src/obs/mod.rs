//! Lightweight process-wide counters for cache effectiveness and compile
//! volume. Read via [`MetricsSnapshot`]; never reset in production code.

pub mod metrics;

pub use metrics::{metrics, MetricsSnapshot};
