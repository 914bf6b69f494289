//! Module: obs::metrics
//! Responsibility: monotonic counters for accessor-cache traffic, predicate
//! compiles, and plan merges.
//! Does not own: any engine state; counters are advisory.
//! Boundary: relaxed atomics only; readers get a point-in-time snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

static ACCESSOR_CACHE_HITS: AtomicU64 = AtomicU64::new(0);
static ACCESSOR_CACHE_MISSES: AtomicU64 = AtomicU64::new(0);
static PREDICATES_COMPILED: AtomicU64 = AtomicU64::new(0);
static PLANS_MERGED: AtomicU64 = AtomicU64::new(0);

pub(crate) fn record_cache_hit() {
    ACCESSOR_CACHE_HITS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_cache_miss() {
    ACCESSOR_CACHE_MISSES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_predicate_compiled() {
    PREDICATES_COMPILED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_plan_merged() {
    PLANS_MERGED.fetch_add(1, Ordering::Relaxed);
}

///
/// MetricsSnapshot
///
/// Point-in-time counter values. Counters are process-wide and monotonic;
/// compare two snapshots to measure an interval.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MetricsSnapshot {
    pub accessor_cache_hits: u64,
    pub accessor_cache_misses: u64,
    pub predicates_compiled: u64,
    pub plans_merged: u64,
}

#[must_use]
pub fn metrics() -> MetricsSnapshot {
    MetricsSnapshot {
        accessor_cache_hits: ACCESSOR_CACHE_HITS.load(Ordering::Relaxed),
        accessor_cache_misses: ACCESSOR_CACHE_MISSES.load(Ordering::Relaxed),
        predicates_compiled: PREDICATES_COMPILED.load(Ordering::Relaxed),
        plans_merged: PLANS_MERGED.load(Ordering::Relaxed),
    }
}
