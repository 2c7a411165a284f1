//! Runtime counters for the decorator.
//!
//! Every soft failure the decorator recovers from is counted here as well
//! as logged, so a nameplate that never gets a level tag can be diagnosed
//! without the hot path ever returning an error.
//!
//! Lock-free `AtomicU64` counters, read on export.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for decoration events.
#[derive(Debug)]
pub struct DecoratorCounters {
    /// Calls answered from the cache.
    pub cache_hits: AtomicU64,
    /// Calls that had to consult the lookups.
    pub cache_misses: AtomicU64,
    /// Decorated names computed and cached.
    pub decorations_computed: AtomicU64,
    /// Names returned unchanged because the entity is not a monster.
    pub pass_through: AtomicU64,
    /// Lookup errors recovered by returning the raw name.
    pub lookup_failures: AtomicU64,
    /// Times the observer level fell back to the default.
    pub observer_fallbacks: AtomicU64,
    /// Cache entries pushed out by the LRU policy.
    pub cache_evictions: AtomicU64,
}

impl DecoratorCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            decorations_computed: AtomicU64::new(0),
            pass_through: AtomicU64::new(0),
            lookup_failures: AtomicU64::new(0),
            observer_fallbacks: AtomicU64::new(0),
            cache_evictions: AtomicU64::new(0),
        }
    }

    /// Increment one counter.
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot all counters for export.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            decorations_computed: self.decorations_computed.load(Ordering::Relaxed),
            pass_through: self.pass_through.load(Ordering::Relaxed),
            lookup_failures: self.lookup_failures.load(Ordering::Relaxed),
            observer_fallbacks: self.observer_fallbacks.load(Ordering::Relaxed),
            cache_evictions: self.cache_evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for DecoratorCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of counter values at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Cache hits.
    pub cache_hits: u64,
    /// Cache misses.
    pub cache_misses: u64,
    /// Decorations computed.
    pub decorations_computed: u64,
    /// Non-monster pass-throughs.
    pub pass_through: u64,
    /// Recovered lookup failures.
    pub lookup_failures: u64,
    /// Observer level fallbacks.
    pub observer_fallbacks: u64,
    /// LRU evictions.
    pub cache_evictions: u64,
}

impl CounterSnapshot {
    /// Fraction of calls served from the cache, `0.0` before any call.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Format as Prometheus-compatible text.
    #[must_use]
    pub fn to_prometheus(&self) -> String {
        format!(
            "# HELP levelhud_cache_hits_total Decorations served from cache\n\
             # TYPE levelhud_cache_hits_total counter\n\
             levelhud_cache_hits_total {}\n\
             # HELP levelhud_cache_misses_total Decorations requiring lookups\n\
             # TYPE levelhud_cache_misses_total counter\n\
             levelhud_cache_misses_total {}\n\
             # HELP levelhud_decorations_computed_total Decorated names computed\n\
             # TYPE levelhud_decorations_computed_total counter\n\
             levelhud_decorations_computed_total {}\n\
             # HELP levelhud_pass_through_total Names left unchanged (not a monster)\n\
             # TYPE levelhud_pass_through_total counter\n\
             levelhud_pass_through_total {}\n\
             # HELP levelhud_lookup_failures_total Recovered lookup failures\n\
             # TYPE levelhud_lookup_failures_total counter\n\
             levelhud_lookup_failures_total {}\n\
             # HELP levelhud_observer_fallbacks_total Observer level defaulted to 1\n\
             # TYPE levelhud_observer_fallbacks_total counter\n\
             levelhud_observer_fallbacks_total {}\n\
             # HELP levelhud_cache_evictions_total LRU evictions\n\
             # TYPE levelhud_cache_evictions_total counter\n\
             levelhud_cache_evictions_total {}\n",
            self.cache_hits,
            self.cache_misses,
            self.decorations_computed,
            self.pass_through,
            self.lookup_failures,
            self.observer_fallbacks,
            self.cache_evictions,
        )
    }
}

/// Span names used with `tracing` spans.
pub mod span_names {
    /// One `decorate` call.
    pub const DECORATE: &str = "levelhud::decorate";
    /// One nameplate refresh through the integration hook.
    pub const NAME_REFRESH: &str = "levelhud::name_refresh";
}
