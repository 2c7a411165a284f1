//! Nameplate decoration — appends a coloured level tag to monster names.
//!
//! ```text
//! decorate("Troll", "Troll", 10)
//!   │
//!   ├─ cache hit ───────────────────────────────▶ cached string
//!   │
//!   ├─ exists("Troll") == false ────────────────▶ "Troll"          (not cached)
//!   ├─ lookup error ────────────────────────────▶ "Troll"          (not cached, counted)
//!   │
//!   └─ level_of → star scaling → "???"/"18" → band → template → markup
//!                                              ▶ "Troll <tag>[18]</tag>" (cached)
//! ```
//!
//! `decorate` never fails. It sits on the nameplate refresh path, which runs
//! for every visible creature, so any problem degrades to the raw name.

use tracing::{debug, trace, trace_span};

use crate::banding::{band_color, scaled_level};
use crate::cache::{CacheOutcome, DecorationCache};
use crate::config::{HudConfig, LevelBandingConfig};
use crate::error::{HudError, Result};
use crate::label::{LabelMarkup, apply_template, compose, render_level};
use crate::lookup::{MonsterLookup, ObserverLevelSource};
use crate::metrics::{CounterSnapshot, DecoratorCounters, span_names};
use crate::types::{CacheKey, Level};

/// Observer level used when the source cannot be read.
pub const DEFAULT_OBSERVER_LEVEL: Level = 1;

/// Memoizing monster name decorator.
pub struct NameDecorator {
    monsters: Box<dyn MonsterLookup>,
    observer: Box<dyn ObserverLevelSource>,
    markup: Box<dyn LabelMarkup>,
    banding: LevelBandingConfig,
    cache: DecorationCache,
    counters: DecoratorCounters,
}

impl NameDecorator {
    /// Create a decorator with default banding and a default-sized cache.
    pub fn new(
        monsters: impl MonsterLookup + 'static,
        observer: impl ObserverLevelSource + 'static,
        markup: impl LabelMarkup + 'static,
    ) -> Self {
        Self {
            monsters: Box::new(monsters),
            observer: Box::new(observer),
            markup: Box::new(markup),
            banding: LevelBandingConfig::default(),
            cache: DecorationCache::default(),
            counters: DecoratorCounters::new(),
        }
    }

    /// Create a decorator from a loaded configuration.
    ///
    /// Invalid values are replaced with their defaults first, so this is
    /// safe to call with a configuration that was never sanitized.
    pub fn from_config(
        config: &HudConfig,
        monsters: impl MonsterLookup + 'static,
        observer: impl ObserverLevelSource + 'static,
        markup: impl LabelMarkup + 'static,
    ) -> Self {
        let config = config.clone().sanitized();
        Self::new(monsters, observer, markup)
            .with_banding(config.banding)
            .with_cache(DecorationCache::new(config.cache.capacity))
    }

    /// Use `banding`, replacing invalid fields with defaults.
    #[must_use]
    pub fn with_banding(mut self, banding: LevelBandingConfig) -> Self {
        self.banding = banding.sanitized();
        self
    }

    /// Use `cache` instead of the default one.
    #[must_use]
    pub fn with_cache(mut self, cache: DecorationCache) -> Self {
        self.cache = cache;
        self
    }

    /// Decorate `raw_name` for an observer at `observer_level`.
    ///
    /// Returns `raw_name` unchanged for non-monsters and on any lookup
    /// failure; neither outcome is cached.
    pub fn decorate(&self, entity_id: &str, raw_name: &str, observer_level: Level) -> String {
        let _span = trace_span!(span_names::DECORATE, entity = %entity_id).entered();

        let key = CacheKey::new(entity_id, raw_name, observer_level);
        let mut failure = None;
        let outcome = self.cache.get_or_insert_with(key, |key| match self.compute(key) {
            Ok(decorated) => decorated,
            Err(e) => {
                failure = Some(e);
                None
            }
        });

        match outcome {
            CacheOutcome::Hit(value) => {
                DecoratorCounters::bump(&self.counters.cache_hits);
                value
            }
            CacheOutcome::Inserted { value, evicted } => {
                DecoratorCounters::bump(&self.counters.cache_misses);
                DecoratorCounters::bump(&self.counters.decorations_computed);
                if evicted {
                    DecoratorCounters::bump(&self.counters.cache_evictions);
                }
                trace!(entity = %entity_id, decorated = %value, "Decorated name");
                value
            }
            CacheOutcome::Skipped => {
                DecoratorCounters::bump(&self.counters.cache_misses);
                match failure {
                    Some(e) => {
                        DecoratorCounters::bump(&self.counters.lookup_failures);
                        debug!(
                            entity = %entity_id,
                            error = %e,
                            "Lookup failed, name left undecorated"
                        );
                    }
                    None => DecoratorCounters::bump(&self.counters.pass_through),
                }
                raw_name.to_owned()
            }
        }
    }

    /// Decorate using the observer level reported by the level source.
    pub fn decorate_for_observer(&self, entity_id: &str, raw_name: &str) -> String {
        self.decorate(entity_id, raw_name, self.observer_level())
    }

    /// Current observer level, or [`DEFAULT_OBSERVER_LEVEL`] if unavailable.
    pub fn observer_level(&self) -> Level {
        let error = match self.observer.current_level() {
            Ok(level) if level >= 0 => return level,
            Ok(level) => HudError::lookup("observer", format!("negative level {level}")),
            Err(e) => e,
        };
        DecoratorCounters::bump(&self.counters.observer_fallbacks);
        debug!(error = %error, default = DEFAULT_OBSERVER_LEVEL, "Observer level unavailable");
        DEFAULT_OBSERVER_LEVEL
    }

    /// Drop every cached decoration.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("Decoration cache cleared");
    }

    /// Number of cached decorations.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Maximum number of cached decorations.
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Active banding configuration.
    #[must_use]
    pub fn banding(&self) -> &LevelBandingConfig {
        &self.banding
    }

    /// Snapshot of the decorator counters.
    #[must_use]
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// `Ok(None)` means "not a monster".
    fn compute(&self, key: &CacheKey) -> Result<Option<String>> {
        if !self.monsters.exists(&key.entity_id)? {
            return Ok(None);
        }

        let base = self.monsters.level_of(&key.entity_id)?;
        if base < 0 {
            return Err(HudError::lookup(
                "monsters",
                format!("negative level {base} for {}", key.entity_id),
            ));
        }

        let level = scaled_level(base, key.observer_level, &self.banding);
        let band = band_color(level, key.observer_level, &self.banding);
        let fragment = apply_template(&self.banding.label_template, &render_level(level));

        Ok(Some(compose(&key.raw_name, &self.markup.wrap(band, &fragment))))
    }
}

impl std::fmt::Debug for NameDecorator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameDecorator")
            .field("banding", &self.banding)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
