//! Plugin session lifecycle.
//!
//! A [`HudSession`] is created once the host has both the monster registry
//! and the VR HUD available, and lives until the plugin is unloaded. It
//! owns the decorator (and therefore the decoration cache), so nothing is
//! shared between sessions.

use std::sync::Arc;

use levelhud_core::NameDecorator;
use levelhud_core::lookup::{MonsterLookup, ObserverLevelSource};
use levelhud_core::metrics::CounterSnapshot;
use tracing::{info, warn};

use crate::config::VrHudConfig;
use crate::hooks::NameplateHook;
use crate::markup::RichTextMarkup;

/// Decorator and hook for one plugin lifetime.
#[derive(Debug)]
pub struct HudSession {
    config: VrHudConfig,
    decorator: Arc<NameDecorator>,
    hook: NameplateHook,
}

impl HudSession {
    /// Build the session from configuration and the host's lookups.
    pub fn start(
        config: VrHudConfig,
        monsters: impl MonsterLookup + 'static,
        observer: impl ObserverLevelSource + 'static,
    ) -> Self {
        let config = config.sanitized();
        let markup = RichTextMarkup::new(config.colors.clone());
        let decorator = Arc::new(NameDecorator::from_config(
            &config.hud,
            monsters,
            observer,
            markup,
        ));
        let hook = NameplateHook::new(Arc::clone(&decorator), &config.hud.general);

        if hook.is_active() {
            info!(
                upper_offset = config.hud.banding.upper_offset,
                lower_offset = config.hud.banding.lower_offset,
                per_star = config.hud.banding.per_star_increment,
                cache_capacity = config.hud.cache.capacity,
                "Nameplate level labels active"
            );
        } else {
            info!("Nameplate level labels disabled in configuration");
        }

        Self {
            config,
            decorator,
            hook,
        }
    }

    /// The hook to forward nameplate refreshes to.
    #[must_use]
    pub fn hook(&self) -> &NameplateHook {
        &self.hook
    }

    /// The session's decorator.
    #[must_use]
    pub fn decorator(&self) -> &Arc<NameDecorator> {
        &self.decorator
    }

    /// Effective (sanitized) configuration.
    #[must_use]
    pub fn config(&self) -> &VrHudConfig {
        &self.config
    }

    /// End the session: clear the cache and report final counters.
    pub fn teardown(self) -> CounterSnapshot {
        let counters = self.decorator.counters();
        self.decorator.clear_cache();

        info!(
            hits = counters.cache_hits,
            misses = counters.cache_misses,
            computed = counters.decorations_computed,
            evictions = counters.cache_evictions,
            "Nameplate session ended"
        );
        if counters.lookup_failures > 0 || counters.observer_fallbacks > 0 {
            warn!(
                lookup_failures = counters.lookup_failures,
                observer_fallbacks = counters.observer_fallbacks,
                "Some nameplates were shown without level labels"
            );
        }
        counters
    }
}
