//! Integration hook for the VR enemy HUD.
//!
//! The HUD refreshes each nameplate by calling its name update with the
//! target character and the name it is about to display. The host adapter
//! forwards that call to [`NameplateHook::on_update_name`], which rewrites
//! the name in place before the HUD draws it.

use std::sync::Arc;

use levelhud_core::NameDecorator;
use levelhud_core::config::GeneralConfig;
use levelhud_core::metrics::span_names;
use tracing::trace_span;

/// Rewrites nameplate text with monster level tags.
#[derive(Debug, Clone)]
pub struct NameplateHook {
    decorator: Arc<NameDecorator>,
    enabled: bool,
    level_control: bool,
}

impl NameplateHook {
    /// Hook driving `decorator`, gated by the general switches.
    #[must_use]
    pub fn new(decorator: Arc<NameDecorator>, general: &GeneralConfig) -> Self {
        Self {
            decorator,
            enabled: general.enabled,
            level_control: general.level_control,
        }
    }

    /// Whether the hook will touch names at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.level_control
    }

    /// Called before the HUD displays `name` for `target`.
    ///
    /// `target` is the entity identifier of the character the nameplate
    /// belongs to, or `None` if the HUD has no character for it. Leaves
    /// `name` alone when the hook is inactive or there is no target.
    pub fn on_update_name(&self, target: Option<&str>, name: &mut String) {
        if !self.is_active() {
            return;
        }
        let Some(entity_id) = target else {
            return;
        };

        let _span = trace_span!(span_names::NAME_REFRESH, entity = %entity_id).entered();
        let decorated = self.decorator.decorate_for_observer(entity_id, name);
        if decorated != *name {
            *name = decorated;
        }
    }

    /// The decorator this hook drives.
    #[must_use]
    pub fn decorator(&self) -> &Arc<NameDecorator> {
        &self.decorator
    }
}
