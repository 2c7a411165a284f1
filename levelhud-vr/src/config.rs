//! VR-specific configuration on top of `levelhud_core::config::HudConfig`.
//!
//! The same `levelhud.toml` file carries both: the core sections
//! (`[general]`, `[banding]`, `[cache]`) plus a `[colors]` section read
//! only by the rich-text markup.

use std::path::Path;

use levelhud_core::HudConfig;
use levelhud_core::error::{HudError, Result};
use levelhud_core::types::Band;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Full configuration for the VR integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VrHudConfig {
    /// Core decoration settings.
    #[serde(flatten)]
    pub hud: HudConfig,
    /// Tag colour per difficulty band.
    #[serde(default)]
    pub colors: BandColors,
}

impl VrHudConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `HudError::MalformedConfig` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| HudError::MalformedConfig(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from `path`, falling back to defaults if the file is missing
    /// or unreadable. The result is always sanitized.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded levelhud configuration");
                config.sanitized()
            }
            Err(HudError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Falling back to default configuration"
                );
                Self::default()
            }
        }
    }

    /// Replace invalid values with their defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.hud = self.hud.sanitized();
        self.colors = self.colors.sanitized();
        self
    }
}

/// Tag colours, as understood by the HUD's rich-text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandColors {
    /// Colour for targets well above the player.
    #[serde(default = "default_danger")]
    pub danger: String,
    /// Colour for targets in range.
    #[serde(default = "default_neutral")]
    pub neutral: String,
    /// Colour for targets well below the player.
    #[serde(default = "default_trivial")]
    pub trivial: String,
}

impl BandColors {
    /// Colour configured for `band`.
    #[must_use]
    pub fn for_band(&self, band: Band) -> &str {
        match band {
            Band::Danger => &self.danger,
            Band::Neutral => &self.neutral,
            Band::Trivial => &self.trivial,
        }
    }

    /// Blank colours fall back to the band's default.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        for (band, value) in [
            (Band::Danger, &mut self.danger),
            (Band::Neutral, &mut self.neutral),
            (Band::Trivial, &mut self.trivial),
        ] {
            if value.trim().is_empty() {
                warn!(%band, default = band.default_color(), "Blank band colour");
                *value = band.default_color().to_string();
            }
        }
        self
    }
}

impl Default for BandColors {
    fn default() -> Self {
        Self {
            danger: default_danger(),
            neutral: default_neutral(),
            trivial: default_trivial(),
        }
    }
}

fn default_danger() -> String {
    Band::Danger.default_color().to_string()
}
fn default_neutral() -> String {
    Band::Neutral.default_color().to_string()
}
fn default_trivial() -> String {
    Band::Trivial.default_color().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
