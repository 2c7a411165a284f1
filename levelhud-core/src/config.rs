//! Configuration for the nameplate decoration system.
//!
//! Maps directly to `levelhud.toml`. Every field has a serde default, so a
//! partial or empty file is valid. Values that parse but make no sense
//! (a template without a placeholder, negative offsets) are replaced with
//! their defaults by [`HudConfig::sanitized`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{HudError, Result};
use crate::types::LEVEL_PLACEHOLDER;

/// Default cache capacity (decorated names kept per session).
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudConfig {
    /// General switches.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Level banding and label formatting.
    #[serde(default)]
    pub banding: LevelBandingConfig,
    /// Decoration cache sizing.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl HudConfig {
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
                warn!(path = %path.display(), error = %e, "Falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Replace invalid values with their documented defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.banding = self.banding.sanitized();
        if self.cache.capacity == 0 {
            warn!(
                error = %HudError::MalformedConfig("cache.capacity must be positive".into()),
                default = DEFAULT_CACHE_CAPACITY,
                "Recovered configuration value"
            );
            self.cache.capacity = DEFAULT_CACHE_CAPACITY;
        }
        self
    }
}

/// General switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Master switch for the whole integration.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Verbose logging. Warnings and errors are always logged.
    #[serde(default)]
    pub enable_logs: bool,
    /// Log level used when `enable_logs` is set: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether monster levels are shown at all.
    #[serde(default = "default_true")]
    pub level_control: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_logs: false,
            log_level: default_log_level(),
            level_control: true,
        }
    }
}

/// Difficulty banding and label formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBandingConfig {
    /// Levels above `observer + upper_offset` are dangerous.
    #[serde(default = "default_offset")]
    pub upper_offset: i32,
    /// Levels below `observer - lower_offset` are trivial.
    #[serde(default = "default_offset")]
    pub lower_offset: i32,
    /// Add one level per observer level above 1.
    #[serde(default)]
    pub per_star_increment: bool,
    /// Label template; `@` is replaced by the level text.
    #[serde(default = "default_label_template")]
    pub label_template: String,
}

impl Default for LevelBandingConfig {
    fn default() -> Self {
        Self {
            upper_offset: default_offset(),
            lower_offset: default_offset(),
            per_star_increment: false,
            label_template: default_label_template(),
        }
    }
}

/// A banding field that failed validation.
#[derive(Debug, Clone, Copy)]
enum BandingField {
    UpperOffset,
    LowerOffset,
    LabelTemplate,
}

impl LevelBandingConfig {
    /// Check every field, reporting the first invalid one.
    ///
    /// # Errors
    /// Returns `HudError::MalformedConfig` describing the problem.
    pub fn validate(&self) -> Result<()> {
        match self.problems().into_iter().next() {
            Some((_, error)) => Err(error),
            None => Ok(()),
        }
    }

    /// Replace each invalid field with its default, logging what changed.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut out = self;

        for (field, error) in out.problems() {
            warn!(error = %error, "Recovered configuration value");
            match field {
                BandingField::UpperOffset => out.upper_offset = defaults.upper_offset,
                BandingField::LowerOffset => out.lower_offset = defaults.lower_offset,
                BandingField::LabelTemplate => {
                    out.label_template.clone_from(&defaults.label_template);
                }
            }
        }
        out
    }

    /// Every invalid field, in declaration order.
    fn problems(&self) -> Vec<(BandingField, HudError)> {
        let mut problems = Vec::new();
        if self.upper_offset < 0 {
            problems.push((
                BandingField::UpperOffset,
                HudError::MalformedConfig(format!(
                    "banding.upper_offset must not be negative (got {})",
                    self.upper_offset
                )),
            ));
        }
        if self.lower_offset < 0 {
            problems.push((
                BandingField::LowerOffset,
                HudError::MalformedConfig(format!(
                    "banding.lower_offset must not be negative (got {})",
                    self.lower_offset
                )),
            ));
        }
        if !self.label_template.contains(LEVEL_PLACEHOLDER) {
            problems.push((
                BandingField::LabelTemplate,
                HudError::MalformedConfig(format!(
                    "banding.label_template {:?} has no '{LEVEL_PLACEHOLDER}' placeholder",
                    self.label_template
                )),
            ));
        }
        problems
    }
}

/// Decoration cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of decorated names kept before LRU eviction.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_offset() -> i32 {
    5
}
fn default_label_template() -> String {
    "[@]".to_string()
}
fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
