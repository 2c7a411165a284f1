//! Shared value types.

use std::fmt;

/// A creature or character level. `0` means "unknown / hidden".
pub type Level = i32;

/// Placeholder substituted with the rendered level in a label template.
pub const LEVEL_PLACEHOLDER: char = '@';

/// Level text shown when the level is unknown.
pub const UNKNOWN_LEVEL_TEXT: &str = "???";

/// Cache key for one decorated name.
///
/// The raw name is part of the key because the host may localise or
/// rename the same entity over a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Stable identifier of the observed entity (prefab name in the host).
    pub entity_id: String,
    /// Name as produced upstream, before decoration.
    pub raw_name: String,
    /// Level of the viewer at the time of decoration.
    pub observer_level: Level,
}

impl CacheKey {
    /// Build a key from borrowed parts.
    #[must_use]
    pub fn new(entity_id: &str, raw_name: &str, observer_level: Level) -> Self {
        Self {
            entity_id: entity_id.to_owned(),
            raw_name: raw_name.to_owned(),
            observer_level,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.entity_id, self.raw_name, self.observer_level
        )
    }
}

/// Difficulty of a target relative to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Target is well above the observer.
    Danger,
    /// Target is within the observer's range.
    Neutral,
    /// Target is well below the observer.
    Trivial,
}

impl Band {
    /// Colour conventionally used for this band.
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Danger => "red",
            Self::Neutral => "white",
            Self::Trivial => "#2FFFDC",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Danger => write!(f, "Danger"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Trivial => write!(f, "Trivial"),
        }
    }
}
