//! Difficulty banding — how a target's level compares to the observer's.
//!
//! ```text
//!            lower = observer - lower_offset     upper = observer + upper_offset
//!   Trivial  ─────────────┤         Neutral          ├───────────  Danger
//!                       (lower and upper themselves are Neutral)
//! ```

use crate::config::LevelBandingConfig;
use crate::types::{Band, Level};

/// Classify `level` against `observer_level`.
///
/// Both bounds are inclusive on the neutral side.
#[must_use]
pub fn band_color(level: Level, observer_level: Level, config: &LevelBandingConfig) -> Band {
    let upper = observer_level.saturating_add(config.upper_offset);
    let lower = observer_level.saturating_sub(config.lower_offset);

    if level > upper {
        Band::Danger
    } else if level < lower {
        Band::Trivial
    } else {
        Band::Neutral
    }
}

/// Apply star scaling: one extra level per observer level above 1.
#[must_use]
pub fn scaled_level(base: Level, observer_level: Level, config: &LevelBandingConfig) -> Level {
    if config.per_star_increment {
        base.saturating_add(observer_level.saturating_sub(1))
    } else {
        base
    }
}
