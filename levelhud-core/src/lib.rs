//! # levelhud Core Library
//!
//! Game-agnostic monster level labels for nameplates.
//!
//! A [`NameDecorator`] turns `"Troll"` into `"Troll <tag>[18]</tag>"` where
//! the tag colour reflects how dangerous the monster is relative to the
//! viewer:
//!
//! - **Danger** — more than `upper_offset` levels above the observer
//! - **Neutral** — within range
//! - **Trivial** — more than `lower_offset` levels below the observer
//!
//! Monster levels and the observer's level come from injected
//! [`MonsterLookup`] and [`ObserverLevelSource`] capabilities, and the tag
//! syntax comes from a caller-supplied [`LabelMarkup`].
//!
//! ## Performance Contract
//!
//! `decorate` runs on every nameplate refresh. A cache hit is one hash
//! lookup and a clone; a miss performs two registry reads and a handful
//! of small allocations. Nothing blocks and nothing fails.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod banding;
pub mod cache;
pub mod config;
pub mod decorator;
pub mod error;
pub mod label;
pub mod lookup;
pub mod metrics;
pub mod types;

pub use cache::DecorationCache;
pub use config::{HudConfig, LevelBandingConfig};
pub use decorator::NameDecorator;
pub use error::HudError;
pub use label::LabelMarkup;
pub use lookup::{MonsterLookup, ObserverLevelSource};
pub use types::*;
