//! # levelhud-vr — VR Nameplate Integration for levelhud
//!
//! This crate provides the integration layer between the game-agnostic
//! `levelhud-core` library and a VR enemy HUD that draws nameplates with
//! rich text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Host (VR enemy HUD)           │
//! │  ┌───────────────────────────────────┐  │
//! │  │        levelhud-vr                │  │
//! │  │  ┌─────────────┐ ┌─────────────┐ │  │
//! │  │  │   Session   │ │    Hooks    │ │  │
//! │  │  └──────┬──────┘ └──────┬──────┘ │  │
//! │  │         │               │         │  │
//! │  │         ▼               ▼         │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │     levelhud-core       │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config` — `levelhud.toml` with the VR `[colors]` section
//! - `hooks` — the nameplate name-update hook
//! - `logging` — `tracing` subscriber setup
//! - `markup` — `<color=..>` rich-text markup
//! - `session` — decorator + hook for one plugin lifetime

pub mod config;
pub mod hooks;
pub mod logging;
pub mod markup;
pub mod session;

pub use config::VrHudConfig;
pub use hooks::NameplateHook;
pub use session::HudSession;
