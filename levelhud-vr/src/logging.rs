//! Logging setup for the plugin.
//!
//! Warnings and errors are always shown. Everything else only appears
//! when `general.enable_logs` is set, at `general.log_level`. `RUST_LOG`
//! overrides both.

use levelhud_core::config::GeneralConfig;
use levelhud_core::error::{HudError, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive implied by `general`.
#[must_use]
pub fn filter_directive(general: &GeneralConfig) -> String {
    if general.enable_logs {
        general.log_level.clone()
    } else {
        "warn".to_string()
    }
}

/// Build the subscriber filter for `general`.
///
/// The configured directive is always validated, even when `RUST_LOG` is
/// set and takes precedence.
///
/// # Errors
/// Returns `HudError::Logging` if the configured log level is not a valid
/// filter directive.
pub fn build_filter(general: &GeneralConfig) -> Result<EnvFilter> {
    let configured = EnvFilter::try_new(filter_directive(general)).map_err(|e| {
        HudError::Logging(format!("invalid log level {:?}: {e}", general.log_level))
    })?;
    Ok(EnvFilter::try_from_default_env().unwrap_or(configured))
}

/// Install the global `tracing` subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed (e.g. by the
/// host), in which case nothing changes.
///
/// # Errors
/// Returns `HudError::Logging` if the configured log level is not a valid
/// filter directive.
pub fn init_logging(general: &GeneralConfig) -> Result<bool> {
    let filter = build_filter(general)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_unless_enabled() {
        let mut general = GeneralConfig::default();
        assert_eq!(filter_directive(&general), "warn");

        general.enable_logs = true;
        general.log_level = "debug".into();
        assert_eq!(filter_directive(&general), "debug");
    }

    #[test]
    fn second_init_is_a_no_op() {
        let general = GeneralConfig::default();
        let _ = init_logging(&general).expect("valid directive");
        assert!(!init_logging(&general).expect("valid directive"));
    }

    #[test]
    fn invalid_log_level_is_a_logging_error() {
        let general = GeneralConfig {
            enable_logs: true,
            log_level: "not a level[".into(),
            ..GeneralConfig::default()
        };

        match build_filter(&general) {
            Err(HudError::Logging(msg)) => assert!(msg.contains("not a level["), "{msg}"),
            other => panic!("expected a logging error, got {other:?}"),
        }
        assert!(matches!(init_logging(&general), Err(HudError::Logging(_))));
    }

    #[test]
    fn invalid_log_level_is_ignored_while_quiet() {
        let general = GeneralConfig {
            enable_logs: false,
            log_level: "not a level[".into(),
            ..GeneralConfig::default()
        };
        assert!(build_filter(&general).is_ok());
    }
}
