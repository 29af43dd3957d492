//! Logging setup.
//!
//! The parser emits `tracing` events (`debug!` per parse, `trace!` per
//! stage). Nothing is printed unless a subscriber is installed, either by the
//! application or through [`init`] with the `tracing-subscriber` feature.
//!
//! # Environment Variables
//!
//! - `DSN_DEBUG=true` / `1` / `yes` - Enable debug logging
//! - `DSN_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `DSN_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! ```rust,no_run
//! use dsn_parser::logging;
//!
//! logging::init();
//! // or
//! logging::init_with_level("trace");
//! ```
//!
//! Credentials are never logged; events only carry lengths, counts and
//! non-secret fields.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const DEBUG_VAR: &str = "DSN_DEBUG";
const LEVEL_VAR: &str = "DSN_LOG_LEVEL";
const FORMAT_VAR: &str = "DSN_LOG_FORMAT";

/// Whether `DSN_DEBUG` is set to `true`, `1` or `yes` (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(DEBUG_VAR).is_ok_and(|v| is_truthy(&v))
}

/// The level from `DSN_LOG_LEVEL`, falling back to `debug` when
/// `DSN_DEBUG` is on and `warn` otherwise.
pub fn get_log_level() -> &'static str {
    resolve_level(env::var(LEVEL_VAR).ok().as_deref(), is_debug_enabled())
}

/// The output format from `DSN_LOG_FORMAT` (default `json`).
pub fn get_log_format() -> &'static str {
    resolve_format(env::var(FORMAT_VAR).ok().as_deref())
}

/// Install a global subscriber configured from the environment.
///
/// Does nothing unless `DSN_DEBUG` or `DSN_LOG_LEVEL` is set. Only the first
/// call has any effect.
pub fn init() {
    if !is_debug_enabled() && env::var(LEVEL_VAR).is_err() {
        return;
    }
    install(get_log_level());
}

/// Install a global subscriber at `level`, ignoring `DSN_DEBUG` and
/// `DSN_LOG_LEVEL`. Only the first call (of this or [`init`]) has any effect.
pub fn init_with_level(level: &str) {
    install(resolve_level(Some(level), false));
}

fn install(level: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!("dsn_parser={}", level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));
            let format = get_log_format();

            let installed = match format {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level = level, format = format, "DSN parser logging initialized");
            }
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // Without the feature the application installs its own subscriber.
            let _ = level;
        }
    });
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn resolve_level(requested: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match requested.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

fn resolve_format(requested: Option<&str>) -> &'static str {
    match requested.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}
