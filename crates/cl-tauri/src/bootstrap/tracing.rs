//! Tracing configuration for ClipLens.
//!
//! Structured logging goes to stdout always, and to a daily-rolled file
//! under the platform data dir when one can be created. Levels default to
//! debug in development and info in production; `RUST_LOG` overrides.

use std::{fs, path::PathBuf, sync::OnceLock};

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
///
/// Tauri internals are noisy at debug; keep them at warn and off.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "tauri=warn".to_string(),
        "wry=off".to_string(),
        if is_dev {
            "cl_platform=debug"
        } else {
            "cl_platform=info"
        }
        .to_string(),
    ]
}

fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or_else(|| anyhow!("no local data directory"))?;
    let dir = base.join("cliplens").join("logs");
    fs::create_dir_all(&dir).with_context(|| format!("creating log dir {}", dir.display()))?;
    Ok(dir)
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the Tauri builder runs. Returns an error if a
/// subscriber is already registered or `RUST_LOG` contains invalid
/// directives.
pub fn init_tracing_subscriber() -> Result<()> {
    let is_dev = is_development();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_dev).join(",")));

    let stdout_layer = fmt::layer().with_target(true);

    // File output is best-effort; a read-only data dir must not take the
    // app down.
    let file_layer = match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "cliplens.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(e) => {
            eprintln!("cliplens: file logging disabled: {e:#}");
            None
        }
    };

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to set tracing subscriber: {e}"))?;

    tracing::info!(dev = is_dev, "tracing initialized");
    Ok(())
}
