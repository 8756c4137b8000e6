// Shared per-test setup for the browser scenarios.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use std::sync::Once;

use anyhow::Result;
use verseify_e2e::{Config, Session};

static TRACING: Once = Once::new();

/// Install the log subscriber once per test binary.
///
/// `RUST_LOG` controls verbosity; defaults to `info` so session
/// lifecycle events show up in `--nocapture` runs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Per-scenario setup: logging, env-derived config, and a fresh
/// maximized browser session already navigated to the base URL.
pub async fn setup() -> Result<(Config, Session)> {
    init_tracing();
    let config = Config::from_env();
    let session = Session::acquire(&config).await?;
    Ok((config, session))
}
